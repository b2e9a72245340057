use actor_framework::mock::{create_mock_client, expect_create, MockClient};
use actor_framework::FrameworkError;
use rental_service::clients::{GenreClient, MovieClient, RentalClient};
use rental_service::model::{
    CustomerId, CustomerSnapshot, Genre, GenreId, Movie, MovieCreate, MovieId, MovieSnapshot,
    Rental, RentalDraft, RentalId,
};
use rental_service::movie_actor::{self, MovieError};
use std::time::Duration;
use tokio::time::timeout;

/// Real Movie actor, mocked genre store and rental ledger.
struct Harness {
    movies: MovieClient,
    genres: MockClient<Genre>,
}

impl Harness {
    fn start(ledger: RentalClient) -> Self {
        let (shards, movie_resource) = movie_actor::new(8, 1);
        for shard in shards {
            tokio::spawn(shard.run(ledger.clone()));
        }
        let genres = MockClient::<Genre>::new();
        let movies = MovieClient::new(movie_resource, GenreClient::new(genres.client()));
        Self { movies, genres }
    }

    async fn movie(&mut self, copies: u8) -> Movie {
        self.genres.expect_get(GenreId(1)).return_ok(Some(Genre {
            id: GenreId(1),
            name: "Crime".into(),
        }));
        let movie = self
            .movies
            .create_movie(MovieCreate {
                title: "Heat".into(),
                genre_id: GenreId(1),
                number_in_stock: copies,
                daily_rental_rate: 2.5,
            })
            .await
            .unwrap();
        self.genres.verify();
        movie
    }
}

fn draft(movie_id: MovieId) -> RentalDraft {
    RentalDraft {
        customer: CustomerSnapshot {
            id: CustomerId(1),
            name: "Ada".into(),
            phone: "555-0100".into(),
        },
        movie: MovieSnapshot {
            id: movie_id,
            title: "stale title".into(),
            daily_rental_rate: 0.0,
        },
    }
}

#[tokio::test]
async fn check_out_appends_then_decrements() {
    let mut ledger = MockClient::<Rental>::new();
    let mut harness = Harness::start(RentalClient::new(ledger.client()));
    let movie = harness.movie(3).await;

    let committed = Rental::from_draft(RentalId(1), draft(movie.id));
    ledger.expect_create().return_ok(committed.clone());

    let rental = harness.movies.check_out(movie.id, draft(movie.id)).await.unwrap();
    assert_eq!(rental, committed);
    assert_eq!(harness.movies.check_stock(movie.id).await.unwrap(), 2);
    ledger.verify();
}

#[tokio::test]
async fn ledger_failure_leaves_stock_untouched() {
    let mut ledger = MockClient::<Rental>::new();
    let mut harness = Harness::start(RentalClient::new(ledger.client()));
    let movie = harness.movie(1).await;

    ledger.expect_create().return_err(FrameworkError::ActorClosed);

    let err = harness
        .movies
        .check_out(movie.id, draft(movie.id))
        .await
        .unwrap_err();
    assert!(matches!(err, MovieError::LedgerUnavailable(_)));
    assert_eq!(harness.movies.check_stock(movie.id).await.unwrap(), 1);
    ledger.verify();
}

#[tokio::test]
async fn empty_shelf_never_reaches_the_ledger() {
    let ledger = MockClient::<Rental>::new();
    let mut harness = Harness::start(RentalClient::new(ledger.client()));
    let movie = harness.movie(0).await;

    let err = harness
        .movies
        .check_out(movie.id, draft(movie.id))
        .await
        .unwrap_err();
    assert_eq!(err, MovieError::OutOfStock(movie.id));

    // Any append would have been recorded as unexpected.
    ledger.verify();
}

#[tokio::test]
async fn check_out_records_the_live_movie() {
    let (ledger, mut appends) = create_mock_client::<Rental>(4);
    let mut harness = Harness::start(RentalClient::new(ledger));
    let movie = harness.movie(2).await;

    let movies = harness.movies.clone();
    let movie_id = movie.id;
    let check_out = tokio::spawn(async move { movies.check_out(movie_id, draft(movie_id)).await });

    let (appended, responder) = expect_create(&mut appends)
        .await
        .expect("Expected the rental to be appended");
    assert_eq!(appended.movie, movie.snapshot());
    assert_eq!(appended.customer.id, CustomerId(1));
    responder
        .send(Ok(Rental::from_draft(RentalId(7), appended)))
        .unwrap();

    let rental = check_out.await.unwrap().unwrap();
    assert_eq!(rental.movie.title, "Heat");
    assert_eq!(rental.movie.daily_rental_rate, 2.5);
    assert_eq!(harness.movies.check_stock(movie_id).await.unwrap(), 1);
}

#[tokio::test]
async fn write_off_stops_at_zero_and_records_no_rental() {
    let ledger = MockClient::<Rental>::new();
    let mut harness = Harness::start(RentalClient::new(ledger.client()));
    let movie = harness.movie(1).await;

    assert_eq!(harness.movies.decrement_stock_if_positive(movie.id).await.unwrap(), 0);
    assert_eq!(
        harness.movies.decrement_stock_if_positive(movie.id).await.unwrap_err(),
        MovieError::OutOfStock(movie.id)
    );
    assert_eq!(harness.movies.check_stock(movie.id).await.unwrap(), 0);
    ledger.verify();
}

#[tokio::test]
async fn slow_ledger_holds_up_only_the_movie_being_checked_out() {
    let (ledger, mut appends) = create_mock_client::<Rental>(4);
    // One shard, so both movies share a mailbox.
    let mut harness = Harness::start(RentalClient::new(ledger));
    let busy = harness.movie(2).await;
    let idle = harness.movie(3).await;

    let movies = harness.movies.clone();
    let busy_id = busy.id;
    let check_out = tokio::spawn(async move { movies.check_out(busy_id, draft(busy_id)).await });

    // The check-out is now parked on the ledger.
    let (appended, responder) = expect_create(&mut appends)
        .await
        .expect("Expected the rental to be appended");

    let idle_stock = timeout(Duration::from_millis(200), harness.movies.check_stock(idle.id))
        .await
        .expect("another movie must not wait for the ledger");
    assert_eq!(idle_stock.unwrap(), 3);
    assert!(timeout(Duration::from_millis(50), harness.movies.check_stock(busy_id))
        .await
        .is_err());

    responder
        .send(Ok(Rental::from_draft(RentalId(1), appended)))
        .unwrap();
    check_out.await.unwrap().unwrap();
    assert_eq!(harness.movies.check_stock(busy_id).await.unwrap(), 1);
    assert_eq!(harness.movies.check_stock(idle.id).await.unwrap(), 3);
}
