use actor_framework::mock::{create_mock_client, MockClient};
use actor_framework::{FrameworkError, ResourceClient};
use rental_service::clients::{CustomerClient, GenreClient, MovieClient, RentalClient};
use rental_service::engine::{RentalEngine, RentalError, RetryPolicy};
use rental_service::model::{
    Customer, CustomerCreate, GenreCreate, Movie, MovieCreate, MovieId, Rental, RentalDraft,
    RentalId,
};
use rental_service::{customer_actor, genre_actor, movie_actor};
use std::time::Duration;

/// Real customer, genre and movie actors around a ledger the test controls.
struct Shop {
    engine: RentalEngine,
    movies: MovieClient,
    customer: Customer,
    movie: Movie,
}

impl Shop {
    async fn open(ledger: ResourceClient<Rental>, copies: u8) -> Self {
        let (genre_actor, genre_resource) = genre_actor::new(8);
        let (customer_actor, customer_resource) = customer_actor::new(8);
        let (movie_shards, movie_resource) = movie_actor::new(8, 2);

        let ledger = RentalClient::new(ledger);
        tokio::spawn(genre_actor.run(()));
        tokio::spawn(customer_actor.run(()));
        for shard in movie_shards {
            tokio::spawn(shard.run(ledger.clone()));
        }

        let genres = GenreClient::new(genre_resource);
        let customers = CustomerClient::new(customer_resource);
        let movies = MovieClient::new(movie_resource, genres.clone());

        let genre = genres
            .create_genre(GenreCreate {
                name: "Noir film".into(),
            })
            .await
            .unwrap();
        let customer = customers
            .create_customer(CustomerCreate {
                name: "Ada".into(),
                phone: "555-0100".into(),
                is_gold: false,
            })
            .await
            .unwrap();
        let movie = movies
            .create_movie(MovieCreate {
                title: "The Third Man".into(),
                genre_id: genre.id,
                number_in_stock: copies,
                daily_rental_rate: 1.5,
            })
            .await
            .unwrap();

        let engine = RentalEngine::new(customers, movies.clone()).with_retry_policy(
            RetryPolicy::builder()
                .max_retries(2)
                .initial_delay(Duration::from_millis(1))
                .build(),
        );
        Self {
            engine,
            movies,
            customer,
            movie,
        }
    }

    fn committed(&self) -> Rental {
        Rental::from_draft(
            RentalId(1),
            RentalDraft {
                customer: self.customer.snapshot(),
                movie: self.movie.snapshot(),
            },
        )
    }

    async fn stock(&self) -> u8 {
        self.movies.check_stock(self.movie.id).await.unwrap()
    }
}

#[tokio::test]
async fn failed_commit_then_retry_takes_exactly_one_copy() {
    let mut ledger = MockClient::<Rental>::new();
    let shop = Shop::open(ledger.client(), 2).await;

    ledger.expect_create().return_err(FrameworkError::ActorClosed);
    let err = shop
        .engine
        .create_rental(shop.customer.id, shop.movie.id)
        .await
        .unwrap_err();
    assert!(matches!(err, RentalError::TransactionFailed(_)));
    assert!(err.is_retryable());
    assert_eq!(shop.stock().await, 2);

    ledger.expect_create().return_ok(shop.committed());
    let rental = shop
        .engine
        .create_rental(shop.customer.id, shop.movie.id)
        .await
        .unwrap();
    assert_eq!(rental.movie.id, shop.movie.id);
    assert_eq!(shop.stock().await, 1);
    ledger.verify();
}

#[tokio::test]
async fn retry_policy_recovers_from_a_transient_ledger_failure() {
    let mut ledger = MockClient::<Rental>::new();
    let shop = Shop::open(ledger.client(), 1).await;

    ledger.expect_create().return_err(FrameworkError::ActorDropped);
    ledger.expect_create().return_ok(shop.committed());

    let rental = shop
        .engine
        .create_rental_with_retry(shop.customer.id, shop.movie.id)
        .await
        .unwrap();
    assert_eq!(rental.customer.id, shop.customer.id);
    assert_eq!(shop.stock().await, 0);
    ledger.verify();

    // The copy is gone now; a retry loop must not turn that into another attempt.
    let err = shop
        .engine
        .create_rental_with_retry(shop.customer.id, shop.movie.id)
        .await
        .unwrap_err();
    assert_eq!(err, RentalError::OutOfStock(shop.movie.id));
}

#[tokio::test]
async fn closed_ledger_exhausts_retries_without_side_effects() {
    let (ledger, receiver) = create_mock_client::<Rental>(4);
    drop(receiver);
    let shop = Shop::open(ledger, 3).await;

    let err = shop
        .engine
        .create_rental_with_retry(shop.customer.id, shop.movie.id)
        .await
        .unwrap_err();
    assert!(matches!(err, RentalError::TransactionFailed(_)));
    assert_eq!(shop.stock().await, 3);
}

#[tokio::test]
async fn unknown_movie_is_not_retried() {
    let ledger = MockClient::<Rental>::new();
    let shop = Shop::open(ledger.client(), 1).await;

    let err = shop
        .engine
        .create_rental_with_retry(shop.customer.id, MovieId(404))
        .await
        .unwrap_err();
    assert!(!err.is_retryable());
    ledger.verify();
}
