//! # Rental Transaction Engine
//!
//! Turns a `(customer, movie)` pair into a committed [`Rental`], or a [`RentalError`] with
//! nothing written.
//!
//! ## Steps
//!
//! 1. Look up the customer; missing means `ReferenceNotFound(customer)`.
//! 2. Look up the movie; missing means `ReferenceNotFound(movie)`.
//! 3. Stock 0 means `OutOfStock`.
//! 4. Snapshot both records into a [`RentalDraft`].
//! 5. Send the draft to the movie's shard as a `CheckOut`. The shard re-checks the stock,
//!    appends the rental to the ledger, then decrements, all without handling any other
//!    request in between. Two renters racing for the last copy are therefore ordered by the
//!    shard's mailbox: the first gets the rental, the second gets `OutOfStock`.
//! 6. Return the rental the ledger stored.
//!
//! Steps 1 to 3 only read, so any failure there has no effect. In step 5 the append comes
//! before the decrement and the decrement cannot fail, so a rental is never visible without
//! its decrement; if the append fails the stock is left alone and the caller sees
//! `TransactionFailed`, which [`RentalEngine::create_rental_with_retry`] may retry from
//! step 1.

pub mod error;
pub mod retry;

pub use error::*;
pub use retry::*;

use crate::clients::{CustomerClient, MovieClient};
use crate::customer_actor::CustomerError;
use crate::model::{CustomerId, MovieId, Rental, RentalDraft};
use crate::movie_actor::MovieError;
use actor_framework::ActorClient;
use tracing::{info, instrument, warn};

/// Creates rentals. Cheap to clone; every clone talks to the same actors.
#[derive(Clone)]
pub struct RentalEngine {
    customers: CustomerClient,
    movies: MovieClient,
    retry: RetryPolicy,
}

impl RentalEngine {
    pub fn new(customers: CustomerClient, movies: MovieClient) -> Self {
        Self {
            customers,
            movies,
            retry: RetryPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Rents one copy of `movie_id` to `customer_id`.
    #[instrument(skip(self))]
    pub async fn create_rental(
        &self,
        customer_id: CustomerId,
        movie_id: MovieId,
    ) -> Result<Rental, RentalError> {
        let customer = self
            .customers
            .get(customer_id)
            .await
            .map_err(lookup_failed)?
            .ok_or_else(|| RentalError::customer_not_found(customer_id))?;

        let movie = self
            .movies
            .get(movie_id)
            .await
            .map_err(movie_lookup_failed)?
            .ok_or_else(|| RentalError::movie_not_found(movie_id))?;

        if movie.number_in_stock == 0 {
            info!(%movie_id, "Movie out of stock");
            return Err(RentalError::OutOfStock(movie_id));
        }

        let draft = RentalDraft {
            customer: customer.snapshot(),
            movie: movie.snapshot(),
        };
        let rental = self
            .movies
            .check_out(movie_id, draft)
            .await
            .map_err(|e| commit_failed(movie_id, e))?;

        info!(rental_id = %rental.id, %customer_id, %movie_id, "Rental committed");
        Ok(rental)
    }

    /// [`create_rental`](Self::create_rental), retried with backoff while the error is
    /// retryable and the policy allows.
    #[instrument(skip(self))]
    pub async fn create_rental_with_retry(
        &self,
        customer_id: CustomerId,
        movie_id: MovieId,
    ) -> Result<Rental, RentalError> {
        let mut attempt = 0;
        loop {
            match self.create_rental(customer_id, movie_id).await {
                Err(e) if e.is_retryable() && attempt < self.retry.max_retries => {
                    let delay = self.retry.delay_for_attempt(attempt);
                    warn!(attempt, ?delay, error = %e, "Rental failed, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                outcome => return outcome,
            }
        }
    }
}

fn lookup_failed(e: CustomerError) -> RentalError {
    RentalError::TransactionFailed(format!("customer lookup failed: {e}"))
}

fn movie_lookup_failed(e: MovieError) -> RentalError {
    RentalError::TransactionFailed(format!("movie lookup failed: {e}"))
}

fn commit_failed(movie_id: MovieId, e: MovieError) -> RentalError {
    match e {
        MovieError::OutOfStock(id) => RentalError::OutOfStock(id),
        // Deleted between lookup and commit.
        MovieError::NotFound(_) => RentalError::movie_not_found(movie_id),
        other => {
            warn!(%movie_id, error = %other, "Rental commit failed");
            RentalError::TransactionFailed(other.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::GenreClient;
    use crate::model::{
        Customer, CustomerSnapshot, Genre, GenreId, GenreSnapshot, Movie, MovieSnapshot, RentalId,
    };
    use crate::movie_actor::MovieActionResult;
    use actor_framework::mock::MockClient;
    use actor_framework::FrameworkError;

    struct Mocks {
        customers: MockClient<Customer>,
        movies: MockClient<Movie>,
        genres: MockClient<Genre>,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                customers: MockClient::new(),
                movies: MockClient::new(),
                genres: MockClient::new(),
            }
        }

        fn engine(&self) -> RentalEngine {
            RentalEngine::new(
                CustomerClient::new(self.customers.client()),
                MovieClient::new(self.movies.client(), GenreClient::new(self.genres.client())),
            )
            .with_retry_policy(RetryPolicy::none())
        }

        fn verify(&self) {
            self.customers.verify();
            self.movies.verify();
        }
    }

    fn customer() -> Customer {
        Customer {
            id: CustomerId(1),
            name: "Ada".into(),
            phone: "555-0100".into(),
            is_gold: false,
        }
    }

    fn movie(stock: u8) -> Movie {
        Movie {
            id: MovieId(2),
            title: "Heat".into(),
            genre: GenreSnapshot {
                id: GenreId(1),
                name: "Crime".into(),
            },
            number_in_stock: stock,
            daily_rental_rate: 2.5,
        }
    }

    fn rental() -> Rental {
        Rental::from_draft(
            RentalId(1),
            RentalDraft {
                customer: CustomerSnapshot {
                    id: CustomerId(1),
                    name: "Ada".into(),
                    phone: "555-0100".into(),
                },
                movie: MovieSnapshot {
                    id: MovieId(2),
                    title: "Heat".into(),
                    daily_rental_rate: 2.5,
                },
            },
        )
    }

    fn movie_failure(e: MovieError) -> FrameworkError {
        FrameworkError::EntityError(Box::new(e))
    }

    #[tokio::test]
    async fn missing_customer_stops_before_movie_lookup() {
        let mut mocks = Mocks::new();
        mocks.customers.expect_get(CustomerId(1)).return_ok(None);

        let err = mocks.engine().create_rental(CustomerId(1), MovieId(2)).await.unwrap_err();
        assert_eq!(err, RentalError::customer_not_found(CustomerId(1)));
        mocks.verify();
    }

    #[tokio::test]
    async fn empty_shelf_never_checks_out() {
        let mut mocks = Mocks::new();
        mocks.customers.expect_get(CustomerId(1)).return_ok(Some(customer()));
        mocks.movies.expect_get(MovieId(2)).return_ok(Some(movie(0)));

        let err = mocks.engine().create_rental(CustomerId(1), MovieId(2)).await.unwrap_err();
        assert_eq!(err, RentalError::OutOfStock(MovieId(2)));
        mocks.verify();
    }

    #[tokio::test]
    async fn lost_race_at_commit_is_out_of_stock() {
        let mut mocks = Mocks::new();
        mocks.customers.expect_get(CustomerId(1)).return_ok(Some(customer()));
        mocks.movies.expect_get(MovieId(2)).return_ok(Some(movie(1)));
        mocks
            .movies
            .expect_action(MovieId(2))
            .return_err(movie_failure(MovieError::OutOfStock(MovieId(2))));

        let err = mocks.engine().create_rental(CustomerId(1), MovieId(2)).await.unwrap_err();
        assert_eq!(err, RentalError::OutOfStock(MovieId(2)));
        mocks.verify();
    }

    #[tokio::test]
    async fn ledger_failure_is_retryable_transaction_failure() {
        let mut mocks = Mocks::new();
        mocks.customers.expect_get(CustomerId(1)).return_ok(Some(customer()));
        mocks.movies.expect_get(MovieId(2)).return_ok(Some(movie(3)));
        mocks.movies.expect_action(MovieId(2)).return_err(movie_failure(
            MovieError::LedgerUnavailable("Actor closed".into()),
        ));

        let err = mocks.engine().create_rental(CustomerId(1), MovieId(2)).await.unwrap_err();
        assert!(matches!(err, RentalError::TransactionFailed(_)));
        assert!(err.is_retryable());
        mocks.verify();
    }

    #[tokio::test]
    async fn unreachable_customer_store_is_transaction_failure() {
        let mut mocks = Mocks::new();
        mocks
            .customers
            .expect_get(CustomerId(1))
            .return_err(FrameworkError::ActorClosed);

        let err = mocks.engine().create_rental(CustomerId(1), MovieId(2)).await.unwrap_err();
        assert!(err.is_retryable());
        mocks.verify();
    }

    #[tokio::test]
    async fn retry_reruns_from_the_lookups() {
        let mut mocks = Mocks::new();
        mocks.customers.expect_get(CustomerId(1)).return_err(FrameworkError::ActorDropped);
        mocks.customers.expect_get(CustomerId(1)).return_ok(Some(customer()));
        mocks.movies.expect_get(MovieId(2)).return_ok(Some(movie(3)));
        mocks
            .movies
            .expect_action(MovieId(2))
            .return_ok(MovieActionResult::CheckOut(rental()));

        let engine = mocks.engine().with_retry_policy(
            RetryPolicy::builder()
                .max_retries(1)
                .initial_delay(std::time::Duration::from_millis(1))
                .build(),
        );
        let rental = engine
            .create_rental_with_retry(CustomerId(1), MovieId(2))
            .await
            .unwrap();
        assert_eq!(rental.movie.daily_rental_rate, 2.5);
        mocks.verify();
    }

    #[tokio::test]
    async fn not_found_is_never_retried() {
        let mut mocks = Mocks::new();
        mocks.customers.expect_get(CustomerId(1)).return_ok(Some(customer()));
        mocks.movies.expect_get(MovieId(2)).return_ok(None);

        let engine = mocks.engine().with_retry_policy(RetryPolicy::default());
        let err = engine
            .create_rental_with_retry(CustomerId(1), MovieId(2))
            .await
            .unwrap_err();
        assert_eq!(err, RentalError::movie_not_found(MovieId(2)));
        mocks.verify();
    }
}
