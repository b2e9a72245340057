use crate::clients::{CustomerClient, GenreClient, MovieClient, RentalClient};
use crate::engine::RentalEngine;
use crate::lifecycle::Config;
use crate::{customer_actor, genre_actor, movie_actor, rental_actor};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Owns every actor task of the rental service and the clients that reach them.
///
/// # Example
///
/// ```rust
/// use rental_service::lifecycle::RentalSystem;
/// use rental_service::model::{CustomerCreate, GenreCreate, MovieCreate};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = RentalSystem::new();
///
///     let genre = system.genre_client.create_genre(GenreCreate { name: "Drama".into() }).await?;
///     let movie = system
///         .movie_client
///         .create_movie(MovieCreate {
///             title: "Ran".into(),
///             genre_id: genre.id,
///             number_in_stock: 2,
///             daily_rental_rate: 1.5,
///         })
///         .await?;
///     let customer = system
///         .customer_client
///         .create_customer(CustomerCreate {
///             name: "Ada".into(),
///             phone: "555-0100".into(),
///             is_gold: false,
///         })
///         .await?;
///
///     let rental = system.engine.create_rental(customer.id, movie.id).await?;
///     assert_eq!(rental.movie.title, "Ran");
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct RentalSystem {
    pub genre_client: GenreClient,
    pub customer_client: CustomerClient,
    pub movie_client: MovieClient,
    pub rental_client: RentalClient,
    pub engine: RentalEngine,
    handles: Vec<JoinHandle<()>>,
}

impl Default for RentalSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl RentalSystem {
    /// Starts the system with [`Config::default`]. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates every actor, then starts each one with the clients it depends on.
    pub fn with_config(config: &Config) -> Self {
        let capacity = config.actors.mailbox_capacity;

        // 1. Create actors and clients (no dependencies yet)
        let (genre_actor, genre_resource) = genre_actor::new(capacity);
        let (customer_actor, customer_resource) = customer_actor::new(capacity);
        let (ledger_shards, rental_resource) =
            rental_actor::new(capacity, config.actors.ledger_shards);
        let (movie_shards, movie_resource) =
            movie_actor::new(capacity, config.actors.movie_shards);

        let genre_client = GenreClient::new(genre_resource);
        let customer_client = CustomerClient::new(customer_resource);
        let rental_client = RentalClient::new(rental_resource);
        let movie_client = MovieClient::new(movie_resource, genre_client.clone());

        // 2. Start actors with their context
        let mut handles = vec![
            tokio::spawn(genre_actor.run(())),
            tokio::spawn(customer_actor.run(())),
        ];
        handles.extend(ledger_shards.into_iter().map(|shard| tokio::spawn(shard.run(()))));
        handles.extend(
            movie_shards
                .into_iter()
                .map(|shard| tokio::spawn(shard.run(rental_client.clone()))),
        );

        let engine = RentalEngine::new(customer_client.clone(), movie_client.clone())
            .with_retry_policy(config.retry_policy());

        info!(
            app = %config.app_name,
            movie_shards = config.actors.movie_shards,
            ledger_shards = config.actors.ledger_shards,
            "Rental system started"
        );

        Self {
            genre_client,
            customer_client,
            movie_client,
            rental_client,
            engine,
            handles,
        }
    }

    /// Drops every client, then waits for all actors to drain their mailboxes and stop.
    ///
    /// Movie shards hold ledger clients and the movie client holds a genre client, so the
    /// ledger and the genre actor stop only after the movie shards have.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.engine);
        drop(self.movie_client);
        drop(self.customer_client);
        drop(self.genre_client);
        drop(self.rental_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
