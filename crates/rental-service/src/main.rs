//! # Rental Service Demo
//!
//! Seeds a small shop and walks through each rental outcome:
//! a successful rental, the last copy contested by several customers at once, an empty
//! shelf, and unknown customer and movie ids.
//!
//! ```bash
//! RUST_LOG=debug RENTALS_MOVIE_SHARDS=2 cargo run -p rental-service
//! ```

use actor_framework::tracing::setup_tracing_with_default;
use rental_service::engine::RentalError;
use rental_service::lifecycle::{Config, RentalSystem};
use rental_service::model::{
    Customer, CustomerCreate, CustomerId, GenreCreate, MovieCreate, MovieId, Rental,
};
use tracing::{info, warn, Instrument};

fn report(outcome: &Result<Rental, RentalError>) {
    match outcome {
        Ok(rental) => info!(
            rental_id = %rental.id,
            customer = %rental.customer.name,
            movie = %rental.movie.title,
            rate = rental.movie.daily_rental_rate,
            "Rental created"
        ),
        Err(e @ RentalError::ReferenceNotFound { .. }) => warn!(error = %e, "Invalid reference"),
        Err(e @ RentalError::OutOfStock(_)) => warn!(error = %e, "Out of stock"),
        Err(e @ RentalError::TransactionFailed(_)) => warn!(error = %e, "Rental failed"),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = Config::from_env();
    setup_tracing_with_default(&config.log_level);

    info!(app = %config.app_name, "Starting rental service demo");
    let system = RentalSystem::with_config(&config);

    // Seed the shop
    let seed = async {
        let drama = system
            .genre_client
            .create_genre(GenreCreate {
                name: "Drama".to_string(),
            })
            .await
            .map_err(|e| e.to_string())?;

        let mut customers: Vec<Customer> = Vec::new();
        for (name, phone) in [
            ("Ada Lovelace", "555-0100"),
            ("Grace Hopper", "555-0101"),
            ("Alan Turing", "555-0102"),
        ] {
            let customer = system
                .customer_client
                .create_customer(CustomerCreate {
                    name: name.to_string(),
                    phone: phone.to_string(),
                    is_gold: false,
                })
                .await
                .map_err(|e| e.to_string())?;
            customers.push(customer);
        }

        let mut movies = Vec::new();
        for (title, stock) in [("Casablanca", 5), ("The Third Man", 1), ("Metropolis", 0)] {
            let movie = system
                .movie_client
                .create_movie(MovieCreate {
                    title: title.to_string(),
                    genre_id: drama.id,
                    number_in_stock: stock,
                    daily_rental_rate: 2.0,
                })
                .await
                .map_err(|e| e.to_string())?;
            movies.push(movie);
        }
        Ok::<_, String>((customers, movies))
    }
    .instrument(tracing::info_span!("seed"))
    .await?;
    let (customers, movies) = seed;

    // A plain rental
    let outcome = system
        .engine
        .create_rental_with_retry(customers[0].id, movies[0].id)
        .instrument(tracing::info_span!("single_rental"))
        .await;
    report(&outcome);

    // Everyone wants the last copy
    let contested = movies[1].id;
    let attempts: Vec<_> = customers
        .iter()
        .map(|customer| {
            let engine = system.engine.clone();
            let customer_id = customer.id;
            tokio::spawn(
                async move { engine.create_rental_with_retry(customer_id, contested).await }
                    .instrument(tracing::info_span!("last_copy", %customer_id)),
            )
        })
        .collect();
    for attempt in attempts {
        let outcome = attempt.await.map_err(|e| e.to_string())?;
        report(&outcome);
    }

    // Empty shelf, unknown customer, unknown movie
    report(&system.engine.create_rental(customers[1].id, movies[2].id).await);
    report(&system.engine.create_rental(CustomerId(999), movies[0].id).await);
    report(&system.engine.create_rental(customers[2].id, MovieId(999)).await);

    for movie in system.movie_client.list_movies().await.map_err(|e| e.to_string())? {
        info!(movie = %movie.title, stock = movie.number_in_stock, "Stock");
    }
    let rentals = system
        .rental_client
        .list_rentals()
        .await
        .map_err(|e| e.to_string())?;
    info!(count = rentals.len(), "Rentals on record");

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
