//! # Rental Service Library
//!
//! The movie rental shop as a set of resource actors, plus the transaction engine that turns
//! a customer and a movie into a rental.
//!
//! - [`model`]: genres, customers, movies, rentals and their validation.
//! - [`genre_actor`], [`customer_actor`], [`movie_actor`], [`rental_actor`]: one actor (or
//!   set of shards) per resource.
//! - [`clients`]: typed wrappers around the actors.
//! - [`engine`]: [`RentalEngine`](engine::RentalEngine), the only way rentals are created.
//! - [`lifecycle`]: configuration and the [`RentalSystem`](lifecycle::RentalSystem)
//!   orchestrator.

pub mod clients;
pub mod customer_actor;
pub mod engine;
pub mod genre_actor;
pub mod lifecycle;
pub mod model;
pub mod movie_actor;
pub mod rental_actor;
