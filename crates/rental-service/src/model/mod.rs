//! Pure data structures managed by the resource actors.
//!
//! Every identifier is a `u32` sequence newtype minted by the owning actor, so the same
//! number routes to the same shard on every request.

pub mod customer;
pub mod genre;
pub mod movie;
pub mod rental;
pub mod validation;

pub use customer::*;
pub use genre::*;
pub use movie::*;
pub use rental::*;
pub use validation::ValidationError;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl actor_framework::EntityId for $name {
            fn sequence(&self) -> u32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Type-safe identifier for Genres.
    GenreId,
    "genre"
);
entity_id!(
    /// Type-safe identifier for Customers.
    CustomerId,
    "customer"
);
entity_id!(
    /// Type-safe identifier for Movies.
    MovieId,
    "movie"
);
entity_id!(
    /// Type-safe identifier for Rentals.
    RentalId,
    "rental"
);
