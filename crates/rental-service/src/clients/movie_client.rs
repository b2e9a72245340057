//! # Movie Client
//!
//! Provides a high‑level API for interacting with the sharded `Movie` actor.
//!
//! Creates and updates name their genre by id; the client resolves it through the
//! [`GenreClient`] and sends the actor a genre snapshot.
use crate::clients::GenreClient;
use crate::model::{
    GenreId, GenreSnapshot, Movie, MovieChanges, MovieCreate, MovieId, MovieParams, MovieUpdate,
    Rental, RentalDraft,
};
use crate::movie_actor::{MovieAction, MovieActionResult, MovieError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Movie actor.
#[derive(Clone)]
pub struct MovieClient {
    inner: ResourceClient<Movie>,
    genres: GenreClient,
}

impl MovieClient {
    pub fn new(inner: ResourceClient<Movie>, genres: GenreClient) -> Self {
        Self { inner, genres }
    }
}

#[async_trait]
impl ActorClient<Movie> for MovieClient {
    type Error = MovieError;

    fn inner(&self) -> &ResourceClient<Movie> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}

impl MovieClient {
    async fn resolve_genre(&self, id: GenreId) -> Result<GenreSnapshot, MovieError> {
        match self.genres.get(id).await {
            Ok(Some(genre)) => Ok(genre.snapshot()),
            Ok(None) => Err(MovieError::InvalidGenre(id)),
            Err(e) => Err(MovieError::ActorCommunicationError(e.to_string())),
        }
    }

    #[instrument(skip(self))]
    pub async fn create_movie(&self, params: MovieCreate) -> Result<Movie, MovieError> {
        let genre = self.resolve_genre(params.genre_id).await?;
        debug!("Sending request");
        Ok(self.inner.create(MovieParams::new(params, genre)).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_movie(&self, id: MovieId, update: MovieUpdate) -> Result<Movie, MovieError> {
        let genre = match update.genre_id {
            Some(genre_id) => Some(self.resolve_genre(genre_id).await?),
            None => None,
        };
        debug!("Sending request");
        Ok(self.inner.update(id, MovieChanges::new(update, genre)).await?)
    }

    /// All movies, by title.
    #[instrument(skip(self))]
    pub async fn list_movies(&self) -> Result<Vec<Movie>, MovieError> {
        let mut movies = self.list().await?;
        movies.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        Ok(movies)
    }

    /// Current stock level.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: MovieId) -> Result<u8, MovieError> {
        match self.inner.perform_action(id, MovieAction::CheckStock).await? {
            MovieActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Writes one copy off the shelf (lost or damaged) and returns what is left.
    ///
    /// No rental is recorded. Rentals go through [`RentalEngine`](crate::engine::RentalEngine),
    /// which uses [`check_out`](Self::check_out) so that stock and ledger change together.
    #[instrument(skip(self))]
    pub async fn decrement_stock_if_positive(&self, id: MovieId) -> Result<u8, MovieError> {
        match self
            .inner
            .perform_action(id, MovieAction::DecrementStockIfPositive)
            .await?
        {
            MovieActionResult::DecrementStockIfPositive(left) => Ok(left),
            other => Err(unexpected(other)),
        }
    }

    /// Appends `draft` to the ledger and decrements the stock of `id`, both or neither.
    #[instrument(skip(self, draft), fields(customer_id = %draft.customer.id))]
    pub async fn check_out(&self, id: MovieId, draft: RentalDraft) -> Result<Rental, MovieError> {
        debug!("Sending request");
        match self.inner.perform_action(id, MovieAction::CheckOut(draft)).await? {
            MovieActionResult::CheckOut(rental) => Ok(rental),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: MovieActionResult) -> MovieError {
    MovieError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Genre;
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};

    fn genre_client(mock: &MockClient<Genre>) -> GenreClient {
        GenreClient::new(mock.client())
    }

    #[tokio::test]
    async fn test_check_stock_returns_correct_level() {
        let genres = MockClient::<Genre>::new();
        let (client, mut receiver) = create_mock_client::<Movie>(10);
        let movie_client = MovieClient::new(client, genre_client(&genres));

        let check_task = tokio::spawn(async move { movie_client.check_stock(MovieId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, MovieId(1));
        assert!(matches!(action, MovieAction::CheckStock));
        responder.send(Ok(MovieActionResult::CheckStock(42))).unwrap();

        assert_eq!(check_task.await.unwrap().unwrap(), 42);
    }

    #[tokio::test]
    async fn create_movie_with_unknown_genre_never_reaches_the_store() {
        let mut genres = MockClient::<Genre>::new();
        genres.expect_get(GenreId(5)).return_ok(None);
        let movies = MockClient::<Movie>::new();

        let client = MovieClient::new(movies.client(), genre_client(&genres));
        let err = client
            .create_movie(MovieCreate {
                title: "Heat".into(),
                genre_id: GenreId(5),
                number_in_stock: 3,
                daily_rental_rate: 2.0,
            })
            .await
            .unwrap_err();

        assert_eq!(err, MovieError::InvalidGenre(GenreId(5)));
        genres.verify();
        movies.verify();
    }

    #[tokio::test]
    async fn decrement_reports_out_of_stock() {
        let genres = MockClient::<Genre>::new();
        let mut movies = MockClient::<Movie>::new();
        movies
            .expect_action(MovieId(2))
            .return_err(FrameworkError::EntityError(Box::new(MovieError::OutOfStock(
                MovieId(2),
            ))));

        let client = MovieClient::new(movies.client(), genre_client(&genres));
        let err = client.decrement_stock_if_positive(MovieId(2)).await.unwrap_err();
        assert_eq!(err, MovieError::OutOfStock(MovieId(2)));
        movies.verify();
    }
}
