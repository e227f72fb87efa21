/// REST backend provider
///
/// Implements both collaborator traits against the movie backend's JSON API:
///
/// 1. Catalog:  GET  /api/movies
/// 2. Add:      POST /api/movie/add
/// 3. Update:   POST /api/movie/update
/// 4. Scoring:  POST /api/recommend
///
/// The backend wraps add/update outcomes in a `success` envelope instead of
/// HTTP status codes, so both layers are checked here.
use crate::{
    error::{AppError, AppResult},
    models::{
        AddMovieRequest, AddMovieResponse, Movie, RecommendRequest, RecommendResponse,
        SelectedMovie, UpdateRatingRequest, UpdateRatingResponse,
    },
    services::providers::{CatalogProvider, ScoringProvider},
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct RestProvider {
    http_client: HttpClient,
    base_url: String,
}

impl RestProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl CatalogProvider for RestProvider {
    async fn fetch_catalog(&self) -> AppResult<Vec<Movie>> {
        let response = self
            .http_client
            .get(self.endpoint("/api/movies"))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Fetch(format!(
                "backend returned status {}: {}",
                status, body
            )));
        }

        let movies: Vec<Movie> = response.json().await?;

        tracing::info!(count = movies.len(), "Catalog fetched");

        Ok(movies)
    }

    async fn add_movie(&self, request: &AddMovieRequest) -> AppResult<Movie> {
        let response = self
            .http_client
            .post(self.endpoint("/api/movie/add"))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "add-movie returned status {}: {}",
                status, body
            )));
        }

        let body: AddMovieResponse = response.json().await?;

        if !body.success {
            let message = body.error.unwrap_or_else(|| "Unknown".to_string());
            tracing::info!(title = %request.title, error = %message, "Add movie rejected");
            return Err(AppError::Rejected(message));
        }

        let movie = body.movie.ok_or_else(|| {
            AppError::ExternalApi("add-movie response missing the created entry".to_string())
        })?;

        tracing::info!(id = movie.id, title = %movie.title, "Movie added");

        Ok(movie)
    }

    async fn update_rating(&self, id: u64, rating: f64) -> AppResult<()> {
        let request = UpdateRatingRequest { id, rating };

        let response = self
            .http_client
            .post(self.endpoint("/api/movie/update"))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "update-movie returned status {}: {}",
                status, body
            )));
        }

        let body: UpdateRatingResponse = response.json().await?;

        if !body.success {
            return Err(AppError::Rejected("update refused by backend".to_string()));
        }

        tracing::debug!(id, rating, "Rating updated");

        Ok(())
    }
}

#[async_trait::async_trait]
impl ScoringProvider for RestProvider {
    async fn recommend(&self, selection: Vec<SelectedMovie>) -> AppResult<RecommendResponse> {
        let request = RecommendRequest { movies: selection };

        let response = self
            .http_client
            .post(self.endpoint("/api/recommend"))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "recommend returned status {}: {}",
                status, body
            )));
        }

        let scored: RecommendResponse = response.json().await?;

        tracing::info!(
            recommendations = scored.recommendations.len(),
            avoids = scored.avoids.len(),
            "Recommendations received"
        );

        Ok(scored)
    }
}
