use serde::{Deserialize, Serialize};

/// Maximum number of movies a user can hold selected at once
pub const MAX_SELECTION: usize = 5;

/// Rating assigned to a movie the moment it is selected (1-10 scale)
pub const DEFAULT_RATING: u8 = 5;

/// A catalog entry as served by the backend
///
/// The catalog listing endpoint omits `genres` (it only ships the fields the
/// grid needs), while the recommendation results include it, so the field
/// deserializes with a default. `id` is the stable identity key everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    /// Pipe-delimited category tags, e.g. "Action|Sci-Fi"
    #[serde(default)]
    pub genres: String,
    pub vote_average: f64,
    #[serde(default)]
    pub poster_url: String,
}

impl Movie {
    /// Splits the pipe-delimited genre string into its tags, skipping blanks.
    pub fn genre_tags(&self) -> impl Iterator<Item = &str> {
        self.genres.split('|').filter(|tag| !tag.is_empty())
    }
}

/// A movie the user has picked, carrying their personal rating
///
/// Serialized flattened (movie fields plus `rating` in one object), matching
/// what the scoring endpoint expects. Lives only in the selection set and is
/// never written back to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedMovie {
    #[serde(flatten)]
    pub movie: Movie,
    pub rating: u8,
}

impl SelectedMovie {
    /// Wraps a catalog entry with the default rating
    pub fn new(movie: Movie) -> Self {
        Self {
            movie,
            rating: DEFAULT_RATING,
        }
    }

    pub fn id(&self) -> u64 {
        self.movie.id
    }
}

// ============================================================================
// Backend wire types
// ============================================================================

/// Request body for POST /api/movie/add
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMovieRequest {
    pub title: String,
    pub genres: String,
    pub rating: f64,
}

/// Response from POST /api/movie/add
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMovieResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie: Option<Movie>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request body for POST /api/movie/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRatingRequest {
    pub id: u64,
    pub rating: f64,
}

/// Response from POST /api/movie/update (no updated entity is returned)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRatingResponse {
    pub success: bool,
}

/// Request body for POST /api/recommend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub movies: Vec<SelectedMovie>,
}

/// Response from POST /api/recommend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Movie>,
    pub avoids: Vec<Movie>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_deserializes_without_genres() {
        // The catalog listing only ships id/title/poster_url/vote_average
        let json = r#"{
            "id": 42,
            "title": "Dune",
            "poster_url": "https://posters.example/dune.jpg",
            "vote_average": 8.1
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 42);
        assert_eq!(movie.title, "Dune");
        assert_eq!(movie.genres, "");
        assert_eq!(movie.vote_average, 8.1);
    }

    #[test]
    fn test_movie_genre_tags() {
        let movie = Movie {
            id: 1,
            title: "Arrival".to_string(),
            genres: "Drama|Sci-Fi|Mystery".to_string(),
            vote_average: 7.9,
            poster_url: String::new(),
        };

        let tags: Vec<&str> = movie.genre_tags().collect();
        assert_eq!(tags, vec!["Drama", "Sci-Fi", "Mystery"]);
    }

    #[test]
    fn test_movie_genre_tags_empty_string() {
        let movie = Movie {
            id: 1,
            title: "Untagged".to_string(),
            genres: String::new(),
            vote_average: 5.0,
            poster_url: String::new(),
        };

        assert_eq!(movie.genre_tags().count(), 0);
    }

    #[test]
    fn test_selected_movie_serializes_flattened() {
        let selected = SelectedMovie::new(Movie {
            id: 7,
            title: "Heat".to_string(),
            genres: "Crime|Thriller".to_string(),
            vote_average: 8.3,
            poster_url: "https://posters.example/heat.jpg".to_string(),
        });

        let value = serde_json::to_value(&selected).unwrap();
        // Movie fields and rating sit in the same object, as the scoring
        // endpoint expects
        assert_eq!(value["id"], 7);
        assert_eq!(value["title"], "Heat");
        assert_eq!(value["rating"], 5);
        assert!(value.get("movie").is_none());
    }

    #[test]
    fn test_selected_movie_default_rating() {
        let selected = SelectedMovie::new(Movie {
            id: 1,
            title: "Dune".to_string(),
            genres: String::new(),
            vote_average: 8.1,
            poster_url: String::new(),
        });
        assert_eq!(selected.rating, DEFAULT_RATING);
        assert_eq!(selected.id(), 1);
    }

    #[test]
    fn test_add_movie_response_failure_shape() {
        let json = r#"{"success": false, "error": "duplicate title"}"#;
        let response: AddMovieResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.movie, None);
        assert_eq!(response.error, Some("duplicate title".to_string()));
    }

    #[test]
    fn test_recommend_response_deserialization() {
        let json = r#"{
            "recommendations": [
                {"id": 10, "title": "Blade Runner", "genres": "Sci-Fi|Noir",
                 "vote_average": 8.1, "poster_url": "https://p/br.jpg"}
            ],
            "avoids": []
        }"#;

        let response: RecommendResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.recommendations.len(), 1);
        assert_eq!(response.recommendations[0].title, "Blade Runner");
        assert!(response.avoids.is_empty());
    }
}
