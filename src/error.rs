/// Application-level errors
///
/// Collaborator failures are caught at the controller boundary and converted
/// into user-visible notices; none of these propagate as unhandled faults.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Catalog fetch failed: {0}")]
    Fetch(String),

    #[error("Rejected: {0}")]
    Rejected(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message a controller may surface verbatim to the user.
    ///
    /// Only `Rejected` carries backend-authored text (e.g. "duplicate title");
    /// every other variant maps to a generic notice at the surface.
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            AppError::Rejected(msg) => Some(msg),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
