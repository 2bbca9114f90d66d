use thiserror::Error;

/// Every failure the views can observe.
///
/// Validation failures are returned, never thrown. Everything else is caught
/// by the action that started the request and turned into a toast or a
/// console line; `Unauthorized` additionally tears the session down.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The asset form was submitted without a category.
    #[error("Please select a category")]
    MissingCategory,

    /// The API rejected (or never received) the bearer credential.
    #[error("Unauthorized")]
    Unauthorized,

    /// A category still has assets pointing at it.
    #[error(
        "This category has {count} assets using it. Please delete all assets in this category first."
    )]
    ConflictOnDelete { count: usize },

    /// Transport failure, non-2xx status, or an unparseable body.
    #[error("{0}")]
    NetworkOrServerFailure(String),
}

impl AppError {
    /// Maps a response status to `Ok(())` for 2xx and to the matching error otherwise.
    pub fn from_status(status: u16) -> Result<(), AppError> {
        match status {
            200..=299 => Ok(()),
            401 => Err(AppError::Unauthorized),
            other => Err(AppError::NetworkOrServerFailure(format!(
                "API request failed ({other})"
            ))),
        }
    }

    pub fn network(err: impl std::fmt::Display) -> Self {
        AppError::NetworkOrServerFailure(err.to_string())
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert_eq!(AppError::from_status(200), Ok(()));
        assert_eq!(AppError::from_status(204), Ok(()));
        assert_eq!(AppError::from_status(401), Err(AppError::Unauthorized));
        assert!(matches!(
            AppError::from_status(500),
            Err(AppError::NetworkOrServerFailure(msg)) if msg.contains("500")
        ));
        assert!(matches!(
            AppError::from_status(403),
            Err(AppError::NetworkOrServerFailure(_))
        ));
    }

    #[test]
    fn conflict_message_cites_count() {
        let msg = AppError::ConflictOnDelete { count: 3 }.to_string();
        assert!(msg.starts_with("This category has 3 assets using it."));
    }
}
