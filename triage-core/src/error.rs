use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failures surfaced by the data access layer.
///
/// Every failure collapses to a single display string on the error page: a
/// non-success status maps to a fixed, endpoint-specific message, anything
/// else passes the underlying failure's message through unchanged.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend answered with a non-success status code. The status is
    /// carried for logging only; the display string is the fixed message
    /// the page shows.
    #[error("Failed to fetch {resource}")]
    UpstreamStatus {
        resource: &'static str,
        status: reqwest::StatusCode,
    },

    /// Connection, body read, or JSON decode failure.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_messages_are_fixed() {
        let alerts = ApiError::UpstreamStatus {
            resource: "alerts",
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(alerts.to_string(), "Failed to fetch alerts");

        let rules = ApiError::UpstreamStatus {
            resource: "triage rules",
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(rules.to_string(), "Failed to fetch triage rules");
    }
}
