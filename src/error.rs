//! Error types for upstream calls and the load pipeline.

use thiserror::Error;

/// A single failed call to one of the remote services.
#[derive(Debug, Error)]
pub(crate) enum UpstreamError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("no results for {0}")]
    Empty(String),
}

/// Raised only when every radar strategy produced zero frames.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum FrameSourceError {
    #[error("no radar data available")]
    NoRadarData,
}

/// Failures that end a foreground load in the error screen.
#[derive(Debug, Error)]
pub(crate) enum LoadError {
    #[error("failed to geocode ZIP: {0}")]
    Geocode(#[source] UpstreamError),

    #[error("failed to get radar station: {0}")]
    Station(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_errors_read_like_the_error_screen_expects() {
        let err = LoadError::Geocode(UpstreamError::Empty("ZIP 00000".to_string()));
        assert_eq!(err.to_string(), "failed to geocode ZIP: no results for ZIP 00000");

        let err = LoadError::Station("catalog is empty".to_string());
        assert_eq!(err.to_string(), "failed to get radar station: catalog is empty");
    }

    #[test]
    fn status_error_names_url_and_code() {
        let err = UpstreamError::Status {
            url: "https://example.test/a.png".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "https://example.test/a.png returned HTTP 404");
        assert_eq!(FrameSourceError::NoRadarData.to_string(), "no radar data available");
    }
}
