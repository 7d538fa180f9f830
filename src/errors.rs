use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
        }
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: message.into(),
        }
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_IMPLEMENTED,
            message: message.into(),
        }
    }
}

/// Why a dashboard snapshot could not be loaded. Any variant aborts the
/// whole load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{0}")]
    Config(String),

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },

    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        source: reqwest::Error,
    },

    #[error("could not decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        source: reqwest::Error,
    },

    #[error("could not read snapshot file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("could not parse snapshot file {path}: {source}")]
    Snapshot {
        path: String,
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        if err.is_config() {
            Self::service_unavailable(err.to_string())
        } else {
            Self::bad_gateway(err.to_string())
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
