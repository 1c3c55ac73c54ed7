use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("failed to connect to update server: {message}")]
    Network { message: String },

    #[error("update server returned HTTP {status}")]
    Http { status: u16 },

    #[error("failed to record update check: {message}")]
    ConfigSave { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid version descriptor: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ureq::Error> for UpdateError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, _) => UpdateError::Http { status },
            ureq::Error::Transport(transport) => UpdateError::Network {
                message: transport.to_string(),
            },
        }
    }
}
