use thiserror::Error;

/// Failures while loading the person dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode dataset {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DatasetError {
    pub fn origin(&self) -> &str {
        match self {
            Self::Io { origin, .. } | Self::Decode { origin, .. } => origin,
        }
    }
}
