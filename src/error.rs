use thiserror::Error;

/// Malformed input handed to the engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Unknown piece kind: {0:?}")]
    UnknownPieceKind(String),

    #[error("Unknown piece face: {0:?}")]
    UnknownFace(String),

    #[error("Non-finite {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("Invalid game area: {0}")]
    InvalidArea(String),
}

/// Failure loading or decoding challenge definitions
#[derive(Error, Debug)]
pub enum ChallengeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Challenge {index}: {source}")]
    Challenge {
        index: usize,
        #[source]
        source: EngineError,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
