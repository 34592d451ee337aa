// core/src/error.rs
use thiserror::Error;

/// Feil fra det som omgir sensorkjernen (replay, metrics, JSON).
/// Selve samplingen og filtreringen kan ikke feile.
#[derive(Debug, Error)]
pub enum CoError {
    #[error("I/O-feil: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV-feil: {0}")]
    Csv(#[from] csv::Error),

    #[error("ugyldig rå-sample på linje {line}: {value:?}")]
    InvalidSample { line: u64, value: String },

    #[error("replay-filen {0} inneholder ingen samples")]
    EmptyReplay(String),

    #[error("metrics-feil: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("JSON-feil: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CoResult<T> = Result<T, CoError>;
