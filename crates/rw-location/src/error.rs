use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("trace parse error: {0}")]
    Parse(String),

    #[error("trace row {row}: coordinate ({lat}, {lon}) is out of range")]
    InvalidCoordinate { row: usize, lat: f64, lon: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LocationResult<T> = Result<T, LocationError>;
