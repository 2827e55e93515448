use rw_location::LocationError;
use rw_route::RouteError;
use rw_shapes::ShapeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("shape library error: {0}")]
    Shapes(#[from] ShapeError),

    #[error("route export error: {0}")]
    Route(#[from] RouteError),

    #[error("location trace error: {0}")]
    Location(#[from] LocationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
