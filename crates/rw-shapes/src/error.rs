use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("template parse error: {0}")]
    Parse(String),

    #[error("template {name:?} has two vertices with seq {seq}")]
    DuplicateVertex { name: String, seq: u32 },

    #[error("template {name:?} vertex {seq} has a non-finite offset")]
    NonFinite { name: String, seq: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ShapeResult<T> = Result<T, ShapeError>;
