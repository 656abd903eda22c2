use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistMatchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid channel data: {0}")]
    InvalidInput(String),

    #[error("Missing input image: {0}")]
    MissingInput(String),

    #[error("Channel {channel} is {found_height}x{found_width}, expected {height}x{width}")]
    DimensionMismatch {
        channel: usize,
        height: usize,
        width: usize,
        found_height: usize,
        found_width: usize,
    },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, HistMatchError>;
