use thiserror::Error;

#[derive(Debug, Error)]
pub enum CardsError {
    #[error("invalid cards payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown currency '{0}'")]
    UnknownCurrency(String),
    #[error("card index {index} out of range for a deck of {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Carousel(#[from] snapdeck_carousel_core::CarouselError),
}

pub type Result<T> = std::result::Result<T, CardsError>;
