use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashdeckError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Speech synthesis error: {0}")]
    Speech(Box<tts::Error>),

    #[error("FlashdeckError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for FlashdeckError {
    fn from(error: std::io::Error) -> Self {
        FlashdeckError::Io(Box::new(error))
    }
}

impl From<tts::Error> for FlashdeckError {
    fn from(error: tts::Error) -> Self {
        FlashdeckError::Speech(Box::new(error))
    }
}
