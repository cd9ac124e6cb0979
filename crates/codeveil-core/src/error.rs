use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}
