#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected end of file")]
    UnexpectedEof,
    #[error("Invalid magic bytes: {0:x?}")]
    InvalidMagicBytes([u8; 4]),
    #[error("Position too large")]
    PositionTooLarge,
    #[error("JSON chunk is not valid UTF-8: {0}")]
    JsonEncoding(std::str::Utf8Error),
    #[error("JSON chunk is not well-formed: {0}")]
    JsonParse(serde_json::Error),
}
