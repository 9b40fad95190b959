use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompressionError {
    #[error("codec {codec} compress failed: {msg}")]
    CompressFailed { codec: String, msg: String },

    #[error("codec {codec} decompress failed: {msg}")]
    DecompressFailed { codec: String, msg: String },

    #[error("decompressed payload exceeds {max} bytes")]
    TooLarge { max: usize },
}
