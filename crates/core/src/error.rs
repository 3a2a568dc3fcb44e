#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid error correction level '{0}'. Valid levels: L, M, Q, H")]
    InvalidErrorCorrectionLevel(String),

    #[error("Invalid output format '{0}'. Valid formats: PNG, SVG")]
    InvalidFormat(String),

    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Data too large to fit in a QR code at error correction level {level}")]
    DataTooLarge { level: char },

    #[error("QR encoding failed: {0}")]
    Encoding(String),

    #[error("Failed to load logo '{reference}': {reason}")]
    LogoLoad { reference: String, reason: String },

    #[error("Image encoding failed: {0}")]
    ImageEncoding(String),

    #[error("Failed to create batch record: {0}")]
    BatchCreation(String),

    #[error("Failed to create {failed} of {total} batch items: {reason}")]
    ItemCreation {
        failed: usize,
        total: usize,
        reason: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}
