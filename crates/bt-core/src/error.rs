use thiserror::Error;

/// Errors originating from the core types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Invalid width/height dimensions.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Buffer length does not match the announced dimensions.
    #[error("Taille de buffer incohérente : attendu {expected}, reçu {actual}")]
    BufferSizeMismatch {
        /// Expected length (width × height).
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// Textual bitmap that cannot be parsed back into a grid.
    #[error("Bitmap texte malformé (ligne {line}) : {reason}")]
    MalformedBitmap {
        /// 1-based line number of the offending row.
        line: usize,
        /// Human-readable cause.
        reason: String,
    },
}
