use thiserror::Error;

/// Errors that can occur while identifying a disc image.
#[derive(Debug, Error)]
pub enum IdentError {
    /// I/O error while reading an image or sheet
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A CUE/GDI sheet is structurally broken (bad timestamp, missing field)
    #[error("Invalid sheet: {0}")]
    InvalidSheet(String),
}

impl IdentError {
    pub fn invalid_sheet(msg: impl Into<String>) -> Self {
        Self::InvalidSheet(msg.into())
    }
}
