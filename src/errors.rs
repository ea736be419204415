use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Define an enum to represent the fatal extraction failures
#[derive(Debug, Error)] // Automatically implement `Debug` and `Error` traits for the enum
pub enum ExtractError {
    // Variant for sources that cannot be opened or read at all
    #[error("cannot read source: {0}")]
    Source(#[from] std::io::Error),

    // Variant for sources that are readable but not well-formed XML
    #[error("not well-formed XML: {0}")]
    Parse(#[from] roxmltree::Error),
}

// Type alias for results that use `ExtractError` as the error type
pub type Result<T> = std::result::Result<T, ExtractError>;
