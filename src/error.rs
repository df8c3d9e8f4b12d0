//! Structured error types for panegrid.
//!
//! The layout engine itself never fails; these errors come from the edges
//! that load grid descriptions and write results.

/// All errors that can occur while loading or exporting a grid.
#[derive(Debug, thiserror::Error)]
pub enum PanegridError {
    /// Malformed grid description JSON.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A width or height that is negative, NaN or infinite.
    #[error("Invalid dimension for {what}: {value}")]
    InvalidDimension {
        /// Which dimension was rejected, e.g. `column 3 width`.
        what: String,
        /// The offending value.
        value: f32,
    },

    /// Explicit row heights that do not match the section's row count.
    #[error("Section {section} declares {rows} rows but {heights} row heights")]
    RowHeightMismatch {
        /// Section index.
        section: usize,
        /// Declared row count.
        rows: usize,
        /// Number of explicit heights supplied.
        heights: usize,
    },

    /// Reading a grid description or writing a snapshot failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Usage and argument errors from the command line.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PanegridError>;

impl From<String> for PanegridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for PanegridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

impl From<PanegridError> for wasm_bindgen::JsValue {
    fn from(e: PanegridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
