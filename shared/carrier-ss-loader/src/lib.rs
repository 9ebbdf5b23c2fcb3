//! # Carrier SS Loader
//!
//! Loads a carrier's supplementary-service definition document into a
//! [`carrier_ss_codec::Schema`].
//!
//! Documents are JSON, one per carrier identity (operators that need
//! non-default conventions ship their own document, keyed by carrier id);
//! see [`CarrierDocument`] for the shape. The loader is the only component
//! that parses raw configuration — the codec consumes the finished schema.

pub mod document;
pub mod error;


pub use document::{CarrierDocument, CommandDef, FeatureDef, ResultEntryDef};
pub use error::{LoaderError, Result};

use std::fs;
use std::path::Path;

use carrier_ss_codec::Schema;
use tracing::info;

/// Parse a carrier definition document from JSON text.
pub fn load_str(json: &str) -> Result<Schema> {
    let document: CarrierDocument = serde_json::from_str(json)?;
    document.into_schema()
}

/// Load a carrier definition document from disk.
pub fn load_file(path: impl AsRef<Path>) -> Result<Schema> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let schema = load_str(&json)?;
    info!(
        path = %path.display(),
        features = schema.features.len(),
        "loaded carrier schema"
    );
    Ok(schema)
}
