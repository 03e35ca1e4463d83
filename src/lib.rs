//! sdlxliff: read SDLXLIFF translation files
//!
//! This crate provides functionality to:
//! - Decode an SDLXLIFF (XLIFF 1.2 plus SDL extensions) file into plain records
//! - Summarise its header and source/target segment pairs as text
//!
//! # Examples
//! ```
//! use sdlxliff::{decode, report};
//!
//! let xml = br#"<xliff><file original="a.docx" datatype="x" source-language="en" target-language="fr"><body><group><trans-unit id="1"><seg-source><mrk mtype="seg" mid="1">Hello</mrk></seg-source><target><mrk mtype="seg" mid="1">Bonjour</mrk></target></trans-unit></group></body></file></xliff>"#;
//! let doc = decode(xml).unwrap();
//! let lines = report(&doc);
//! assert!(lines.contains(&"[Target]: Bonjour".to_string()));
//! ```

use std::{fs, path::Path};

use tracing::{debug, info, instrument};

pub mod config;
pub mod decoder;
pub mod error;
pub mod model;
pub mod reporter;
pub mod xml;

// Re-exports
pub use config::{DecoderConfig, ReportOptions};
pub use decoder::{decode, decode_with};
pub use error::{Error, ParseError, ParseErrorKind, Result};
pub use model::{Document, FromElement};
pub use reporter::{report, report_with, write_report};

/// Reads the whole file into memory
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and decodes one SDLXLIFF file
#[instrument(skip(config))]
pub fn load_file(path: &Path, config: &DecoderConfig) -> Result<Document> {
    let bytes = read_file(path)?;
    debug!(bytes = bytes.len(), "file read");

    let doc = decode_with(&bytes, config)?;
    info!(groups = doc.file.body.groups.len(), "file decoded");
    Ok(doc)
}
