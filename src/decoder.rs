//! Bytes to [`Document`]

use tracing::debug;

use crate::config::DecoderConfig;
use crate::error::{ParseError, ParseErrorKind};
use crate::model::{Document, FromElement};
use crate::xml::Parser;

const ROOT: &str = "xliff";

/// Decodes a whole SDLXLIFF file held in memory, with default limits
pub fn decode(bytes: &[u8]) -> Result<Document, ParseError> {
    decode_with(bytes, &DecoderConfig::default())
}

/// Decodes with explicit limits.
///
/// Fails when the bytes are not well-formed XML, hold no element, or the
/// root element is not `xliff`. Unknown elements and attributes are skipped.
pub fn decode_with(bytes: &[u8], config: &DecoderConfig) -> Result<Document, ParseError> {
    let tree = Parser::with_config(bytes, config.clone()).parse()?;

    if tree.root.name != ROOT {
        return Err(ParseError::new(ParseErrorKind::UnexpectedRoot {
            found: tree.root.name,
        }));
    }

    let document = Document::from_element(&tree.root);
    debug!(
        groups = document.file.body.groups.len(),
        source_language = %document.file.source_language,
        target_language = %document.file.target_language,
        "decoded document"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_other_root() {
        let err = decode(b"<html><body/></html>").unwrap_err();
        assert_eq!(
            err.kind(),
            &ParseErrorKind::UnexpectedRoot {
                found: "html".to_string()
            }
        );
    }

    #[test]
    fn test_minimal_root() -> Result<(), ParseError> {
        let doc = decode(br#"<xliff version="1.2"/>"#)?;
        assert_eq!(doc.version, "1.2");
        assert!(doc.file.body.groups.is_empty());
        Ok(())
    }
}
