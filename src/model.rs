//! SDLXLIFF document model
//!
//! Plain records mirroring the `xliff` element tree. Each record knows how to
//! fill itself from an [`Element`] through [`FromElement`]; a missing element
//! becomes the record's `Default`, a missing attribute becomes `""`. Attribute
//! values are kept as strings, whatever they look like.

pub mod body;
pub mod header;

pub use body::{
    Body, Cxt, Cxts, G, Group, Mrk, Node, Seg, SegDefs, SegmentedText, Source, TransUnit, X,
};
pub use header::{
    Bpt, CxtDef, CxtDefs, DetectedSourceLang, Ept, FileInfo, FiletypeInfo, FmtDef, FmtDefs,
    FmtRef, Header, InternalFile, NodeDef, NodeDefs, Ph, Props, RefFile, RefFiles, Reference,
    SniffInfo, Sub, Tag, TagDefs,
};

use crate::xml::Element;

/// Mapping from an XML element onto a model record
pub trait FromElement: Default {
    fn from_element(element: &Element) -> Self;
}

/// Builds `T` from the first child named `name`, or `T::default()`
pub(crate) fn one<T: FromElement>(element: &Element, name: &str) -> T {
    element
        .child(name)
        .map(T::from_element)
        .unwrap_or_default()
}

/// Builds one `T` per child named `name`, in document order
pub(crate) fn many<T: FromElement>(element: &Element, name: &str) -> Vec<T> {
    element.children_named(name).map(T::from_element).collect()
}

pub(crate) fn attr(element: &Element, name: &str) -> String {
    element.attr(name).to_string()
}

/// Root `xliff` element
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    pub sdl: String,
    pub xmlns: String,
    pub version: String,
    pub file: File,
}

impl FromElement for Document {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            sdl: attr(element, "sdl"),
            xmlns: attr(element, "xmlns"),
            version: attr(element, "version"),
            file: one(element, "file"),
        }
    }
}

/// `file`: the translated document and its language pair
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct File {
    pub text: String,
    pub original: String,
    pub datatype: String,
    pub source_language: String,
    pub target_language: String,
    pub header: Header,
    pub body: Body,
}

impl FromElement for File {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            original: attr(element, "original"),
            datatype: attr(element, "datatype"),
            source_language: attr(element, "source-language"),
            target_language: attr(element, "target-language"),
            header: one(element, "header"),
            body: one(element, "body"),
        }
    }
}

/// `value key="..."`: a key/value pair used throughout the SDL metadata
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Value {
    pub key: String,
    pub text: String,
}

impl FromElement for Value {
    fn from_element(element: &Element) -> Self {
        Self {
            key: attr(element, "key"),
            text: element.text(),
        }
    }
}
