//! `header` metadata written by the SDL file type filters

use crate::model::{attr, many, one, Cxt, FromElement, Value};
use crate::xml::Element;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Header {
    pub text: String,
    pub reference: Reference,
    pub ref_files: RefFiles,
    pub file_info: FileInfo,
    pub filetype_info: FiletypeInfo,
    pub fmt_defs: FmtDefs,
    pub cxt_defs: CxtDefs,
    pub node_defs: NodeDefs,
    pub tag_defs: TagDefs,
}

impl FromElement for Header {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            reference: one(element, "reference"),
            ref_files: one(element, "ref-files"),
            file_info: one(element, "file-info"),
            filetype_info: one(element, "filetype-info"),
            fmt_defs: one(element, "fmt-defs"),
            cxt_defs: one(element, "cxt-defs"),
            node_defs: one(element, "node-defs"),
            tag_defs: one(element, "tag-defs"),
        }
    }
}

/// `reference`: usually the base64 payload of the original document
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reference {
    pub text: String,
    pub internal_file: InternalFile,
}

impl FromElement for Reference {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            internal_file: one(element, "internal-file"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InternalFile {
    pub text: String,
    pub form: String,
}

impl FromElement for InternalFile {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            form: attr(element, "form"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RefFiles {
    pub text: String,
    pub ref_file: RefFile,
}

impl FromElement for RefFiles {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            ref_file: one(element, "ref-file"),
        }
    }
}

/// `ref-file`: a dependency file the filter tracked alongside the original
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RefFile {
    pub text: String,
    pub uid: String,
    pub id: String,
    pub name: String,
    pub o_path: String,
    pub date: String,
    pub expected_use: String,
}

impl FromElement for RefFile {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            uid: attr(element, "uid"),
            id: attr(element, "id"),
            name: attr(element, "name"),
            o_path: attr(element, "o-path"),
            date: attr(element, "date"),
            expected_use: attr(element, "expected-use"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileInfo {
    pub text: String,
    pub xmlns: String,
    pub values: Vec<Value>,
    pub sniff_info: SniffInfo,
}

impl FromElement for FileInfo {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            xmlns: attr(element, "xmlns"),
            values: many(element, "value"),
            sniff_info: one(element, "sniff-info"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SniffInfo {
    pub text: String,
    pub detected_source_lang: DetectedSourceLang,
}

impl FromElement for SniffInfo {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            detected_source_lang: one(element, "detected-source-lang"),
        }
    }
}

/// Source language guessed by the filter, with its certainty
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetectedSourceLang {
    pub text: String,
    pub detection_level: String,
    pub lang: String,
}

impl FromElement for DetectedSourceLang {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            detection_level: attr(element, "detection-level"),
            lang: attr(element, "lang"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FiletypeInfo {
    pub text: String,
    /// Text of the `filetype-id` child element
    pub filetype_id: String,
}

impl FromElement for FiletypeInfo {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            filetype_id: element
                .child("filetype-id")
                .map(Element::text)
                .unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FmtDefs {
    pub text: String,
    pub xmlns: String,
    pub fmt_defs: Vec<FmtDef>,
}

impl FromElement for FmtDefs {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            xmlns: attr(element, "xmlns"),
            fmt_defs: many(element, "fmt-def"),
        }
    }
}

/// `fmt-def`: a named bundle of formatting properties
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FmtDef {
    pub text: String,
    pub id: String,
    pub values: Vec<Value>,
}

impl FromElement for FmtDef {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            id: attr(element, "id"),
            values: many(element, "value"),
        }
    }
}

/// `fmt id="..."`: reference to an [`FmtDef`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FmtRef {
    pub text: String,
    pub id: String,
}

impl FromElement for FmtRef {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            id: attr(element, "id"),
        }
    }
}

/// Key/value bag found under `props` and `bpt-props`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Props {
    pub text: String,
    pub values: Vec<Value>,
}

impl FromElement for Props {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            values: many(element, "value"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CxtDefs {
    pub text: String,
    pub xmlns: String,
    pub cxt_defs: Vec<CxtDef>,
}

impl FromElement for CxtDefs {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            xmlns: attr(element, "xmlns"),
            cxt_defs: many(element, "cxt-def"),
        }
    }
}

/// `cxt-def`: a structural context (paragraph, table cell, ...) segments refer to
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CxtDef {
    pub text: String,
    pub id: String,
    pub kind: String,
    pub purpose: String,
    pub name: String,
    pub code: String,
    pub descr: String,
    pub color: String,
    pub fmt: FmtRef,
    pub props: Props,
}

impl FromElement for CxtDef {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            id: attr(element, "id"),
            kind: attr(element, "type"),
            purpose: attr(element, "purpose"),
            name: attr(element, "name"),
            code: attr(element, "code"),
            descr: attr(element, "descr"),
            color: attr(element, "color"),
            fmt: one(element, "fmt"),
            props: one(element, "props"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeDefs {
    pub text: String,
    pub xmlns: String,
    pub node_defs: Vec<NodeDef>,
}

impl FromElement for NodeDefs {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            xmlns: attr(element, "xmlns"),
            node_defs: many(element, "node-def"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeDef {
    pub text: String,
    pub id: String,
    pub parent: String,
    pub force_name: String,
    pub cxt: Cxt,
}

impl FromElement for NodeDef {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            id: attr(element, "id"),
            parent: attr(element, "parent"),
            force_name: attr(element, "force-name"),
            cxt: one(element, "cxt"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagDefs {
    pub text: String,
    pub xmlns: String,
    pub tags: Vec<Tag>,
}

impl FromElement for TagDefs {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            xmlns: attr(element, "xmlns"),
            tags: many(element, "tag"),
        }
    }
}

/// `tag`: definition of an inline tag pair (`bpt`/`ept`) or placeholder (`ph`)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tag {
    pub text: String,
    pub id: String,
    pub bpt: Bpt,
    pub bpt_props: Props,
    pub ept: Ept,
    pub fmt: FmtRef,
    pub ph: Ph,
    pub props: Props,
}

impl FromElement for Tag {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            id: attr(element, "id"),
            bpt: one(element, "bpt"),
            bpt_props: one(element, "bpt-props"),
            ept: one(element, "ept"),
            fmt: one(element, "fmt"),
            ph: one(element, "ph"),
            props: one(element, "props"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bpt {
    pub text: String,
    pub name: String,
    pub can_hide: String,
    pub word_end: String,
    pub seg_hint: String,
    pub sub: Sub,
}

impl FromElement for Bpt {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            name: attr(element, "name"),
            can_hide: attr(element, "can-hide"),
            word_end: attr(element, "word-end"),
            seg_hint: attr(element, "seg-hint"),
            sub: one(element, "sub"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sub {
    pub text: String,
    pub xid: String,
}

impl FromElement for Sub {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            xid: attr(element, "xid"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ept {
    pub text: String,
    pub name: String,
    pub can_hide: String,
    pub word_end: String,
}

impl FromElement for Ept {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            name: attr(element, "name"),
            can_hide: attr(element, "can-hide"),
            word_end: attr(element, "word-end"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ph {
    pub text: String,
    pub name: String,
    pub word_end: String,
    pub seg_hint: String,
}

impl FromElement for Ph {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            name: attr(element, "name"),
            word_end: attr(element, "word-end"),
            seg_hint: attr(element, "seg-hint"),
        }
    }
}
