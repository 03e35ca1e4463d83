//! `body`: groups of translation units and their segment markup

use crate::model::{attr, many, one, FromElement, Value};
use crate::xml::Element;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Body {
    pub text: String,
    pub groups: Vec<Group>,
}

impl FromElement for Body {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            groups: many(element, "group"),
        }
    }
}

/// `group`: context references plus the translation units they apply to
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Group {
    pub text: String,
    pub cxts: Cxts,
    /// Every `trans-unit` of the group, in document order
    pub trans_units: Vec<TransUnit>,
}

impl Group {
    /// The group's first translation unit
    pub fn trans_unit(&self) -> Option<&TransUnit> {
        self.trans_units.first()
    }
}

impl FromElement for Group {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            cxts: one(element, "cxts"),
            trans_units: many(element, "trans-unit"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cxts {
    pub text: String,
    pub cxts: Vec<Cxt>,
    pub node: Node,
}

impl FromElement for Cxts {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            cxts: many(element, "cxt"),
            node: one(element, "node"),
        }
    }
}

/// `cxt id="..."`: reference to a context definition in the header
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cxt {
    pub text: String,
    pub id: String,
}

impl FromElement for Cxt {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            id: attr(element, "id"),
        }
    }
}

/// `node id="..."`: reference to a node definition in the header
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    pub text: String,
    pub id: String,
}

impl FromElement for Node {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            id: attr(element, "id"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransUnit {
    pub text: String,
    pub id: String,
    pub translate: String,
    pub source: Source,
    pub seg_source: SegmentedText,
    pub target: SegmentedText,
    pub seg_defs: SegDefs,
}

impl FromElement for TransUnit {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            id: attr(element, "id"),
            translate: attr(element, "translate"),
            source: one(element, "source"),
            seg_source: one(element, "seg-source"),
            target: one(element, "target"),
            seg_defs: one(element, "seg-defs"),
        }
    }
}

/// Unsegmented `source`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Source {
    pub text: String,
    pub g: Vec<G>,
    pub x: Vec<X>,
}

impl FromElement for Source {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            g: many(element, "g"),
            x: many(element, "x"),
        }
    }
}

/// Shape shared by `seg-source` and `target`: segment markers, optionally
/// wrapped in one outer `g`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SegmentedText {
    pub text: String,
    pub g: G,
    pub markers: Vec<Mrk>,
    pub x: Vec<X>,
}

impl FromElement for SegmentedText {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            g: one(element, "g"),
            markers: many(element, "mrk"),
            x: many(element, "x"),
        }
    }
}

/// `mrk`: one segment. Its text is either direct character data or sits in
/// nested `g` elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mrk {
    pub text: String,
    pub mtype: String,
    pub mid: String,
    pub x: Vec<X>,
    pub g: Vec<G>,
}

impl Mrk {
    /// The nested `g` a single-`g` reading ends up with: the last one
    pub fn last_g(&self) -> Option<&G> {
        self.g.last()
    }
}

impl FromElement for Mrk {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            mtype: attr(element, "mtype"),
            mid: attr(element, "mid"),
            x: many(element, "x"),
            g: many(element, "g"),
        }
    }
}

/// `g`: inline tag span
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct G {
    pub text: String,
    pub id: String,
    pub xid: String,
    pub x: Vec<X>,
    pub markers: Vec<Mrk>,
}

impl FromElement for G {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            id: attr(element, "id"),
            xid: attr(element, "xid"),
            x: many(element, "x"),
            markers: many(element, "mrk"),
        }
    }
}

/// `x`: standalone placeholder
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct X {
    pub text: String,
    pub id: String,
}

impl FromElement for X {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            id: attr(element, "id"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SegDefs {
    pub text: String,
    pub segs: Vec<Seg>,
}

impl SegDefs {
    /// Match metadata of the segment with the given `mid`
    pub fn seg(&self, mid: &str) -> Option<&Seg> {
        self.segs.iter().find(|seg| seg.id == mid)
    }
}

impl FromElement for SegDefs {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            segs: many(element, "seg"),
        }
    }
}

/// `sdl:seg`: translation status and match quality of one segment
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Seg {
    pub text: String,
    pub id: String,
    pub conf: String,
    pub origin: String,
    pub origin_system: String,
    pub percent: String,
    pub struct_match: String,
    pub text_match: String,
    pub values: Vec<Value>,
}

impl FromElement for Seg {
    fn from_element(element: &Element) -> Self {
        Self {
            text: element.text(),
            id: attr(element, "id"),
            conf: attr(element, "conf"),
            origin: attr(element, "origin"),
            origin_system: attr(element, "origin-system"),
            percent: attr(element, "percent"),
            struct_match: attr(element, "struct-match"),
            text_match: attr(element, "text-match"),
            values: many(element, "value"),
        }
    }
}
