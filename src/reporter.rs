//! Plain-text summary of a decoded document
//!
//! The output is a header block followed by one `[Source]:` / `[Target]:` line
//! per segment, in document order:
//!
//! ```text
//!
//! Original: a.docx
//! Datatype: x
//! SourceLanguage: en
//! TargetLanguage: fr
//!
//! [Source]: Hello
//! [Target]: Bonjour
//! ```

use std::io::{self, Write};

use crate::config::ReportOptions;
use crate::model::{Document, Mrk, TransUnit};

const SOURCE: &str = "[Source]:";
const TARGET: &str = "[Target]:";

/// Report lines with default options
pub fn report(doc: &Document) -> Vec<String> {
    report_with(doc, &ReportOptions::default())
}

pub fn report_with(doc: &Document, options: &ReportOptions) -> Vec<String> {
    let file = &doc.file;
    let mut lines = vec![
        String::new(),
        format!("Original: {}", file.original),
        format!("Datatype: {}", file.datatype),
        format!("SourceLanguage: {}", file.source_language),
        format!("TargetLanguage: {}", file.target_language),
        String::new(),
    ];

    if file.body.groups.is_empty() {
        lines.push("Empty.".to_string());
        return lines;
    }

    for group in &file.body.groups {
        if options.per_unit {
            for unit in &group.trans_units {
                push_sources(&mut lines, unit);
                push_targets(&mut lines, unit, options);
            }
        } else {
            // Markers of every unit pile up as if the group held a single unit
            for unit in &group.trans_units {
                push_sources(&mut lines, unit);
            }
            for unit in &group.trans_units {
                push_targets(&mut lines, unit, options);
            }
        }
    }

    lines
}

/// Writes each line followed by a newline
pub fn write_report<W: Write>(lines: &[String], mut out: W) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn push_sources(lines: &mut Vec<String>, unit: &TransUnit) {
    for mrk in &unit.seg_source.markers {
        push_expanded(lines, SOURCE, mrk);
    }
}

fn push_targets(lines: &mut Vec<String>, unit: &TransUnit, options: &ReportOptions) {
    for mrk in &unit.target.markers {
        if options.expand_target_groups {
            push_expanded(lines, TARGET, mrk);
        } else if !mrk.text.is_empty() {
            lines.push(format!("{TARGET} {}", mrk.text));
        } else {
            // Only one g is consulted on the target side, the last one
            let text = mrk.last_g().map_or("", |g| g.text.as_str());
            lines.push(format!("{TARGET} {text}"));
        }
    }
}

/// Direct text when present, otherwise one line per nested `g`
fn push_expanded(lines: &mut Vec<String>, label: &str, mrk: &Mrk) {
    if !mrk.text.is_empty() {
        lines.push(format!("{label} {}", mrk.text));
        return;
    }
    lines.extend(mrk.g.iter().map(|g| format!("{label} {}", g.text)));
}
