#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use sdlxliff::model::Header;
use sdlxliff::{decode, decode_with, DecoderConfig, ParseError, ParseErrorKind};

const SAMPLE: &[u8] = include_bytes!("fixtures/sample.sdlxliff");

const HELLO: &str = r#"<xliff><file original="a.docx" datatype="x" source-language="en" target-language="fr"><body><group><trans-unit id="1"><seg-source><mrk mtype="seg" mid="1">Hello</mrk></seg-source><target><mrk mtype="seg" mid="1">Bonjour</mrk></target></trans-unit></group></body></file></xliff>"#;

#[test]
fn test_decode_hello_scenario() -> Result<(), ParseError> {
    let doc = decode(HELLO.as_bytes())?;
    let file = &doc.file;
    assert_eq!(file.original, "a.docx");
    assert_eq!(file.datatype, "x");
    assert_eq!(file.source_language, "en");
    assert_eq!(file.target_language, "fr");

    let unit = file.body.groups[0].trans_unit().unwrap();
    assert_eq!(unit.id, "1");
    assert_eq!(unit.seg_source.markers[0].text, "Hello");
    assert_eq!(unit.seg_source.markers[0].mid, "1");
    assert_eq!(unit.target.markers[0].text, "Bonjour");
    Ok(())
}

#[test]
fn test_decode_sample_header() -> Result<(), ParseError> {
    let doc = decode(SAMPLE)?;
    // `sdl:version` comes after `version` and shares its local name
    assert_eq!(doc.version, "1.0");
    assert_eq!(doc.sdl, "http://sdl.com/FileTypes/SdlXliff/1.0");
    assert_eq!(doc.xmlns, "urn:oasis:names:tc:xliff:document:1.2");

    let header = &doc.file.header;
    assert_eq!(header.reference.internal_file.form, "base64");
    assert_eq!(header.file_info.values.len(), 2);
    assert_eq!(header.file_info.values[1].key, "SDL:OriginalEncoding");
    assert_eq!(header.file_info.values[1].text, "utf-8");
    assert_eq!(
        header.file_info.sniff_info.detected_source_lang.detection_level,
        "Guess"
    );
    assert_eq!(header.filetype_info.filetype_id, "WordprocessingML v. 2");
    assert_eq!(header.fmt_defs.fmt_defs[0].values[0].key, "Bold");

    let cxt_defs = &header.cxt_defs.cxt_defs;
    assert_eq!(cxt_defs.len(), 2);
    assert_eq!(cxt_defs[0].kind, "x-tm-length-info");
    assert_eq!(cxt_defs[0].props.values[0].text, "Characters");
    assert_eq!(cxt_defs[1].color, "#ffffff");
    assert_eq!(cxt_defs[1].fmt.id, "1");

    assert_eq!(header.node_defs.node_defs[0].force_name, "Body");
    assert_eq!(header.node_defs.node_defs[0].cxt.id, "2");

    let tags = &header.tag_defs.tags;
    assert_eq!(tags[0].bpt.text, "<b>");
    assert_eq!(tags[0].bpt.can_hide, "true");
    assert_eq!(tags[0].ept.text, "</b>");
    assert_eq!(tags[1].ph.name, "br");
    assert_eq!(tags[1].props.values[0].text, "lb");
    Ok(())
}

#[test]
fn test_decode_sample_body() -> Result<(), ParseError> {
    let doc = decode(SAMPLE)?;
    let groups = &doc.file.body.groups;
    assert_eq!(groups.len(), 2);

    assert_eq!(groups[0].cxts.cxts[0].id, "2");
    assert_eq!(groups[0].cxts.node.id, "1");

    let unit = groups[0].trans_unit().unwrap();
    assert_eq!(unit.translate, "yes");
    assert_eq!(unit.source.text, "Welcome to the manual.");

    // sdl:seg-defs and sdl:seg are matched by local name
    let seg = unit.seg_defs.seg("1").unwrap();
    assert_eq!(seg.conf, "Translated");
    assert_eq!(seg.origin_system, "Main TM");
    assert_eq!(seg.percent, "100");
    assert_eq!(seg.struct_match, "");
    assert_eq!(seg.values[0].key, "created_by");

    let unit = groups[1].trans_unit().unwrap();
    assert_eq!(unit.source.g[0].text, "Safety & care");
    let markers = &unit.seg_source.markers;
    assert_eq!(markers[0].text, "");
    assert_eq!(markers[1].g.len(), 2);
    assert_eq!(markers[1].g[1].text, "before use");
    assert_eq!(unit.target.markers[0].g[0].text, "Sécurité et entretien");
    assert_eq!(unit.seg_defs.seg("2").map(|s| s.percent.as_str()), Some("75"));
    Ok(())
}

#[test]
fn test_missing_elements_are_zero_valued() -> Result<(), ParseError> {
    let doc = decode(br#"<xliff><file original="only.txt"/></xliff>"#)?;
    assert_eq!(doc.file.original, "only.txt");
    assert_eq!(doc.file.datatype, "");
    assert!(doc.file.body.groups.is_empty());
    assert_eq!(doc.file.header, Header::default());
    Ok(())
}

#[test]
fn test_unknown_elements_and_attributes_ignored() -> Result<(), ParseError> {
    let doc = decode(
        br#"<xliff><file original="a" unknown="1"><extra><file original="b"/></extra><body><note>n</note><group><trans-unit id="7" sdl:locked="true"><seg-source><mrk mid="1">Hi</mrk></seg-source></trans-unit></group></body></file></xliff>"#,
    )?;
    assert_eq!(doc.file.original, "a");
    assert_eq!(doc.file.body.groups[0].trans_unit().unwrap().id, "7");
    Ok(())
}

#[test]
fn test_later_attribute_with_same_local_name_wins() -> Result<(), ParseError> {
    let doc = decode(br#"<xliff version="1.2" sdl:version="1.0"/>"#)?;
    assert_eq!(doc.version, "1.0");

    let doc = decode(br#"<xliff sdl:version="1.0" version="1.2"/>"#)?;
    assert_eq!(doc.version, "1.2");
    Ok(())
}

#[test]
fn test_group_keeps_every_trans_unit() -> Result<(), ParseError> {
    let doc = decode(
        br#"<xliff><file><body><group><trans-unit id="1"/><trans-unit id="2"/></group></body></file></xliff>"#,
    )?;
    let group = &doc.file.body.groups[0];
    assert_eq!(group.trans_units.len(), 2);
    assert_eq!(group.trans_unit().map(|u| u.id.as_str()), Some("1"));
    Ok(())
}

#[test]
fn test_mixed_content_text_concatenates() -> Result<(), ParseError> {
    let doc = decode(
        br#"<xliff><file><body><group><trans-unit><seg-source><mrk mid="1">Press <x id="3"/> to start</mrk></seg-source></trans-unit></group></body></file></xliff>"#,
    )?;
    let mrk = &doc.file.body.groups[0].trans_unit().unwrap().seg_source.markers[0];
    assert_eq!(mrk.text, "Press  to start");
    assert_eq!(mrk.x[0].id, "3");
    Ok(())
}

#[test]
fn test_empty_input_fails() {
    let err = decode(b"").unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::NoRoot);
}

#[test]
fn test_json_input_fails() {
    let err = decode(br#"{"xliff": true}"#).unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::NoRoot);
}

#[test]
fn test_malformed_xml_fails() {
    let err = decode(b"<xliff><file></xliff>").unwrap_err();
    assert!(matches!(err.kind(), ParseErrorKind::Syntax(_)));
}

#[test]
fn test_truncated_document_fails() {
    let truncated = &SAMPLE[..SAMPLE.len() / 2];
    assert!(decode(truncated).is_err());
}

#[test]
fn test_wrong_root_fails() {
    let err = decode(b"<xlf version=\"2.0\"/>").unwrap_err();
    assert_eq!(
        err.kind(),
        &ParseErrorKind::UnexpectedRoot {
            found: "xlf".to_string()
        }
    );
}

#[test]
fn test_limits_from_config() {
    let config = DecoderConfig {
        max_size: 64,
        ..DecoderConfig::default()
    };
    let err = decode_with(SAMPLE, &config).unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::MaxSizeExceeded { max: 64 });

    let config = DecoderConfig {
        max_depth: 3,
        ..DecoderConfig::default()
    };
    let err = decode_with(SAMPLE, &config).unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::MaxDepthExceeded { max: 3 });
}
