#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sdlxliff::{decode, report};

fn large_document(groups: usize) -> String {
    let mut xml = String::from(
        r#"<xliff version="1.2"><file original="bench.docx" datatype="x" source-language="en-US" target-language="de-DE"><body>"#,
    );
    for i in 0..groups {
        xml.push_str(&format!(
            r#"<group><trans-unit id="{i}"><seg-source><mrk mtype="seg" mid="{i}"><g id="1">Segment {i}</g></mrk></seg-source><target><mrk mtype="seg" mid="{i}">Segment {i} übersetzt</mrk></target></trans-unit></group>"#
        ));
    }
    xml.push_str("</body></file></xliff>");
    xml
}

fn bench_decode(c: &mut Criterion) {
    let input = include_bytes!("../tests/fixtures/sample.sdlxliff");
    c.bench_function("decode_sample", |b| {
        b.iter(|| decode(black_box(input)).unwrap())
    });

    let large = large_document(5_000);
    c.bench_function("decode_5k_groups", |b| {
        b.iter(|| decode(black_box(large.as_bytes())).unwrap())
    });
}

fn bench_report(c: &mut Criterion) {
    let doc = decode(large_document(5_000).as_bytes()).unwrap();
    c.bench_function("report_5k_groups", |b| b.iter(|| report(black_box(&doc))));
}

criterion_group!(benches, bench_decode, bench_report);
criterion_main!(benches);
