// SPDX-License-Identifier: Apache-2.0

//! Benchmarks the translation contract over the sample corpora: each timed
//! pass carries every sample through a full encoding round trip and checks
//! that the tree survives unchanged, so the numbers cover parsing, rendering
//! and the identity comparison together.

mod common;

use common::{JSON_SAMPLES, TEXT_SAMPLES};
use criterion::{Criterion, criterion_group, criterion_main};
use cql2_codec::Filter;
use serde_json::Value;

// text -> tree -> JSON -> tree, asserting the trees match
fn text_to_json(c: &mut Criterion) {
    c.bench_function("text -> json -> tree", |b| {
        b.iter(|| {
            let stable = TEXT_SAMPLES
                .iter()
                .filter(|src| {
                    let f = Filter::parse_text(src).expect(src);
                    Filter::parse_json(&f.to_json()).is_ok_and(|g| g == f)
                })
                .count();
            assert_eq!(stable, TEXT_SAMPLES.len());
            stable
        })
    });
}

// JSON -> tree -> text -> tree, asserting the trees match; the JSON corpus
// is decoded once up front so the timed loop measures the translation, not
// serde_json's string parsing
fn json_to_text(c: &mut Criterion) {
    let corpus: Vec<Filter> = JSON_SAMPLES
        .iter()
        .map(|src| {
            let v: Value = serde_json::from_str(src).expect("a well-formed sample");
            Filter::parse_json(&v).expect("a decodable sample")
        })
        .collect();

    c.bench_function("json -> text -> tree", |b| {
        b.iter(|| {
            let stable = corpus
                .iter()
                .filter(|f| Filter::parse_text(&f.to_text()).is_ok_and(|g| &g == *f))
                .count();
            assert_eq!(stable, corpus.len());
            stable
        })
    });
}

// the serializers alone, over trees parsed once up front
fn render(c: &mut Criterion) {
    let corpus: Vec<Filter> = TEXT_SAMPLES
        .iter()
        .map(|src| Filter::parse_text(src).expect(src))
        .collect();

    c.bench_function("render text + json", |b| {
        b.iter(|| {
            corpus
                .iter()
                .map(|f| f.to_text().len() + f.to_json().to_string().len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benchmarks, text_to_json, json_to_text, render);
criterion_main!(benchmarks);
