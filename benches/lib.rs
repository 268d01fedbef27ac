// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use listing::{Code, Language, Theme, coalesce, tokenize};

const SAMPLE: &str = include_str!("../src/code.rs");

fn bench_pipeline(c: &mut Criterion) {
    c.bench_function("build_listing", |b| {
        b.iter(|| {
            Code::builder()
                .source(black_box(SAMPLE))
                .language("rust")
                .build()
                .unwrap()
        })
    });

    c.bench_function("tokenize", |b| {
        b.iter(|| tokenize(black_box(SAMPLE), Language::Rust, 4))
    });

    let theme = Theme::by_name("default").unwrap();
    c.bench_function("coalesce", |b| {
        let tokens = tokenize(SAMPLE, Language::Rust, 4);
        b.iter(|| coalesce(black_box(tokens.clone()), theme))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
