// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mapcheck::format::format_fixed_thousands;
use mapcheck::render::{render_report_annotated, render_report_text};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `render.panels`, `render.text`, `render.annotated`, `format.number`
// - Case IDs come from `fixtures::Case::id` and must not be renamed.
fn benches_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render.panels");
    for case in fixtures::Case::ALL {
        let view = fixtures::marked_view(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| black_box(black_box(&view).render().len()))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render.text");
    for case in fixtures::Case::ALL {
        let panels = fixtures::marked_view(case).render();
        group.bench_function(case.id(), move |b| {
            b.iter(|| black_box(render_report_text(black_box(&panels)).len()))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render.annotated");
    for case in fixtures::Case::ALL {
        let panels = fixtures::marked_view(case).render();
        let notes = vec!["check monument at corner".to_owned(); panels.len()];
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let report = render_report_annotated(black_box(&panels), black_box(&notes));
                black_box(report.regions.len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("format.number");
    group.bench_function("precision_2dp", |b| {
        b.iter(|| black_box(format_fixed_thousands(black_box(291_872.202), 2)))
    });
    group.bench_function("closure_3dp", |b| {
        b.iter(|| black_box(format_fixed_thousands(black_box(0.0005), 3)))
    });
    group.bench_function("large_12dp", |b| {
        b.iter(|| black_box(format_fixed_thousands(black_box(-9_876_543_210.123_456), 12)))
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_render
}
criterion_main!(benches);
