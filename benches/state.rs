// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use mapcheck::ui::InteractionState;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `state.toggle_cell`, `state.parcel_highlight`, `state.click_cycle`
fn benches_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("state.toggle_cell");
    for case in fixtures::Case::ALL {
        let keys = fixtures::clickable_cells(&fixtures::view(case));
        group.bench_function(case.id(), move |b| {
            b.iter_batched(
                InteractionState::default,
                |mut state| {
                    for key in &keys {
                        state.toggle_cell(*key);
                    }
                    black_box(state.rev())
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();

    let mut group = c.benchmark_group("state.parcel_highlight");
    for case in fixtures::Case::ALL {
        let view = fixtures::marked_view(case);
        let parcel_count = view.parcels().len();
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let state = black_box(view.state());
                (0..parcel_count).filter(|idx| state.parcel_has_highlight(*idx)).count()
            })
        });
    }
    group.finish();

    // Click on a cell, then re-render: the per-click work of the interactive viewer.
    let mut group = c.benchmark_group("state.click_cycle");
    for case in fixtures::Case::ALL {
        let mut view = fixtures::view(case);
        let keys = fixtures::clickable_cells(&view);
        let mut next = 0usize;
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let key = keys[next % keys.len()];
                next = next.wrapping_add(7);
                view.toggle_cell(black_box(key));
                black_box(view.render().len())
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_state
}
criterion_main!(benches);
