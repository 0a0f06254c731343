// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use snacky::ui::default_snackbar::DefaultSnackbar;
use snacky::SnackyHostState;
use std::hint::black_box;

fn snackbar_throughput_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("snackbar_throughput");

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("tokio runtime");

    group.bench_function("show_dismiss_cycle", |b| {
        b.iter(|| {
            rt.block_on(async {
                let host = SnackyHostState::new();
                let shown = {
                    let host = host.clone();
                    tokio::spawn(async move {
                        host.show(DefaultSnackbar::new("bench").action_label("Act"))
                            .await
                    })
                };
                let handle = loop {
                    match host.current() {
                        Some(handle) => break handle,
                        None => tokio::task::yield_now().await,
                    }
                };
                handle.dismiss();
                let _ = black_box(shown.await);
            });
        });
    });

    group.finish();
}

criterion_group!(benches, snackbar_throughput_benchmark);
criterion_main!(benches);
