use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};
use tickflex_core::{generate_scale, resolve_range, Axes, BarChart, Dataset, DisplayMode, LineChart};

fn gen_datasets(n_sets: usize, n: usize) -> Vec<Dataset> {
    (0..n_sets)
        .map(|s| {
            let values = (0..n)
                .map(|i| if i % 13 == 5 { None } else { Some(((i * (s + 1)) % 50) as f64 + 1.0) })
                .collect();
            Dataset::new(values)
        })
        .collect()
}

fn bench_bars(c: &mut Criterion) {
    let mut group = c.benchmark_group("bar_layout");
    for &n in &[100usize, 1_000usize] {
        let data = gen_datasets(3, n);
        for mode in [DisplayMode::Clustered, DisplayMode::Stacked] {
            let stacked = mode == DisplayMode::Stacked;
            let scale = generate_scale(resolve_range(&data, stacked).expect("values")).expect("scale");
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_{mode:?}")), &mode, |b, &m| {
                b.iter_batched(
                    || BarChart::new(data.clone(), scale).display_mode(m),
                    |chart| { let _ = black_box(chart.layout()); },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_lines(c: &mut Criterion) {
    let data = gen_datasets(3, 1_000);
    let scale = generate_scale(resolve_range(&data, false).expect("values")).expect("scale");
    let chart = LineChart::new(data, scale).show_area(true);
    c.bench_function("line_layout_n1000_area", |b| b.iter(|| black_box(chart.layout())));
}

fn bench_axes(c: &mut Criterion) {
    let labels = (0..500).map(|i| format!("c{i}")).collect::<Vec<_>>();
    let scale = tickflex_core::Scale::new(0.0, 1_000.0, 10.0);
    let axes = Axes::new(scale, labels);
    c.bench_function("axes_layout_500", |b| b.iter(|| black_box(axes.layout())));
}

criterion_group!(benches, bench_bars, bench_lines, bench_axes);
criterion_main!(benches);
