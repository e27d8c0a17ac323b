//! Benchmarks for line rendering performance.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use itinera_renderer::{HtmlBackend, LineRenderer};

/// Generate itinerary text with the given number of days.
fn generate_itinerary(days: usize, items_per_day: usize) -> String {
    let mut text = String::with_capacity(days * items_per_day * 40);
    text.push_str("# Sample Trip\n\n");

    for day in 1..=days {
        text.push_str(&format!("### Day {day}\n"));
        text.push_str("**Morning**\n");
        for item in 0..items_per_day {
            text.push_str(&format!("- Activity {item} with **notes** attached\n"));
        }
        text.push_str("A closing paragraph with **bold** spans and plain text.\n");
        text.push_str("---\n\n");
    }
    text
}

fn bench_render_small(c: &mut Criterion) {
    let text = generate_itinerary(3, 5);

    c.bench_function("render_itinerary_3_days", |b| {
        b.iter(|| LineRenderer::<HtmlBackend>::new().render(&text));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_varying_sizes");

    for days in [1, 10, 50] {
        let text = generate_itinerary(days, 8);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &text, |b, text| {
            b.iter(|| LineRenderer::<HtmlBackend>::new().render(text));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_small, bench_render_varying_sizes);
criterion_main!(benches);
