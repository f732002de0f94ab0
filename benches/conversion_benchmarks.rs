use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use picker_color::{ColorConverter, ColorModel, CssColorParser, Hsla, Rgba};

const CSS_INPUTS: &[(&str, &str)] = &[
    ("hex3", "#0cf"),
    ("hex8", "#00ccff80"),
    ("rgb", "rgb(51, 170, 51)"),
    ("rgba", "rgba(51, 170, 51, .4)"),
    ("hsl", "hsl(190, 100%, 50%)"),
    ("hsla", "hsla(240, 100%, 50%, .7)"),
];

fn benchmark_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    let rgba = Rgba::new(51.0, 170.0, 51.0, 0.4);
    group.bench_function("rgb_to_hsl", |b| {
        b.iter(|| ColorConverter::rgb_to_hsl(black_box(rgba)));
    });

    let hsla = Hsla::new(0.61, 0.37, 0.42, 0.9);
    group.bench_function("hsl_to_rgb", |b| {
        b.iter(|| ColorConverter::hsl_to_rgb(black_box(hsla)));
    });

    group.bench_function("hex_to_rgb", |b| {
        b.iter(|| ColorConverter::hex_to_rgb(black_box("#abcd")).unwrap());
    });

    group.finish();
}

fn benchmark_css_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("css_parsing");

    for (name, input) in CSS_INPUTS {
        group.bench_with_input(BenchmarkId::new("parse", name), input, |b, input| {
            b.iter(|| CssColorParser::parse(black_box(input)).unwrap());
        });
    }

    group.finish();
}

// Cached reads should cost next to nothing after the first derivation.
fn benchmark_lazy_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("lazy_cache");

    group.bench_function("first_read", |b| {
        b.iter(|| {
            let color = ColorModel::from_rgba(black_box([12.0, 34.0, 56.0, 0.5]));
            color.hsla().unwrap()
        });
    });

    let warm = ColorModel::from_rgba([12.0, 34.0, 56.0, 0.5]);
    warm.hsla().unwrap();
    group.bench_function("cached_read", |b| {
        b.iter(|| black_box(&warm).hsla().unwrap());
    });

    group.bench_function("hex_render", |b| {
        b.iter(|| black_box(&warm).hex().unwrap());
    });

    group.finish();
}

criterion_group!(
    conversion_benches,
    benchmark_conversions,
    benchmark_css_parsing,
    benchmark_lazy_cache
);
criterion_main!(conversion_benches);
