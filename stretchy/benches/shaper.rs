use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stretchy::{
    GlyphAssembly, GlyphConstruction, GlyphId, GlyphPartRecord, InkBounds, MathGlyphTable,
    StretchAxis, StretchyOperatorShaper, SyntheticFont,
};

/// A vertical brace with three variants and a five part assembly.
fn brace_font() -> SyntheticFont {
    let gid = GlyphId::new;
    let mut table = MathGlyphTable::new(20);
    table.insert(
        gid(1),
        StretchAxis::Vertical,
        GlyphConstruction::new(vec![gid(1), gid(2), gid(3)]).with_assembly(GlyphAssembly::new(
            vec![
                GlyphPartRecord::new(gid(4), 0, 150, 450),
                GlyphPartRecord::extender(gid(5), 150, 150, 300),
                GlyphPartRecord::new(gid(6), 150, 150, 900),
                GlyphPartRecord::extender(gid(5), 150, 150, 300),
                GlyphPartRecord::new(gid(7), 150, 0, 450),
            ],
        )),
    );
    SyntheticFont::new(1000, table)
        .with_glyph('{', gid(1), InkBounds::new(400.0, 750.0, 250.0))
        .with_glyph_bounds(gid(2), InkBounds::new(450.0, 1000.0, 500.0))
        .with_glyph_bounds(gid(3), InkBounds::new(500.0, 1300.0, 700.0))
        .with_glyph_bounds(gid(4), InkBounds::new(400.0, 450.0, 0.0))
        .with_glyph_bounds(gid(5), InkBounds::new(200.0, 300.0, 0.0))
        .with_glyph_bounds(gid(6), InkBounds::new(400.0, 900.0, 0.0))
        .with_glyph_bounds(gid(7), InkBounds::new(400.0, 450.0, 0.0))
}

pub fn metrics_benchmark(c: &mut Criterion) {
    let font = brace_font();
    let shaper = StretchyOperatorShaper::new('{', StretchAxis::Vertical);
    for target in [1500.0f32, 5000.0, 50_000.0] {
        c.bench_with_input(
            BenchmarkId::new("metrics", target),
            &target,
            |b, &target| b.iter(|| shaper.metrics(&font, black_box(target))),
        );
    }
}

pub fn shape_benchmark(c: &mut Criterion) {
    let font = brace_font();
    let shaper = StretchyOperatorShaper::new('{', StretchAxis::Vertical);
    for target in [1500.0f32, 5000.0, 50_000.0] {
        c.bench_with_input(
            BenchmarkId::new("shape", target),
            &target,
            |b, &target| b.iter(|| shaper.shape(&font, black_box(target))),
        );
    }
}

criterion_group!(benches, metrics_benchmark, shape_benchmark);
criterion_main!(benches);
