//! ensure serde is working as expected

use super::*;

#[test]
fn test_serde() {
    let shaped = ShapedResult {
        axis: StretchAxis::Horizontal,
        stretch: Stretch::Assembly {
            repetition_count: 2,
            connector_overlap: 3.0,
        },
        metrics: Metrics {
            advance: 25.0,
            ascent: 6.0,
            descent: 2.0,
            italic_correction: 0.5,
        },
        glyphs: vec![
            ShapedGlyph {
                glyph_id: GlyphId::new(31),
                position: 0.0,
            },
            ShapedGlyph {
                glyph_id: GlyphId::new(32),
                position: 7.0,
            },
        ],
    };
    let dumped = serde_json::to_string(&shaped).unwrap();
    let loaded: ShapedResult = serde_json::from_str(&dumped).unwrap();
    assert_eq!(shaped, loaded);

    let assembly = GlyphAssembly::new(vec![
        GlyphPartRecord::new(GlyphId::new(1), 0, 10, 100),
        GlyphPartRecord::extender(GlyphId::new(2), 10, 10, 50),
    ])
    .with_italic_correction(-4);
    let dumped = serde_json::to_string(&assembly).unwrap();
    let loaded: GlyphAssembly = serde_json::from_str(&dumped).unwrap();
    assert_eq!(assembly, loaded);
}
