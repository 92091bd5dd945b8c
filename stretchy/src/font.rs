//! Math glyph provider backed by an OpenType font.

use skrifa::{
    charmap::Charmap,
    instance::{LocationRef, Size},
    metrics::GlyphMetrics,
    raw::{FontRef, TableProvider},
    MetadataProvider,
};

use super::{
    provider::{GlyphPart, InkBounds, MathGlyphProvider},
    table::MathGlyphTable,
    GlyphId, StretchAxis,
};

/// Provides glyph mapping and metrics from a font and construction data
/// from a [`MathGlyphTable`].
///
/// Ink bounds are taken from the bounding boxes of TrueType outlines; fonts
/// without a `glyf` table report empty ink for every glyph.
pub struct MathFont<'a> {
    charmap: Charmap<'a>,
    glyph_metrics: GlyphMetrics<'a>,
    table: &'a MathGlyphTable,
    scale: f32,
}

impl<'a> MathFont<'a> {
    /// Creates a new provider for the given font, size, and location in
    /// normalized variation space.
    pub fn new(
        font: &FontRef<'a>,
        size: Size,
        location: impl Into<LocationRef<'a>>,
        table: &'a MathGlyphTable,
    ) -> Self {
        let upem = font
            .head()
            .map(|head| head.units_per_em())
            .unwrap_or_default();
        Self {
            charmap: font.charmap(),
            glyph_metrics: font.glyph_metrics(size, location),
            table,
            scale: size.linear_scale(upem),
        }
    }

    pub fn table(&self) -> &'a MathGlyphTable {
        self.table
    }
}

impl MathGlyphProvider for MathFont<'_> {
    fn resolve_glyph(&self, ch: char) -> GlyphId {
        self.charmap.map(ch).unwrap_or(GlyphId::NOTDEF)
    }

    fn glyph_variants(
        &self,
        glyph_id: GlyphId,
        axis: StretchAxis,
    ) -> impl Iterator<Item = GlyphId> + '_ {
        self.table.variants(glyph_id, axis).iter().copied()
    }

    fn glyph_parts(
        &self,
        glyph_id: GlyphId,
        axis: StretchAxis,
    ) -> impl Iterator<Item = GlyphPart> + '_ {
        self.table.scaled_parts(glyph_id, axis, self.scale)
    }

    fn min_connector_overlap(&self, _axis: StretchAxis) -> f32 {
        self.table.min_connector_overlap() as f32 * self.scale
    }

    fn ink_bounds(&self, glyph_id: GlyphId) -> InkBounds {
        let advance = self
            .glyph_metrics
            .advance_width(glyph_id)
            .unwrap_or_default();
        match self.glyph_metrics.bounds(glyph_id) {
            Some(bounds) => InkBounds::new(advance, bounds.y_max, -bounds.y_min),
            None => InkBounds::new(advance, 0.0, 0.0),
        }
    }

    fn italic_correction(&self, glyph_id: GlyphId) -> f32 {
        self.table.italic_correction(glyph_id).unwrap_or_default() as f32 * self.scale
    }

    fn assembly_italic_correction(&self, glyph_id: GlyphId, axis: StretchAxis) -> f32 {
        self.table
            .assembly(glyph_id, axis)
            .map(|assembly| assembly.italic_correction as f32 * self.scale)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{shape, GlyphAssembly, GlyphConstruction, GlyphPartRecord, Stretch};

    /// See test_data/README.md
    static PARENS: &[u8] = include_bytes!("../test_data/parens.ttf");

    fn table() -> MathGlyphTable {
        let mut table = MathGlyphTable::new(20);
        table.insert(
            GlyphId::new(1),
            StretchAxis::Vertical,
            GlyphConstruction::new(vec![GlyphId::new(1)]).with_assembly(
                GlyphAssembly::new(vec![
                    GlyphPartRecord::new(GlyphId::new(2), 0, 100, 300),
                    GlyphPartRecord::extender(GlyphId::new(3), 100, 100, 200),
                    GlyphPartRecord::new(GlyphId::new(4), 100, 0, 300),
                ])
                .with_italic_correction(10),
            ),
        );
        table
    }

    #[test]
    fn glyph_data_from_font() {
        let font = FontRef::new(PARENS).unwrap();
        let table = table();
        let math_font = MathFont::new(&font, Size::unscaled(), LocationRef::default(), &table);
        let paren = math_font.resolve_glyph('(');
        assert_eq!(paren, GlyphId::new(1));
        assert_eq!(math_font.resolve_glyph(')'), GlyphId::NOTDEF);
        assert_eq!(
            math_font.ink_bounds(paren),
            InkBounds::new(300.0, 800.0, 200.0)
        );
        assert_eq!(
            math_font.ink_bounds(GlyphId::new(3)),
            InkBounds::new(300.0, 200.0, 0.0)
        );
        // .notdef has no outline
        assert_eq!(
            math_font.ink_bounds(GlyphId::NOTDEF),
            InkBounds::new(500.0, 0.0, 0.0)
        );
        assert_eq!(math_font.min_connector_overlap(StretchAxis::Vertical), 20.0);
        assert_eq!(
            math_font.assembly_italic_correction(paren, StretchAxis::Vertical),
            10.0
        );
    }

    #[test]
    fn stretch_parenthesis() {
        let font = FontRef::new(PARENS).unwrap();
        let table = table();
        let math_font = MathFont::new(&font, Size::unscaled(), LocationRef::default(), &table);
        // The base glyph is 1000 units tall.
        let shaped = shape(&math_font, '(', StretchAxis::Vertical, 900.0);
        assert_eq!(shaped.stretch, Stretch::Variant);
        // 600 units of caps at an overlap of 20: (1660 - 600 + 20) / 180 = 6
        let shaped = shape(&math_font, '(', StretchAxis::Vertical, 1660.0);
        assert_eq!(
            shaped.stretch,
            Stretch::Assembly {
                repetition_count: 6,
                connector_overlap: 20.0,
            }
        );
        assert_eq!(shaped.glyphs.len(), 8);
        // 600 + 6 * 200 - 7 * 20
        assert_eq!(shaped.metrics.ascent, 1660.0);
        // The top part is the widest
        assert_eq!(shaped.metrics.advance, 320.0);
        assert_eq!(shaped.metrics.italic_correction, 10.0);
    }
}
