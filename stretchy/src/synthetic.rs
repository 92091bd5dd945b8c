//! A math font that lives entirely in memory.

use alloc::collections::BTreeMap;

use super::{
    provider::{GlyphPart, InkBounds, MathGlyphProvider},
    table::MathGlyphTable,
    GlyphId, Size, StretchAxis,
};

/// Math font built from explicit glyph data.
///
/// Glyph bounds and construction data are given in design units and are
/// scaled according to the size selected with [`with_size`](Self::with_size).
/// Characters without a mapping resolve to `.notdef` and glyphs without
/// bounds are empty.
#[derive(Clone, Debug)]
pub struct SyntheticFont {
    units_per_em: u16,
    size: Size,
    charmap: BTreeMap<char, GlyphId>,
    bounds: BTreeMap<GlyphId, InkBounds>,
    table: MathGlyphTable,
}

impl SyntheticFont {
    /// Creates an unscaled font with the given construction table.
    pub fn new(units_per_em: u16, table: MathGlyphTable) -> Self {
        Self {
            units_per_em,
            size: Size::unscaled(),
            charmap: BTreeMap::new(),
            bounds: BTreeMap::new(),
            table,
        }
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Maps `ch` to `glyph_id` and sets the bounds of the glyph.
    pub fn with_glyph(mut self, ch: char, glyph_id: GlyphId, bounds: InkBounds) -> Self {
        self.charmap.insert(ch, glyph_id);
        self.bounds.insert(glyph_id, bounds);
        self
    }

    /// Sets the bounds of an unmapped glyph such as a variant or a part.
    pub fn with_glyph_bounds(mut self, glyph_id: GlyphId, bounds: InkBounds) -> Self {
        self.bounds.insert(glyph_id, bounds);
        self
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    pub fn table(&self) -> &MathGlyphTable {
        &self.table
    }

    fn scale(&self) -> f32 {
        self.size.linear_scale(self.units_per_em)
    }
}

impl MathGlyphProvider for SyntheticFont {
    fn resolve_glyph(&self, ch: char) -> GlyphId {
        self.charmap.get(&ch).copied().unwrap_or(GlyphId::NOTDEF)
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
        self.table.scaled_parts(glyph_id, axis, self.scale())
    }

    fn min_connector_overlap(&self, _axis: StretchAxis) -> f32 {
        self.table.min_connector_overlap() as f32 * self.scale()
    }

    fn ink_bounds(&self, glyph_id: GlyphId) -> InkBounds {
        self.bounds
            .get(&glyph_id)
            .copied()
            .unwrap_or_default()
            .scale(self.scale())
    }

    fn italic_correction(&self, glyph_id: GlyphId) -> f32 {
        self.table.italic_correction(glyph_id).unwrap_or_default() as f32 * self.scale()
    }

    fn assembly_italic_correction(&self, glyph_id: GlyphId, axis: StretchAxis) -> f32 {
        self.table
            .assembly(glyph_id, axis)
            .map(|assembly| assembly.italic_correction as f32 * self.scale())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GlyphAssembly, GlyphConstruction, GlyphPartRecord};

    fn font() -> SyntheticFont {
        let mut table = MathGlyphTable::new(50);
        table.insert(
            GlyphId::new(1),
            StretchAxis::Horizontal,
            GlyphConstruction::new(vec![GlyphId::new(2)]).with_assembly(
                GlyphAssembly::new(vec![
                    GlyphPartRecord::new(GlyphId::new(3), 0, 100, 400),
                    GlyphPartRecord::extender(GlyphId::new(4), 100, 100, 200),
                ])
                .with_italic_correction(30),
            ),
        );
        table.set_italic_correction(GlyphId::new(2), 20);
        SyntheticFont::new(1000, table)
            .with_glyph('\u{2192}', GlyphId::new(1), InkBounds::new(500.0, 300.0, -200.0))
            .with_glyph_bounds(GlyphId::new(2), InkBounds::new(800.0, 300.0, -200.0))
    }

    #[test]
    fn unscaled() {
        let font = font();
        assert_eq!(font.resolve_glyph('\u{2192}'), GlyphId::new(1));
        assert_eq!(font.resolve_glyph('x'), GlyphId::NOTDEF);
        assert_eq!(
            font.ink_bounds(GlyphId::new(2)),
            InkBounds::new(800.0, 300.0, -200.0)
        );
        assert_eq!(font.ink_bounds(GlyphId::new(99)), InkBounds::default());
        assert_eq!(font.min_connector_overlap(StretchAxis::Vertical), 50.0);
        assert_eq!(font.italic_correction(GlyphId::new(2)), 20.0);
        assert_eq!(font.italic_correction(GlyphId::new(1)), 0.0);
        assert_eq!(
            font.assembly_italic_correction(GlyphId::new(1), StretchAxis::Horizontal),
            30.0
        );
        assert_eq!(
            font.assembly_italic_correction(GlyphId::new(1), StretchAxis::Vertical),
            0.0
        );
        assert_eq!(
            font.glyph_variants(GlyphId::new(1), StretchAxis::Horizontal)
                .collect::<Vec<_>>(),
            [GlyphId::new(2)]
        );
        assert_eq!(
            font.glyph_variants(GlyphId::new(1), StretchAxis::Vertical)
                .count(),
            0
        );
    }

    #[test]
    fn scaled() {
        let font = font().with_size(Size::new(2000.0));
        assert_eq!(
            font.ink_bounds(GlyphId::new(2)),
            InkBounds::new(1600.0, 600.0, -400.0)
        );
        assert_eq!(font.min_connector_overlap(StretchAxis::Horizontal), 100.0);
        let advances = font
            .glyph_parts(GlyphId::new(1), StretchAxis::Horizontal)
            .map(|part| part.full_advance)
            .collect::<Vec<_>>();
        assert_eq!(advances, [800.0, 400.0]);
        assert_eq!(font.italic_correction(GlyphId::new(2)), 40.0);
    }
}
