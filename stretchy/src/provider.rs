//! Font data consumed by the shaper.

use super::{GlyphId, StretchAxis};

/// Ink extents of a single glyph.
///
/// `ascent` is the distance from the baseline to the top of the ink and
/// `descent` the distance from the baseline to the bottom of the ink,
/// positive when the ink extends below the baseline.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InkBounds {
    /// Advance width of the glyph.
    pub advance: f32,
    /// Height of the ink above the baseline.
    pub ascent: f32,
    /// Depth of the ink below the baseline.
    pub descent: f32,
}

impl InkBounds {
    pub fn new(advance: f32, ascent: f32, descent: f32) -> Self {
        Self {
            advance,
            ascent,
            descent,
        }
    }

    /// Returns the bounds multiplied by the given scale factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            advance: self.advance * factor,
            ascent: self.ascent * factor,
            descent: self.descent * factor,
        }
    }
}

/// One part of a glyph assembly, with lengths in the provider's unit space.
///
/// Lengths are measured along the stretch axis: left to right for
/// horizontal assemblies and bottom to top for vertical ones.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphPart {
    pub glyph_id: GlyphId,
    /// True if this part may be skipped or repeated.
    pub is_extender: bool,
    /// Length of the connector material at the start of the part.
    pub start_connector_length: f32,
    /// Length of the connector material at the end of the part.
    pub end_connector_length: f32,
    /// Full advance of the part along the stretch axis.
    pub full_advance: f32,
}

/// Read access to the glyph and math data of a font.
///
/// All lengths returned by a provider are expected to be in the same unit
/// space; converting from font design units is the provider's job.
pub trait MathGlyphProvider {
    /// Maps a character to the nominal glyph of the operator.
    ///
    /// This is total: unmapped characters resolve to some glyph, usually
    /// `.notdef`.
    fn resolve_glyph(&self, ch: char) -> GlyphId;

    /// Returns the pre-drawn variants of `glyph_id` along `axis`, smallest
    /// first.
    fn glyph_variants(
        &self,
        glyph_id: GlyphId,
        axis: StretchAxis,
    ) -> impl Iterator<Item = GlyphId> + '_;

    /// Returns the parts of the assembly for `glyph_id` along `axis`, in
    /// table order.
    fn glyph_parts(&self, glyph_id: GlyphId, axis: StretchAxis)
        -> impl Iterator<Item = GlyphPart> + '_;

    /// Returns the minimum overlap of connecting glyph parts along `axis`.
    fn min_connector_overlap(&self, axis: StretchAxis) -> f32;

    /// Returns the ink bounds of the given glyph.
    fn ink_bounds(&self, glyph_id: GlyphId) -> InkBounds;

    /// Returns the italic correction of the given glyph.
    fn italic_correction(&self, glyph_id: GlyphId) -> f32 {
        let _ = glyph_id;
        0.0
    }

    /// Returns the italic correction of the assembly for `glyph_id` along
    /// `axis`.
    fn assembly_italic_correction(&self, glyph_id: GlyphId, axis: StretchAxis) -> f32 {
        let _ = (glyph_id, axis);
        0.0
    }
}

impl<T: MathGlyphProvider> MathGlyphProvider for &T {
    fn resolve_glyph(&self, ch: char) -> GlyphId {
        (*self).resolve_glyph(ch)
    }

    fn glyph_variants(
        &self,
        glyph_id: GlyphId,
        axis: StretchAxis,
    ) -> impl Iterator<Item = GlyphId> + '_ {
        (*self).glyph_variants(glyph_id, axis)
    }

    fn glyph_parts(
        &self,
        glyph_id: GlyphId,
        axis: StretchAxis,
    ) -> impl Iterator<Item = GlyphPart> + '_ {
        (*self).glyph_parts(glyph_id, axis)
    }

    fn min_connector_overlap(&self, axis: StretchAxis) -> f32 {
        (*self).min_connector_overlap(axis)
    }

    fn ink_bounds(&self, glyph_id: GlyphId) -> InkBounds {
        (*self).ink_bounds(glyph_id)
    }

    fn italic_correction(&self, glyph_id: GlyphId) -> f32 {
        (*self).italic_correction(glyph_id)
    }

    fn assembly_italic_correction(&self, glyph_id: GlyphId, axis: StretchAxis) -> f32 {
        (*self).assembly_italic_correction(glyph_id, axis)
    }
}
