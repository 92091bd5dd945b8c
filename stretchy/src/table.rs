//! Glyph construction data in font design units.
//!
//! These types mirror the `MathVariants` subtable of the
//! [OpenType MATH](https://learn.microsoft.com/en-us/typography/opentype/spec/math#mathvariants-table)
//! table. They hold already decoded values and are scaled to the unit space
//! of a [`MathGlyphProvider`](crate::MathGlyphProvider) on access.

use alloc::{collections::BTreeMap, vec::Vec};

use super::{provider::GlyphPart, GlyphId, StretchAxis};

/// [Glyph Part flags](https://learn.microsoft.com/en-gb/typography/opentype/spec/math#glyphassembly-table).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphPartFlags {
    bits: u16,
}

impl GlyphPartFlags {
    /// Extender; this part can be skipped or repeated
    pub const EXTENDER_FLAG: Self = Self { bits: 0x0001 };

    /// Returns an empty set of flags.
    #[inline]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Returns the raw value of the flags currently stored.
    #[inline]
    pub const fn bits(&self) -> u16 {
        self.bits
    }

    /// Convert from underlying bit representation, dropping any bits
    /// that do not correspond to flags.
    #[inline]
    pub const fn from_bits_truncate(bits: u16) -> Self {
        Self {
            bits: bits & Self::EXTENDER_FLAG.bits,
        }
    }

    /// Returns `true` if all of the flags in `other` are contained within `self`.
    #[inline]
    pub const fn contains(&self, other: Self) -> bool {
        (self.bits & other.bits) == other.bits
    }
}

impl core::ops::BitOr for GlyphPartFlags {
    type Output = Self;

    #[inline]
    fn bitor(self, other: GlyphPartFlags) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }
}

/// A [GlyphPart](https://learn.microsoft.com/en-gb/typography/opentype/spec/math#glyphassembly-table)
/// record.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphPartRecord {
    /// Glyph ID of the part
    pub glyph_id: GlyphId,
    /// Advance width / height, in design units, of the straight bar connector
    /// material at the start of the glyph in the direction of the extension
    pub start_connector_length: u16,
    /// Advance width / height, in design units, of the straight bar connector
    /// material at the end of the glyph in the direction of the extension
    pub end_connector_length: u16,
    /// Full advance width/height for this part in the direction of the
    /// extension, in design units
    pub full_advance: u16,
    /// Part qualifiers
    pub part_flags: GlyphPartFlags,
}

impl GlyphPartRecord {
    /// Creates a part that appears exactly once in an assembly.
    pub fn new(
        glyph_id: GlyphId,
        start_connector_length: u16,
        end_connector_length: u16,
        full_advance: u16,
    ) -> Self {
        Self {
            glyph_id,
            start_connector_length,
            end_connector_length,
            full_advance,
            part_flags: GlyphPartFlags::empty(),
        }
    }

    /// Creates an extender part.
    pub fn extender(
        glyph_id: GlyphId,
        start_connector_length: u16,
        end_connector_length: u16,
        full_advance: u16,
    ) -> Self {
        Self {
            part_flags: GlyphPartFlags::EXTENDER_FLAG,
            ..Self::new(
                glyph_id,
                start_connector_length,
                end_connector_length,
                full_advance,
            )
        }
    }

    pub fn is_extender(&self) -> bool {
        self.part_flags.contains(GlyphPartFlags::EXTENDER_FLAG)
    }

    /// Converts the record to a part with lengths multiplied by `scale`.
    pub fn to_part(&self, scale: f32) -> GlyphPart {
        GlyphPart {
            glyph_id: self.glyph_id,
            is_extender: self.is_extender(),
            start_connector_length: self.start_connector_length as f32 * scale,
            end_connector_length: self.end_connector_length as f32 * scale,
            full_advance: self.full_advance as f32 * scale,
        }
    }
}

/// The [GlyphAssembly](https://learn.microsoft.com/en-gb/typography/opentype/spec/math#glyphassembly-table)
/// table.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphAssembly {
    /// Italic correction value for the assembly, in design units
    pub italic_correction: i16,
    /// Parts from left to right (for assemblies that extend horizontally)
    /// or bottom to top (for assemblies that extend vertically)
    pub parts: Vec<GlyphPartRecord>,
}

impl GlyphAssembly {
    pub fn new(parts: Vec<GlyphPartRecord>) -> Self {
        Self {
            italic_correction: 0,
            parts,
        }
    }

    pub fn with_italic_correction(mut self, italic_correction: i16) -> Self {
        self.italic_correction = italic_correction;
        self
    }
}

/// The [MathGlyphConstruction](https://learn.microsoft.com/en-gb/typography/opentype/spec/math#mathglyphconstruction-table)
/// table.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphConstruction {
    /// Growing variants, smallest first
    pub variants: Vec<GlyphId>,
    pub assembly: Option<GlyphAssembly>,
}

impl GlyphConstruction {
    pub fn new(variants: Vec<GlyphId>) -> Self {
        Self {
            variants,
            assembly: None,
        }
    }

    pub fn with_assembly(mut self, assembly: GlyphAssembly) -> Self {
        self.assembly = Some(assembly);
        self
    }
}

/// Glyph constructions and the related constants of a math font.
#[derive(Clone, Default, Debug)]
pub struct MathGlyphTable {
    min_connector_overlap: u16,
    constructions: BTreeMap<(GlyphId, StretchAxis), GlyphConstruction>,
    italic_corrections: BTreeMap<GlyphId, i16>,
}

impl MathGlyphTable {
    /// Creates an empty table with the given `MinConnectorOverlap` constant.
    pub fn new(min_connector_overlap: u16) -> Self {
        Self {
            min_connector_overlap,
            ..Default::default()
        }
    }

    /// Minimum overlap of connecting glyphs during glyph construction, in
    /// design units.
    pub fn min_connector_overlap(&self) -> u16 {
        self.min_connector_overlap
    }

    /// Sets the construction of `glyph_id` along `axis`, returning the
    /// previous one.
    pub fn insert(
        &mut self,
        glyph_id: GlyphId,
        axis: StretchAxis,
        construction: GlyphConstruction,
    ) -> Option<GlyphConstruction> {
        self.constructions.insert((glyph_id, axis), construction)
    }

    pub fn construction(&self, glyph_id: GlyphId, axis: StretchAxis) -> Option<&GlyphConstruction> {
        self.constructions.get(&(glyph_id, axis))
    }

    /// Returns the growing variants of `glyph_id` along `axis`.
    pub fn variants(&self, glyph_id: GlyphId, axis: StretchAxis) -> &[GlyphId] {
        self.construction(glyph_id, axis)
            .map(|construction| construction.variants.as_slice())
            .unwrap_or_default()
    }

    pub fn assembly(&self, glyph_id: GlyphId, axis: StretchAxis) -> Option<&GlyphAssembly> {
        self.construction(glyph_id, axis)?.assembly.as_ref()
    }

    /// Returns the assembly parts of `glyph_id` along `axis`.
    pub fn parts(&self, glyph_id: GlyphId, axis: StretchAxis) -> &[GlyphPartRecord] {
        self.assembly(glyph_id, axis)
            .map(|assembly| assembly.parts.as_slice())
            .unwrap_or_default()
    }

    /// Sets the `MathItalicsCorrectionInfo` value of a glyph.
    pub fn set_italic_correction(&mut self, glyph_id: GlyphId, italic_correction: i16) {
        self.italic_corrections.insert(glyph_id, italic_correction);
    }

    pub fn italic_correction(&self, glyph_id: GlyphId) -> Option<i16> {
        self.italic_corrections.get(&glyph_id).copied()
    }

    /// Returns the assembly parts of `glyph_id` along `axis` with lengths
    /// multiplied by `scale`.
    pub(crate) fn scaled_parts(
        &self,
        glyph_id: GlyphId,
        axis: StretchAxis,
        scale: f32,
    ) -> impl Iterator<Item = GlyphPart> + '_ {
        self.parts(glyph_id, axis)
            .iter()
            .map(move |record| record.to_part(scale))
    }
}
