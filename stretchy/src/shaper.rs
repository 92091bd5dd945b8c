//! Stretchy operator shaping.
//!
//! The entry points select a rendering for an operator in three steps:
//!
//! 1. The first glyph variant that is at least as large as the target size.
//! 2. Otherwise, a glyph assembly sized with [`compute_assembly_parameters`].
//! 3. Otherwise, the base glyph itself.
//!
//! None of these steps fail. When the font cannot reach the target size,
//! the result is simply smaller than requested and callers that care have
//! to compare the returned size with the target.

use alloc::vec::Vec;

use super::{
    assembly::{compute_assembly_parameters, AssemblyParameters, DEFAULT_MAX_GLYPHS},
    axis::{AxisExtents, Horizontal, Vertical},
    provider::{InkBounds, MathGlyphProvider},
    GlyphId, StretchAxis,
};

/// Overall metrics of a stretched operator.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// Advance width.
    pub advance: f32,
    /// Height above the baseline.
    pub ascent: f32,
    /// Depth below the baseline.
    pub descent: f32,
    /// Italic correction of the glyph or assembly, used to position
    /// scripts.
    pub italic_correction: f32,
}

impl Metrics {
    /// Returns the size of these metrics along `axis`.
    ///
    /// Compare this to the requested target size to detect operators that
    /// could not be stretched far enough.
    pub fn stretch_extent(&self, axis: StretchAxis) -> f32 {
        axis.stretch_extent(&InkBounds::new(self.advance, self.ascent, self.descent))
    }

    fn from_bounds(bounds: InkBounds, italic_correction: f32) -> Self {
        Self {
            advance: bounds.advance,
            ascent: bounds.ascent,
            descent: bounds.descent,
            italic_correction,
        }
    }
}

/// How a shaped operator was produced.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stretch {
    /// The base glyph, unchanged.
    Base,
    /// A pre-drawn glyph variant.
    Variant,
    /// A glyph assembly.
    Assembly {
        repetition_count: u32,
        connector_overlap: f32,
    },
}

/// A glyph placed along the stretch axis.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapedGlyph {
    pub glyph_id: GlyphId,
    /// Offset from the start of the operator along the stretch axis: from
    /// the left edge for horizontal operators and from the bottom for
    /// vertical ones.
    pub position: f32,
}

/// Glyphs of a stretched operator along with its metrics.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapedResult {
    pub axis: StretchAxis,
    pub stretch: Stretch,
    pub metrics: Metrics,
    pub glyphs: Vec<ShapedGlyph>,
}

/// Shapes one operator along one axis.
///
/// The shaper only holds configuration. Font data is supplied on each call
/// so the same shaper can be used with different fonts and sizes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct StretchyOperatorShaper {
    character: char,
    axis: StretchAxis,
    max_glyphs: u32,
}

/// Rendering chosen for a target size.
enum Selection {
    Base(GlyphId),
    Variant(GlyphId),
    Assembly(GlyphId, AssemblyParameters),
}

impl StretchyOperatorShaper {
    /// Creates a shaper for `character` stretched along `axis`, limited to
    /// [`DEFAULT_MAX_GLYPHS`] glyphs per assembly.
    pub fn new(character: char, axis: StretchAxis) -> Self {
        Self {
            character,
            axis,
            max_glyphs: DEFAULT_MAX_GLYPHS,
        }
    }

    /// Sets the maximum number of glyphs in an assembly.
    ///
    /// Assemblies that would need more glyphs to reach the target size are
    /// left short. The limit is clamped to [`DEFAULT_MAX_GLYPHS`].
    pub fn with_max_glyphs(mut self, max_glyphs: u32) -> Self {
        self.max_glyphs = max_glyphs.min(DEFAULT_MAX_GLYPHS);
        self
    }

    /// Returns the character being stretched.
    pub fn character(&self) -> char {
        self.character
    }

    /// Returns the axis along which the character is stretched.
    pub fn axis(&self) -> StretchAxis {
        self.axis
    }

    /// Returns the maximum number of glyphs in an assembly.
    pub fn max_glyphs(&self) -> u32 {
        self.max_glyphs
    }

    /// Returns the metrics of the operator stretched to `target_size`.
    pub fn metrics(&self, provider: &impl MathGlyphProvider, target_size: f32) -> Metrics {
        match self.axis {
            StretchAxis::Horizontal => self.metrics_along::<Horizontal>(provider, target_size),
            StretchAxis::Vertical => self.metrics_along::<Vertical>(provider, target_size),
        }
    }

    /// Returns the glyphs and metrics of the operator stretched to
    /// `target_size`.
    pub fn shape(&self, provider: &impl MathGlyphProvider, target_size: f32) -> ShapedResult {
        match self.axis {
            StretchAxis::Horizontal => self.shape_along::<Horizontal>(provider, target_size),
            StretchAxis::Vertical => self.shape_along::<Vertical>(provider, target_size),
        }
    }

    fn select<A: AxisExtents>(
        &self,
        provider: &impl MathGlyphProvider,
        target_size: f32,
    ) -> Selection {
        let base = provider.resolve_glyph(self.character);
        // Variants are trusted to be sorted by size.
        for variant in provider.glyph_variants(base, A::AXIS) {
            let size = A::stretch_extent(&provider.ink_bounds(variant));
            if size >= target_size {
                log::trace!(
                    "{:?} along {:?}: variant {variant:?} of size {size} for target {target_size}",
                    self.character,
                    A::AXIS
                );
                return Selection::Variant(variant);
            }
        }
        let parts = provider.glyph_parts(base, A::AXIS).collect::<Vec<_>>();
        match compute_assembly_parameters(
            &parts,
            provider.min_connector_overlap(A::AXIS),
            target_size,
            self.max_glyphs,
        ) {
            Ok(params) => Selection::Assembly(base, params),
            Err(e) => {
                log::debug!(
                    "{:?} along {:?}: using base glyph {base:?}: {e}",
                    self.character,
                    A::AXIS
                );
                Selection::Base(base)
            }
        }
    }

    fn metrics_along<A: AxisExtents>(
        &self,
        provider: &impl MathGlyphProvider,
        target_size: f32,
    ) -> Metrics {
        match self.select::<A>(provider, target_size) {
            Selection::Base(glyph_id) | Selection::Variant(glyph_id) => Metrics::from_bounds(
                provider.ink_bounds(glyph_id),
                provider.italic_correction(glyph_id),
            ),
            Selection::Assembly(base, params) => {
                Self::assembly_metrics::<A>(provider, base, &params)
            }
        }
    }

    fn shape_along<A: AxisExtents>(
        &self,
        provider: &impl MathGlyphProvider,
        target_size: f32,
    ) -> ShapedResult {
        let (stretch, glyphs, metrics) = match self.select::<A>(provider, target_size) {
            Selection::Base(glyph_id) => (
                Stretch::Base,
                vec![ShapedGlyph {
                    glyph_id,
                    position: 0.0,
                }],
                Metrics::from_bounds(
                    provider.ink_bounds(glyph_id),
                    provider.italic_correction(glyph_id),
                ),
            ),
            Selection::Variant(glyph_id) => (
                Stretch::Variant,
                vec![ShapedGlyph {
                    glyph_id,
                    position: 0.0,
                }],
                Metrics::from_bounds(
                    provider.ink_bounds(glyph_id),
                    provider.italic_correction(glyph_id),
                ),
            ),
            Selection::Assembly(base, params) => {
                let mut position = 0.0;
                let glyphs = params
                    .parts
                    .iter()
                    .map(|part| {
                        let glyph = ShapedGlyph {
                            glyph_id: part.glyph_id,
                            position,
                        };
                        position += part.full_advance - params.connector_overlap;
                        glyph
                    })
                    .collect();
                (
                    Stretch::Assembly {
                        repetition_count: params.repetition_count,
                        connector_overlap: params.connector_overlap,
                    },
                    glyphs,
                    Self::assembly_metrics::<A>(provider, base, &params),
                )
            }
        };
        ShapedResult {
            axis: A::AXIS,
            stretch,
            metrics,
            glyphs,
        }
    }

    fn assembly_metrics<A: AxisExtents>(
        provider: &impl MathGlyphProvider,
        base: GlyphId,
        params: &AssemblyParameters,
    ) -> Metrics {
        let Some(first) = params.parts.first() else {
            return Metrics::default();
        };
        let mut orthogonal = provider.ink_bounds(first.glyph_id);
        let mut last_glyph = first.glyph_id;
        for part in &params.parts[1..] {
            // Repeated extenders are adjacent and add nothing to the union.
            if part.glyph_id == last_glyph {
                continue;
            }
            last_glyph = part.glyph_id;
            A::union_orthogonal(&mut orthogonal, &provider.ink_bounds(part.glyph_id));
        }
        Metrics {
            italic_correction: provider.assembly_italic_correction(base, A::AXIS),
            ..A::stretched_metrics(params.stretch_size, &orthogonal)
        }
    }
}

/// Returns the metrics of `character` stretched to `target_size` along
/// `axis`, using the default glyph limit.
pub fn metrics(
    provider: &impl MathGlyphProvider,
    character: char,
    axis: StretchAxis,
    target_size: f32,
) -> Metrics {
    StretchyOperatorShaper::new(character, axis).metrics(provider, target_size)
}

/// Returns the glyphs and metrics of `character` stretched to `target_size`
/// along `axis`, using the default glyph limit.
pub fn shape(
    provider: &impl MathGlyphProvider,
    character: char,
    axis: StretchAxis,
    target_size: f32,
) -> ShapedResult {
    StretchyOperatorShaper::new(character, axis).shape(provider, target_size)
}
