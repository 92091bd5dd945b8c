//! Glyph assembly parameters.
//!
//! See the `GlyphAssembly` table in the
//! [OpenType MATH](https://learn.microsoft.com/en-us/typography/opentype/spec/math#glyphassembly-table)
//! specification and the stretchy operator algorithm of
//! [MathML Core](https://w3c.github.io/mathml-core/#the-glyphassembly-table).

use alloc::vec::Vec;

#[cfg(feature = "libm")]
#[allow(unused_imports)]
use core_maths::CoreFloat;

use super::provider::GlyphPart;

/// Default and largest ceiling for the number of glyphs in a single
/// assembly.
///
/// This matches the number of glyphs that can be addressed in a shaped run.
/// Larger limits are clamped to this value.
pub const DEFAULT_MAX_GLYPHS: u32 = 65535;

/// Reasons for which a glyph assembly cannot be built.
#[derive(Clone, Debug, PartialEq)]
pub enum AssemblyError {
    /// The font has no parts for this glyph and axis.
    NoParts,
    /// None of the parts is an extender.
    NoExtenders,
    /// The connector lengths are shorter than the minimum overlap.
    InvalidOverlapRange { min: f32, max: f32 },
    /// Extenders do not add length when overlapped by the minimum amount.
    NonPositiveExtenderAdvance(f32),
    /// The computation produced no glyphs.
    EmptyAssembly,
    /// The parts that cannot be skipped already exceed the glyph limit.
    TooManyGlyphs { glyph_count: u32, max_glyphs: u32 },
    /// The parts overlap by more than their combined advance.
    NegativeStretchSize(f32),
}

impl std::fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AssemblyError::NoParts => write!(f, "The assembly has no parts"),
            AssemblyError::NoExtenders => write!(f, "The assembly has no extender parts"),
            AssemblyError::InvalidOverlapRange { min, max } => {
                write!(f, "Maximum connector overlap {max} is below the minimum {min}")
            }
            AssemblyError::NonPositiveExtenderAdvance(sum) => {
                write!(f, "Non overlapping extender advance {sum} is not positive")
            }
            AssemblyError::EmptyAssembly => write!(f, "The assembly contains no glyphs"),
            AssemblyError::TooManyGlyphs {
                glyph_count,
                max_glyphs,
            } => write!(f, "Assembly of {glyph_count} glyphs exceeds the limit of {max_glyphs}"),
            AssemblyError::NegativeStretchSize(size) => {
                write!(f, "Overlapping parts produce a negative size {size}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AssemblyError {}

/// Result of sizing a glyph assembly.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssemblyParameters {
    /// Overlap applied at every joint between consecutive parts.
    pub connector_overlap: f32,
    /// Number of times each extender is repeated.
    pub repetition_count: u32,
    /// Total number of glyphs in the assembly.
    pub glyph_count: u32,
    /// Size of the assembly along the stretch axis.
    pub stretch_size: f32,
    /// Parts in placement order, with extenders repeated.
    pub parts: Vec<GlyphPart>,
}

/// Sums over the part list, computed in a single pass.
#[derive(Copy, Clone, Debug)]
struct PartSummary {
    max_connector_overlap: f32,
    extender_count: u32,
    extender_advance_sum: f32,
    non_extender_count: u32,
    non_extender_advance_sum: f32,
}

impl PartSummary {
    fn new(parts: &[GlyphPart]) -> Self {
        let last = parts.len().saturating_sub(1);
        let init = PartSummary {
            max_connector_overlap: f32::INFINITY,
            extender_count: 0,
            extender_advance_sum: 0.0,
            non_extender_count: 0,
            non_extender_advance_sum: 0.0,
        };
        parts
            .iter()
            .enumerate()
            .fold(init, |mut acc, (i, part)| {
                if part.is_extender {
                    acc.extender_count += 1;
                    acc.extender_advance_sum += part.full_advance;
                } else {
                    acc.non_extender_count += 1;
                    acc.non_extender_advance_sum += part.full_advance;
                }
                // Extenders may be repeated, so both of their connectors
                // always meet another part.
                if i > 0 || part.is_extender {
                    acc.max_connector_overlap =
                        acc.max_connector_overlap.min(part.start_connector_length);
                }
                if i < last || part.is_extender {
                    acc.max_connector_overlap =
                        acc.max_connector_overlap.min(part.end_connector_length);
                }
                acc
            })
    }
}

/// Computes the parameters of an assembly of `parts` reaching `target_size`.
///
/// The number of extender repetitions is the smallest one for which the
/// assembly reaches `target_size` when overlapped by `min_connector_overlap`
/// at every joint, limited so that the assembly has at most `max_glyphs`
/// glyphs (never more than [`DEFAULT_MAX_GLYPHS`]). The connector overlap is then chosen to land on `target_size`,
/// within the range allowed by the font. As a result the assembly may be
/// smaller than `target_size` when the glyph limit is reached, or larger
/// when the overlap cannot grow enough.
///
/// Negative or NaN target sizes are treated as zero.
pub fn compute_assembly_parameters(
    parts: &[GlyphPart],
    min_connector_overlap: f32,
    target_size: f32,
    max_glyphs: u32,
) -> Result<AssemblyParameters, AssemblyError> {
    if parts.is_empty() {
        return Err(AssemblyError::NoParts);
    }
    // Also maps NaN to zero
    let target_size = target_size.max(0.0);
    let summary = PartSummary::new(parts);
    if summary.extender_count == 0 {
        return Err(AssemblyError::NoExtenders);
    }
    let max_connector_overlap = summary.max_connector_overlap;
    // Written so that a NaN overlap is rejected as well
    if !(max_connector_overlap >= min_connector_overlap) {
        return Err(AssemblyError::InvalidOverlapRange {
            min: min_connector_overlap,
            max: max_connector_overlap,
        });
    }
    let extender_non_overlapping_advance_sum =
        summary.extender_advance_sum - min_connector_overlap * summary.extender_count as f32;
    if !(extender_non_overlapping_advance_sum > 0.0) {
        return Err(AssemblyError::NonPositiveExtenderAdvance(
            extender_non_overlapping_advance_sum,
        ));
    }
    let required = (target_size - summary.non_extender_advance_sum
        + min_connector_overlap * (summary.non_extender_count as f32 - 1.0))
        / extender_non_overlapping_advance_sum;
    // Float to int casts saturate and map NaN to zero.
    let min_repetition_count = required.ceil().max(0.0) as u32;
    let max_glyphs = max_glyphs.min(DEFAULT_MAX_GLYPHS);
    if summary.non_extender_count > max_glyphs {
        return Err(AssemblyError::TooManyGlyphs {
            glyph_count: summary.non_extender_count,
            max_glyphs,
        });
    }
    let max_repetition_count =
        (max_glyphs - summary.non_extender_count) / summary.extender_count;
    let repetition_count = min_repetition_count.min(max_repetition_count);
    let glyph_count = summary.non_extender_count + repetition_count * summary.extender_count;
    if glyph_count == 0 {
        return Err(AssemblyError::EmptyAssembly);
    }
    let full_advance_sum = summary.non_extender_advance_sum
        + repetition_count as f32 * summary.extender_advance_sum;
    let connector_overlap = if glyph_count > 1 {
        let theoretical = (full_advance_sum - target_size) / (glyph_count - 1) as f32;
        theoretical.clamp(min_connector_overlap, max_connector_overlap)
    } else {
        max_connector_overlap
    };
    let stretch_size = full_advance_sum - connector_overlap * (glyph_count - 1) as f32;
    // Caps shorter than the minimum overlap with no extender between them
    if !(stretch_size >= 0.0) {
        return Err(AssemblyError::NegativeStretchSize(stretch_size));
    }
    let mut repeated = Vec::with_capacity(glyph_count as usize);
    for part in parts {
        if part.is_extender {
            repeated.extend(core::iter::repeat(*part).take(repetition_count as usize));
        } else {
            repeated.push(*part);
        }
    }
    log::trace!(
        "assembly: {glyph_count} glyphs, {repetition_count} repetitions, overlap {connector_overlap}, size {stretch_size} for target {target_size}"
    );
    Ok(AssemblyParameters {
        connector_overlap,
        repetition_count,
        glyph_count,
        stretch_size,
        parts: repeated,
    })
}
