//! Stretch axis selection.

use super::{provider::InkBounds, shaper::Metrics};

/// Direction along which an operator grows.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StretchAxis {
    /// Inline direction: arrows, over and under braces.
    Horizontal,
    /// Block direction: brackets, braces, radicals.
    Vertical,
}

impl StretchAxis {
    /// Returns the extent of `bounds` along this axis.
    pub fn stretch_extent(self, bounds: &InkBounds) -> f32 {
        match self {
            Self::Horizontal => Horizontal::stretch_extent(bounds),
            Self::Vertical => Vertical::stretch_extent(bounds),
        }
    }

    /// Returns the extent of `bounds` across this axis.
    pub fn orthogonal_extent(self, bounds: &InkBounds) -> f32 {
        match self {
            Self::Horizontal => Horizontal::orthogonal_extent(bounds),
            Self::Vertical => Vertical::orthogonal_extent(bounds),
        }
    }
}

/// Geometry of one stretch axis.
///
/// Implemented by zero sized markers so the shaping code is monomorphized
/// per axis instead of branching on [`StretchAxis`] for every glyph.
pub(crate) trait AxisExtents {
    const AXIS: StretchAxis;

    fn stretch_extent(bounds: &InkBounds) -> f32;

    fn orthogonal_extent(bounds: &InkBounds) -> f32;

    /// Grows `acc` to cover the orthogonal extent of `bounds`, ignoring the
    /// extent of `bounds` along the axis.
    fn union_orthogonal(acc: &mut InkBounds, bounds: &InkBounds);

    /// Builds the metrics of a construction of `stretch_size` along the
    /// axis whose orthogonal extent is `orthogonal`.
    fn stretched_metrics(stretch_size: f32, orthogonal: &InkBounds) -> Metrics;
}

pub(crate) struct Horizontal;

pub(crate) struct Vertical;

impl AxisExtents for Horizontal {
    const AXIS: StretchAxis = StretchAxis::Horizontal;

    fn stretch_extent(bounds: &InkBounds) -> f32 {
        bounds.advance
    }

    fn orthogonal_extent(bounds: &InkBounds) -> f32 {
        bounds.ascent + bounds.descent
    }

    fn union_orthogonal(acc: &mut InkBounds, bounds: &InkBounds) {
        acc.ascent = acc.ascent.max(bounds.ascent);
        acc.descent = acc.descent.max(bounds.descent);
    }

    fn stretched_metrics(stretch_size: f32, orthogonal: &InkBounds) -> Metrics {
        Metrics {
            advance: stretch_size,
            ascent: orthogonal.ascent,
            descent: orthogonal.descent,
            italic_correction: 0.0,
        }
    }
}

impl AxisExtents for Vertical {
    const AXIS: StretchAxis = StretchAxis::Vertical;

    fn stretch_extent(bounds: &InkBounds) -> f32 {
        bounds.ascent + bounds.descent
    }

    fn orthogonal_extent(bounds: &InkBounds) -> f32 {
        bounds.advance
    }

    fn union_orthogonal(acc: &mut InkBounds, bounds: &InkBounds) {
        acc.advance = acc.advance.max(bounds.advance);
    }

    // Vertical assemblies are built upwards from the baseline.
    fn stretched_metrics(stretch_size: f32, orthogonal: &InkBounds) -> Metrics {
        Metrics {
            advance: orthogonal.advance,
            ascent: stretch_size,
            descent: 0.0,
            italic_correction: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extents() {
        let bounds = InkBounds::new(10.0, 7.0, 3.0);
        assert_eq!(StretchAxis::Horizontal.stretch_extent(&bounds), 10.0);
        assert_eq!(StretchAxis::Horizontal.orthogonal_extent(&bounds), 10.0);
        assert_eq!(StretchAxis::Vertical.stretch_extent(&bounds), 10.0);
        assert_eq!(StretchAxis::Vertical.orthogonal_extent(&bounds), 10.0);
        let bounds = InkBounds::new(4.0, 5.0, 1.0);
        assert_eq!(StretchAxis::Horizontal.stretch_extent(&bounds), 4.0);
        assert_eq!(StretchAxis::Horizontal.orthogonal_extent(&bounds), 6.0);
        assert_eq!(StretchAxis::Vertical.stretch_extent(&bounds), 6.0);
        assert_eq!(StretchAxis::Vertical.orthogonal_extent(&bounds), 4.0);
    }

    #[test]
    fn orthogonal_union_ignores_stretch_dimension() {
        let mut acc = InkBounds::new(0.0, 2.0, 1.0);
        Horizontal::union_orthogonal(&mut acc, &InkBounds::new(100.0, 5.0, 0.5));
        assert_eq!(acc, InkBounds::new(0.0, 5.0, 1.0));
        let mut acc = InkBounds::new(3.0, 0.0, 0.0);
        Vertical::union_orthogonal(&mut acc, &InkBounds::new(4.0, 100.0, 100.0));
        assert_eq!(acc, InkBounds::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn stretched_metrics() {
        let orthogonal = InkBounds::new(12.0, 8.0, 2.0);
        let h = Horizontal::stretched_metrics(40.0, &orthogonal);
        assert_eq!((h.advance, h.ascent, h.descent), (40.0, 8.0, 2.0));
        let v = Vertical::stretched_metrics(40.0, &orthogonal);
        assert_eq!((v.advance, v.ascent, v.descent), (12.0, 40.0, 0.0));
    }
}
