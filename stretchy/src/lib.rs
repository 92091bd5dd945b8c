//! Sizing of stretchy mathematical operators.
//!
//! Brackets, braces, radicals, arrows and over/under braces have to grow to
//! span the expression they decorate. OpenType math fonts support this in
//! two ways:
//!
//! * Glyph variants: a list of pre-drawn glyphs of increasing size along
//!   one axis. The first variant that is large enough is used as is.
//! * Glyph assemblies: a list of glyph parts, some of which are extenders
//!   that can be repeated any number of times. The parts are placed end to
//!   end with some overlap at each joint so that the whole construction
//!   reaches the requested size.
//!
//! This crate implements the decision between the two, and the computation
//! of the number of extender repetitions and the connector overlap of an
//! assembly. It does not parse fonts nor paint glyphs: the font data is
//! supplied through the [`MathGlyphProvider`] trait and the result is either
//! a [`Metrics`] value or a [`ShapedResult`] listing glyph placements.
//!
//! # Example
//!
//! ```
//! use stretchy::{
//!     GlyphAssembly, GlyphConstruction, GlyphId, GlyphPartRecord, InkBounds,
//!     MathGlyphTable, StretchAxis, SyntheticFont,
//! };
//!
//! let brace = GlyphId::new(1);
//! let (bottom, middle, top) = (GlyphId::new(2), GlyphId::new(3), GlyphId::new(4));
//! let mut table = MathGlyphTable::new(20);
//! table.insert(
//!     brace,
//!     StretchAxis::Vertical,
//!     GlyphConstruction::new(vec![]).with_assembly(GlyphAssembly::new(vec![
//!         GlyphPartRecord::new(bottom, 0, 100, 300),
//!         GlyphPartRecord::extender(middle, 100, 100, 200),
//!         GlyphPartRecord::new(top, 100, 0, 300),
//!     ])),
//! );
//! let font = SyntheticFont::new(1000, table)
//!     .with_glyph('{', brace, InkBounds::new(300.0, 700.0, 200.0))
//!     .with_glyph_bounds(bottom, InkBounds::new(300.0, 300.0, 0.0))
//!     .with_glyph_bounds(middle, InkBounds::new(300.0, 200.0, 0.0))
//!     .with_glyph_bounds(top, InkBounds::new(300.0, 300.0, 0.0));
//!
//! let shaped = stretchy::shape(&font, '{', StretchAxis::Vertical, 2000.0);
//! assert!(shaped.metrics.ascent + shaped.metrics.descent > 1999.9);
//! assert_eq!(shaped.glyphs.first().map(|glyph| glyph.glyph_id), Some(bottom));
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(not(any(feature = "libm", feature = "std")))]
compile_error!("Either feature \"std\" or \"libm\" must be enabled for this crate.");

#[cfg(not(any(test, feature = "std")))]
#[macro_use]
extern crate core as std;

#[macro_use]
extern crate alloc;

mod assembly;
mod axis;
mod font;
mod provider;
mod shaper;
mod synthetic;
mod table;

#[cfg(all(test, feature = "serde"))]
mod serde_test;

pub use assembly::{
    compute_assembly_parameters, AssemblyError, AssemblyParameters, DEFAULT_MAX_GLYPHS,
};
pub use axis::StretchAxis;
pub use font::MathFont;
pub use provider::{GlyphPart, InkBounds, MathGlyphProvider};
pub use shaper::{
    metrics, shape, Metrics, ShapedGlyph, ShapedResult, Stretch, StretchyOperatorShaper,
};
pub use synthetic::SyntheticFont;
pub use table::{
    GlyphAssembly, GlyphConstruction, GlyphPartFlags, GlyphPartRecord, MathGlyphTable,
};

/// Expose the font scaler used by [`MathFont`].
pub extern crate skrifa;

/// Type for a glyph identifier.
pub type GlyphId = skrifa::GlyphId;

/// Font size used to scale design unit values.
pub use skrifa::instance::Size;
