//! Binary mask brush engine.
//!
//! Turns pointer motion into stamps on a caller-owned `0`/`255` mask:
//! [`session`] tracks a live drag and yields spaced stamp positions,
//! [`stamp`] rasterizes them with exact integer circle tests, [`mask`]
//! validates and repairs the two-value invariant, and [`bounds`] reports the
//! rectangle a finished stroke touched.

pub mod bounds;
pub mod error;
pub mod mask;
pub mod preview;
pub mod session;
pub mod spacing;
pub mod stamp;
pub mod types;

pub use bounds::calculate_stroke_bounds;
pub use error::{BrushError, Result};
pub use mask::{MaskBuffer, enforce, mask_from_luma, mask_to_luma, validate};
pub use preview::{BrushPreview, brush_preview};
pub use session::{StrokeSession, continue_stroke, end_stroke, start_stroke};
pub use spacing::interpolate;
pub use stamp::{apply_path, apply_stroke, stamp};
pub use types::{BrushMode, BrushSettings, BrushStroke, Point, StampPosition, StrokeBounds};
