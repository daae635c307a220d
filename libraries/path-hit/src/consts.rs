// Hit testing
/// Multiplier applied to the contour distance of a sub-path whose fill contains the query point, so filled hits win over equally distant stroke hits.
pub const FILL_DISTANCE_BIAS: f64 = 0.8;
/// Contour distance below which two filled candidates are considered tied and compared by area instead.
pub const AREA_TIE_THRESHOLD: f64 = 1.;
/// Stroke tolerance used by [`crate::HitTestOptions::default`].
pub const DEFAULT_HIT_TOLERANCE: f64 = 5.;

// Closure
/// Maximum distance between the first and last anchors of a sub-path that still counts as closed.
pub const CLOSURE_TOLERANCE: f64 = 1.;

// Flattening
/// Samples per curve when building the polygon used for fill testing.
pub const POLYGON_SAMPLES: usize = 10;
/// Samples per curve when measuring the distance from a point to a contour.
pub const DISTANCE_SAMPLES: usize = 50;

// Numerics
/// Squared-length threshold below which a vector is treated as zero.
pub const MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-12;
