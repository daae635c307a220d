use crate::consts::{AREA_TIE_THRESHOLD, CLOSURE_TOLERANCE, DEFAULT_HIT_TOLERANCE, DISTANCE_SAMPLES, FILL_DISTANCE_BIAS, POLYGON_SAMPLES};
use crate::polygon::FillRule;

/// The tunable constants behind hit testing. The defaults are the editor's established behavior; hosts may override any of them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct HitTestPolicy {
	/// Multiplier applied to the contour distance of a sub-path whose fill contains the point.
	pub fill_distance_bias: f64,
	/// Two inside candidates whose recorded distances differ by less than this are ordered by area, smallest first.
	pub area_tie_threshold: f64,
	/// Start and end anchors closer than this make a sub-path closed.
	pub closure_tolerance: f64,
	/// Samples per curve for the fill polygon.
	pub polygon_samples: usize,
	/// Samples per curve for contour distance.
	pub distance_samples: usize,
}

impl Default for HitTestPolicy {
	fn default() -> Self {
		Self {
			fill_distance_bias: FILL_DISTANCE_BIAS,
			area_tie_threshold: AREA_TIE_THRESHOLD,
			closure_tolerance: CLOSURE_TOLERANCE,
			polygon_samples: POLYGON_SAMPLES,
			distance_samples: DISTANCE_SAMPLES,
		}
	}
}

/// Per-query settings for [`crate::find_subpath_at_point_advanced`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct HitTestOptions {
	/// Candidates whose recorded distance is not strictly below this are discarded.
	pub tolerance: f64,
	pub fill_rule: FillRule,
	/// Consider the fill of closed sub-paths.
	pub include_fill: bool,
	/// Consider the outline of every sub-path.
	pub include_stroke: bool,
}

impl Default for HitTestOptions {
	fn default() -> Self {
		Self {
			tolerance: DEFAULT_HIT_TOLERANCE,
			fill_rule: FillRule::NonZero,
			include_fill: true,
			include_stroke: true,
		}
	}
}

impl HitTestOptions {
	/// Fill and stroke testing under the nonzero rule with the given tolerance.
	pub fn new(tolerance: f64) -> Self {
		Self { tolerance, ..Default::default() }
	}

	pub fn with_fill_rule(mut self, fill_rule: FillRule) -> Self {
		self.fill_rule = fill_rule;
		self
	}

	pub fn with_fill(mut self, include_fill: bool) -> Self {
		self.include_fill = include_fill;
		self
	}

	pub fn with_stroke(mut self, include_stroke: bool) -> Self {
		self.include_stroke = include_stroke;
		self
	}
}
