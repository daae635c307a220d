use crate::consts::{DISTANCE_SAMPLES, MAX_ABSOLUTE_DIFFERENCE};
use crate::path::SubPath;
use crate::resolve::{ResolvedSubPath, resolve_subpath};
use glam::DVec2;

/// Distance from `point` to the closest point on the straight segment from `start` to `end`.
pub fn point_to_segment_distance(point: DVec2, start: DVec2, end: DVec2) -> f64 {
	let direction = end - start;
	let length_squared = direction.length_squared();
	if length_squared < MAX_ABSOLUTE_DIFFERENCE {
		return point.distance(start);
	}

	let t = ((point - start).dot(direction) / length_squared).clamp(0., 1.);
	point.distance(start + direction * t)
}

impl ResolvedSubPath {
	/// Minimum distance from `point` to any drawn segment of this sub-path's outline, ignoring fill.
	/// Curves and arcs are measured at `samples + 1` points each. Returns infinity when nothing is drawn.
	pub fn distance_to_contour(&self, point: DVec2, samples: usize) -> f64 {
		self.segments().map(|segment| segment.distance_to_point(point, samples)).fold(f64::INFINITY, f64::min)
	}
}

/// Minimum distance from `point` to the outline of `subpath`, ignoring fill.
///
/// Pass the sibling sub-paths as `all_subpaths` so positions carried over from earlier sub-paths are honored.
/// Returns `f64::INFINITY` if the sub-path draws nothing (fewer than two resolvable points) or cannot be found among `all_subpaths`.
pub fn distance_to_contour(point: DVec2, subpath: &SubPath, all_subpaths: Option<&[SubPath]>) -> f64 {
	resolve_subpath(subpath, all_subpaths).map_or(f64::INFINITY, |resolved| resolved.distance_to_contour(point, DISTANCE_SAMPLES))
}
