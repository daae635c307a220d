use crate::consts::{CLOSURE_TOLERANCE, POLYGON_SAMPLES};
use crate::path::SubPath;
use crate::resolve::{ResolvedPath, ResolvedSubPath, resolve_subpath};
use crate::policy::HitTestPolicy;
use glam::DVec2;

/// Algorithm for deciding which points a closed contour encloses: <https://developer.mozilla.org/en-US/docs/Web/SVG/Attribute/fill-rule>.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillRule {
	#[default]
	NonZero,
	EvenOdd,
}

/// Positive when `point` is left of the directed line from `a` to `b`, negative when right, zero when on it.
fn is_left(a: DVec2, b: DVec2, point: DVec2) -> f64 {
	(b - a).perp_dot(point - a)
}

fn edges(ring: &[DVec2]) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
	ring.iter().copied().zip(ring.iter().copied().cycle().skip(1))
}

/// Signed number of times the implicitly closed `ring` winds around `point`.
/// Edges are half-open in y so a ray through a vertex is counted once.
pub fn winding_number(point: DVec2, ring: &[DVec2]) -> i32 {
	if ring.len() < 3 {
		return 0;
	}

	let mut winding = 0;
	for (a, b) in edges(ring) {
		if a.y <= point.y {
			if b.y > point.y && is_left(a, b, point) > 0. {
				winding += 1;
			}
		} else if b.y <= point.y && is_left(a, b, point) < 0. {
			winding -= 1;
		}
	}
	winding
}

/// Number of edges of the implicitly closed `ring` crossed by a ray from `point` towards positive x.
pub fn crossing_count(point: DVec2, ring: &[DVec2]) -> usize {
	if ring.len() < 3 {
		return 0;
	}

	edges(ring)
		.filter(|&(a, b)| (a.y > point.y) != (b.y > point.y) && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x)
		.count()
}

/// Whether `ring` encloses `point` under `rule`. Rings with fewer than three points enclose nothing.
pub fn point_in_polygon(point: DVec2, ring: &[DVec2], rule: FillRule) -> bool {
	if ring.len() < 3 {
		return false;
	}

	match rule {
		FillRule::NonZero => winding_number(point, ring) != 0,
		FillRule::EvenOdd => crossing_count(point, ring) % 2 == 1,
	}
}

/// Unsigned area enclosed by `ring`, by the shoelace formula.
pub fn polygon_area(ring: &[DVec2]) -> f64 {
	if ring.len() < 3 {
		return 0.;
	}

	(edges(ring).map(|(a, b)| a.perp_dot(b)).sum::<f64>() / 2.).abs()
}

impl ResolvedSubPath {
	/// The fill polygon: straight commands contribute their anchor, curves and arcs `samples` flattened points each (their start is already in the ring).
	/// Commands without a coordinate contribute nothing.
	pub fn polygon(&self, samples: usize) -> Vec<DVec2> {
		let mut ring = Vec::with_capacity(self.commands.len());
		for command in &self.commands {
			let Some(anchor) = command.anchor else { continue };
			match command.segment {
				Some(segment) if !segment.is_straight() => ring.extend(segment.flatten(samples).into_iter().skip(1)),
				_ => ring.push(anchor),
			}
		}
		ring
	}

	/// Whether the fill of this sub-path contains `point`. Open sub-paths have no fill.
	pub fn fill_contains(&self, point: DVec2, rule: FillRule, policy: &HitTestPolicy) -> bool {
		self.is_closed(policy.closure_tolerance) && point_in_polygon(point, &self.polygon(policy.polygon_samples), rule)
	}
}

impl ResolvedPath<'_> {
	/// Whether the combined fill of every closed sub-path contains `point`. Windings of overlapping sub-paths accumulate,
	/// so nested sub-paths wound in the same direction stay filled under the nonzero rule and cut a hole under even-odd.
	pub fn contains_point(&self, point: DVec2, rule: FillRule, policy: &HitTestPolicy) -> bool {
		let rings = self.subpaths().iter().filter(|subpath| subpath.is_closed(policy.closure_tolerance)).map(|subpath| subpath.polygon(policy.polygon_samples));

		match rule {
			FillRule::NonZero => rings.map(|ring| winding_number(point, &ring)).sum::<i32>() != 0,
			FillRule::EvenOdd => rings.map(|ring| crossing_count(point, &ring)).sum::<usize>() % 2 == 1,
		}
	}
}

/// The fill polygon of `subpath`, flattening curves at the default polygon sample count.
pub fn subpath_polygon(subpath: &SubPath, all_subpaths: Option<&[SubPath]>) -> Vec<DVec2> {
	resolve_subpath(subpath, all_subpaths).map(|resolved| resolved.polygon(POLYGON_SAMPLES)).unwrap_or_default()
}

/// Whether `point` lies inside the fill of `subpath` on its own. Open sub-paths never contain a point.
pub fn subpath_contains_point(subpath: &SubPath, all_subpaths: Option<&[SubPath]>, point: DVec2, rule: FillRule) -> bool {
	resolve_subpath(subpath, all_subpaths).is_some_and(|resolved| resolved.is_closed(CLOSURE_TOLERANCE) && point_in_polygon(point, &resolved.polygon(POLYGON_SAMPLES), rule))
}
