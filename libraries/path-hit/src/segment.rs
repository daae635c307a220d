use crate::consts::MAX_ABSOLUTE_DIFFERENCE;
use crate::distance::point_to_segment_distance;
use glam::{DMat2, DVec2};
use std::f64::consts::{PI, TAU};

/// A drawn piece of a sub-path in absolute coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
	Line(DVec2, DVec2),
	Cubic(DVec2, DVec2, DVec2, DVec2),
	Quadratic(DVec2, DVec2, DVec2),
	/// Start, `rx`, `ry`, x-axis rotation in degrees, large-arc flag, sweep flag, end.
	Arc(DVec2, f64, f64, f64, bool, bool, DVec2),
}

/// Center form of an elliptical arc. All angles are in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcCenterParameterization {
	pub center: DVec2,
	pub theta1: f64,
	pub delta_theta: f64,
	pub rx: f64,
	pub ry: f64,
	pub phi: f64,
}

impl ArcCenterParameterization {
	/// Point on the arc at `t` in `[0, 1]`, where 0 is the start and 1 the end of the angular span.
	pub fn point_at(&self, t: f64) -> DVec2 {
		let theta = self.theta1 + t * self.delta_theta;
		DMat2::from_angle(self.phi) * DVec2::new(self.rx * theta.cos(), self.ry * theta.sin()) + self.center
	}
}

/// Mirrors `control_point` through `point`.
pub fn reflect_control_point(point: DVec2, control_point: DVec2) -> DVec2 {
	point * 2. - control_point
}

/// Signed angle from `u` to `v`.
fn vector_angle(u: DVec2, v: DVec2) -> f64 {
	let sign = u.perp_dot(v);

	if sign.abs() < MAX_ABSOLUTE_DIFFERENCE && (u + v).length_squared() < MAX_ABSOLUTE_DIFFERENCE * MAX_ABSOLUTE_DIFFERENCE {
		return PI;
	}

	let cosine = (u.dot(v) / (u.length() * v.length())).clamp(-1., 1.);
	let angle = cosine.acos();
	if sign < 0. { -angle } else { angle }
}

/// Converts an endpoint-parameterized elliptical arc to center form.
///
/// Returns `None` for the degenerate cases where the arc should be drawn as a straight line: a zero radius or coincident endpoints.
/// Radii too small to span the chord are scaled up uniformly until they just fit.
pub fn arc_segment_to_center(start: DVec2, rx: f64, ry: f64, x_axis_rotation: f64, large_arc: bool, sweep: bool, end: DVec2) -> Option<ArcCenterParameterization> {
	if rx == 0. || ry == 0. || start.distance_squared(end) < MAX_ABSOLUTE_DIFFERENCE {
		return None;
	}

	let phi = x_axis_rotation.to_radians();
	let rotation_matrix = DMat2::from_angle(-phi);
	let xy1_prime = rotation_matrix * (start - end) * 0.5;
	let x1_prime2 = xy1_prime.x * xy1_prime.x;
	let y1_prime2 = xy1_prime.y * xy1_prime.y;

	let mut rx = rx.abs();
	let mut ry = ry.abs();
	let lambda = x1_prime2 / (rx * rx) + y1_prime2 / (ry * ry);
	if lambda > 1. {
		let lambda_sqrt = lambda.sqrt();
		rx *= lambda_sqrt;
		ry *= lambda_sqrt;
	}
	let rx2 = rx * rx;
	let ry2 = ry * ry;

	let sign = if large_arc == sweep { -1. } else { 1. };
	let numerator = rx2 * ry2 - rx2 * y1_prime2 - ry2 * x1_prime2;
	let denominator = rx2 * y1_prime2 + ry2 * x1_prime2;
	// Rounding after the radius scale-up can leave the numerator a hair below zero
	let multiplier = (numerator / denominator).max(0.).sqrt();
	let center_prime = DVec2::new(sign * multiplier * (rx * xy1_prime.y) / ry, sign * multiplier * (-ry * xy1_prime.x) / rx);

	let center = DMat2::from_angle(phi) * center_prime + (start + end) * 0.5;

	let vec1 = DVec2::new((xy1_prime.x - center_prime.x) / rx, (xy1_prime.y - center_prime.y) / ry);
	let vec2 = DVec2::new((-xy1_prime.x - center_prime.x) / rx, (-xy1_prime.y - center_prime.y) / ry);
	let theta1 = vector_angle(DVec2::X, vec1);
	let mut delta_theta = vector_angle(vec1, vec2);

	if !sweep && delta_theta > 0. {
		delta_theta -= TAU;
	} else if sweep && delta_theta < 0. {
		delta_theta += TAU;
	}

	Some(ArcCenterParameterization {
		center,
		theta1,
		delta_theta,
		rx,
		ry,
		phi,
	})
}

fn cubic_bernstein(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
	let mt = 1. - t;
	p0 * (mt * mt * mt) + p1 * (3. * mt * mt * t) + p2 * (3. * mt * t * t) + p3 * (t * t * t)
}

fn quadratic_bernstein(p0: DVec2, p1: DVec2, p2: DVec2, t: f64) -> DVec2 {
	let mt = 1. - t;
	p0 * (mt * mt) + p1 * (2. * mt * t) + p2 * (t * t)
}

impl PathSegment {
	pub fn start(&self) -> DVec2 {
		match *self {
			PathSegment::Line(start, _) | PathSegment::Cubic(start, ..) | PathSegment::Quadratic(start, ..) | PathSegment::Arc(start, ..) => start,
		}
	}

	pub fn end(&self) -> DVec2 {
		match *self {
			PathSegment::Line(_, end) | PathSegment::Cubic(.., end) | PathSegment::Quadratic(.., end) | PathSegment::Arc(.., end) => end,
		}
	}

	/// The center form of an arc segment, or `None` for other segments and for degenerate arcs.
	pub fn arc_center(&self) -> Option<ArcCenterParameterization> {
		match *self {
			PathSegment::Arc(start, rx, ry, x_axis_rotation, large_arc, sweep, end) => arc_segment_to_center(start, rx, ry, x_axis_rotation, large_arc, sweep, end),
			_ => None,
		}
	}

	/// True for lines and for arcs that degenerate to a straight line.
	pub fn is_straight(&self) -> bool {
		match self {
			PathSegment::Line(..) => true,
			PathSegment::Arc(..) => self.arc_center().is_none(),
			_ => false,
		}
	}

	/// Evaluates the segment at the parametric value `t` in `[0, 1]`.
	pub fn sample_at(&self, t: f64) -> DVec2 {
		match *self {
			PathSegment::Line(start, end) => start.lerp(end, t),
			PathSegment::Cubic(p0, p1, p2, p3) => cubic_bernstein(p0, p1, p2, p3, t),
			PathSegment::Quadratic(p0, p1, p2) => quadratic_bernstein(p0, p1, p2, t),
			PathSegment::Arc(start, .., end) => match self.arc_center() {
				Some(center) => center.point_at(t),
				None => start.lerp(end, t),
			},
		}
	}

	/// Samples the segment at `samples + 1` uniformly spaced parameter values, including both endpoints.
	/// Straight segments (including degenerate arcs) only yield their two endpoints.
	pub fn flatten(&self, samples: usize) -> Vec<DVec2> {
		let samples = samples.max(1);
		let parameters = (0..=samples).map(|i| i as f64 / samples as f64);

		match *self {
			PathSegment::Line(start, end) => vec![start, end],
			PathSegment::Cubic(p0, p1, p2, p3) => parameters.map(|t| cubic_bernstein(p0, p1, p2, p3, t)).collect(),
			PathSegment::Quadratic(p0, p1, p2) => parameters.map(|t| quadratic_bernstein(p0, p1, p2, t)).collect(),
			PathSegment::Arc(start, .., end) => match self.arc_center() {
				Some(center) => parameters.map(|t| center.point_at(t)).collect(),
				None => vec![start, end],
			},
		}
	}

	/// Distance from `point` to this segment. Straight segments are measured exactly, curves as the minimum over `samples + 1` sampled points.
	pub fn distance_to_point(&self, point: DVec2, samples: usize) -> f64 {
		if self.is_straight() {
			return point_to_segment_distance(point, self.start(), self.end());
		}

		self.flatten(samples).into_iter().map(|sample| sample.distance(point)).fold(f64::INFINITY, f64::min)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPSILON: f64 = 1e-9;

	fn assert_close(actual: DVec2, expected: DVec2) {
		assert!(actual.abs_diff_eq(expected, EPSILON), "Expected {expected}, but got {actual}");
	}

	#[test]
	fn cubic_flattening_hits_endpoints_and_midpoint() {
		let cubic = PathSegment::Cubic(DVec2::new(0., 0.), DVec2::new(0., 10.), DVec2::new(10., 10.), DVec2::new(10., 0.));
		let points = cubic.flatten(10);

		assert_eq!(points.len(), 11);
		assert_close(points[0], DVec2::new(0., 0.));
		assert_close(points[5], DVec2::new(5., 7.5));
		assert_close(points[10], DVec2::new(10., 0.));
	}

	#[test]
	fn quadratic_evaluation() {
		let quadratic = PathSegment::Quadratic(DVec2::new(0., 0.), DVec2::new(10., 20.), DVec2::new(20., 0.));
		assert_close(quadratic.sample_at(0.5), DVec2::new(10., 10.));
		assert_eq!(quadratic.flatten(50).len(), 51);
	}

	#[test]
	fn semicircle_arc_center() {
		let center = arc_segment_to_center(DVec2::ZERO, 10., 10., 0., false, true, DVec2::new(20., 0.)).unwrap();

		assert_close(center.center, DVec2::new(10., 0.));
		assert!((center.delta_theta - PI).abs() < EPSILON);
		// Positive sweep in a y-down space passes through negative y
		assert_close(center.point_at(0.5), DVec2::new(10., -10.));
		assert_close(center.point_at(1.), DVec2::new(20., 0.));
	}

	#[test]
	fn sweep_flag_flips_direction() {
		let center = arc_segment_to_center(DVec2::ZERO, 10., 10., 0., false, false, DVec2::new(20., 0.)).unwrap();

		assert!((center.delta_theta + PI).abs() < EPSILON);
		assert_close(center.point_at(0.5), DVec2::new(10., 10.));
	}

	#[test]
	fn large_arc_flag_picks_the_long_way_round() {
		let small = arc_segment_to_center(DVec2::new(0., 0.), 10., 10., 0., false, true, DVec2::new(10., 10.)).unwrap();
		let large = arc_segment_to_center(DVec2::new(0., 0.), 10., 10., 0., true, true, DVec2::new(10., 10.)).unwrap();

		assert!((small.delta_theta - PI / 2.).abs() < EPSILON);
		assert!((large.delta_theta - 3. * PI / 2.).abs() < EPSILON);
		assert_close(large.point_at(1.), DVec2::new(10., 10.));
	}

	#[test]
	fn undersized_radii_are_scaled_up() {
		let center = arc_segment_to_center(DVec2::ZERO, 1., 1., 0., false, true, DVec2::new(20., 0.)).unwrap();

		assert!((center.rx - 10.).abs() < EPSILON);
		assert!((center.ry - 10.).abs() < EPSILON);
		assert_close(center.center, DVec2::new(10., 0.));
	}

	#[test]
	fn rotated_arc_ends_at_its_endpoint() {
		let start = DVec2::new(3., 4.);
		let end = DVec2::new(27., 15.);
		let center = arc_segment_to_center(start, 20., 8., 30., true, false, end).unwrap();

		assert!(center.point_at(0.).abs_diff_eq(start, 1e-6));
		assert!(center.point_at(1.).abs_diff_eq(end, 1e-6));
	}

	#[test]
	fn degenerate_arcs_have_no_center() {
		assert!(arc_segment_to_center(DVec2::ZERO, 0., 5., 0., false, true, DVec2::ONE).is_none());
		assert!(arc_segment_to_center(DVec2::ZERO, 5., 0., 0., false, true, DVec2::ONE).is_none());
		assert!(arc_segment_to_center(DVec2::ONE, 5., 5., 0., false, true, DVec2::ONE).is_none());

		let arc = PathSegment::Arc(DVec2::ZERO, 0., 5., 0., false, true, DVec2::new(10., 0.));
		assert!(arc.is_straight());
		assert_eq!(arc.flatten(50), vec![DVec2::ZERO, DVec2::new(10., 0.)]);
		assert_close(arc.sample_at(0.25), DVec2::new(2.5, 0.));
	}

	#[test]
	fn reflection_through_anchor() {
		assert_eq!(reflect_control_point(DVec2::new(10., 10.), DVec2::new(5., 0.)), DVec2::new(15., 20.));
	}

	#[test]
	fn curve_distance_uses_samples() {
		let cubic = PathSegment::Cubic(DVec2::new(0., 0.), DVec2::new(0., 10.), DVec2::new(10., 10.), DVec2::new(10., 0.));
		let distance = cubic.distance_to_point(DVec2::new(5., 10.), 50);
		assert!((distance - 2.5).abs() < EPSILON);
	}
}
