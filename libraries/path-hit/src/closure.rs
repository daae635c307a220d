use crate::consts::CLOSURE_TOLERANCE;
use crate::path::SubPath;
use crate::resolve::{ResolvedSubPath, resolve_subpath};

impl ResolvedSubPath {
	/// A sub-path is closed if it ends with a close command, or if its first and last anchors lie strictly closer than `tolerance`.
	/// A sub-path without any resolvable anchor is never closed.
	pub fn is_closed(&self, tolerance: f64) -> bool {
		if self.ends_with_close() {
			return true;
		}

		match (self.first_anchor(), self.last_anchor()) {
			(Some(first), Some(last)) => first.distance(last) < tolerance,
			_ => false,
		}
	}
}

/// Whether `subpath` is effectively closed, using the default closure tolerance.
pub fn is_subpath_closed(subpath: &SubPath, all_subpaths: Option<&[SubPath]>) -> bool {
	is_subpath_closed_with_tolerance(subpath, all_subpaths, CLOSURE_TOLERANCE)
}

/// Whether `subpath` is effectively closed, treating start and end anchors closer than `tolerance` as coincident.
pub fn is_subpath_closed_with_tolerance(subpath: &SubPath, all_subpaths: Option<&[SubPath]>, tolerance: f64) -> bool {
	if subpath.ends_with_close() {
		return true;
	}
	resolve_subpath(subpath, all_subpaths).is_some_and(|resolved| resolved.is_closed(tolerance))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::command::{Instruction, PathCommand};
	use crate::path::Path;
	use glam::DVec2;

	fn polyline(points: &[(f64, f64)], close: bool) -> Path {
		let mut commands = points
			.iter()
			.enumerate()
			.map(|(index, &(x, y))| {
				let point = DVec2::new(x, y);
				PathCommand::Absolute(if index == 0 { Instruction::M(point) } else { Instruction::L(point) })
			})
			.collect::<Vec<_>>();
		if close {
			commands.push(PathCommand::Close);
		}
		Path::from_commands([commands])
	}

	#[test]
	fn explicit_close() {
		let path = polyline(&[(50., 50.), (150., 50.), (150., 150.), (50., 150.)], true);
		assert!(is_subpath_closed(&path.subpaths()[0], Some(path.subpaths())));
	}

	#[test]
	fn coincident_endpoints_within_tolerance() {
		let nearly = polyline(&[(0., 0.), (10., 0.), (10., 10.), (0.5, 0.5)], false);
		assert!(is_subpath_closed(&nearly.subpaths()[0], None));

		let apart = polyline(&[(0., 0.), (10., 0.), (10., 10.), (1., 0.)], false);
		assert!(!is_subpath_closed(&apart.subpaths()[0], None));
		assert!(is_subpath_closed_with_tolerance(&apart.subpaths()[0], None, 1.5));
	}

	#[test]
	fn open_polyline() {
		let path = polyline(&[(0., 0.), (10., 0.), (10., 10.)], false);
		assert!(!is_subpath_closed(&path.subpaths()[0], None));
	}

	#[test]
	fn nothing_to_resolve_is_never_closed() {
		let path = Path::from_commands([Vec::<PathCommand>::new(), vec![PathCommand::Absolute(Instruction::L(DVec2::new(f64::NAN, 0.)))]]);
		assert!(!is_subpath_closed(&path.subpaths()[0], Some(path.subpaths())));
		assert!(!is_subpath_closed(&path.subpaths()[1], Some(path.subpaths())));
	}

	#[test]
	fn closure_follows_the_carried_offset() {
		// The second sub-path returns to the absolute point it started from only once the carried offset is applied
		let path = Path::from_commands([
			vec![PathCommand::Absolute(Instruction::M(DVec2::new(20., 20.)))],
			vec![
				PathCommand::Relative(Instruction::M(DVec2::new(0., 0.))),
				PathCommand::Relative(Instruction::L(DVec2::new(10., 0.))),
				PathCommand::Absolute(Instruction::L(DVec2::new(20., 20.))),
			],
		]);
		let subpath = &path.subpaths()[1];

		assert!(is_subpath_closed(subpath, Some(path.subpaths())));
		assert!(!is_subpath_closed(subpath, None));
	}
}
