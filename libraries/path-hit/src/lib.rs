//! Path-hit: absolute position resolution and hit testing for multi-subpath vector paths.
//!
//! Positions are resolved by walking each sub-path's commands with a running cursor that carries over from the end of the previous
//! sub-path. Hit testing combines fill containment (nonzero or even-odd) with the distance to each sub-path's outline.
//! Every query is a pure function of a borrowed [`Path`]; use [`ResolvedPath`] to answer many queries against one snapshot.

mod closure;
mod command;
pub mod consts;
mod distance;
mod id;
mod path;
#[cfg(feature = "parsing")]
mod path_data;
mod policy;
mod polygon;
mod resolve;
mod segment;

pub use closure::{is_subpath_closed, is_subpath_closed_with_tolerance};
pub use command::{Command, Instruction, PathCommand};
pub use distance::{distance_to_contour, point_to_segment_distance};
pub use hit_test::{
	HitCandidate, SubPathRef, find_innermost_subpath_at_point, find_innermost_subpath_at_point_with_policy, find_subpath_at_point, find_subpath_at_point_advanced,
	find_subpath_at_point_with_policy, path_contains_point,
};
pub use id::{CommandId, SubPathId};
pub use path::{Path, SubPath};
#[cfg(feature = "parsing")]
pub use path_data::{ParseError, path_from_path_data};
pub use policy::{HitTestOptions, HitTestPolicy};
pub use polygon::{FillRule, crossing_count, point_in_polygon, polygon_area, subpath_contains_point, subpath_polygon, winding_number};
pub use resolve::{
	CommandResolver, ResolvedCommand, ResolvedPath, ResolvedSubPath, carried_start_offset, resolve_absolute_control_points, resolve_absolute_position, resolve_subpath,
	subpath_final_position,
};
pub use segment::{ArcCenterParameterization, PathSegment, arc_segment_to_center, reflect_control_point};

// Re-exported so callers can build points without depending on glam directly
pub use glam::DVec2;
