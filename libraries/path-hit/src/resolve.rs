use crate::command::{Command, Instruction, PathCommand};
use crate::id::{CommandId, SubPathId};
use crate::path::{Path, SubPath};
use crate::segment::{PathSegment, reflect_control_point};
use glam::DVec2;
use std::collections::HashMap;

/// The absolute geometry of one command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedCommand {
	pub id: CommandId,
	pub command: PathCommand,
	/// Absolute anchor, or `None` for a close or a command with missing coordinates.
	pub anchor: Option<DVec2>,
	/// Absolute positions of the control points written in the command itself (implicit smooth handles are not included).
	pub handles: [Option<DVec2>; 2],
	/// The segment this command draws, starting at the previous anchor of the same sub-path.
	pub segment: Option<PathSegment>,
}

impl ResolvedCommand {
	pub fn control_points(&self) -> Vec<DVec2> {
		self.handles.iter().flatten().copied().collect()
	}
}

/// Control point left behind by the previous command, used to reflect the implicit handle of smooth curves.
#[derive(Clone, Copy, Debug, PartialEq)]
enum PreviousControl {
	None,
	Cubic(DVec2),
	Quadratic(DVec2),
}

/// Walks the commands of a sub-path in order, maintaining the running cursor and yielding each command's absolute geometry.
pub struct CommandResolver<'a> {
	commands: std::slice::Iter<'a, Command>,
	cursor: DVec2,
	pen: Option<DVec2>,
	subpath_start: Option<DVec2>,
	previous_control: PreviousControl,
}

impl<'a> CommandResolver<'a> {
	/// Starts a walk over `subpath` with the cursor at `start_offset`, the final position of the preceding sub-path.
	pub fn new(subpath: &'a SubPath, start_offset: DVec2) -> Self {
		Self {
			commands: subpath.commands().iter(),
			cursor: start_offset,
			pen: None,
			subpath_start: None,
			previous_control: PreviousControl::None,
		}
	}

	/// Current point after the commands yielded so far.
	pub fn cursor(&self) -> DVec2 {
		self.cursor
	}

	fn resolve(&mut self, id: CommandId, command: PathCommand) -> ResolvedCommand {
		let mut resolved = ResolvedCommand {
			id,
			command,
			anchor: None,
			handles: [None; 2],
			segment: None,
		};

		let (instruction, origin) = match command {
			PathCommand::Absolute(instruction) => (instruction, DVec2::ZERO),
			PathCommand::Relative(instruction) => (instruction, self.cursor),
			PathCommand::Close => {
				if let (Some(pen), Some(start)) = (self.pen, self.subpath_start) {
					resolved.segment = Some(PathSegment::Line(pen, start));
				}
				self.previous_control = PreviousControl::None;
				return resolved;
			}
		};

		if !instruction.has_finite_coordinates() {
			log::debug!("Skipping command {id} ({}) with non-finite coordinates", command.letter());
			self.previous_control = PreviousControl::None;
			return resolved;
		}

		let current = self.cursor;
		let pen = self.pen;
		let (anchor, segment, previous_control) = match instruction {
			Instruction::M(point) => {
				let anchor = origin + point;
				self.subpath_start = Some(anchor);
				(anchor, None, PreviousControl::None)
			}
			Instruction::L(point) => {
				let anchor = origin + point;
				(anchor, pen.map(|start| PathSegment::Line(start, anchor)), PreviousControl::None)
			}
			Instruction::H(x) => {
				let anchor = DVec2::new(origin.x + x, current.y);
				(anchor, pen.map(|start| PathSegment::Line(start, anchor)), PreviousControl::None)
			}
			Instruction::V(y) => {
				let anchor = DVec2::new(current.x, origin.y + y);
				(anchor, pen.map(|start| PathSegment::Line(start, anchor)), PreviousControl::None)
			}
			Instruction::C(control1, control2, point) => {
				let (control1, control2, anchor) = (origin + control1, origin + control2, origin + point);
				resolved.handles = [Some(control1), Some(control2)];
				(anchor, pen.map(|start| PathSegment::Cubic(start, control1, control2, anchor)), PreviousControl::Cubic(control2))
			}
			Instruction::S(control2, point) => {
				let control1 = match self.previous_control {
					PreviousControl::Cubic(previous) => reflect_control_point(current, previous),
					_ => current,
				};
				let (control2, anchor) = (origin + control2, origin + point);
				resolved.handles = [Some(control2), None];
				(anchor, pen.map(|start| PathSegment::Cubic(start, control1, control2, anchor)), PreviousControl::Cubic(control2))
			}
			Instruction::Q(control, point) => {
				let (control, anchor) = (origin + control, origin + point);
				resolved.handles = [Some(control), None];
				(anchor, pen.map(|start| PathSegment::Quadratic(start, control, anchor)), PreviousControl::Quadratic(control))
			}
			Instruction::T(point) => {
				let control = match self.previous_control {
					PreviousControl::Quadratic(previous) => reflect_control_point(current, previous),
					_ => current,
				};
				let anchor = origin + point;
				(anchor, pen.map(|start| PathSegment::Quadratic(start, control, anchor)), PreviousControl::Quadratic(control))
			}
			Instruction::A(rx, ry, x_axis_rotation, large_arc, sweep, point) => {
				let anchor = origin + point;
				let segment = pen.map(|start| PathSegment::Arc(start, rx, ry, x_axis_rotation, large_arc, sweep, anchor));
				(anchor, segment, PreviousControl::None)
			}
		};

		self.subpath_start.get_or_insert(anchor);
		self.cursor = anchor;
		self.pen = Some(anchor);
		self.previous_control = previous_control;

		resolved.anchor = Some(anchor);
		resolved.segment = segment;
		resolved
	}
}

impl Iterator for CommandResolver<'_> {
	type Item = ResolvedCommand;

	fn next(&mut self) -> Option<Self::Item> {
		let &Command { id, command } = self.commands.next()?;
		Some(self.resolve(id, command))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.commands.size_hint()
	}
}

/// Every command of one sub-path resolved to absolute coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSubPath {
	pub id: SubPathId,
	/// Cursor position carried over from the preceding sub-paths.
	pub start_offset: DVec2,
	/// Cursor position after the last command, which is where the next sub-path starts.
	pub final_position: DVec2,
	pub commands: Vec<ResolvedCommand>,
}

impl ResolvedSubPath {
	pub fn new(subpath: &SubPath, start_offset: DVec2) -> Self {
		let mut resolver = CommandResolver::new(subpath, start_offset);
		let commands = resolver.by_ref().collect();

		Self {
			id: subpath.id(),
			start_offset,
			final_position: resolver.cursor(),
			commands,
		}
	}

	pub fn command(&self, id: CommandId) -> Option<&ResolvedCommand> {
		self.commands.iter().find(|command| command.id == id)
	}

	/// Every resolvable anchor in command order.
	pub fn anchors(&self) -> impl Iterator<Item = DVec2> + '_ {
		self.commands.iter().filter_map(|command| command.anchor)
	}

	/// Every drawn segment in command order.
	pub fn segments(&self) -> impl Iterator<Item = PathSegment> + '_ {
		self.commands.iter().filter_map(|command| command.segment)
	}

	pub fn first_anchor(&self) -> Option<DVec2> {
		self.anchors().next()
	}

	pub fn last_anchor(&self) -> Option<DVec2> {
		self.commands.iter().rev().find_map(|command| command.anchor)
	}

	pub fn ends_with_close(&self) -> bool {
		self.commands.last().is_some_and(|command| command.command.is_close())
	}
}

/// The cursor position after walking all of `subpath`, starting from `start_offset`.
pub fn subpath_final_position(subpath: &SubPath, start_offset: DVec2) -> DVec2 {
	let mut resolver = CommandResolver::new(subpath, start_offset);
	resolver.by_ref().for_each(|_| ());
	resolver.cursor()
}

/// The position carried into `subpath` from the sub-paths preceding it in `all_subpaths`.
///
/// Without a sibling list the sub-path is treated as the first of its path and starts at the origin.
/// Returns `None` when `all_subpaths` is given but does not contain a sub-path with the same id.
pub fn carried_start_offset(subpath: &SubPath, all_subpaths: Option<&[SubPath]>) -> Option<DVec2> {
	let Some(all_subpaths) = all_subpaths else { return Some(DVec2::ZERO) };
	let index = all_subpaths.iter().position(|sibling| sibling.id() == subpath.id())?;

	Some(all_subpaths[..index].iter().fold(DVec2::ZERO, |offset, previous| subpath_final_position(previous, offset)))
}

/// Resolves every command of `subpath`, honoring the position carried over from its preceding siblings.
pub fn resolve_subpath(subpath: &SubPath, all_subpaths: Option<&[SubPath]>) -> Option<ResolvedSubPath> {
	carried_start_offset(subpath, all_subpaths).map(|offset| ResolvedSubPath::new(subpath, offset))
}

fn resolve_command(command: CommandId, subpath: &SubPath, all_subpaths: Option<&[SubPath]>) -> Option<ResolvedCommand> {
	let index = subpath.command_index(command)?;
	let offset = carried_start_offset(subpath, all_subpaths)?;
	CommandResolver::new(subpath, offset).nth(index)
}

/// The absolute anchor of `command` within `subpath`.
///
/// Returns `None` if the command has no coordinate (a close, or missing values), is not part of `subpath`,
/// or if `subpath` is not among `all_subpaths`.
pub fn resolve_absolute_position(command: CommandId, subpath: &SubPath, all_subpaths: Option<&[SubPath]>) -> Option<DVec2> {
	resolve_command(command, subpath, all_subpaths)?.anchor
}

/// The absolute positions of the control points spelled out by `command`: two for a cubic, one for a smooth cubic or a quadratic, none otherwise.
pub fn resolve_absolute_control_points(command: CommandId, subpath: &SubPath, all_subpaths: Option<&[SubPath]>) -> Vec<DVec2> {
	resolve_command(command, subpath, all_subpaths).map(|resolved| resolved.control_points()).unwrap_or_default()
}

/// Memo table over one snapshot of a [`Path`]: every sub-path is resolved once, in a single fold that carries the cursor from each
/// sub-path into the next, after which command lookups are constant time. The borrow keeps the snapshot stable for the table's lifetime.
#[derive(Clone, Debug)]
pub struct ResolvedPath<'a> {
	path: &'a Path,
	subpaths: Vec<ResolvedSubPath>,
	command_lookup: HashMap<CommandId, (usize, usize)>,
}

impl<'a> ResolvedPath<'a> {
	pub fn new(path: &'a Path) -> Self {
		let mut offset = DVec2::ZERO;
		let subpaths = path
			.iter()
			.map(|subpath| {
				let resolved = ResolvedSubPath::new(subpath, offset);
				offset = resolved.final_position;
				resolved
			})
			.collect::<Vec<_>>();

		let mut command_lookup = HashMap::new();
		for (subpath_index, subpath) in subpaths.iter().enumerate() {
			for (command_index, command) in subpath.commands.iter().enumerate() {
				command_lookup.entry(command.id).or_insert((subpath_index, command_index));
			}
		}

		Self { path, subpaths, command_lookup }
	}

	pub fn path(&self) -> &'a Path {
		self.path
	}

	pub fn subpaths(&self) -> &[ResolvedSubPath] {
		&self.subpaths
	}

	pub fn subpath(&self, id: SubPathId) -> Option<&ResolvedSubPath> {
		self.subpaths.iter().find(|subpath| subpath.id == id)
	}

	/// The resolved command with the given id. If ids repeat across sub-paths, the first occurrence wins.
	pub fn command(&self, id: CommandId) -> Option<&ResolvedCommand> {
		let &(subpath_index, command_index) = self.command_lookup.get(&id)?;
		self.subpaths.get(subpath_index)?.commands.get(command_index)
	}

	pub fn absolute_position(&self, id: CommandId) -> Option<DVec2> {
		self.command(id)?.anchor
	}

	pub fn control_points(&self, id: CommandId) -> Vec<DVec2> {
		self.command(id).map(ResolvedCommand::control_points).unwrap_or_default()
	}
}
