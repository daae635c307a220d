use crate::command::{Command, PathCommand};
use crate::id::{CommandId, SubPathId};

/// One contiguous sequence of drawing commands, conventionally beginning with a move.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubPath {
	id: SubPathId,
	commands: Vec<Command>,
}

impl SubPath {
	pub fn new(id: SubPathId, commands: Vec<Command>) -> Self {
		Self { id, commands }
	}

	pub fn id(&self) -> SubPathId {
		self.id
	}

	pub fn commands(&self) -> &[Command] {
		&self.commands
	}

	/// Mutable access for editing collaborators. Queries only ever read a sub-path.
	pub fn commands_mut(&mut self) -> &mut Vec<Command> {
		&mut self.commands
	}

	pub fn push(&mut self, command: Command) {
		self.commands.push(command);
	}

	pub fn len(&self) -> usize {
		self.commands.len()
	}

	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}

	/// Index of the command with the given id, if it belongs to this sub-path.
	pub fn command_index(&self, id: CommandId) -> Option<usize> {
		self.commands.iter().position(|command| command.id == id)
	}

	pub fn command(&self, id: CommandId) -> Option<&Command> {
		self.command_index(id).map(|index| &self.commands[index])
	}

	pub fn ends_with_close(&self) -> bool {
		self.commands.last().is_some_and(|command| command.command.is_close())
	}
}

/// An ordered collection of sub-paths sharing one coordinate space.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
	subpaths: Vec<SubPath>,
}

impl Path {
	pub fn new(subpaths: Vec<SubPath>) -> Self {
		Self { subpaths }
	}

	/// Builds a path from raw commands, one inner list per sub-path, numbering sub-paths and commands sequentially from 1.
	pub fn from_commands<I, C>(subpaths: I) -> Self
	where
		I: IntoIterator<Item = C>,
		C: IntoIterator<Item = PathCommand>,
	{
		let mut subpath_id = SubPathId::ZERO;
		let mut command_id = CommandId::ZERO;

		let subpaths = subpaths
			.into_iter()
			.map(|commands| {
				let commands = commands.into_iter().map(|command| Command::new(command_id.next_id(), command)).collect();
				SubPath::new(subpath_id.next_id(), commands)
			})
			.collect();

		Self { subpaths }
	}

	pub fn subpaths(&self) -> &[SubPath] {
		&self.subpaths
	}

	/// Mutable access for editing collaborators. Queries only ever read a path.
	pub fn subpaths_mut(&mut self) -> &mut Vec<SubPath> {
		&mut self.subpaths
	}

	pub fn push(&mut self, subpath: SubPath) {
		self.subpaths.push(subpath);
	}

	pub fn len(&self) -> usize {
		self.subpaths.len()
	}

	pub fn is_empty(&self) -> bool {
		self.subpaths.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, SubPath> {
		self.subpaths.iter()
	}

	/// Index of the sub-path with the given id.
	pub fn subpath_index(&self, id: SubPathId) -> Option<usize> {
		self.subpaths.iter().position(|subpath| subpath.id() == id)
	}

	pub fn subpath(&self, id: SubPathId) -> Option<&SubPath> {
		self.subpath_index(id).map(|index| &self.subpaths[index])
	}

	/// Finds the sub-path that owns the given command, together with the sub-path's index.
	pub fn find_command(&self, id: CommandId) -> Option<(usize, &SubPath)> {
		self.subpaths.iter().enumerate().find(|(_, subpath)| subpath.command_index(id).is_some())
	}
}

impl<'a> IntoIterator for &'a Path {
	type Item = &'a SubPath;
	type IntoIter = std::slice::Iter<'a, SubPath>;

	fn into_iter(self) -> Self::IntoIter {
		self.subpaths.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::command::Instruction;
	use glam::DVec2;

	fn two_triangles() -> Path {
		let triangle = |offset: f64| {
			vec![
				PathCommand::Absolute(Instruction::M(DVec2::new(offset, 0.))),
				PathCommand::Absolute(Instruction::L(DVec2::new(offset + 10., 0.))),
				PathCommand::Absolute(Instruction::L(DVec2::new(offset + 5., 10.))),
				PathCommand::Close,
			]
		};
		Path::from_commands([triangle(0.), triangle(20.)])
	}

	#[test]
	fn from_commands_numbers_everything_sequentially() {
		let path = two_triangles();

		assert_eq!(path.len(), 2);
		assert_eq!(path.subpaths()[0].id(), SubPathId::new(1));
		assert_eq!(path.subpaths()[1].id(), SubPathId::new(2));

		let ids = path.iter().flat_map(|subpath| subpath.commands().iter().map(|command| command.id.inner())).collect::<Vec<_>>();
		assert_eq!(ids, (1..=8).collect::<Vec<_>>());
	}

	#[test]
	fn lookups_by_id() {
		let path = two_triangles();

		assert_eq!(path.subpath_index(SubPathId::new(2)), Some(1));
		assert_eq!(path.subpath_index(SubPathId::new(9)), None);
		assert_eq!(path.subpaths()[1].command_index(CommandId::new(6)), Some(1));
		assert_eq!(path.subpaths()[0].command_index(CommandId::new(6)), None);

		let (index, subpath) = path.find_command(CommandId::new(7)).unwrap();
		assert_eq!(index, 1);
		assert_eq!(subpath.id(), SubPathId::new(2));
		assert!(subpath.ends_with_close());
	}
}
