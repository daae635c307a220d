use crate::id::CommandId;
use glam::DVec2;

/// The coordinate payload of a single path instruction. Whether the values are absolute or relative to the
/// current point is decided by the enclosing [`PathCommand`] variant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instruction {
	/// Move to `point`, lifting the pen.
	M(DVec2),
	/// Straight line to `point`.
	L(DVec2),
	/// Horizontal line to `x`.
	H(f64),
	/// Vertical line to `y`.
	V(f64),
	/// Cubic Bézier: first control point, second control point, end point.
	C(DVec2, DVec2, DVec2),
	/// Smooth cubic Bézier: second control point, end point. The first control point is implicit.
	S(DVec2, DVec2),
	/// Quadratic Bézier: control point, end point.
	Q(DVec2, DVec2),
	/// Smooth quadratic Bézier to the end point. The control point is implicit.
	T(DVec2),
	/// Elliptical arc: `rx`, `ry`, x-axis rotation in degrees, large-arc flag, sweep flag, end point.
	A(f64, f64, f64, bool, bool, DVec2),
}

impl Instruction {
	/// The SVG path-data letter of this instruction in its absolute (uppercase) form.
	pub fn letter(&self) -> char {
		match self {
			Instruction::M(_) => 'M',
			Instruction::L(_) => 'L',
			Instruction::H(_) => 'H',
			Instruction::V(_) => 'V',
			Instruction::C(..) => 'C',
			Instruction::S(..) => 'S',
			Instruction::Q(..) => 'Q',
			Instruction::T(_) => 'T',
			Instruction::A(..) => 'A',
		}
	}

	/// Returns false if any coordinate this instruction needs is NaN or infinite. Such an instruction has no resolvable position.
	pub fn has_finite_coordinates(&self) -> bool {
		match *self {
			Instruction::M(point) | Instruction::L(point) | Instruction::T(point) => point.is_finite(),
			Instruction::H(value) | Instruction::V(value) => value.is_finite(),
			Instruction::C(control1, control2, end) => control1.is_finite() && control2.is_finite() && end.is_finite(),
			Instruction::S(control, end) | Instruction::Q(control, end) => control.is_finite() && end.is_finite(),
			Instruction::A(rx, ry, x_axis_rotation, _, _, end) => rx.is_finite() && ry.is_finite() && x_axis_rotation.is_finite() && end.is_finite(),
		}
	}
}

/// A single path instruction with either absolute or relative semantics, or a coordinate-free close.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathCommand {
	Absolute(Instruction),
	Relative(Instruction),
	Close,
}

impl PathCommand {
	pub fn instruction(&self) -> Option<&Instruction> {
		match self {
			PathCommand::Absolute(instruction) | PathCommand::Relative(instruction) => Some(instruction),
			PathCommand::Close => None,
		}
	}

	pub fn is_relative(&self) -> bool {
		matches!(self, PathCommand::Relative(_))
	}

	pub fn is_move(&self) -> bool {
		matches!(self.instruction(), Some(Instruction::M(_)))
	}

	pub fn is_close(&self) -> bool {
		matches!(self, PathCommand::Close)
	}

	/// The SVG path-data letter, lowercase for relative commands.
	pub fn letter(&self) -> char {
		match self {
			PathCommand::Absolute(instruction) => instruction.letter(),
			PathCommand::Relative(instruction) => instruction.letter().to_ascii_lowercase(),
			PathCommand::Close => 'Z',
		}
	}
}

/// A path command together with the stable identity external collaborators (such as selection) use to refer to it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
	pub id: CommandId,
	pub command: PathCommand,
}

impl Command {
	pub fn new(id: CommandId, command: PathCommand) -> Self {
		Self { id, command }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn letters_follow_case_convention() {
		assert_eq!(PathCommand::Absolute(Instruction::C(DVec2::ZERO, DVec2::ZERO, DVec2::ONE)).letter(), 'C');
		assert_eq!(PathCommand::Relative(Instruction::H(3.)).letter(), 'h');
		assert_eq!(PathCommand::Close.letter(), 'Z');
	}

	#[test]
	fn close_has_no_instruction() {
		assert!(PathCommand::Close.instruction().is_none());
		assert!(!PathCommand::Close.is_relative());
		assert!(PathCommand::Relative(Instruction::M(DVec2::ONE)).is_move());
	}

	#[test]
	fn non_finite_coordinates_are_detected() {
		assert!(Instruction::L(DVec2::new(1., 2.)).has_finite_coordinates());
		assert!(!Instruction::L(DVec2::new(1., f64::NAN)).has_finite_coordinates());
		assert!(!Instruction::V(f64::INFINITY).has_finite_coordinates());
		assert!(!Instruction::A(f64::NAN, 1., 0., false, true, DVec2::ONE).has_finite_coordinates());
	}
}
