use crate::command::{Instruction, PathCommand};
use crate::path::Path;
use glam::DVec2;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("number pattern is valid"));

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseError {
	#[error("unexpected character `{character}` at offset {offset}")]
	UnexpectedCharacter { character: char, offset: usize },
	#[error("expected a number at offset {offset}")]
	ExpectedNumber { offset: usize },
	#[error("expected an arc flag (`0` or `1`) at offset {offset}")]
	ExpectedFlag { offset: usize },
	#[error("path data must begin with a move command, found `{command}` at offset {offset}")]
	MissingMove { command: char, offset: usize },
}

struct Cursor<'a> {
	source: &'a str,
	offset: usize,
}

impl<'a> Cursor<'a> {
	fn new(source: &'a str) -> Self {
		Self { source, offset: 0 }
	}

	fn peek(&self) -> Option<char> {
		self.source[self.offset..].chars().next()
	}

	fn bump(&mut self) {
		if let Some(character) = self.peek() {
			self.offset += character.len_utf8();
		}
	}

	fn skip_separators(&mut self) {
		while self.peek().is_some_and(|character| character.is_ascii_whitespace() || character == ',') {
			self.bump();
		}
	}

	fn number(&mut self) -> Result<f64, ParseError> {
		self.skip_separators();
		let offset = self.offset;
		let token = NUMBER.find(&self.source[offset..]).ok_or(ParseError::ExpectedNumber { offset })?;
		let value = token.as_str().parse().map_err(|_| ParseError::ExpectedNumber { offset })?;
		self.offset += token.end();
		Ok(value)
	}

	fn point(&mut self) -> Result<DVec2, ParseError> {
		Ok(DVec2::new(self.number()?, self.number()?))
	}

	/// Arc flags are a single digit and may be written without separators, as in `a5 5 0 01 10 10`.
	fn flag(&mut self) -> Result<bool, ParseError> {
		self.skip_separators();
		let flag = match self.peek() {
			Some('0') => false,
			Some('1') => true,
			_ => return Err(ParseError::ExpectedFlag { offset: self.offset }),
		};
		self.bump();
		Ok(flag)
	}
}

fn starts_number(character: char) -> bool {
	character.is_ascii_digit() || matches!(character, '+' | '-' | '.')
}

fn parse_instruction(letter: char, cursor: &mut Cursor) -> Result<Option<Instruction>, ParseError> {
	let instruction = match letter.to_ascii_uppercase() {
		'M' => Instruction::M(cursor.point()?),
		'L' => Instruction::L(cursor.point()?),
		'H' => Instruction::H(cursor.number()?),
		'V' => Instruction::V(cursor.number()?),
		'C' => Instruction::C(cursor.point()?, cursor.point()?, cursor.point()?),
		'S' => Instruction::S(cursor.point()?, cursor.point()?),
		'Q' => Instruction::Q(cursor.point()?, cursor.point()?),
		'T' => Instruction::T(cursor.point()?),
		'A' => Instruction::A(cursor.number()?, cursor.number()?, cursor.number()?, cursor.flag()?, cursor.flag()?, cursor.point()?),
		_ => return Ok(None),
	};
	Ok(Some(instruction))
}

/// Parses SVG path data into a [`Path`], starting a new sub-path at every move command. Sub-paths and commands are numbered from 1 in order.
pub fn path_from_path_data(data: &str) -> Result<Path, ParseError> {
	let mut cursor = Cursor::new(data);
	let mut subpaths: Vec<Vec<PathCommand>> = Vec::new();
	let mut previous_letter = None;

	loop {
		cursor.skip_separators();
		let offset = cursor.offset;
		let Some(character) = cursor.peek() else { break };

		let letter = if character.is_ascii_alphabetic() {
			cursor.bump();
			character
		} else {
			// Extra coordinates repeat the previous command, except that a move continues as a line
			match previous_letter {
				Some(_) if !starts_number(character) => return Err(ParseError::UnexpectedCharacter { character, offset }),
				Some('M') => 'L',
				Some('m') => 'l',
				Some(letter) if !matches!(letter, 'Z' | 'z') => letter,
				_ => return Err(ParseError::UnexpectedCharacter { character, offset }),
			}
		};

		let command = if matches!(letter, 'Z' | 'z') {
			PathCommand::Close
		} else {
			let Some(instruction) = parse_instruction(letter, &mut cursor)? else {
				return Err(ParseError::UnexpectedCharacter { character: letter, offset });
			};
			if letter.is_ascii_lowercase() { PathCommand::Relative(instruction) } else { PathCommand::Absolute(instruction) }
		};

		if command.is_move() {
			subpaths.push(vec![command]);
		} else {
			let Some(subpath) = subpaths.last_mut() else {
				return Err(ParseError::MissingMove { command: letter, offset });
			};
			subpath.push(command);
		}
		previous_letter = Some(letter);
	}

	log::trace!("Parsed {} sub-paths from path data", subpaths.len());
	Ok(Path::from_commands(subpaths))
}

impl Path {
	/// Parses SVG path data. See [`path_from_path_data`].
	pub fn from_path_data(data: &str) -> Result<Self, ParseError> {
		path_from_path_data(data)
	}
}

impl FromStr for Path {
	type Err = ParseError;

	fn from_str(data: &str) -> Result<Self, Self::Err> {
		path_from_path_data(data)
	}
}
