//! Error conditions, all of them abort evaluation up to the top level

use std::fmt::{Display, Formatter};
use malachite::Integer;
use crate::structs::Value;
use crate::cmds::describe;

#[derive(Debug)]
pub enum DcErr {
	///pop or peek on an empty stack
	StackEmpty,
	///instruction needs a following character but none is left
	EndOfInput(char),
	///unrecognized or documented-but-absent instruction
	NotImplemented(char),
	///numeric argument out of the instruction's range
	InvalidParam(char, String),
	///register or array never written, or array index never written
	MissingKey(char, Option<Integer>),
	Type1(TypeLabel),
	Type2(TypeLabel, TypeLabel),
	Arith(String),
	Io(std::io::Error),
}
impl Display for DcErr {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::StackEmpty => {write!(f, "stack empty")}
			Self::EndOfInput(c) => {write!(f, "unexpected end of input after '{c}' ({})", describe(*c))}
			Self::NotImplemented(c) => {write!(f, "'{}' not implemented ({})", c.escape_default(), describe(*c))}
			Self::InvalidParam(c, v) => {write!(f, "invalid parameter for '{c}' ({}): {v}", describe(*c))}
			Self::MissingKey(c, None) => {write!(f, "register '{c}' is not set")}
			Self::MissingKey(c, Some(i)) => {write!(f, "array '{c}' has no value at index {i}")}
			Self::Type1(ta) => {write!(f, "value of invalid type: {ta}")}
			Self::Type2(ta, tb) => {write!(f, "values of invalid types: {ta}, {tb}")}
			Self::Arith(s) => {write!(f, "arithmetic error: {s}")}
			Self::Io(e) => {write!(f, "output error: {e}")}
		}
	}
}
impl std::error::Error for DcErr {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Io(e) => Some(e),
			_ => None
		}
	}
}
impl From<std::io::Error> for DcErr {
	fn from(e: std::io::Error) -> Self {
		Self::Io(e)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)] pub enum TypeLabel {
	I, F, S
}
impl From<&Value> for TypeLabel {
	fn from(value: &Value) -> Self {
		use Value::*;
		match value {
			I(_) => Self::I,
			F(_) => Self::F,
			S(_) => Self::S
		}
	}
}

impl Display for TypeLabel {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}",
			match self {
				Self::I => {"integer"}
				Self::F => {"float"}
				Self::S => {"string"}
			}
		)
	}
}
