//! Storage structs and methods

use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use malachite::{Integer, Natural};
use crate::errors::DcErr;
use crate::os::{Shell, OsShell};

/// Stack value, never mutated once produced
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	I(Integer),
	F(f64),
	S(String)
}
impl Default for Value {
	fn default() -> Self {
		Self::I(Integer::from(0u8))
	}
}
impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::S(value.to_owned())
	}
}

/// LIFO stack of values, empty access is an error
#[derive(Debug, Clone, Default)]
#[repr(transparent)] pub struct Stack(Vec<Value>);
impl Stack {
	#[inline(always)] pub fn push(&mut self, v: Value) {
		self.0.push(v);
	}

	#[inline(always)] pub fn pop(&mut self) -> Result<Value, DcErr> {
		self.0.pop().ok_or(DcErr::StackEmpty)
	}

	#[inline(always)] pub fn peek(&self) -> Result<&Value, DcErr> {
		self.0.last().ok_or(DcErr::StackEmpty)
	}

	#[inline(always)] pub fn depth(&self) -> usize {
		self.0.len()
	}

	#[inline(always)] pub fn clear(&mut self) {
		self.0.clear();
	}

	/// Top to bottom, without popping
	pub fn iter(&self) -> impl Iterator<Item = &Value> {
		self.0.iter().rev()
	}
}

/// Named value cell with a private save/restore stack
#[derive(Debug, Clone, Default)]
pub struct Register {
	pub val: Value,
	saved: Vec<Value>
}
impl Register {
	/// Save the current value and install `v` (`S`)
	pub fn push(&mut self, v: Value) {
		self.saved.push(std::mem::replace(&mut self.val, v));
	}

	/// Restore the saved value (default if none) and return the previous current value (`L`)
	pub fn pop(&mut self) -> Value {
		let restored = self.saved.pop().unwrap_or_default();
		std::mem::replace(&mut self.val, restored)
	}

	pub fn saved_depth(&self) -> usize {
		self.saved.len()
	}
}

/// Sparse array indexed by non-negative integers
#[derive(Debug, Clone, Default)]
#[repr(transparent)] pub struct Array(BTreeMap<Natural, Value>);
impl Array {
	pub fn store(&mut self, i: Natural, v: Value) {
		self.0.insert(i, v);
	}

	pub fn fetch(&self, i: &Natural) -> Option<&Value> {
		self.0.get(i)
	}
}

/// Number IO parameters (K,I,O), with checked setters
#[derive(Debug, Clone)]
pub struct Params {
	ibase: u8,
	obase: Natural,
	scale: Natural
}
impl Params {
	pub const IBASE_MAX: u8 = 16;

	/// Checked edit of input base, 2 to 16
	pub fn set_i(&mut self, n: Integer) -> Result<(), DcErr> {
		match u8::try_from(&n) {
			Ok(b) if (2..=Self::IBASE_MAX).contains(&b) => {
				self.ibase = b;
				Ok(())
			}
			_ => Err(DcErr::InvalidParam('i', format!("input base must be 2 to {}, got {n}", Self::IBASE_MAX)))
		}
	}

	/// Checked edit of output base, at least 2
	pub fn set_o(&mut self, n: Integer) -> Result<(), DcErr> {
		match Natural::try_from(n) {
			Ok(b) if b > 1u8 => {
				self.obase = b;
				Ok(())
			}
			Ok(b) => Err(DcErr::InvalidParam('o', format!("output base must be at least 2, got {b}"))),
			Err(_) => Err(DcErr::InvalidParam('o', "output base must be at least 2, got a negative number".into()))
		}
	}

	/// Checked edit of scale, at least 0
	pub fn set_k(&mut self, n: Integer) -> Result<(), DcErr> {
		match Natural::try_from(n) {
			Ok(k) => {
				self.scale = k;
				Ok(())
			}
			Err(_) => Err(DcErr::InvalidParam('k', "scale must be at least 0".into()))
		}
	}

	#[inline(always)] pub fn i(&self) -> u8 {self.ibase}

	#[inline(always)] pub fn o(&self) -> &Natural {&self.obase}

	#[inline(always)] pub fn k(&self) -> &Natural {&self.scale}
}
impl Default for Params {
	fn default() -> Self {
		Self {
			ibase: 10,
			obase: Natural::from(10u8),
			scale: Natural::from(0u8)
		}
	}
}

/// Bundled state of one interpreter instance
pub struct State {
	pub(crate) stk: Stack,
	pub(crate) regs: HashMap<char, Register>,
	pub(crate) arrs: HashMap<char, Array>,
	pub(crate) par: Params,
	///frames a pending quit request still has to terminate
	pub(crate) unwind: usize,
	pub(crate) out: Box<dyn Write>,
	pub(crate) shell: Box<dyn Shell>
}
impl State {
	pub fn new(out: Box<dyn Write>, shell: Box<dyn Shell>) -> Self {
		Self {
			stk: Stack::default(),
			regs: HashMap::new(),
			arrs: HashMap::new(),
			par: Params::default(),
			unwind: 0,
			out,
			shell
		}
	}

	pub fn stack(&self) -> &Stack {&self.stk}

	pub fn params(&self) -> &Params {&self.par}

	pub fn register(&self, c: char) -> Option<&Register> {self.regs.get(&c)}

	pub fn flush(&mut self) -> Result<(), DcErr> {
		self.out.flush().map_err(DcErr::from)
	}
}
impl Default for State {
	fn default() -> Self {
		Self::new(Box::new(std::io::stdout()), Box::new(OsShell))
	}
}
