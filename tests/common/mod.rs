#![allow(dead_code)]

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use dc_lang::errors::DcErr;
use dc_lang::structs::State;

/// Output sink that can be read back after the interpreter took ownership
struct Shared(Rc<RefCell<Vec<u8>>>);

impl Write for Shared {
	fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
		self.0.borrow_mut().write(buf)
	}

	fn flush(&mut self) -> std::io::Result<()> {
		Ok(())
	}
}

/// Interpreter with captured output and recorded host commands
pub struct Dc {
	pub st: State,
	out: Rc<RefCell<Vec<u8>>>,
	cmds: Rc<RefCell<Vec<String>>>
}

impl Dc {
	pub fn new() -> Self {
		let out = Rc::new(RefCell::new(Vec::new()));
		let cmds = Rc::new(RefCell::new(Vec::new()));
		let rec = cmds.clone();
		let st = State::new(
			Box::new(Shared(out.clone())),
			Box::new(move |line: &str| rec.borrow_mut().push(line.to_owned()))
		);
		Self {st, out, cmds}
	}

	pub fn eval(&mut self, prog: &str) -> Result<(), DcErr> {
		self.st.evalstr(prog)
	}

	/// Output since the last call
	pub fn output(&mut self) -> String {
		String::from_utf8(std::mem::take(&mut *self.out.borrow_mut())).unwrap()
	}

	pub fn commands(&self) -> Vec<String> {
		self.cmds.borrow().clone()
	}

	pub fn depth(&self) -> usize {
		self.st.stack().depth()
	}
}

/// Run a program on a fresh interpreter, return its output, panic on error
pub fn exec(prog: &str) -> String {
	let mut dc = Dc::new();
	dc.eval(prog).unwrap();
	dc.output()
}

/// Run a program on a fresh interpreter, return the error it must raise
pub fn fail(prog: &str) -> DcErr {
	let mut dc = Dc::new();
	match dc.eval(prog) {
		Err(e) => e,
		Ok(()) => panic!("{prog:?} did not fail")
	}
}
