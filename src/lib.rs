//! Core evaluation and primary API
//!
//! ```
//! use dc_lang::structs::{State, Value};
//!
//! let mut st = State::new(Box::new(std::io::sink()), Box::new(|_: &str| {}));
//! st.evalstr("[d1-d0<F]sF 3lFx").unwrap();
//! assert_eq!(st.stack().depth(), 4);
//! assert_eq!(st.stack().iter().next(), Some(&Value::I(0.into())));
//! ```

pub mod structs;

pub mod errors;

pub mod lex;

pub mod num;

pub mod os;

mod cmds;

mod fns;

mod conv;

use tracing::{debug, trace};
use crate::cmds::{dispatch, Ctl};
use crate::errors::DcErr::{self, *};
use crate::lex::*;
use crate::structs::{State, Value};

impl State {
	/// Evaluate program text at top level.
	///
	/// A quit request that unwinds past the top level ends evaluation successfully. Errors abort at once, effects of instructions already run are kept.
	pub fn evalstr(&mut self, prog: &str) -> Result<(), DcErr> {
		let ctl = self.eval(prog.to_owned())?;
		debug!(?ctl, "evaluation finished");
		Ok(())
	}

	/// Run one logical invocation, which may absorb any number of tail calls.
	///
	/// Returns [`Ctl::Quit`] if the caller has to keep unwinding, [`Ctl::Okay`] otherwise.
	fn eval(&mut self, mut text: String) -> Result<Ctl, DcErr> {
		let mut i = 0usize;	//byte cursor
		let mut frames = 1usize;	//invocations flattened into this one
		let mut next_negcmp = false;

		while let Some(c) = text[i..].chars().next() {
			i += c.len_utf8();
			let peek = text[i..].chars().next();
			let negcmp = std::mem::take(&mut next_negcmp);

			match dispatch(self, c, peek, negcmp)? {
				Ctl::Okay => {}
				Ctl::EatOne => {
					i += peek.map_or(0, char::len_utf8);
				}
				Ctl::EvalReg => {
					let r = peek.ok_or(EndOfInput(c))?;
					i += r.len_utf8();
					let mac = self.regs.get(&r).ok_or(MissingKey(r, None))?.val.clone();
					if let Some(ret) = self.call(mac, &mut text, &mut i, &mut frames)? {
						return Ok(ret);
					}
				}
				Ctl::EvalTos => {
					let mac = self.stk.pop()?;
					if let Some(ret) = self.call(mac, &mut text, &mut i, &mut frames)? {
						return Ok(ret);
					}
				}
				Ctl::Quit => {
					debug!(unwind = self.unwind, frames, "quit");
					return if self.unwind >= frames {
						self.unwind -= frames;
						Ok(Ctl::Quit)
					}
					else {
						Ok(Ctl::Okay)
					};
				}
				Ctl::Int => {
					let (v, end) = parse_num(&text, i - 1, self.par.i())?;
					self.stk.push(v);
					i = end;
				}
				Ctl::Str => {
					let (s, end) = parse_str(&text, i);
					self.stk.push(Value::S(s));
					i = end;
				}
				Ctl::System => {
					let end = line_end(&text, i);
					debug!(line = &text[i..end], "host command");
					self.shell.system(&text[i..end]);
					i = (end + 1).min(text.len());
				}
				Ctl::Comment => {
					i = skip_past_eol(&text, i);
				}
				Ctl::NegCmp => {
					next_negcmp = true;
				}
			}
		}
		Ok(Ctl::Okay)
	}

	/// Invoke `mac` from the evaluation positioned at `i` in `text`.
	///
	/// In tail position the macro replaces `text` in place and counts as one more frame. Otherwise it is evaluated nested, and `Some` tells the caller to return at once with that result.
	fn call(&mut self, mac: Value, text: &mut String, i: &mut usize, frames: &mut usize) -> Result<Option<Ctl>, DcErr> {
		*i = skip_whitespace(text, *i);
		match mac {
			Value::S(m) if *i == text.len() => {
				*frames += 1;
				trace!(frames = *frames, len = m.len(), "tail call");
				*text = m;
				*i = 0;
				Ok(None)
			}
			Value::S(m) => {
				trace!(len = m.len(), "nested call");
				match self.eval(m)? {
					Ctl::Quit if self.unwind > 0 => {
						self.unwind -= 1;
						Ok(Some(Ctl::Quit))
					}
					Ctl::Quit => Ok(Some(Ctl::Okay)),
					_ => Ok(None)
				}
			}
			v => {	//not a macro, goes back and ends this evaluation
				self.stk.push(v);
				Ok(Some(Ctl::Okay))
			}
		}
	}
}
