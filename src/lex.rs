//! Numeral and string scanners over instruction text
//!
//! Positions are byte offsets into the text, every syntactically significant character is ASCII.

use malachite::Integer;
use regex::Regex;
use lazy_static::lazy_static;
use crate::structs::Value;
use crate::errors::DcErr;
use crate::conv::f_ck;

lazy_static! {
	///maximal numeral run, only the first character may be `_`
	static ref RE_NUM: Regex = Regex::new(r"^_?[0-9A-F.]*").unwrap();
	///longest decimal prefix of a fractional numeral
	static ref RE_FLT: Regex = Regex::new(r"^-?[0-9]*(?:\.[0-9]+)?(?:[eE][-+]?[0-9]+)?").unwrap();
}

/// Scan a numeral starting at `i`, returns the value and the position after it.
///
/// A run containing `.` is always read as a decimal float, otherwise as an integer in base `ibase`. Digits not valid in that base end the conversion early, the rest of the run is still consumed.
pub fn parse_num(s: &str, i: usize, ibase: u8) -> Result<(Value, usize), DcErr> {
	let m = RE_NUM.find(&s[i..]).map_or("", |m| m.as_str());
	let end = i + m.len();
	let tok = m.replacen('_', "-", 1);

	if tok.contains('.') {
		let f = RE_FLT.find(&tok).map_or("", |m| m.as_str()).parse::<f64>().unwrap_or(0.0);
		Ok((Value::F(f_ck(f)?), end))
	}
	else {
		let (neg, digits) = match tok.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, tok.as_str())
		};
		let base = Integer::from(ibase);
		let mut n = Integer::from(0u8);
		for d in digits.chars().map_while(|c| c.to_digit(16).filter(|d| *d < ibase as u32)) {
			n *= &base;
			n += Integer::from(d);
		}
		Ok((Value::I(if neg {-n} else {n}), end))
	}
}

/// Scan a bracketed string whose opening bracket ends just before `i`, returns its contents and the position after the matching close.
///
/// Brackets nest. An unterminated string runs to the end of the text.
pub fn parse_str(s: &str, i: usize) -> (String, usize) {
	let mut depth = 1usize;
	for (p, b) in s.bytes().enumerate().skip(i) {
		match b {
			b'[' => depth += 1,
			b']' => {
				depth -= 1;
				if depth == 0 {
					return (s[i..p].to_owned(), p + 1);
				}
			}
			_ => {}
		}
	}
	(s[i..].to_owned(), s.len())
}

/// Position of the next newline at or after `i`, or the end of the text
pub fn line_end(s: &str, i: usize) -> usize {
	s[i..].find('\n').map_or(s.len(), |n| i + n)
}

/// Position just past the next newline
pub fn skip_past_eol(s: &str, i: usize) -> usize {
	(line_end(s, i) + 1).min(s.len())
}

/// Skip whitespace and `#` comments
pub fn skip_whitespace(s: &str, mut i: usize) -> usize {
	let b = s.as_bytes();
	while let Some(c) = b.get(i) {
		match c {
			b'#' => i = skip_past_eol(s, i),
			b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C => i += 1,
			_ => break
		}
	}
	i
}
