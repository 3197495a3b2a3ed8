//! Number output functions

use malachite::{Integer, Natural};
use malachite::base::num::arithmetic::traits::UnsignedAbs;
use malachite::base::num::basic::traits::Zero;
use malachite::base::num::conversion::traits::{Digits, WrappingFrom};
use crate::structs::Value;

///digit to character byte: 0-9A-Z
fn chr(d: &Natural) -> u8 {
	let u = u8::wrapping_from(d);
	if u < 10 { u + 48 } else { u + 55 }
}

///most significant first, at least one digit
fn digits(n: &Natural, o: &Natural) -> Vec<Natural> {
	let mut digits = n.to_digits_desc(o);
	if digits.is_empty() {
		digits.push(Natural::ZERO);
	}
	digits
}

///integer in base `o`, uppercase letters up to base 36, space-separated decimal digit values above
pub fn nint(i: &Integer, o: &Natural) -> String {
	let mut res = Vec::new();
	if *i < 0 {
		res.push(b'-');
	}
	let digits = digits(&i.unsigned_abs(), o);
	if *o > Natural::const_from(36) {	//any-base
		for (n, d) in digits.iter().enumerate() {
			if n != 0 {
				res.push(b' ');
			}
			res.extend_from_slice(d.to_string().as_bytes());
		}
	}
	else {	//low base
		for d in &digits {
			res.push(chr(d));
		}
	}
	unsafe { String::from_utf8_unchecked(res) }	//only ASCII
}

///shortest round-trip form, always with a point or exponent
pub fn nflt(f: f64) -> String {
	format!("{f:?}")
}

///printable form of any value, strings as-is
pub fn show(v: &Value, o: &Natural) -> String {
	match v {
		Value::I(i) => nint(i, o),
		Value::F(f) => nflt(*f),
		Value::S(s) => s.clone()
	}
}

///character count of the printed form, floats without their point
///
///floats are counted in the form [`nflt`] prints, so `1e20` has length 4
pub fn length(v: &Value, o: &Natural) -> usize {
	match v {
		Value::I(i) => nint(i, o).chars().filter(|c| *c != ' ').count(),
		Value::F(f) => nflt(*f).chars().filter(|c| *c != '.').count(),
		Value::S(s) => s.chars().count()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn low_bases() {
		let ten = Natural::from(10u8);
		assert_eq!(nint(&Integer::from(0), &ten), "0");
		assert_eq!(nint(&Integer::from(-1234), &ten), "-1234");
		assert_eq!(nint(&Integer::from(255), &Natural::from(16u8)), "FF");
		assert_eq!(nint(&Integer::from(5), &Natural::from(2u8)), "101");
		assert_eq!(nint(&Integer::from(35), &Natural::from(36u8)), "Z");
	}

	#[test]
	fn any_base() {
		assert_eq!(nint(&Integer::from(1000), &Natural::from(100u8)), "10 0");
		assert_eq!(nint(&Integer::from(-99), &Natural::from(100u8)), "-99");
	}

	#[test]
	fn floats() {
		assert_eq!(nflt(4.0), "4.0");
		assert_eq!(nflt(0.5), "0.5");
		assert_eq!(nflt(-1.25), "-1.25");
	}

	#[test]
	fn lengths() {
		let ten = Natural::from(10u8);
		assert_eq!(length(&Value::I(Integer::from(-15)), &ten), 3);
		assert_eq!(length(&Value::F(1.5), &ten), 2);
		assert_eq!(length(&Value::F(1e20), &ten), 4);
		assert_eq!(length(&Value::from("héllo"), &ten), 5);
	}
}
