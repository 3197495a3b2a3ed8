//! Nontrivial conversions and glue for foreign types

use std::cmp::Ordering;
use malachite::Integer;
use malachite::rational::Rational;
use malachite::base::num::conversion::traits::RoundingFrom;
use malachite::base::rounding_modes::RoundingMode;
use crate::errors::DcErr::{self, *};
use crate::structs::Value;

/// Integer view of a numeric value, floats are truncated
pub(crate) fn v_i(v: &Value) -> Result<Integer, DcErr> {
	match v {
		Value::I(i) => Ok(i.clone()),
		Value::F(f) => Ok(Integer::rounding_from(*f, RoundingMode::Down).0),
		Value::S(_) => Err(Type1(v.into()))
	}
}

pub(crate) fn i_f(ia: &Integer) -> f64 {
	f64::rounding_from(ia, RoundingMode::Nearest).0
}

/// Float view of a numeric value
pub(crate) fn v_f(v: &Value) -> Result<f64, DcErr> {
	match v {
		Value::I(i) => Ok(i_f(i)),
		Value::F(f) => Ok(*f),
		Value::S(_) => Err(Type1(v.into()))
	}
}

pub(crate) fn f_ck(fa: f64) -> Result<f64, DcErr> {
	if fa.is_nan() {Err(Arith("Floating-point result is NaN".into()))}
	else if fa == f64::INFINITY {Err(Arith("Floating-point result is +∞".into()))}
	else if fa == f64::NEG_INFINITY {Err(Arith("Floating-point result is -∞".into()))}
	else {Ok(fa)}
}

fn f_r(fa: f64) -> Result<Rational, DcErr> {
	Rational::try_from(f_ck(fa)?).map_err(|_| Arith("Float has no exact value".into()))
}

/// Exact numeric ordering, strings are not comparable
pub(crate) fn num_cmp(a: &Value, b: &Value) -> Result<Ordering, DcErr> {
	use Value::*;
	match (a, b) {
		(I(ia), I(ib)) => Ok(ia.cmp(ib)),
		(F(fa), F(fb)) => fa.partial_cmp(fb).ok_or_else(|| Arith("NaN is unordered".into())),
		(I(ia), F(fb)) => Ok(Rational::from(ia).cmp(&f_r(*fb)?)),
		(F(fa), I(ib)) => Ok(f_r(*fa)?.cmp(&Rational::from(ib))),
		_ => Err(Type2(a.into(), b.into()))
	}
}

/// Single-character form: first char of a string, code point of a number
pub(crate) fn v_char(c: char, v: &Value) -> Result<String, DcErr> {
	match v {
		Value::S(s) => Ok(s.chars().next().map(String::from).unwrap_or_default()),
		_ => {
			let ia = v_i(v)?;
			u32::try_from(&ia).ok()
				.and_then(char::from_u32)
				.map(String::from)
				.ok_or_else(|| InvalidParam(c, format!("{ia} is not a character code")))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn truncation() {
		assert_eq!(v_i(&Value::F(2.9)).unwrap(), 2);
		assert_eq!(v_i(&Value::F(-2.9)).unwrap(), -2);
		assert!(matches!(v_i(&Value::from("x")), Err(Type1(_))));
	}

	#[test]
	fn mixed_ordering() {
		assert_eq!(num_cmp(&Value::I(2.into()), &Value::F(2.0)).unwrap(), Ordering::Equal);
		assert_eq!(num_cmp(&Value::I(2.into()), &Value::F(2.5)).unwrap(), Ordering::Less);
		assert_eq!(num_cmp(&Value::F(-0.0), &Value::F(0.0)).unwrap(), Ordering::Equal);
		assert!(matches!(num_cmp(&Value::from("a"), &Value::I(1.into())), Err(Type2(_, _))));
	}

	#[test]
	fn chars() {
		assert_eq!(v_char('a', &Value::I(65.into())).unwrap(), "A");
		assert_eq!(v_char('a', &Value::from("xyz")).unwrap(), "x");
		assert_eq!(v_char('a', &Value::from("")).unwrap(), "");
		assert!(matches!(v_char('a', &Value::I((-1).into())), Err(InvalidParam('a', _))));
	}
}
