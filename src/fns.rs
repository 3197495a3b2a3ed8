//! Pure arithmetic functions
//!
//! Integers stay integers where the result is representable, any float operand promotes the operation to floating point. Strings are rejected.

use malachite::Integer;
use malachite::base::num::arithmetic::traits::{DivMod, Pow};
use malachite::base::num::conversion::traits::RoundingFrom;
use malachite::base::rounding_modes::RoundingMode;
use crate::structs::Value::{self, *};
use crate::errors::DcErr::{self, *};
use crate::conv::*;

/// Monadic function definition
pub(crate) type Mon = fn(&Value) -> Result<Value, DcErr>;
/// Monadic template with standard type matching
macro_rules! mon {
    ($name:ident($a:ident) $($pa:pat => $op:expr)*) => {
		#[inline(always)] pub(crate) fn $name($a: &Value) -> Result<Value, DcErr> {
			match $a {
				$($pa => $op,)*
				_ => Err(Type1($a.into()))
			}
		}
	}
}

/// Dyadic function definition
pub(crate) type Dya = fn(&Value, &Value) -> Result<Value, DcErr>;
/// Dyadic template with standard type matching
macro_rules! dya {
    ($name:ident($a:ident, $b:ident) $($pa:pat, $pb:pat => $op:expr)*) => {
		#[inline(always)] pub(crate) fn $name($a: &Value, $b: &Value) -> Result<Value, DcErr> {
			match ($a,$b) {
				$(($pa, $pb) => $op,)*
				_ => Err(Type2($a.into(), $b.into()))
			}
		}
	}
}

/// Dyadic function with two results
pub(crate) type Dya2 = fn(&Value, &Value) -> Result<(Value, Value), DcErr>;

/// float operands of a mixed operation
#[inline(always)] fn f2(a: &Value, b: &Value) -> Result<(f64, f64), DcErr> {
	Ok((v_f(a)?, v_f(b)?))
}

/// floored float remainder, takes the sign of the divisor
fn fmod(fa: f64, fb: f64) -> f64 {
	let m = fa % fb;
	if m != 0.0 && (m < 0.0) != (fb < 0.0) {m + fb} else {m}
}

dya!(add(a, b)
	I(ia), I(ib) => Ok(I(ia + ib))

	I(_)|F(_), I(_)|F(_) => {
		let (fa, fb) = f2(a, b)?;
		f_ck(fa + fb).map(F)
	}
);

dya!(sub(a, b)
	I(ia), I(ib) => Ok(I(ia - ib))

	I(_)|F(_), I(_)|F(_) => {
		let (fa, fb) = f2(a, b)?;
		f_ck(fa - fb).map(F)
	}
);

dya!(mul(a, b)
	I(ia), I(ib) => Ok(I(ia * ib))

	I(_)|F(_), I(_)|F(_) => {
		let (fa, fb) = f2(a, b)?;
		f_ck(fa * fb).map(F)
	}
);

dya!(div(a, b)
	I(ia), I(ib) => {	//floored quotient
		if *ib != 0 {
			Ok(I(ia.clone().div_mod(ib.clone()).0))
		}
		else {
			Err(Arith("division by 0".into()))
		}
	}

	I(_)|F(_), I(_)|F(_) => {
		let (fa, fb) = f2(a, b)?;
		if fb != 0.0 {
			f_ck(fa / fb).map(F)
		}
		else {
			Err(Arith("division by 0".into()))
		}
	}
);

dya!(r#mod(a, b)
	I(ia), I(ib) => {	//remainder with sign of divisor
		if *ib != 0 {
			Ok(I(ia.clone().div_mod(ib.clone()).1))
		}
		else {
			Err(Arith("reduction mod 0".into()))
		}
	}

	I(_)|F(_), I(_)|F(_) => {
		let (fa, fb) = f2(a, b)?;
		if fb != 0.0 {
			f_ck(fmod(fa, fb)).map(F)
		}
		else {
			Err(Arith("reduction mod 0".into()))
		}
	}
);

/// Floored division and remainder in one step, same rules as [`div`] and [`r#mod`]
pub(crate) fn euc(a: &Value, b: &Value) -> Result<(Value, Value), DcErr> {
	match (a, b) {
		(I(ia), I(ib)) => {
			if *ib != 0 {
				let (quot, rem) = ia.clone().div_mod(ib.clone());
				Ok((I(quot), I(rem)))
			}
			else {
				Err(Arith("division by 0".into()))
			}
		}
		(I(_)|F(_), I(_)|F(_)) => {
			let (fa, fb) = f2(a, b)?;
			if fb != 0.0 {
				let quot = f_ck((fa / fb).floor())?;
				Ok((I(Integer::rounding_from(quot, RoundingMode::Down).0), F(f_ck(fmod(fa, fb))?)))
			}
			else {
				Err(Arith("division by 0".into()))
			}
		}
		_ => Err(Type2(a.into(), b.into()))
	}
}

dya!(pow(a, b)
	I(ia), I(ib) => {
		if *ib >= 0 {	//stays integer
			let e = u64::try_from(ib).map_err(|_| Arith(format!("exponent {ib} is too large")))?;
			Ok(I(ia.clone().pow(e)))
		}
		else {
			f_ck(i_f(ia).powf(i_f(ib))).map(F)
		}
	}

	I(_)|F(_), I(_)|F(_) => {
		let (fa, fb) = f2(a, b)?;
		f_ck(fa.powf(fb)).map(F)
	}
);

mon!(sqrt(a)
	I(_)|F(_) => {
		let fa = v_f(a)?;
		if fa >= 0.0 {
			f_ck(fa.sqrt()).map(F)
		}
		else {
			Err(InvalidParam('v', format!("square root of negative number {fa:?}")))
		}
	}
);
