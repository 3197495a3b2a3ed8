//! Instruction table and single-character dispatch
//!
//! Every character maps to exactly one [`CmdType`], non-ASCII and unassigned characters are [`CmdType::Wrong`].

use std::cmp::Ordering;
use std::io::Write;
use malachite::{Integer, Natural};
use crate::structs::{State, Value};
use crate::errors::DcErr::{self, *};
use crate::conv::{v_i, v_char, num_cmp};
use crate::num::{show, length};
use crate::fns;

/// What the evaluator has to do after an instruction ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ctl {
	///nothing extra
	Okay,
	///the next character was used as a name, skip it
	EatOne,
	///comparison succeeded, invoke the register named by the next character
	EvalReg,
	///pop and invoke the top of stack
	EvalTos,
	///unwind macro frames
	Quit,
	///scan a numeral starting at this character
	Int,
	///scan a bracketed string
	Str,
	///skip to end of line
	Comment,
	///negate the next comparison
	NegCmp,
	///rest of the line is a host command
	System
}

/// Impure command
pub(crate) type Cmd = fn(&mut State) -> Result<(), DcErr>;
macro_rules! cmd {
    ($name:ident, $s:ident, $block:block) => {
		#[inline(always)] pub(crate) fn $name($s: &mut State) -> Result<(), DcErr> $block
	}
}

/// Impure command with register or array access
pub(crate) type CmdR = fn(&mut State, char) -> Result<(), DcErr>;
macro_rules! cmdr {
    ($name:ident, $s:ident, $r:ident, $block:block) => {
		#[inline(always)] pub(crate) fn $name($s: &mut State, $r: char) -> Result<(), DcErr> $block
	}
}

enum CmdType {
	///monadic pure function
	Fn1(fns::Mon),

	///dyadic pure function
	Fn2(fns::Dya),

	///dyadic pure function with two results
	Fn2x(fns::Dya2),

	///impure command
	Cmd(Cmd),

	///impure command with register access, consumes the next character
	CmdR(CmdR),

	///conditional macro invocation, test on (top <=> second)
	Cmp(fn(Ordering) -> bool),

	///impure command requesting an unwind
	Quit(Cmd),

	///invoke top of stack
	Exec,

	///negated comparison or host command
	Bang,

	///begin numeral
	Num,

	///begin string
	Str,

	///begin comment
	Comment,

	///no command
	Space,

	///invalid or unimplemented command
	Wrong
}

/// Direct mapping of ASCII to commands
const CMDS: [CmdType; 128] = {
	use CmdType::*;
	use fns::*;
	[
		//NUL		SOH			STX			ETX			EOT			ENQ			ACK			BEL			BS			HT			LF			VT			FF			CR			SO			SI
		Wrong,		Wrong,		Wrong,		Wrong,		Wrong,		Wrong,		Wrong,		Wrong,		Wrong,		Space,		Space,		Wrong,		Wrong,		Wrong,		Wrong,		Wrong,

		//DLE		DC1			DC2			DC3			DC4			NAK			SYN			ETB			CAN			EM			SUB			ESC			FS			GS			RS			US
		Wrong,		Wrong,		Wrong,		Wrong,		Wrong,		Wrong,		Wrong,		Wrong,		Wrong,		Wrong,		Wrong,		Wrong,		Wrong,		Wrong,		Wrong,		Wrong,

		//SP		!			"			#			$			%			&			'			(			)			*			+			,			-			.			/
		Space,		Bang,		Wrong,		Comment,	Wrong,		Fn2(r#mod),	Wrong,		Wrong,		Wrong,		Wrong,		Fn2(mul),	Fn2(add),	Wrong,		Fn2(sub),	Num,		Fn2(div),

		//0			1			2			3			4			5			6			7			8			9			:			;			<			=			>			?
		Num,		Num,		Num,		Num,		Num,		Num,		Num,		Num,		Num,		Num,		CmdR(ast),	CmdR(afe),	Cmp(Ordering::is_lt),	Cmp(Ordering::is_eq),	Cmp(Ordering::is_gt),	Wrong,

		//@			A			B			C			D			E			F			G			H			I			J			K			L			M			N			O
		Wrong,		Num,		Num,		Num,		Num,		Num,		Num,		Wrong,		Wrong,		Cmd(gti),	Wrong,		Cmd(gtk),	CmdR(rpo),	Wrong,		Wrong,		Cmd(gto),

		//P			Q			R			S			T			U			V			W			X			Y			Z			[			\			]			^			_
		Cmd(dmp),	Quit(qun),	Wrong,		CmdR(rpu),	Wrong,		Wrong,		Wrong,		Wrong,		Cmd(tsc),	Wrong,		Cmd(tln),	Str,		Wrong,		Wrong,		Fn2(pow),	Num,

		//`			a			b			c			d			e			f			g			h			i			j			k			l			m			n			o
		Wrong,		Cmd(chr),	Wrong,		Cmd(clr),	Cmd(dup),	Wrong,		Cmd(pfa),	Wrong,		Wrong,		Cmd(sti),	Wrong,		Cmd(stk),	CmdR(rld),	Wrong,		Cmd(prn),	Cmd(sto),

		//p			q			r			s			t			u			v			w			x			y			z			{			|			}			~			DEL
		Cmd(prp),	Quit(qui),	Cmd(swp),	CmdR(rst),	Wrong,		Wrong,		Fn1(sqrt),	Wrong,		Exec,		Wrong,		Cmd(dep),	Wrong,		Wrong,		Wrong,		Fn2x(euc),	Wrong
	]
};

/// Human-readable names of the documented instructions, for messages
static NAMES: phf::Map<char, &'static str> = phf::phf_map! {
	'+' => "add", '-' => "subtract", '*' => "multiply", '/' => "divide", '%' => "remainder",
	'~' => "divide with remainder", '^' => "power", 'v' => "square root",
	'|' => "modular exponentiation", '?' => "read input",
	'<' => "invoke if less", '=' => "invoke if equal", '>' => "invoke if greater", '!' => "negate or run command",
	'[' => "string", '#' => "comment",
	'a' => "to character", 'c' => "clear", 'd' => "duplicate", 'f' => "print stack",
	'i' => "set input base", 'k' => "set scale", 'o' => "set output base",
	'l' => "load register", 'L' => "pop register", 's' => "store register", 'S' => "push register",
	'n' => "print and pop", 'p' => "print", 'P' => "print raw",
	'q' => "quit", 'Q' => "quit levels", 'r' => "swap", 'x' => "execute", 'z' => "stack depth",
	'I' => "get input base", 'K' => "get scale", 'O' => "get output base",
	'X' => "scale of", 'Z' => "length of", ':' => "array store", ';' => "array fetch",
};

/// Name of an instruction for messages
pub(crate) fn describe(c: char) -> &'static str {
	NAMES.get(&c).copied().unwrap_or("unknown instruction")
}

/// Run one instruction. `peek` is the following character, `negcmp` inverts a comparison result.
///
/// Instructions that need `peek` fail with [`DcErr::EndOfInput`] before touching the stack.
pub(crate) fn dispatch(st: &mut State, c: char, peek: Option<char>, negcmp: bool) -> Result<Ctl, DcErr> {
	use CmdType::*;
	match CMDS.get(c as usize).unwrap_or(&Wrong) {
		Space => Ok(Ctl::Okay),
		Num => Ok(Ctl::Int),
		Str => Ok(Ctl::Str),
		Comment => Ok(Ctl::Comment),
		Fn1(f) => {
			let a = st.stk.pop()?;
			st.stk.push(f(&a)?);
			Ok(Ctl::Okay)
		}
		Fn2(f) => {
			let b = st.stk.pop()?;
			let a = st.stk.pop()?;
			st.stk.push(f(&a, &b)?);
			Ok(Ctl::Okay)
		}
		Fn2x(f) => {
			let b = st.stk.pop()?;
			let a = st.stk.pop()?;
			let (y, z) = f(&a, &b)?;
			st.stk.push(y);
			st.stk.push(z);
			Ok(Ctl::Okay)
		}
		Cmd(f) => {
			f(st)?;
			Ok(Ctl::Okay)
		}
		CmdR(f) => {
			let r = peek.ok_or(EndOfInput(c))?;
			f(st, r)?;
			Ok(Ctl::EatOne)
		}
		Cmp(f) => {
			peek.ok_or(EndOfInput(c))?;
			let top = st.stk.pop()?;
			let second = st.stk.pop()?;
			if f(num_cmp(&top, &second)?) != negcmp {Ok(Ctl::EvalReg)} else {Ok(Ctl::EatOne)}
		}
		Quit(f) => {
			f(st)?;
			Ok(Ctl::Quit)
		}
		Exec => Ok(Ctl::EvalTos),
		Bang => {
			if matches!(peek, Some('<' | '=' | '>')) {Ok(Ctl::NegCmp)} else {Ok(Ctl::System)}
		}
		Wrong => Err(NotImplemented(c))
	}
}

cmd!(chr, s, {
	let v = s.stk.pop()?;
	s.stk.push(Value::S(v_char('a', &v)?));
	Ok(())
});

cmd!(clr, s, {
	s.stk.clear();
	Ok(())
});

cmd!(dup, s, {
	let v = s.stk.peek()?.clone();
	s.stk.push(v);
	Ok(())
});

cmd!(pfa, s, {
	for v in s.stk.iter() {
		writeln!(s.out, "{}", show(v, s.par.o()))?;
	}
	Ok(())
});

cmd!(sti, s, {
	let n = v_i(&s.stk.pop()?)?;
	s.par.set_i(n)
});

cmd!(stk, s, {
	let n = v_i(&s.stk.pop()?)?;
	s.par.set_k(n)
});

cmd!(sto, s, {
	let n = v_i(&s.stk.pop()?)?;
	s.par.set_o(n)
});

cmd!(prn, s, {
	let v = s.stk.pop()?;
	write!(s.out, "{}", show(&v, s.par.o()))?;
	Ok(())
});

cmd!(prp, s, {
	writeln!(s.out, "{}", show(s.stk.peek()?, s.par.o()))?;
	Ok(())
});

cmd!(swp, s, {
	let a = s.stk.pop()?;
	let b = s.stk.pop()?;
	s.stk.push(a);
	s.stk.push(b);
	Ok(())
});

cmd!(dep, s, {
	let d = s.stk.depth();
	s.stk.push(Value::I(Integer::from(d)));
	Ok(())
});

cmd!(gti, s, {
	s.stk.push(Value::I(Integer::from(s.par.i())));
	Ok(())
});

cmd!(gtk, s, {
	s.stk.push(Value::I(Integer::from(s.par.k().clone())));
	Ok(())
});

cmd!(gto, s, {
	s.stk.push(Value::I(Integer::from(s.par.o().clone())));
	Ok(())
});

cmd!(dmp, s, {
	match s.stk.pop()? {
		Value::S(st) => write!(s.out, "{st}")?,
		v => write!(s.out, "{}", v_char('P', &v)?)?
	}
	Ok(())
});

cmd!(tsc, s, {
	match s.stk.pop()? {
		Value::S(_) => {
			s.stk.push(Value::I(Integer::from(0u8)));
			Ok(())
		}
		_ => Err(NotImplemented('X'))
	}
});

cmd!(tln, s, {
	let v = s.stk.pop()?;
	let n = length(&v, s.par.o());
	s.stk.push(Value::I(Integer::from(n)));
	Ok(())
});

cmd!(qui, s, {
	s.unwind = 1;
	Ok(())
});

cmd!(qun, s, {
	let n = v_i(&s.stk.pop()?)?;
	if n > 0 {
		s.unwind = usize::try_from(&n).unwrap_or(usize::MAX) - 1;
		Ok(())
	}
	else {
		Err(InvalidParam('Q', format!("level count must be at least 1, got {n}")))
	}
});

cmdr!(rld, s, r, {
	let v = s.regs.get(&r).ok_or(MissingKey(r, None))?.val.clone();
	s.stk.push(v);
	Ok(())
});

cmdr!(rpo, s, r, {
	let v = s.regs.get_mut(&r).ok_or(MissingKey(r, None))?.pop();
	s.stk.push(v);
	Ok(())
});

cmdr!(rst, s, r, {
	let v = s.stk.pop()?;
	s.regs.entry(r).or_default().val = v;
	Ok(())
});

cmdr!(rpu, s, r, {
	let v = s.stk.pop()?;
	s.regs.entry(r).or_default().push(v);
	Ok(())
});

cmdr!(ast, s, r, {
	let i = v_i(&s.stk.pop()?)?;
	let v = s.stk.pop()?;
	let n = Natural::try_from(&i).map_err(|_| InvalidParam(':', format!("negative array index {i}")))?;
	s.arrs.entry(r).or_default().store(n, v);
	Ok(())
});

cmdr!(afe, s, r, {
	let i = v_i(&s.stk.pop()?)?;
	let v = Natural::try_from(&i).ok()
		.and_then(|n| s.arrs.get(&r)?.fetch(&n))
		.ok_or_else(|| MissingKey(r, Some(i.clone())))?
		.clone();
	s.stk.push(v);
	Ok(())
});
