mod common;
use common::*;
use dc_lang::errors::DcErr;
use dc_lang::structs::Value;

#[test]
fn test_store_and_load() {
	let mut dc = Dc::new();
	dc.eval("5sR lRp").unwrap();
	assert_eq!(dc.output(), "5\n");
	let r = dc.st.register('R').unwrap();
	assert_eq!(r.val, Value::I(5.into()));
	assert_eq!(r.saved_depth(), 0);
}

#[test]
fn test_push_and_pop() {
	assert_eq!(exec("1sR 2SR lRp LRp lRp"), "2\n2\n1\n");
	assert_eq!(exec("7SX LXp lXp"), "7\n0\n");
}

#[test]
fn test_pop_restores_exactly() {
	let mut dc = Dc::new();
	dc.eval("[keep]sR 9SR LR").unwrap();
	assert_eq!(dc.st.register('R').unwrap().val, Value::from("keep"));
	assert_eq!(dc.st.stack().iter().next(), Some(&Value::I(9.into())));
}

#[test]
fn test_any_character_names_a_register() {
	assert_eq!(exec("3s  l p"), "3\n");
	assert_eq!(exec("4sé lép"), "4\n");
	assert_eq!(exec("5s\n l\np"), "5\n");
}

#[test]
fn test_missing_register() {
	assert!(matches!(fail("lR"), DcErr::MissingKey('R', None)));
	assert!(matches!(fail("LR"), DcErr::MissingKey('R', None)));
	assert!(matches!(fail("2 1<R"), DcErr::MissingKey('R', None)));
}

#[test]
fn test_register_needs_name() {
	for prog in ["1s", "1S", "l", "L", "1 2:", "1;"] {
		assert!(matches!(fail(prog), DcErr::EndOfInput(_)), "{prog}");
	}
}

#[test]
fn test_arrays() {
	assert_eq!(exec("42 3:A 3;Ap"), "42\n");
	assert_eq!(exec("[x] 100000000000000000000:A 100000000000000000000;Ap"), "x\n");
	assert_eq!(exec("1 0:A 2 0:A 0;Ap"), "2\n");
	assert_eq!(exec("1 2.9:A 2;Ap"), "1\n");
}

#[test]
fn test_array_missing_index() {
	assert!(matches!(fail("42 3:A 4;A"), DcErr::MissingKey('A', Some(_))));
	assert!(matches!(fail("0;B"), DcErr::MissingKey('B', Some(_))));
	assert!(matches!(fail("1 3:A _1;A"), DcErr::MissingKey('A', Some(_))));
}

#[test]
fn test_array_negative_index() {
	assert!(matches!(fail("1 _1:A"), DcErr::InvalidParam(':', _)));
}

#[test]
fn test_arrays_and_registers_are_separate() {
	assert!(matches!(fail("1sA 0;A"), DcErr::MissingKey('A', Some(_))));
	assert!(matches!(fail("1 0:A lA"), DcErr::MissingKey('A', None)));
}

#[test]
fn test_register_macro() {
	assert_eq!(exec("[[hi]p]sm lmx"), "hi\n");
}
