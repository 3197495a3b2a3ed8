mod common;
use common::*;
use dc_lang::errors::DcErr;

#[test]
fn test_lifo() {
	let prog: String = (1..=20).map(|i| format!("{i} ")).collect::<String>() + "f";
	let expected: String = (1..=20).rev().map(|i| format!("{i}\n")).collect();
	assert_eq!(exec(&prog), expected);
}

#[test]
fn test_stack_commands() {
	assert_eq!(exec("1 2 r f"), "1\n2\n");
	assert_eq!(exec("1 2 3 c z p"), "0\n");
	assert_eq!(exec("5 d f"), "5\n5\n");
	assert_eq!(exec("7 8 z p"), "2\n");
}

#[test]
fn test_print_variants() {
	assert_eq!(exec("1n 2n"), "12");
	assert_eq!(exec("1p"), "1\n");
	assert_eq!(exec("65P [bc]P"), "Abc");
	assert_eq!(exec("65a p"), "A\n");
	assert_eq!(exec("[xyz]a p"), "x\n");
}

#[test]
fn test_p_peeks_n_pops() {
	let mut dc = Dc::new();
	dc.eval("1p").unwrap();
	assert_eq!(dc.depth(), 1);
	dc.eval("n").unwrap();
	assert_eq!(dc.depth(), 0);
	assert_eq!(dc.output(), "1\n1");
}

#[test]
fn test_lengths() {
	assert_eq!(exec("[hello]Zp"), "5\n");
	assert_eq!(exec("_15Zp"), "3\n");
	assert_eq!(exec("1.5Zp"), "2\n");
	assert_eq!(exec("[abc]Xp"), "0\n");
}

#[test]
fn test_empty_stack() {
	assert!(matches!(fail("p"), DcErr::StackEmpty));
	assert!(matches!(fail("1+"), DcErr::StackEmpty));
	assert!(matches!(fail("d"), DcErr::StackEmpty));
	assert!(matches!(fail("x"), DcErr::StackEmpty));
}

#[test]
fn test_error_keeps_prior_effects() {
	let mut dc = Dc::new();
	assert!(matches!(dc.eval("1p 1 0/ 2p"), Err(DcErr::Arith(_))));
	assert_eq!(dc.output(), "1\n");
	assert_eq!(dc.depth(), 1);
}
