//! Executable CLI wrapper

use dc_lang::structs::State;
use std::io::Read;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let mut prog = String::new();
	let paths: Vec<String> = std::env::args().skip(1).collect();
	let read = if paths.is_empty() {
		std::io::stdin().read_to_string(&mut prog).map(|_| ())
	}
	else {
		paths.iter().try_for_each(|p| {
			prog += &std::fs::read_to_string(p)?;
			Ok::<(), std::io::Error>(())
		})
	};
	if let Err(e) = read {
		eprintln!("dc: {e}");
		return ExitCode::FAILURE;
	}

	let mut st = State::default();
	let res = st.evalstr(&prog).and_then(|_| st.flush());
	if let Err(e) = res {
		let _ = st.flush();
		eprintln!("dc: {e}");
		return ExitCode::FAILURE;
	}
	ExitCode::SUCCESS
}
