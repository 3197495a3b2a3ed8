//! Host command execution for `!`

use std::process::Command;

/// Runs one literal command line in the host environment, the result is ignored
pub trait Shell {
	fn system(&mut self, line: &str);
}

/// Closures can stand in for a shell
impl<F: FnMut(&str)> Shell for F {
	fn system(&mut self, line: &str) {
		self(line)
	}
}

/// `sh -c` on the real system, blocks until the command exits
#[derive(Debug, Default, Clone, Copy)]
pub struct OsShell;

impl Shell for OsShell {
	fn system(&mut self, line: &str) {
		if let Err(e) = Command::new("sh").arg("-c").arg(line).status() {
			tracing::warn!(%e, line, "could not run command");
		}
	}
}
