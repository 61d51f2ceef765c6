//! Turning a top-level [`FResult`] into a process exit.
//!
//! This is the one place a domain error becomes text: on `Err(code)` the
//! adapter writes exactly one line, `ERR: <name>`, to stderr and exits
//! with status 1. On `Ok(status)` it exits with `status`.

use std::io::{self, Write};

use crate::{ktrace, FResult, Resolve};

/// Prefix of the diagnostic line.
pub const DIAGNOSTIC_PREFIX: &str = "ERR: ";

/// Printed in place of a name when no family owns the code.
pub const UNRESOLVED_NAME: &str = "(null)";

/// Exit status for a top-level error.
pub const EXIT_ERROR: i32 = libc::EXIT_FAILURE;

/// Write the diagnostic for `result` (if any) to `out` and return the exit
/// status.
///
/// ```
/// use ferror::{report, CodeMode, Registry, RegistryConfig};
///
/// let registry = Registry::new(RegistryConfig::builtin().mode(CodeMode::Unique));
/// let args = registry.define("args", &["InvalidArgs"]).unwrap();
///
/// let mut stderr = Vec::new();
/// let status = report(Err(args.member_code(0)), &args, &mut stderr);
/// assert_eq!(status, 1);
/// assert_eq!(stderr, b"ERR: InvalidArgs\n");
/// ```
pub fn report<R, W>(result: FResult<i32>, resolver: &R, out: &mut W) -> i32
where
    R: Resolve + ?Sized,
    W: Write,
{
    match result {
        Ok(status) => status,
        Err(code) => {
            let name = resolver.resolve(code).unwrap_or(UNRESOLVED_NAME);
            // stderr may already be gone; the exit status still reports failure
            let _ = writeln!(out, "{}{}", DIAGNOSTIC_PREFIX, name);
            let _ = out.flush();
            EXIT_ERROR
        }
    }
}

/// Run `main_fn`, report its result on stderr and terminate the process.
pub fn run_entry<F, R>(main_fn: F, resolver: &R) -> !
where
    F: FnOnce() -> FResult<i32>,
    R: Resolve + ?Sized,
{
    let result = main_fn();
    let status = report(result, resolver, &mut io::stderr().lock());
    ktrace!("exiting with status {}", status);
    std::process::exit(status)
}
