//! # ferror — Family Error
//!
//! Allocation-free error propagation with registered, human-readable
//! error codes.
//!
//! ## Design
//!
//! A fallible operation returns [`FResult<T>`]: either the payload or a
//! small [`ErrorCode`]. Codes come from *families*: named, ordered lists
//! of members that a [`Registry`] numbers as one contiguous range with an
//! exclusive sentinel at each end:
//!
//! ```text
//! ParseIntError:  begin(3) │ InvalidChar(4) │ ArithmeticOverflow(5) │ end(6)
//! ```
//!
//! A [`Group`] composes families for lookup: any code maps back to its
//! owner's member name with two comparisons per family. At the top, the
//! entry adapter ([`run_entry`] / [`wrap_main!`]) prints `ERR: <name>`
//! for a failing `main` and exits with status 1.
//!
//! ## Quick Start
//!
//! ```rust
//! use ferror::{error_family, error_group, guard, propagate, FResult, Resolve};
//!
//! error_family! {
//!     pub enum ParseIntError { InvalidChar, ArithmeticOverflow }
//! }
//! error_family! {
//!     pub enum ArgsError { InvalidArgs }
//! }
//! error_group!(fn err_to_string = [ArgsError, ParseIntError];);
//!
//! fn parse_int(s: &str) -> FResult<i32> {
//!     let mut n: i32 = 0;
//!     for c in s.chars() {
//!         let d = c.to_digit(10).ok_or(ParseIntError::InvalidChar)? as i32;
//!         n = n
//!             .checked_mul(10)
//!             .and_then(|n| n.checked_add(d))
//!             .ok_or(ParseIntError::ArithmeticOverflow)?;
//!     }
//!     Ok(n)
//! }
//!
//! fn double(args: &[&str]) -> FResult<i32> {
//!     guard!(args.len() == 1, ArgsError::InvalidArgs);
//!     let n = propagate!(parse_int(args[0]));
//!     Ok(n * 2)
//! }
//!
//! assert_eq!(double(&["21"]), Ok(42));
//! assert_eq!(err_to_string().resolve(double(&["4x"]).unwrap_err()), Some("InvalidChar"));
//! assert_eq!(err_to_string().resolve(double(&[]).unwrap_err()), Some("InvalidArgs"));
//! ```
//!
//! ## Feature Flags
//!
//! | Flag          | Effect |
//! |---------------|--------|
//! | `local-codes` | Each family numbers from the first code instead of one program-wide counter |
//!
//! ## Environment
//!
//! | Variable              | Effect |
//! |-----------------------|--------|
//! | `FERROR_UNIQUE_CODES` | Overrides the numbering mode of the global registry (0/1) |
//! | `FERROR_FIRST_CODE`   | First code of the global registry |
//! | `FERROR_LOG_LEVEL`    | off, error, warn (default), info, debug, trace |
//! | `FERROR_FLUSH_EPRINT` | Flush stderr after every log line |

mod code;
mod env;
mod error;
mod family;
mod registry;
mod group;
mod result;
mod entry;
#[macro_use]
mod macros;

pub mod config;
pub mod log;

// ── Public API ────────────────────────────────────────────────────

pub use code::ErrorCode;
pub use result::{FResult, ResultExt, Variant};
pub use family::Family;
pub use registry::{define_family, Registry};
pub use group::{define_group, Group, Resolve};
pub use entry::{report, run_entry, DIAGNOSTIC_PREFIX, EXIT_ERROR, UNRESOLVED_NAME};
pub use config::{CodeMode, RegistryConfig};
pub use error::{RegistryError, RegistryResult};

#[doc(hidden)]
pub use registry::__register_family;
