//! Compile-time defaults. Environment variables override these at runtime.

cfg_if::cfg_if! {
    if #[cfg(feature = "local-codes")] {
        /// Families share one program-wide counter and never overlap.
        pub const UNIQUE_CODES: bool = false;
    } else {
        /// Families share one program-wide counter and never overlap.
        pub const UNIQUE_CODES: bool = true;
    }
}

/// First code handed out. The first family's `begin` sentinel takes it.
pub const FIRST_CODE: i32 = 0;
