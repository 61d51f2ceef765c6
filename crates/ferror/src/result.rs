//! The tagged result: a payload or an [`ErrorCode`].
//!
//! `FResult<T>` is the native `Result<T, ErrorCode>`, so the usual
//! combinators, `?` and the `#[must_use]` lint all apply. [`ResultExt`]
//! adds the tag-oriented helpers used around the entry adapter and in
//! code that branches on the variant explicitly.

use crate::ErrorCode;

/// Convenience Result alias.
pub type FResult<T> = Result<T, ErrorCode>;

/// Which side of an [`FResult`] is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Error,
    Value,
}

/// Tag inspection and checked extraction for [`FResult`].
///
/// ```
/// use ferror::{ErrorCode, FResult, ResultExt, Variant};
///
/// let ok: FResult<u8> = Ok(3);
/// assert_eq!(ok.variant(), Variant::Value);
/// assert_eq!(ok.bind_if_ok(), (Some(&3), true));
///
/// let err: FResult<u8> = Err(ErrorCode::new(12));
/// assert!(err.is_error());
/// assert_eq!(err.code(), Some(ErrorCode::new(12)));
/// ```
pub trait ResultExt<T> {
    fn variant(&self) -> Variant;

    fn is_error(&self) -> bool;

    /// The error code, or `None` for a value.
    fn code(&self) -> Option<ErrorCode>;

    /// Test-and-extract in one step. The receiver is only borrowed, so the
    /// caller can still read the code from it in the fallback branch.
    fn bind_if_ok(&self) -> (Option<&T>, bool);

    /// The payload.
    ///
    /// # Panics
    ///
    /// If the result holds an error code.
    fn unwrap_value(self) -> T;

    /// The error code.
    ///
    /// # Panics
    ///
    /// If the result holds a value.
    fn unwrap_code(self) -> ErrorCode;

    /// Assert the tag, then hand the result back unchanged.
    ///
    /// # Panics
    ///
    /// If the tag is not `expected`.
    fn expect_variant(self, expected: Variant) -> Self;
}

impl<T> ResultExt<T> for FResult<T> {
    #[inline]
    fn variant(&self) -> Variant {
        match self {
            Ok(_) => Variant::Value,
            Err(_) => Variant::Error,
        }
    }

    #[inline]
    fn is_error(&self) -> bool {
        self.is_err()
    }

    #[inline]
    fn code(&self) -> Option<ErrorCode> {
        self.as_ref().err().copied()
    }

    #[inline]
    fn bind_if_ok(&self) -> (Option<&T>, bool) {
        let value = self.as_ref().ok();
        (value, value.is_some())
    }

    #[inline]
    #[track_caller]
    fn unwrap_value(self) -> T {
        match self {
            Ok(value) => value,
            Err(code) => panic!("called `unwrap_value()` on an error result: {}", code),
        }
    }

    #[inline]
    #[track_caller]
    fn unwrap_code(self) -> ErrorCode {
        match self {
            Ok(_) => panic!("called `unwrap_code()` on a value result"),
            Err(code) => code,
        }
    }

    #[inline]
    #[track_caller]
    fn expect_variant(self, expected: Variant) -> Self {
        let found = self.variant();
        if found != expected {
            panic!("expected {:?} result, found {:?}", expected, found);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODE: ErrorCode = ErrorCode::new(4);

    #[test]
    fn predicates_on_value() {
        let r: FResult<&str> = Ok("payload");
        assert!(r.is_ok());
        assert!(!r.is_error());
        assert_eq!(r.variant(), Variant::Value);
        assert_eq!(r.code(), None);
    }

    #[test]
    fn predicates_on_error() {
        let r: FResult<&str> = Err(CODE);
        assert!(!r.is_ok());
        assert!(r.is_error());
        assert_eq!(r.variant(), Variant::Error);
        assert_eq!(r.code(), Some(CODE));
    }

    #[test]
    fn unwrap_value_roundtrip() {
        assert_eq!(Ok::<_, ErrorCode>(u64::MAX).unwrap_value(), u64::MAX);
        assert_eq!(Ok::<_, ErrorCode>(-1.5f32).unwrap_value(), -1.5);
        assert_eq!(Ok::<_, ErrorCode>(String::from("wide")).unwrap_value(), "wide");
        assert_eq!(Ok::<_, ErrorCode>([7u8; 64]).unwrap_value(), [7u8; 64]);
    }

    #[test]
    #[should_panic(expected = "called `unwrap_value()` on an error result: error code 4")]
    fn unwrap_value_on_error_panics() {
        let r: FResult<i32> = Err(CODE);
        r.unwrap_value();
    }

    #[test]
    fn unwrap_code_on_error() {
        let r: FResult<i32> = Err(CODE);
        assert_eq!(r.unwrap_code(), CODE);
    }

    #[test]
    #[should_panic(expected = "on a value result")]
    fn unwrap_code_on_value_panics() {
        let r: FResult<i32> = Ok(1);
        r.unwrap_code();
    }

    #[test]
    fn bind_if_ok_keeps_result_for_fallback() {
        let r: FResult<i32> = Err(CODE);
        match r.bind_if_ok() {
            (Some(_), _) => panic!("error result bound a value"),
            (None, ok) => {
                assert!(!ok);
                assert_eq!(r.code(), Some(CODE));
            }
        }

        let r: FResult<i32> = Ok(123);
        assert_eq!(r.bind_if_ok(), (Some(&123), true));
    }

    #[test]
    fn expect_variant_passes_through() {
        let r: FResult<i32> = Ok(5);
        assert_eq!(r.expect_variant(Variant::Value), Ok(5));
    }

    #[test]
    #[should_panic(expected = "expected Value result, found Error")]
    fn expect_variant_mismatch_panics() {
        let r: FResult<i32> = Err(CODE);
        let _ = r.expect_variant(Variant::Value);
    }
}
