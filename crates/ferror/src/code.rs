/// A numeric error code drawn from a registered family.
///
/// Codes are plain `i32` values so a `Result<T, ErrorCode>` stays small
/// and `Copy`-friendly. The symbolic name is not stored in the code; it
/// is recovered through a [`Family`](crate::Family) or
/// [`Group`](crate::Group) lookup.
///
/// ```
/// use ferror::ErrorCode;
/// let code = ErrorCode::new(7);
/// assert_eq!(code.raw(), 7);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ErrorCode(i32);

impl ErrorCode {
    /// Wrap a raw code.
    #[inline]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl From<ErrorCode> for i32 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

impl core::fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ErrorCode({})", self.0)
    }
}

impl core::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "error code {}", self.0)
    }
}

impl std::error::Error for ErrorCode {}
