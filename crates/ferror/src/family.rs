use crate::ErrorCode;

/// A registered family of named error codes.
///
/// A family owns the contiguous range `begin..=end`:
///
/// ```text
///   begin      member 0   member 1   ...   member n-1    end
///   ─────┬──────────┬──────────┬─────────────────┬────────┬──
///        │ sentinel │  code    │  code           │  code  │ sentinel
/// ```
///
/// The sentinels are never valid errors, so membership is two integer
/// comparisons: `begin < code < end`.
///
/// Families are only created by a [`Registry`](crate::Registry), which
/// guarantees the whole range fits in `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Family {
    name: &'static str,
    members: &'static [&'static str],
    begin: ErrorCode,
    end: ErrorCode,
}

impl Family {
    /// Caller guarantees `begin + members.len() + 1` does not overflow.
    pub(crate) fn new(
        name: &'static str,
        members: &'static [&'static str],
        begin: i32,
    ) -> Self {
        let end = begin + members.len() as i32 + 1;
        Self {
            name,
            members,
            begin: ErrorCode::new(begin),
            end: ErrorCode::new(end),
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Lower sentinel. Not a valid error.
    #[inline]
    pub fn begin(&self) -> ErrorCode {
        self.begin
    }

    /// Upper sentinel. Not a valid error.
    #[inline]
    pub fn end(&self) -> ErrorCode {
        self.end
    }

    /// Number of members (sentinels excluded).
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// `begin < code < end`.
    #[inline]
    pub fn contains(&self, code: ErrorCode) -> bool {
        self.begin < code && code < self.end
    }

    /// Position of `code` in declaration order, if it is a member.
    #[inline]
    pub fn index_of(&self, code: ErrorCode) -> Option<usize> {
        if self.contains(code) {
            Some((code.raw() - self.begin.raw() - 1) as usize)
        } else {
            None
        }
    }

    /// Symbolic name of a member code. Sentinels and foreign codes
    /// resolve to `None`.
    ///
    /// ```
    /// use ferror::{CodeMode, Registry, RegistryConfig};
    ///
    /// let registry = Registry::new(RegistryConfig::builtin().mode(CodeMode::Unique));
    /// let parse = registry.define("parse", &["InvalidChar", "Overflow"]).unwrap();
    ///
    /// let code = parse.code_of("InvalidChar").unwrap();
    /// assert_eq!(parse.name_of(code), Some("InvalidChar"));
    /// assert_eq!(parse.name_of(parse.begin()), None);
    /// ```
    #[inline]
    pub fn name_of(&self, code: ErrorCode) -> Option<&'static str> {
        self.index_of(code).and_then(|i| self.members.get(i).copied())
    }

    /// Code of the member declared as `name`.
    pub fn code_of(&self, name: &str) -> Option<ErrorCode> {
        self.members
            .iter()
            .position(|m| *m == name)
            .and_then(|i| self.member(i))
    }

    /// Code of the member at `index` in declaration order.
    #[inline]
    pub fn member(&self, index: usize) -> Option<ErrorCode> {
        if index < self.members.len() {
            Some(ErrorCode::new(self.begin.raw() + 1 + index as i32))
        } else {
            None
        }
    }

    /// Like [`member`](Self::member), for indices known to be in range
    /// (enum discriminants generated by `error_family!`).
    ///
    /// # Panics
    ///
    /// If `index` is not a member position.
    #[inline]
    #[track_caller]
    pub fn member_code(&self, index: usize) -> ErrorCode {
        match self.member(index) {
            Some(code) => code,
            None => panic!(
                "family {} has {} members, index {} is out of range",
                self.name,
                self.members.len(),
                index
            ),
        }
    }

    /// `(code, name)` pairs in declaration order.
    pub fn members(&self) -> impl Iterator<Item = (ErrorCode, &'static str)> + '_ {
        self.members
            .iter()
            .enumerate()
            .map(move |(i, name)| (ErrorCode::new(self.begin.raw() + 1 + i as i32), *name))
    }

    /// True if some code is a member of both families.
    pub fn overlaps(&self, other: &Family) -> bool {
        self.begin.raw().max(other.begin.raw()) + 1 < self.end.raw().min(other.end.raw())
    }
}

impl core::fmt::Display for Family {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}({}..{})", self.name, self.begin.raw(), self.end.raw())
    }
}
