//! Errors raised while registering error families.

use core::fmt;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Reasons a family declaration is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Family name is empty
    EmptyFamilyName,

    /// Family declares no members
    EmptyFamily { family: &'static str },

    /// Member name is empty
    EmptyMemberName { family: &'static str },

    /// Same member name declared twice in one family
    DuplicateMember {
        family: &'static str,
        member: &'static str,
    },

    /// Not enough `i32` codes left for the family's range
    CodeSpaceExhausted { family: &'static str },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::EmptyFamilyName => write!(f, "family name is empty"),
            RegistryError::EmptyFamily { family } => {
                write!(f, "family {} has no members", family)
            }
            RegistryError::EmptyMemberName { family } => {
                write!(f, "family {} has an empty member name", family)
            }
            RegistryError::DuplicateMember { family, member } => {
                write!(f, "family {} declares {} twice", family, member)
            }
            RegistryError::CodeSpaceExhausted { family } => {
                write!(f, "no error codes left for family {}", family)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = RegistryError::DuplicateMember { family: "parse", member: "Overflow" };
        assert_eq!(format!("{}", e), "family parse declares Overflow twice");

        let e = RegistryError::CodeSpaceExhausted { family: "io" };
        assert_eq!(format!("{}", e), "no error codes left for family io");
    }
}
