//! Dispatch of error codes across several families.

use crate::{kdebug, ErrorCode, Family};

/// Anything that can turn an error code back into its symbolic name.
///
/// Implemented by [`Family`] (its own members only) and [`Group`] (any
/// member of any family in the group).
pub trait Resolve {
    fn resolve(&self, code: ErrorCode) -> Option<&'static str>;
}

impl Resolve for Family {
    #[inline]
    fn resolve(&self, code: ErrorCode) -> Option<&'static str> {
        self.name_of(code)
    }
}

impl<R: Resolve + ?Sized> Resolve for &R {
    #[inline]
    fn resolve(&self, code: ErrorCode) -> Option<&'static str> {
        (**self).resolve(code)
    }
}

/// An ordered list of families resolved as one.
///
/// Lookup walks the families in declaration order and asks the first one
/// whose range contains the code. With [`CodeMode::Unique`](crate::CodeMode)
/// at most one family can contain a given code. With local numbering,
/// ranges may overlap and the earliest family wins; [`Group::overlapping`]
/// reports such pairs and construction logs them at debug level, keeping
/// stderr clear for the entry adapter's diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    families: Vec<Family>,
}

impl Group {
    pub fn new<I>(families: I) -> Self
    where
        I: IntoIterator<Item = Family>,
    {
        let group = Self { families: families.into_iter().collect() };
        kdebug!("group of {} families", group.families.len());
        for (a, b) in group.overlapping() {
            kdebug!("families {} and {} share codes; {} wins lookups", a, b, a.name());
        }
        group
    }

    /// Families in lookup order.
    #[inline]
    pub fn families(&self) -> &[Family] {
        &self.families
    }

    /// The first family whose range contains `code`.
    #[inline]
    pub fn family_of(&self, code: ErrorCode) -> Option<&Family> {
        self.families.iter().find(|f| f.contains(code))
    }

    /// Pairs `(earlier, later)` of families that share member codes.
    pub fn overlapping(&self) -> Vec<(&Family, &Family)> {
        let mut pairs = Vec::new();
        for (i, a) in self.families.iter().enumerate() {
            for b in &self.families[i + 1..] {
                if a.overlaps(b) {
                    pairs.push((a, b));
                }
            }
        }
        pairs
    }
}

impl Resolve for Group {
    #[inline]
    fn resolve(&self, code: ErrorCode) -> Option<&'static str> {
        self.family_of(code).and_then(|f| f.name_of(code))
    }
}

/// Compose families into a [`Group`], keeping the given order.
pub fn define_group(families: &[Family]) -> Group {
    Group::new(families.iter().copied())
}
