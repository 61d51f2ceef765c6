//! Code assignment for error families.
//!
//! # Code Ranges
//!
//! In [`CodeMode::Unique`] every family draws `len + 2` consecutive codes
//! from one counter:
//!
//! | Family          | begin | members | end |
//! |-----------------|-------|---------|-----|
//! | `args`  (1)     | 0     | 1       | 2   |
//! | `parse` (2)     | 3     | 4, 5    | 6   |
//! | `bool`  (1)     | 7     | 8       | 9   |
//!
//! In [`CodeMode::Local`] each family starts over at the configured first
//! code, so `args`, `parse` and `bool` would all start at `0`.
//!
//! The counter is an `AtomicI64` advanced with a checked `fetch_update`,
//! so concurrent registrations still get disjoint ranges and the last
//! family may end exactly at `i32::MAX`.

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::OnceLock;

use crate::config::{CodeMode, RegistryConfig};
use crate::error::{RegistryError, RegistryResult};
use crate::{kdebug, Family};

/// Assigns code ranges to families.
///
/// Most programs use the process-wide [`Registry::global`] through
/// `error_family!`; private registries are useful for isolated numbering.
#[derive(Debug)]
pub struct Registry {
    config: RegistryConfig,
    next: AtomicI64,
    registered: AtomicUsize,
}

impl Registry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            next: AtomicI64::new(i64::from(config.first_code)),
            registered: AtomicUsize::new(0),
        }
    }

    /// The process-wide registry, configured from the environment on first
    /// use.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            let config = RegistryConfig::from_env();
            kdebug!("global registry: {:?}", config);
            Registry::new(config)
        })
    }

    #[inline]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    #[inline]
    pub fn mode(&self) -> CodeMode {
        self.config.mode
    }

    /// Next code the counter will hand out (unique mode).
    #[inline]
    pub fn next_code(&self) -> i64 {
        self.next.load(Ordering::SeqCst)
    }

    /// Number of families defined so far.
    #[inline]
    pub fn registered(&self) -> usize {
        self.registered.load(Ordering::Relaxed)
    }

    /// Declare a family and assign its code range.
    ///
    /// `members` must be non-empty with distinct, non-empty names.
    pub fn define(
        &self,
        name: &'static str,
        members: &'static [&'static str],
    ) -> RegistryResult<Family> {
        validate(name, members)?;

        let exhausted = RegistryError::CodeSpaceExhausted { family: name };

        // begin + members + end
        let span = i64::try_from(members.len()).map_err(|_| exhausted.clone())? + 2;
        let fits = |begin: i64| begin + span - 1 <= i64::from(i32::MAX);

        let begin = match self.config.mode {
            CodeMode::Unique => self
                .next
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |cur| {
                    fits(cur).then_some(cur + span)
                })
                .map_err(|_| exhausted.clone())?,
            CodeMode::Local => i64::from(self.config.first_code),
        };
        if !fits(begin) {
            return Err(exhausted);
        }
        let begin = i32::try_from(begin).map_err(|_| exhausted)?;

        let family = Family::new(name, members, begin);
        self.registered.fetch_add(1, Ordering::Relaxed);
        kdebug!("registered {} ({} members, {:?})", family, family.len(), self.config.mode);
        Ok(family)
    }
}

fn validate(name: &'static str, members: &'static [&'static str]) -> RegistryResult<()> {
    if name.is_empty() {
        return Err(RegistryError::EmptyFamilyName);
    }
    if members.is_empty() {
        return Err(RegistryError::EmptyFamily { family: name });
    }
    for (i, &member) in members.iter().enumerate() {
        if member.is_empty() {
            return Err(RegistryError::EmptyMemberName { family: name });
        }
        if members[..i].contains(&member) {
            return Err(RegistryError::DuplicateMember { family: name, member });
        }
    }
    Ok(())
}

/// Declare a family in the global registry.
pub fn define_family(
    name: &'static str,
    members: &'static [&'static str],
) -> RegistryResult<Family> {
    Registry::global().define(name, members)
}

/// Registration path for `error_family!`. The macro grammar already rules
/// out empty and duplicate member lists, so failure here means the code
/// space is exhausted.
#[doc(hidden)]
#[track_caller]
pub fn __register_family(name: &'static str, members: &'static [&'static str]) -> Family {
    match define_family(name, members) {
        Ok(family) => family,
        Err(e) => panic!("cannot register error family {}: {}", name, e),
    }
}
