/// Declare an error family as a fieldless enum.
///
/// Each variant is a member; the family is registered in the global
/// registry the first time any of its codes is needed.
///
/// ```ignore
/// error_family! {
///     /// Failures of `parse_int`.
///     pub enum ParseIntError { InvalidChar, ArithmeticOverflow }
/// }
///
/// fn digit(c: char) -> FResult<u32> {
///     match c.to_digit(10) {
///         Some(d) => Ok(d),
///         None => Err(ParseIntError::InvalidChar.into()),
///     }
/// }
/// ```
///
/// Generated items:
///
/// | Item                          | Meaning |
/// |-------------------------------|---------|
/// | `Enum::family()`              | the registered `&'static Family` |
/// | `Enum::ALL`                   | members in declaration order |
/// | `variant.code()`              | the member's `ErrorCode` |
/// | `variant.name()`              | the member's symbolic name |
/// | `Enum::from_code(code)`       | reverse lookup |
/// | `From<Enum> for ErrorCode`    | so `Err(Enum::Variant)?` works |
#[macro_export]
macro_rules! error_family {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $($member:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($member),+
        }

        #[allow(dead_code)]
        impl $name {
            /// Members in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$member),+];

            const NAMES: &'static [&'static str] = &[$(stringify!($member)),+];

            /// The registered family, defined on first use.
            pub fn family() -> &'static $crate::Family {
                static FAMILY: ::std::sync::OnceLock<$crate::Family> =
                    ::std::sync::OnceLock::new();
                FAMILY.get_or_init(|| $crate::__register_family(stringify!($name), Self::NAMES))
            }

            #[inline]
            pub fn code(self) -> $crate::ErrorCode {
                Self::family().member_code(self as usize)
            }

            #[inline]
            pub fn name(self) -> &'static str {
                Self::NAMES[self as usize]
            }

            /// The member owning `code`, if it belongs to this family.
            pub fn from_code(code: $crate::ErrorCode) -> ::core::option::Option<Self> {
                Self::family()
                    .index_of(code)
                    .and_then(|i| Self::ALL.get(i).copied())
            }
        }

        impl ::core::convert::From<$name> for $crate::ErrorCode {
            #[inline]
            fn from(member: $name) -> Self {
                member.code()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

/// Declare a function returning a `&'static Group` over `error_family!`
/// enums, in the given lookup order. Families may be given by path.
///
/// ```ignore
/// error_group!(pub fn err_to_string = [ArgsError, ParseIntError, parse::ParseBoolError];);
///
/// assert_eq!(err_to_string().resolve(ParseIntError::InvalidChar.code()), Some("InvalidChar"));
/// ```
#[macro_export]
macro_rules! error_group {
    ($(#[$meta:meta])* $vis:vis fn $name:ident = [$($family:path),+ $(,)?];) => {
        $(#[$meta])*
        $vis fn $name() -> &'static $crate::Group {
            static GROUP: ::std::sync::OnceLock<$crate::Group> = ::std::sync::OnceLock::new();
            GROUP.get_or_init(|| $crate::Group::new([$(*<$family>::family()),+]))
        }
    };
}

/// Early-return `Err(code)` if a condition is false.
///
/// ```ignore
/// guard!(args.len() == 2, ArgsError::InvalidArgs);
/// ```
#[macro_export]
macro_rules! guard {
    ($cond:expr, $code:expr $(,)?) => {
        if !$cond {
            return ::core::result::Result::Err(
                ::core::convert::Into::<$crate::ErrorCode>::into($code),
            );
        }
    };
}

/// Yield the payload of an `FResult`, or return its error code from the
/// enclosing function unchanged.
///
/// Equivalent to `?` on `FResult`, spelled out so that no `From`
/// conversion can apply to the error.
///
/// ```ignore
/// let n = propagate!(parse_int(&args[1]));
/// ```
#[macro_export]
macro_rules! propagate {
    ($result:expr $(,)?) => {
        match $result {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(code) => {
                return ::core::result::Result::Err(code);
            }
        }
    };
}

/// Evaluate an `FResult` once and run one of two branches.
///
/// ```ignore
/// branch_ok!(parse_int(s),
///     n => println!("parsed {}", n),
///     code => println!("failed: {:?}", err_to_string().resolve(code)),
/// );
/// ```
#[macro_export]
macro_rules! branch_ok {
    ($result:expr, $value:pat => $body:expr, $code:pat => $fallback:expr $(,)?) => {
        match $result {
            ::core::result::Result::Ok($value) => $body,
            ::core::result::Result::Err($code) => $fallback,
        }
    };
}

/// Generate `fn main()` around a fallible entry function.
///
/// The entry receives the command-line arguments (lossily converted to
/// UTF-8); the `envp` form also receives the environment. Errors are
/// reported through `resolver` by [`run_entry`](crate::run_entry).
///
/// ```ignore
/// wrap_main!(actual_main, err_to_string());
///
/// fn actual_main(args: &[String]) -> FResult<i32> {
///     guard!(args.len() == 2, ArgsError::InvalidArgs);
///     Ok(0)
/// }
/// ```
#[macro_export]
macro_rules! wrap_main {
    (envp $entry:path, $resolver:expr $(,)?) => {
        fn main() {
            let args: ::std::vec::Vec<::std::string::String> = ::std::env::args_os()
                .map(|a| a.to_string_lossy().into_owned())
                .collect();
            let vars: ::std::vec::Vec<(::std::string::String, ::std::string::String)> =
                ::std::env::vars_os()
                    .map(|(k, v)| (k.to_string_lossy().into_owned(), v.to_string_lossy().into_owned()))
                    .collect();
            $crate::run_entry(|| $entry(&args, &vars), $resolver)
        }
    };
    ($entry:path, $resolver:expr $(,)?) => {
        fn main() {
            let args: ::std::vec::Vec<::std::string::String> = ::std::env::args_os()
                .map(|a| a.to_string_lossy().into_owned())
                .collect();
            $crate::run_entry(|| $entry(&args), $resolver)
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{ErrorCode, FResult, Resolve, ResultExt};
    use std::cell::Cell;

    crate::error_family! {
        /// Digit parsing failures.
        pub enum ParseError { InvalidChar, Overflow }
    }

    crate::error_family! {
        enum ArgsError { InvalidArgs, }
    }

    crate::error_group!(fn all_errors = [ArgsError, ParseError];);

    mod net {
        crate::error_family! {
            pub enum NetError { Timeout, Reset }
        }
    }

    crate::error_group!(fn with_paths = [self::ArgsError, net::NetError];);

    fn parse(s: &str) -> FResult<i32> {
        let mut n: i32 = 0;
        for c in s.chars() {
            let d = match c.to_digit(10) {
                Some(d) => d as i32,
                None => return Err(ParseError::InvalidChar.into()),
            };
            n = match n.checked_mul(10).and_then(|n| n.checked_add(d)) {
                Some(n) => n,
                None => return Err(ParseError::Overflow.into()),
            };
        }
        Ok(n)
    }

    #[test]
    fn family_names_members() {
        let family = ParseError::family();
        assert_eq!(family.name(), "ParseError");
        assert_eq!(family.len(), 2);
        assert_eq!(family.name_of(ParseError::InvalidChar.code()), Some("InvalidChar"));
        assert_eq!(family.name_of(ParseError::Overflow.code()), Some("Overflow"));
        assert_eq!(ParseError::Overflow.name(), "Overflow");
        assert_eq!(ParseError::InvalidChar.to_string(), "InvalidChar");
    }

    #[test]
    fn family_is_registered_once() {
        assert!(std::ptr::eq(ParseError::family(), ParseError::family()));
        assert_eq!(ParseError::InvalidChar.code(), ParseError::InvalidChar.code());
    }

    #[test]
    fn from_code_roundtrip() {
        for &member in ParseError::ALL {
            assert_eq!(ParseError::from_code(member.code()), Some(member));
        }
        if crate::Registry::global().mode() == crate::CodeMode::Unique {
            assert_eq!(ParseError::from_code(ArgsError::InvalidArgs.code()), None);
        }
        assert_eq!(ParseError::from_code(ParseError::family().end()), None);
    }

    #[test]
    fn global_families_are_disjoint() {
        if crate::Registry::global().mode() == crate::CodeMode::Unique {
            assert!(!ParseError::family().overlaps(ArgsError::family()));
            assert_ne!(ParseError::InvalidChar.code(), ArgsError::InvalidArgs.code());
        }
    }

    #[test]
    fn group_macro_resolves() {
        let group = all_errors();
        assert_eq!(group.families().len(), 2);
        assert_eq!(group.resolve(ArgsError::InvalidArgs.code()), Some("InvalidArgs"));
        assert!(std::ptr::eq(group, all_errors()));
        if crate::Registry::global().mode() == crate::CodeMode::Unique {
            assert_eq!(group.resolve(ParseError::Overflow.code()), Some("Overflow"));
        }
    }

    #[test]
    fn group_macro_accepts_paths() {
        let group = with_paths();
        assert_eq!(group.families()[1].name(), "NetError");
        assert_eq!(group.resolve(ArgsError::InvalidArgs.code()), Some("InvalidArgs"));
        if crate::Registry::global().mode() == crate::CodeMode::Unique {
            assert_eq!(group.resolve(net::NetError::Reset.code()), Some("Reset"));
        }
    }

    #[test]
    fn parse_literals() {
        assert_eq!(parse("123"), Ok(123));
        assert_eq!(parse("12a"), Err(ParseError::InvalidChar.code()));
        assert_eq!(parse("99999999999"), Err(ParseError::Overflow.code()));
    }

    #[test]
    fn propagate_forwards_code_unchanged() {
        fn wrapper(s: &str) -> FResult<i32> {
            let n = crate::propagate!(parse(s));
            Ok(n + 1)
        }
        assert_eq!(wrapper("41"), Ok(42));
        assert_eq!(wrapper("12a"), parse("12a"));
        assert_eq!(wrapper("12a").unwrap_code(), ParseError::InvalidChar.code());
    }

    #[test]
    fn propagate_stops_execution() {
        let reached = Cell::new(false);
        let f = || -> FResult<()> {
            let _: i32 = crate::propagate!(Err(ErrorCode::new(77)));
            reached.set(true);
            Ok(())
        };
        assert_eq!(f(), Err(ErrorCode::new(77)));
        assert!(!reached.get());
    }

    #[test]
    fn question_mark_agrees_with_propagate() {
        fn wrapper(s: &str) -> FResult<i32> {
            Ok(parse(s)? * 2)
        }
        fn raise() -> FResult<()> {
            Err::<(), _>(ParseError::Overflow)?;
            Ok(())
        }
        assert_eq!(wrapper("21"), Ok(42));
        assert_eq!(wrapper("x"), Err(ParseError::InvalidChar.code()));
        assert_eq!(raise(), Err(ParseError::Overflow.code()));
    }

    #[test]
    fn guard_short_circuits() {
        let after = Cell::new(0);
        let check = |ok: bool| -> FResult<()> {
            crate::guard!(ok, ArgsError::InvalidArgs);
            after.set(after.get() + 1);
            Ok(())
        };

        assert_eq!(check(false), Err(ArgsError::InvalidArgs.code()));
        assert_eq!(after.get(), 0);
        assert_eq!(check(true), Ok(()));
        assert_eq!(after.get(), 1);
    }

    #[test]
    fn guard_accepts_raw_codes() {
        fn check(n: i32) -> FResult<i32> {
            crate::guard!(n >= 0, ErrorCode::new(5));
            Ok(n)
        }
        assert_eq!(check(-1), Err(ErrorCode::new(5)));
        assert_eq!(check(1), Ok(1));
    }

    #[test]
    fn branch_ok_evaluates_once() {
        let calls = Cell::new(0);
        let counted = |s: &str| {
            calls.set(calls.get() + 1);
            parse(s)
        };

        let text = crate::branch_ok!(counted("7"),
            n => format!("value {}", n),
            code => format!("error {:?}", code),
        );
        assert_eq!(text, "value 7");

        let text = crate::branch_ok!(counted("?"),
            n => format!("value {}", n),
            code => ParseError::family().resolve(code).unwrap_or("?").to_string(),
        );
        assert_eq!(text, "InvalidChar");
        assert_eq!(calls.get(), 2);
    }
}
