//! Coded status enumerations
//!
//! The gateway reports states as bare integers. A coded status is a closed
//! enumeration where every member carries a unique code, a name and a fixed
//! description, plus one fallback member (sentinel code `-1`) that absorbs any
//! code the enumeration does not know.
//!
//! Resolution is total: it scans the members in declaration order and returns
//! the first whose code matches, otherwise the fallback. An unknown code is a
//! classification, never an error.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Sentinel code carried by the fallback member of every coded status
pub const UNRECOGNIZED_CODE: i32 = -1;

/// A closed enumeration of statuses bound to integer codes
pub trait CodedStatus: Copy + Eq + fmt::Debug + 'static {
    /// Every member, in declaration order (fallback included)
    const ALL: &'static [Self];

    /// Member returned for codes that match nothing else
    const FALLBACK: Self;

    fn code(self) -> i32;

    fn name(self) -> &'static str;

    fn description(self) -> &'static str;

    /// Maps a raw code to its member, falling back for unknown codes
    fn resolve(code: i32) -> Self {
        match Self::ALL.iter().copied().find(|status| status.code() == code) {
            Some(status) => status,
            None => {
                tracing::debug!(
                    code,
                    fallback = Self::FALLBACK.name(),
                    "unrecognized status code"
                );
                Self::FALLBACK
            }
        }
    }

    fn is_recognized(self) -> bool {
        self != Self::FALLBACK
    }
}

/// Declares a closed coded-status enum and its `CodedStatus` implementation
///
/// Each member is written as `Variant = code, "NAME" => "description",`.
/// The member named after `fallback` is returned for unknown codes.
///
/// Generated items: inherent `code`/`name`/`description`/`resolve`,
/// `Display` (the name), `FromStr` (case-insensitive name) and `Serialize`
/// (the name).
///
/// The fallback must carry `UNRECOGNIZED_CODE` and member codes must be
/// unique; both are checked at compile time.
///
/// ```compile_fail
/// core_kernel::define_status! {
///     enum Door {
///         Open = 1, "OPEN" => "OPEN",
///         Shut = 1, "SHUT" => "SHUT",
///         Unknown = -1, "UNKNOWN" => "UNKNOWN",
///     }
///     fallback Unknown;
/// }
/// ```
///
/// ```compile_fail
/// core_kernel::define_status! {
///     enum Door {
///         Open = 1, "OPEN" => "OPEN",
///         Unknown = 0, "UNKNOWN" => "UNKNOWN",
///     }
///     fallback Unknown;
/// }
/// ```
#[macro_export]
macro_rules! define_status {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal, $label:literal => $desc:literal,
            )+
        }
        fallback $fallback:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Returns the gateway code bound to this status
            pub const fn code(self) -> i32 {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            /// Returns the canonical upper-case name
            pub const fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            /// Returns the fixed human-readable description
            pub const fn description(self) -> &'static str {
                match self {
                    $( $name::$variant => $desc, )+
                }
            }

            /// Maps a raw gateway code to a status; never fails
            pub fn resolve(code: i32) -> Self {
                <Self as $crate::status::CodedStatus>::resolve(code)
            }
        }

        const _: () = {
            assert!(
                $name::code($name::$fallback) == $crate::status::UNRECOGNIZED_CODE,
                concat!(stringify!($name), ": fallback must carry the sentinel code")
            );

            let all: &[$name] = &[ $( $name::$variant, )+ ];
            let mut i = 0;
            while i < all.len() {
                let mut j = i + 1;
                while j < all.len() {
                    assert!(
                        $name::code(all[i]) != $name::code(all[j]),
                        concat!(stringify!($name), ": duplicate status code")
                    );
                    j += 1;
                }
                i += 1;
            }
        };

        impl $crate::status::CodedStatus for $name {
            const ALL: &'static [Self] = &[ $( $name::$variant, )+ ];
            const FALLBACK: Self = $name::$fallback;

            fn code(self) -> i32 {
                $name::code(self)
            }

            fn name(self) -> &'static str {
                $name::name(self)
            }

            fn description(self) -> &'static str {
                $name::description(self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($name::name(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                <Self as $crate::status::CodedStatus>::ALL
                    .iter()
                    .copied()
                    .find(|status| $name::name(*status).eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| $crate::error::CoreError::invalid_value(stringify!($name), s))
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
            where
                Ser: $crate::__serde::Serializer,
            {
                serializer.serialize_str($name::name(*self))
            }
        }
    };
}

/// A raw status code as reported by the gateway, typed by its enumeration
///
/// The raw code is kept verbatim (including unknown codes); the classified
/// status is resolved on access.
pub struct StatusCode<S> {
    code: i32,
    _kind: PhantomData<fn() -> S>,
}

impl<S: CodedStatus> StatusCode<S> {
    pub fn new(code: i32) -> Self {
        Self {
            code,
            _kind: PhantomData,
        }
    }

    /// Returns the code exactly as reported
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Returns the classified status
    pub fn status(&self) -> S {
        S::resolve(self.code)
    }

    pub fn is_recognized(&self) -> bool {
        self.status().is_recognized()
    }
}

impl<S> Clone for StatusCode<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for StatusCode<S> {}

impl<S> PartialEq for StatusCode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl<S> Eq for StatusCode<S> {}

impl<S> Hash for StatusCode<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl<S: CodedStatus> fmt::Debug for StatusCode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusCode")
            .field("code", &self.code)
            .field("status", &self.status())
            .finish()
    }
}

impl<S: CodedStatus> fmt::Display for StatusCode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.status().name(), self.code)
    }
}

impl<S: CodedStatus> From<i32> for StatusCode<S> {
    fn from(code: i32) -> Self {
        Self::new(code)
    }
}

impl<S> Serialize for StatusCode<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_i32(self.code)
    }
}

impl<'de, S: CodedStatus> Deserialize<'de> for StatusCode<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        i32::deserialize(deserializer).map(Self::new)
    }
}
