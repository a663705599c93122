//! Builder contract for immutable domain values
//!
//! Every request-side value object (sender, address, phone, ...) is assembled
//! by a dedicated builder. Setters take the builder by value and return it,
//! so calls chain in any order; nothing is required before `build()`.
//!
//! `build()` borrows the builder and returns a fresh snapshot. The builder
//! stays usable afterwards and later setter calls never reach values that
//! were already built.
//!
//! # Example
//!
//! ```rust,ignore
//! let sender = SenderBuilder::new()
//!     .with_email("buyer@example.com")
//!     .with_phone(PhoneBuilder::new().with_area_code("11").with_number("999999999"))
//!     .build();
//! ```

/// Produces immutable values of type `T`
pub trait Builder<T> {
    /// Returns a new value holding a snapshot of the builder's current state
    fn build(&self) -> T;
}

/// A finished value, or something that can produce one on demand
///
/// Setters that accept nested value objects take `impl BuildInto<Child>`, so
/// callers may hand over either the child itself or a builder for it. A
/// builder is resolved immediately through its own `build()`; it is never
/// kept inside the parent.
pub trait BuildInto<T> {
    fn build_into(self) -> T;
}

impl<T> BuildInto<T> for T {
    fn build_into(self) -> T {
        self
    }
}

/// Wires a value type and its builder into the `Builder` / `BuildInto` traits
///
/// The builder must provide an inherent `fn build(&self) -> $value`.
#[macro_export]
macro_rules! buildable {
    ($value:ty, $builder:ty) => {
        impl $crate::builder::Builder<$value> for $builder {
            fn build(&self) -> $value {
                <$builder>::build(self)
            }
        }

        impl $crate::builder::BuildInto<$value> for $builder {
            fn build_into(self) -> $value {
                <$builder>::build(&self)
            }
        }

        impl $crate::builder::BuildInto<$value> for &$builder {
            fn build_into(self) -> $value {
                <$builder>::build(self)
            }
        }
    };
}
