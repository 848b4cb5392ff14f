//! A set of utilities for working with numbers in the money system.

/// Create a number.
///
/// This is mostly a wrapper around the underlying decimal type that makes it
/// easier to swap out numeric representations project-wide without having to
/// change each instance by hand, but can also be used by callers of the core
/// to create decimal amounts more seamlessly.
#[macro_export]
macro_rules! num {
    ($val:expr) => {
        rust_decimal_macros::dec!($val)
    }
}
