//! # Bitmask semantics for enumerations
//!
//! Lets selected C-like enumerations be combined with the bitwise operators `|`, `&`, `^`
//! and `!`, plus the assignment forms `|=`, `&=` and `^=`.
//!
//! ## Dependencies
//!
//! None, the generated types work in a `#[no_std]` environment.
//!
//! ## Description
//!
//! Enumerations are flag-unsafe by default: none of the bitwise operators exist for them, and
//! using one is a compile-time error. An enumeration opts in by deriving [`Bitmask`], which acts
//! as a whitelist registration. Since a Rust enumeration must never hold a bit pattern that is
//! not one of its declared discriminants, the operators do not return the enumeration itself.
//! Instead the derive generates a companion *mask* type, a transparent wrapper around the
//! enumeration's underlying integer, and every operator yields that type. The enumeration
//! remains the vocabulary of named constants, the mask carries combined values.
//!
//! A registered enumeration must be `Copy` and have only unit variants.
//!
//! For an enumeration `E` with representation `R` the derive generates:
//!
//! * `struct EMask(R)` with `new`, `from_bits` and `bits`.
//! * `E::iter()`, returning all variants in the defined order.
//! * `BitOr`, `BitAnd` and `BitXor` for every combination of `E` and `EMask`, yielding `EMask`.
//! * `Not` for `E` and `EMask`, yielding `EMask`.
//! * `BitOrAssign`, `BitAndAssign` and `BitXorAssign` on `EMask`, accepting `E` and `EMask`.
//! * `From<E>`, and [`Bitmask`] trait implementations for `E` and `EMask`.
//! * `Debug` and `Display` for `EMask`, printing the named constants whose bits are set.
//!
//! All operations are pure reinterpretations of the underlying integer, with no runtime
//! validation. The representation must be one of `u8`, `u16`, `u32` or `u64`; the convenience
//! macros widen every operand to an unsigned 64 bit value, so wider representations are
//! rejected at registration.
//!
//! ## Example
//!
//! ```rust
//! #[derive(Clone, Copy, Debug, enummask::Bitmask)]
//! #[repr(u32)]
//! enum Access {
//!     Read = 0x8000_0000,
//!     Write = 0x4000_0000
//! }
//!
//! let both = Access::Read | Access::Write;
//! let read = both & Access::Read;
//! assert_eq!(read, AccessMask::from(Access::Read));
//!
//! let mut mask = !both;
//! mask ^= Access::Read;
//! assert_eq!(mask.bits(), 0xBFFF_FFFF);
//!
//! assert_eq!(&format!("{}", both), "Read | Write");
//! ```
//!
//! Enumerations declared inside another type are registered like any other, the derive sits on
//! the enumeration itself.
//!
//! Without the registration none of the operators exist:
//!
//! ```compile_fail
//! #[derive(Clone, Copy)]
//! #[repr(u8)]
//! enum Unregistered {
//!     A = 1,
//!     B = 2
//! }
//!
//! let _ = Unregistered::A | Unregistered::B;
//! ```

#![no_std]

pub use enummask_impl::Bitmask;

/// Marks a type as participating in bitmask combination.
///
/// Implemented by [`derive(Bitmask)`](macro@Bitmask) for a registered enumeration and its
/// generated mask type, never by hand. The implementation is what distinguishes a registered
/// flag enumeration from an ordinary one.
pub trait Bitmask: Copy {
    /// The integral representation backing the bit pattern.
    type Repr: Copy;

    /// Returns the raw bit pattern.
    fn bits(self) -> Self::Repr;

    /// Returns the bit pattern zero-extended to 64 bits.
    ///
    /// The convenience macros compare through this, independent of the declared
    /// representation.
    fn bits_u64(self) -> u64;
}

/// Returns `true` if any bit of `option` is set in `var`.
///
/// ```rust
/// # #[derive(Clone, Copy, Debug, enummask::Bitmask)]
/// # #[repr(u8)]
/// # enum Flag { A = 1, B = 2 }
/// let mask = Flag::A | Flag::B;
/// assert!(enummask::flags_any!(mask, Flag::A));
/// assert!(!enummask::flags_any!(FlagMask::new(), Flag::A));
/// ```
#[macro_export]
macro_rules! flags_any {
    ($var:expr, $option:expr) => {
        $crate::Bitmask::bits_u64(($var) & ($option)) != 0
    };
}

/// Returns `true` if no bit of `option` is set in `var`.
///
/// ```rust
/// # #[derive(Clone, Copy, Debug, enummask::Bitmask)]
/// # #[repr(u8)]
/// # enum Flag { A = 1, B = 2 }
/// assert!(enummask::flags_none!(FlagMask::from(Flag::A), Flag::B));
/// assert!(!enummask::flags_none!(Flag::A | Flag::B, Flag::B));
/// ```
#[macro_export]
macro_rules! flags_none {
    ($var:expr, $option:expr) => {
        $crate::Bitmask::bits_u64(($var) & ($option)) == 0
    };
}

/// Returns `true` if every bit of `option` is set in `var`.
///
/// ```rust
/// # #[derive(Clone, Copy, Debug, enummask::Bitmask)]
/// # #[repr(u8)]
/// # enum Flag { A = 1, B = 2, Both = 3 }
/// assert!(enummask::flags_all!(Flag::A | Flag::B, Flag::Both));
/// assert!(!enummask::flags_all!(FlagMask::from(Flag::A), Flag::Both));
/// ```
#[macro_export]
macro_rules! flags_all {
    ($var:expr, $option:expr) => {{
        let option = $option;
        $crate::Bitmask::bits_u64(($var) & option) == $crate::Bitmask::bits_u64(option)
    }};
}

/// Returns `var` with `option`'s bits added.
///
/// ```rust
/// # #[derive(Clone, Copy, Debug, enummask::Bitmask)]
/// # #[repr(u8)]
/// # enum Flag { A = 1, B = 2 }
/// let mask = enummask::flags_add!(FlagMask::from(Flag::A), Flag::B);
/// assert_eq!(mask.bits(), 3);
/// ```
#[macro_export]
macro_rules! flags_add {
    ($var:expr, $option:expr) => {
        ($var) | ($option)
    };
}

/// Returns `var` with `option`'s bits removed.
///
/// Clears exactly `option`'s bits, nothing more.
///
/// ```rust
/// # #[derive(Clone, Copy, Debug, enummask::Bitmask)]
/// # #[repr(u8)]
/// # enum Flag { A = 1, B = 2 }
/// let mask = enummask::flags_remove!(Flag::A | Flag::B, Flag::B);
/// assert_eq!(mask, FlagMask::from(Flag::A));
/// ```
#[macro_export]
macro_rules! flags_remove {
    ($var:expr, $option:expr) => {
        ($var) & !($option)
    };
}
