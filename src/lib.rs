//! A tiny, `no_std` set of flags drawn from a single Rust enum.
//!
//! Declare a fieldless enum whose variants are distinct powers of two, mark it
//! with [`impl_flag!`], and combine its values in a [`FlagSet`]:
//!
//! ```
//! use eflags::{flag_set, impl_flag, FlagSet};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! #[repr(u8)]
//! enum Access {
//!     Read = 1 << 0,
//!     Write = 1 << 1,
//!     Exec = 1 << 2,
//! }
//!
//! impl_flag!(Access => u8);
//!
//! let mut access: FlagSet<Access> = flag_set![Access::Read, Access::Write];
//! assert!(access.has_flag(Access::Write));
//!
//! access.reset(Access::Write | Access::Exec);
//! assert!(access.has_flag(Access::Read));
//! assert!(!access.has_flag(Access::Write));
//! ```
//!
//! A set only ever holds flags of its own enum. Mixing two enums does not compile:
//!
//! ```compile_fail
//! use eflags::{impl_flag, FlagSet};
//!
//! #[derive(Clone, Copy)]
//! #[repr(u8)]
//! enum Access { Read = 1 }
//! #[derive(Clone, Copy)]
//! #[repr(u8)]
//! enum Mode { Fast = 1 }
//!
//! impl_flag!(Access => u8, Mode => u8);
//!
//! let mut access = FlagSet::<Access>::new();
//! access.set(Mode::Fast);
//! ```
//!
//! ```compile_fail
//! use eflags::{flag_set, impl_flag};
//!
//! #[derive(Clone, Copy)]
//! #[repr(u8)]
//! enum Access { Read = 1 }
//! #[derive(Clone, Copy)]
//! #[repr(u8)]
//! enum Mode { Fast = 2 }
//!
//! impl_flag!(Access => u8, Mode => u8);
//!
//! let _ = flag_set![Access::Read, Mode::Fast];
//! ```
//!
//! ```compile_fail
//! use eflags::{impl_flag, FlagSet};
//!
//! #[derive(Clone, Copy)]
//! #[repr(u8)]
//! enum Access { Read = 1 }
//! #[derive(Clone, Copy)]
//! #[repr(u8)]
//! enum Mode { Fast = 1 }
//!
//! impl_flag!(Access => u8, Mode => u8);
//!
//! let mut access = FlagSet::from(Access::Read);
//! access.reset(Mode::Fast);
//! ```
//!
//! ```compile_fail
//! use eflags::{impl_flag, FlagSet};
//!
//! #[derive(Clone, Copy)]
//! #[repr(u8)]
//! enum Access { Read = 1 }
//! #[derive(Clone, Copy)]
//! #[repr(u8)]
//! enum Mode { Fast = 1 }
//!
//! impl_flag!(Access => u8, Mode => u8);
//!
//! let access = FlagSet::from(Access::Read);
//! let _ = access.has_flag(Mode::Fast);
//! ```
//!
//! ```compile_fail
//! use eflags::impl_flag;
//!
//! #[derive(Clone, Copy)]
//! #[repr(u8)]
//! enum Access { Read = 1 }
//! #[derive(Clone, Copy)]
//! #[repr(u8)]
//! enum Mode { Fast = 2 }
//!
//! impl_flag!(Access => u8, Mode => u8);
//!
//! let _ = Access::Read | Mode::Fast;
//! ```
//!
//! ```compile_fail
//! use eflags::{impl_flag, or};
//!
//! #[derive(Clone, Copy)]
//! #[repr(u8)]
//! enum Access { Read = 1 }
//! #[derive(Clone, Copy)]
//! #[repr(u8)]
//! enum Mode { Fast = 2 }
//!
//! impl_flag!(Access => u8, Mode => u8);
//!
//! let _ = or(Access::Read, Mode::Fast);
//! ```
#![no_std]

use core::fmt;

use num_traits::PrimInt;

pub use self::flags::FlagSet;
pub use self::iter::Iter;

pub use num_derive::FromPrimitive;
pub use num_traits;

pub mod flags;
pub mod iter;


pub type FlagResult<T> = Result<T, FlagError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagError {
    /// A bit is set that no variant of the enum declares.
    UnknownBits,
    /// Expected exactly one flag, found none or several.
    NotSingleFlag,
}

impl fmt::Display for FlagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagError::UnknownBits => f.write_str("bits set that no flag declares"),
            FlagError::NotSingleFlag => f.write_str("expected exactly one flag"),
        }
    }
}

/// An enum usable as a single flag of a [`FlagSet`].
///
/// Every nonzero value returned by [`Flag::bits`] must occupy exactly one bit,
/// and distinct variants must use distinct bits. Zero is allowed for a "none"
/// variant. Nothing checks this; breaking it makes set operations lose
/// information.
///
/// [`impl_flag!`] is the only supported way to implement this trait. It casts each
/// value with `self as $repr`, which only compiles for fieldless enums (and bare
/// integers, which are not flags). A hand-written impl for any other type is
/// outside this contract.
pub trait Flag: Copy {
    /// The enum's `#[repr]` integer. It is the storage of a `FlagSet<Self>`.
    type Bits: PrimInt;

    fn bits(self) -> Self::Bits;
}

/// Combines two flags into a set holding the bits of both.
#[inline]
pub fn or<E: Flag>(lhs: E, rhs: E) -> FlagSet<E> {
    FlagSet::from_bits_retain(lhs.bits() | rhs.bits())
}

/// Intersects two flags. For two distinct single-bit flags the result is empty.
#[inline]
pub fn and<E: Flag>(lhs: E, rhs: E) -> FlagSet<E> {
    FlagSet::from_bits_retain(lhs.bits() & rhs.bits())
}

/// Implements [`Flag`] for fieldless enums, along with `|` and `&` between values
/// of the same enum.
///
/// ```
/// # use eflags::impl_flag;
/// #[derive(Clone, Copy)]
/// #[repr(i32)]
/// enum Wide { A = 1, B = 2 }
///
/// #[derive(Clone, Copy)]
/// #[repr(u8)]
/// enum Narrow { A = 1, B = 2 }
///
/// impl_flag!(Wide => i32, Narrow => u8);
///
/// assert_eq!((Wide::A | Wide::B).bits(), 3);
/// assert!((Narrow::A & Narrow::B).is_empty());
/// ```
#[macro_export]
macro_rules! impl_flag {
    ($($name:ty => $repr:ty),+ $(,)?) => {
        $(
            impl $crate::Flag for $name {
                type Bits = $repr;

                #[inline]
                fn bits(self) -> $repr {
                    self as $repr
                }
            }

            impl ::core::ops::BitOr for $name {
                type Output = $crate::FlagSet<$name>;

                #[inline]
                fn bitor(self, rhs: Self) -> Self::Output {
                    $crate::or(self, rhs)
                }
            }

            impl ::core::ops::BitOr<$crate::FlagSet<$name>> for $name {
                type Output = $crate::FlagSet<$name>;

                #[inline]
                fn bitor(self, rhs: $crate::FlagSet<$name>) -> Self::Output {
                    rhs | self
                }
            }

            impl ::core::ops::BitAnd for $name {
                type Output = $crate::FlagSet<$name>;

                #[inline]
                fn bitand(self, rhs: Self) -> Self::Output {
                    $crate::and(self, rhs)
                }
            }
        )+
    };
}

/// Builds a [`FlagSet`] from any number of flags of one enum.
///
/// All arguments must have the same type; `flag_set![]` is the empty set.
#[macro_export]
macro_rules! flag_set {
    () => {
        $crate::FlagSet::new()
    };
    ($($flag:expr),+ $(,)?) => {
        $crate::FlagSet::from_flags([$($flag),+])
    };
}
