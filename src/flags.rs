use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign};

use num_traits::{FromPrimitive, PrimInt, Zero};

use super::iter::Iter;
use super::{Flag, FlagError, FlagResult};

/// A combination of flags from the enum `E`, packed into `E::Bits`.
///
/// Every operation taking a flag accepts either a single `E` or another
/// `FlagSet<E>`, so combinations built with `|` can be set, reset and queried
/// the same way single flags are.
pub struct FlagSet<E: Flag> {
    bits: E::Bits,
    marker: PhantomData<E>,
}

impl<E: Flag> FlagSet<E> {
    #[inline]
    pub fn new() -> Self {
        Self::from_bits_retain(E::Bits::zero())
    }

    /// Wraps raw bits without checking that each belongs to a variant of `E`.
    #[inline]
    pub fn from_bits_retain(bits: E::Bits) -> Self {
        Self {
            bits,
            marker: PhantomData,
        }
    }

    pub fn from_flags<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut set = Self::new();
        set.set_all(flags);
        set
    }

    #[inline]
    pub fn bits(&self) -> E::Bits {
        self.bits
    }

    #[inline]
    pub fn set(&mut self, flag: impl Into<Self>) -> &mut Self {
        let flag: Self = flag.into();
        self.bits = self.bits | flag.bits;
        self
    }

    pub fn set_all<I>(&mut self, flags: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        for flag in flags {
            self.set(flag);
        }
        self
    }

    /// Clears every bit of `flag`. A combination clears all of its bits at once.
    #[inline]
    pub fn reset(&mut self, flag: impl Into<Self>) -> &mut Self {
        let flag: Self = flag.into();
        self.bits = self.bits & !flag.bits;
        self
    }

    pub fn reset_all<I>(&mut self, flags: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        for flag in flags {
            self.reset(flag);
        }
        self
    }

    #[inline]
    pub fn toggle(&mut self, flag: impl Into<Self>) -> &mut Self {
        let flag: Self = flag.into();
        self.bits = self.bits ^ flag.bits;
        self
    }

    #[inline]
    pub fn clear(&mut self) -> &mut Self {
        self.bits = E::Bits::zero();
        self
    }

    /// Returns true if *any* bit of `flag` is set.
    ///
    /// For a combination this is an overlap test: `has_flag(A | B)` holds when
    /// only `A` is set. Use [`FlagSet::contains`] to require all of them.
    #[inline]
    pub fn has_flag(&self, flag: impl Into<Self>) -> bool {
        let flag: Self = flag.into();
        !(self.bits & flag.bits).is_zero()
    }

    /// Returns true if *every* bit of `flag` is set.
    #[inline]
    pub fn contains(&self, flag: impl Into<Self>) -> bool {
        let flag: Self = flag.into();
        self.bits & flag.bits == flag.bits
    }

    #[inline]
    pub fn is_any_set(&self) -> bool {
        !self.bits.is_zero()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Number of set bits, declared or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }
}

impl<E: Flag + FromPrimitive> FlagSet<E> {
    /// Wraps raw bits, rejecting any bit that no variant of `E` declares.
    pub fn from_bits(bits: E::Bits) -> FlagResult<Self> {
        let set = Self::from_bits_retain(bits);
        let known = set
            .iter()
            .fold(E::Bits::zero(), |known, flag| known | flag.bits());
        if known == bits {
            Ok(set)
        } else {
            Err(FlagError::UnknownBits)
        }
    }

    /// The declared flags currently set, lowest bit first.
    #[inline]
    pub fn iter(&self) -> Iter<E> {
        Iter::new(self.bits)
    }

    /// Returns the only flag in the set.
    pub fn single(&self) -> FlagResult<E> {
        if self.len() != 1 {
            return Err(FlagError::NotSingleFlag);
        }
        self.iter().next().ok_or(FlagError::UnknownBits)
    }
}

impl<E: Flag> Default for FlagSet<E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Flag> Clone for FlagSet<E> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Flag> Copy for FlagSet<E> {}

impl<E: Flag> PartialEq for FlagSet<E> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<E: Flag> Eq for FlagSet<E> {}

impl<E: Flag> Hash for FlagSet<E>
where
    E::Bits: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<E: Flag> fmt::Debug for FlagSet<E>
where
    E::Bits: fmt::Binary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagSet({:#b})", self.bits)
    }
}

impl<E: Flag> From<E> for FlagSet<E> {
    #[inline]
    fn from(flag: E) -> Self {
        Self::from_bits_retain(flag.bits())
    }
}

impl<E: Flag> FromIterator<E> for FlagSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(flags: I) -> Self {
        Self::from_flags(flags)
    }
}

impl<E: Flag> Extend<E> for FlagSet<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, flags: I) {
        self.set_all(flags);
    }
}

impl<E: Flag + FromPrimitive> IntoIterator for FlagSet<E> {
    type Item = E;
    type IntoIter = Iter<E>;

    fn into_iter(self) -> Iter<E> {
        self.iter()
    }
}

impl<E: Flag, R: Into<FlagSet<E>>> BitOr<R> for FlagSet<E> {
    type Output = Self;

    #[inline]
    fn bitor(mut self, rhs: R) -> Self {
        self.set(rhs);
        self
    }
}

impl<E: Flag, R: Into<FlagSet<E>>> BitOrAssign<R> for FlagSet<E> {
    #[inline]
    fn bitor_assign(&mut self, rhs: R) {
        self.set(rhs);
    }
}

impl<E: Flag, R: Into<FlagSet<E>>> BitAnd<R> for FlagSet<E> {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: R) -> Self {
        let rhs: Self = rhs.into();
        Self::from_bits_retain(self.bits & rhs.bits)
    }
}

impl<E: Flag, R: Into<FlagSet<E>>> BitAndAssign<R> for FlagSet<E> {
    #[inline]
    fn bitand_assign(&mut self, rhs: R) {
        *self = *self & rhs;
    }
}

impl<E: Flag, R: Into<FlagSet<E>>> Sub<R> for FlagSet<E> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: R) -> Self {
        self.reset(rhs);
        self
    }
}

impl<E: Flag, R: Into<FlagSet<E>>> SubAssign<R> for FlagSet<E> {
    #[inline]
    fn sub_assign(&mut self, rhs: R) {
        self.reset(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(u16)]
    enum Mode {
        None = 0,
        Fast = 1 << 0,
        Safe = 1 << 9,
    }

    crate::impl_flag!(Mode => u16);

    #[test]
    fn zero_flag_is_never_set() {
        let mut set = FlagSet::from(Mode::Fast);
        set.set(Mode::None);
        assert!(!set.has_flag(Mode::None));
        assert!(set.contains(Mode::None));
        assert_eq!(set.bits(), 1);
    }

    #[test]
    fn chained_mutation() {
        let mut set = FlagSet::<Mode>::new();
        set.set(Mode::Fast).set(Mode::Safe).reset(Mode::Fast);
        assert_eq!(set, FlagSet::from(Mode::Safe));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn debug_prints_bits() {
        use core::fmt::Write;

        let mut out = heapless::String::<32>::new();
        write!(out, "{:?}", Mode::Fast | Mode::Safe).unwrap();
        assert_eq!(out.as_str(), "FlagSet(0b1000000001)");
    }
}
