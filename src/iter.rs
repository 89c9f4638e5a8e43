use core::iter::FusedIterator;
use core::marker::PhantomData;

use num_traits::{FromPrimitive, One, PrimInt, ToPrimitive, Zero};

use super::Flag;

/// Iterator over the declared flags of a [`FlagSet`](crate::FlagSet), lowest bit first.
///
/// Set bits that no variant of `E` declares are skipped. A bit counts as declared
/// when `E`'s `FromPrimitive` maps it back to a variant. `#[derive(FromPrimitive)]`
/// only handles discriminants that fit in 64 bits. Flags above bit 63 of a
/// 128-bit repr need a hand-written `from_i128`/`from_u128`.
pub struct Iter<E: Flag> {
    remaining: E::Bits,
    marker: PhantomData<E>,
}

impl<E: Flag + FromPrimitive> Iter<E> {
    pub(crate) fn new(bits: E::Bits) -> Self {
        Self {
            remaining: bits,
            marker: PhantomData,
        }
    }

    fn take_lowest(&mut self) -> Option<E::Bits> {
        if self.remaining.is_zero() {
            return None;
        }
        let bit = E::Bits::one() << self.remaining.trailing_zeros() as usize;
        self.remaining = self.remaining & !bit;
        Some(bit)
    }
}

fn to_flag<E: Flag + FromPrimitive>(bit: E::Bits) -> Option<E> {
    // Signed reprs put their top bit below zero, so try signed before unsigned.
    let flag = bit
        .to_i64()
        .and_then(E::from_i64)
        .or_else(|| bit.to_u64().and_then(E::from_u64))
        .or_else(|| bit.to_i128().and_then(E::from_i128))
        .or_else(|| bit.to_u128().and_then(E::from_u128))?;
    // A derived `FromPrimitive` compares against the discriminant cast to 64 bits.
    (flag.bits() == bit).then_some(flag)
}

impl<E: Flag + FromPrimitive> Iterator for Iter<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        while let Some(bit) = self.take_lowest() {
            if let Some(flag) = to_flag(bit) {
                return Some(flag);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining.count_ones() as usize))
    }
}

impl<E: Flag + FromPrimitive> FusedIterator for Iter<E> {}

impl<E: Flag> Clone for Iter<E> {
    fn clone(&self) -> Self {
        Self {
            remaining: self.remaining,
            marker: PhantomData,
        }
    }
}
