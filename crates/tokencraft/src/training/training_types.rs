//! # Training Types
use core::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::AddAssign,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a pair count.
pub trait CountType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + AddAssign
{
}

impl<T> CountType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
        + AddAssign
{
}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_count_types() {
        struct IsCount<T: CountType>(PhantomData<T>);

        let _: IsCount<u16>;
        let _: IsCount<u32>;
        let _: IsCount<u64>;
        let _: IsCount<usize>;
    }
}
