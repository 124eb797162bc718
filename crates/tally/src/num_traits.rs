//! This module contains the number trait used as a counter

/// A trait representing a type that can be used to count occurrences
///
/// This trait defines constants and operations required for counting.
/// It's implemented for unsigned integers.
pub trait Count: std::ops::AddAssign + Sized + Copy + PartialEq {
    const ZERO: Self;
    const ONE: Self;
}

macro_rules! impl_count_for_int {
    ($($int_type:ty),*) => {
        $(
            impl Count for $int_type {
                const ZERO: Self = 0;
                const ONE: Self = 1;
            }
        )*
    };
}

impl_count_for_int!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_constants() {
        fn step<C: Count>(mut c: C) -> C {
            c += C::ONE;
            c
        }

        assert_eq!(step(u8::ZERO), 1);
        assert_eq!(step(step(usize::ZERO)), 2);
        assert!(u64::ZERO != u64::ONE);
    }
}
