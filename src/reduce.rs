//! Reduction kernels for folding parsed records into a single answer.
//!
//! [`add`] and [`multiply`] are overflow-checked, returning `None` when the result does not fit in
//! the integer type, so folds can be written with [`Iterator::try_fold`]. [`max`] cannot overflow.
//! The [`CheckedProduct`] extension builds on [`multiply`]; sums use the `checked_sum` crate.

use num_traits::{CheckedAdd, CheckedMul, One};

/// Add two numbers, returning `None` on overflow.
pub fn add<T: CheckedAdd>(acc: T, value: T) -> Option<T> {
    acc.checked_add(&value)
}

/// Multiply two numbers, returning `None` on overflow.
pub fn multiply<T: CheckedMul>(acc: T, value: T) -> Option<T> {
    acc.checked_mul(&value)
}

/// The larger of two values.
pub fn max<T: Ord>(acc: T, value: T) -> T {
    std::cmp::max(acc, value)
}

/// Iterator extension trait for calculating the product of numbers with overflow checking.
pub trait CheckedProduct<T> {
    /// Multiplies numbers in an iterator, checking for overflow.
    /// Returns `None` if overflow occurred.
    fn checked_product(self) -> Option<T>;
}

impl<T, I> CheckedProduct<T> for I
where
    T: CheckedMul + One,
    I: Iterator<Item = T>,
{
    fn checked_product(mut self) -> Option<T> {
        self.try_fold(T::one(), multiply)
    }
}

/// An integer overflowed while folding records into an answer.
#[derive(thiserror::Error, Debug)]
#[error("integer overflow while {0}")]
pub struct Overflow(pub &'static str);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernels_fold_like_their_operators() {
        let values = [3u32, 9, 4];
        assert_eq!(values.into_iter().try_fold(0, add), Some(16));
        assert_eq!(values.into_iter().try_fold(1, multiply), Some(108));
        assert_eq!(values.into_iter().fold(0, max), 9);
    }

    #[test]
    fn kernels_are_commutative() {
        assert_eq!(add(7u8, 5), add(5u8, 7));
        assert_eq!(multiply(7u8, 5), multiply(5u8, 7));
        assert_eq!(max(7u8, 5), max(5u8, 7));
    }

    #[test]
    fn kernels_report_overflow() {
        assert_eq!(add(200u8, 56), None);
        assert_eq!(multiply(16u8, 16), None);
        assert_eq!(add(200u8, 55), Some(255));
    }

    #[test]
    fn test_checked_product() {
        let values = vec![1u8, 2, 3, 4, 5];
        assert_eq!(values.into_iter().checked_product(), Some(2 * 3 * 4 * 5));
    }

    #[test]
    fn test_checked_product_empty_iterator() {
        let values: Vec<u64> = vec![];
        assert_eq!(values.into_iter().checked_product(), Some(1));
    }

    #[test]
    fn test_checked_product_overflow() {
        assert_eq!(vec![200u8, 2].into_iter().checked_product(), None);
        assert_eq!(vec![2u8, 200].into_iter().checked_product(), None);
    }
}
