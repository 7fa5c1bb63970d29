//! Interpolation search over an ascending slice of numeric keys.
//!
//! Variables:
//!   [low, high] : closed window still holding candidates
//!   v(x)        : Interpolate::to_scalar(x)
//!
//! Equations:
//!   loop while low <= high and arr[low] <= target <= arr[high]
//!   pos = low + (v(target) - v(arr[low])) * (high - low) / (v(arr[high]) - v(arr[low]))
//!   arr[pos] <  target  =>  low'  = pos + 1
//!   arr[pos] >  target  =>  high' = pos - 1
//!   arr[pos] == target  =>  Some(pos)
//!
//! Guards:
//!   arr[low] == arr[high]  =>  the denominator is zero and the whole window
//!                              equals target, return Some(low)
//!   product overflows i128 =>  probe the window midpoint
//!   pos is clamped to [low, high]
//!
//! Complexity: O(log log n) on uniformly spread keys, O(n) on skewed keys.

use std::cmp::Ordering;

use log::{debug, trace};

/// Keys that interpolation search can place on a number line.
///
/// `to_scalar` must be monotone: `a <= b` implies `a.to_scalar() <= b.to_scalar()`.
pub trait Interpolate: Ord {
    fn to_scalar(&self) -> i128;
}

macro_rules! impl_interpolate_lossless {
    ($($t:ty),*) => {
        $(
            impl Interpolate for $t {
                fn to_scalar(&self) -> i128 {
                    i128::from(*self)
                }
            }
        )*
    };
}

impl_interpolate_lossless!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Interpolate for usize {
    fn to_scalar(&self) -> i128 {
        *self as i128
    }
}

impl Interpolate for isize {
    fn to_scalar(&self) -> i128 {
        *self as i128
    }
}

impl Interpolate for char {
    fn to_scalar(&self) -> i128 {
        i128::from(u32::from(*self))
    }
}

pub fn interpolation_search<T: Interpolate>(arr: &[T], target: &T) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let (mut low, mut high) = (0, arr.len() - 1);

    while low <= high && arr[low] <= *target && *target <= arr[high] {
        if arr[low] == arr[high] {
            if low != high {
                debug!("interpolation window [{low}, {high}] is a run of equal keys");
            }
            return Some(low);
        }

        let pos = probe(arr, low, high, target);
        match arr[pos].cmp(target) {
            Ordering::Equal => return Some(pos),
            Ordering::Less => low = pos + 1,
            // arr[low] <= target < arr[pos], so pos > low
            Ordering::Greater => high = pos - 1,
        }
    }
    None
}

fn probe<T: Interpolate>(arr: &[T], low: usize, high: usize, target: &T) -> usize {
    let midpoint = low + (high - low) / 2;
    let lo = arr[low].to_scalar();
    let span = arr[high].to_scalar() - lo;
    if span <= 0 {
        return midpoint;
    }

    let offset = (target.to_scalar() - lo)
        .checked_mul((high - low) as i128)
        .map(|scaled| scaled / span)
        .and_then(|offset| usize::try_from(offset).ok());
    match offset {
        Some(offset) => (low + offset).min(high),
        None => {
            trace!("interpolation probe overflowed on window [{low}, {high}], bisecting");
            midpoint
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_bounds_with_distinct_indices_return_low() {
        let arr = [4, 4, 4, 4, 4];
        assert_eq!(interpolation_search(&arr, &4), Some(0));
        assert_eq!(interpolation_search(&arr, &3), None);
        assert_eq!(interpolation_search(&arr, &5), None);
    }

    #[test]
    fn probe_survives_extreme_keys() {
        let arr = [i64::MIN, -1, 0, 1, i64::MAX];
        for (i, v) in arr.iter().enumerate() {
            assert_eq!(interpolation_search(&arr, v), Some(i));
        }
        assert_eq!(interpolation_search(&arr, &2), None);
    }

    #[test]
    fn probe_stays_inside_window() {
        let arr = [1u8, 2, 3, 250];
        assert!(probe(&arr, 0, 3, &249) <= 3);
        assert_eq!(interpolation_search(&arr, &250), Some(3));
    }
}
