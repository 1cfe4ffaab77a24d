//!
//! FlowRateLike trait for generics of capacity/flow amount
//!
//! i32, i64 and isize implements FlowRateLike
//!

use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

///
/// generic FlowRate
///
/// Flow on a backward edge is the negation of the flow on its forward edge,
/// so only signed integers qualify.
///
pub trait FlowRateLike:
    Copy
    + Eq
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + Sum
    + Default
    + TryFrom<i128>
    + std::fmt::Debug
    + std::fmt::Display
{
    /// zero value = 0
    fn zero() -> Self;
    /// `self + rhs`, or None on overflow
    fn checked_add(self, rhs: Self) -> Option<Self>;
    /// lossless widening, for error reporting
    fn to_i128(self) -> i128;
}

impl FlowRateLike for i32 {
    fn zero() -> i32 {
        0
    }
    fn checked_add(self, rhs: Self) -> Option<Self> {
        i32::checked_add(self, rhs)
    }
    fn to_i128(self) -> i128 {
        self as i128
    }
}

impl FlowRateLike for i64 {
    fn zero() -> i64 {
        0
    }
    fn checked_add(self, rhs: Self) -> Option<Self> {
        i64::checked_add(self, rhs)
    }
    fn to_i128(self) -> i128 {
        self as i128
    }
}

impl FlowRateLike for isize {
    fn zero() -> isize {
        0
    }
    fn checked_add(self, rhs: Self) -> Option<Self> {
        isize::checked_add(self, rhs)
    }
    fn to_i128(self) -> i128 {
        self as i128
    }
}
