// 💵 Currency - numeric types usable as an account balance
//
// Any type that knows its own zero and supports +, -, += and -= can back
// an account. Balances may go negative, so only signed types qualify.

use rust_decimal::Decimal;
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// ============================================================================
// CURRENCY TRAIT
// ============================================================================

/// Numeric representation of money held in an account
pub trait Currency:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
{
    /// Additive identity (every new account starts here)
    fn zero() -> Self;
}

/// Zero value for any currency type
///
/// Example: `zero::<f64>()` → `0.0`, `zero::<i64>()` → `0`
pub fn zero<C: Currency>() -> C {
    C::zero()
}

macro_rules! impl_currency {
    ($($t:ty => $zero:expr),* $(,)?) => {
        $(
            impl Currency for $t {
                #[inline]
                fn zero() -> Self {
                    $zero
                }
            }
        )*
    };
}

impl_currency! {
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    i128 => 0,
    isize => 0,
    f32 => 0.0,
    f64 => 0.0,
    Decimal => Decimal::ZERO,
}

// ============================================================================
// TESTS
// ============================================================================
