use crate::error::TypesError;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Token amount in base units.
///
/// Internally stored as a u128 for precision; there is no fractional
/// representation. Arithmetic that can wrap is exposed as checked or
/// saturating operations; the plain `+`/`-` operators panic on overflow
/// and are intended for values already validated by the caller.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u128);

impl Amount {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);
    pub const MAX: Self = Self(u128::MAX);

    pub const fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Checked subtraction
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Checked multiplication
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        self.0.checked_mul(rhs.0).map(Self)
    }

    /// Saturating addition (used for vote tallies, which must never wrap)
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// `floor(self * percent / 100)` without intermediate overflow.
    ///
    /// Splits the value into quotient and remainder mod 100 so the
    /// multiplication never leaves u128 range for `percent <= 100`.
    pub fn percent_floor(self, percent: u128) -> Self {
        debug_assert!(percent <= 100);
        Self((self.0 / 100) * percent + (self.0 % 100) * percent / 100)
    }
}

impl From<u64> for Amount {
    fn from(val: u64) -> Self {
        Self(val as u128)
    }
}

impl From<u128> for Amount {
    fn from(val: u128) -> Self {
        Self(val)
    }
}

impl Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({})", self.0)
    }
}

impl FromStr for Amount {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u128>()
            .map(Self)
            .map_err(|e| TypesError::InvalidAmount(format!("'{}': {}", s, e)))
    }
}
