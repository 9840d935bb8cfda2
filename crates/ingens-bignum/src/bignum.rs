//! The `BigNumber` representation.
//!
//! A magnitude is a limb array stored least-significant limb first,
//! where each limb lies in `[0, base)`. The base is per-value
//! configuration: two numbers in different bases can be combined, with
//! the left operand's base taken as authoritative. All cross-base
//! traffic goes through the decimal rendering, which trades speed for a
//! single, obviously correct conversion path.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_traits::{One, Zero};
use smallvec::{smallvec, SmallVec};

use crate::error::ArithmeticError;

/// The default limb base: the largest integer whose square fits below
/// 2^63, so that `limb * limb + carry + limb` never overflows during
/// schoolbook multiplication.
pub const DEFAULT_BASE: u64 = 3_037_000_499;

/// Limb storage. Magnitudes of up to four limbs (roughly 38 decimal
/// digits at the default base) stay inline on the stack.
pub(crate) type LimbVec = SmallVec<[u64; 4]>;

/// An arbitrary precision signed integer.
///
/// `BigNumber` is a value type: operations never mutate their operands,
/// and no two live values share limb storage.
#[derive(Clone)]
pub struct BigNumber {
    /// Limbs, least-significant first. Always normalized: no
    /// most-significant zero limb except for the single-limb zero.
    pub(crate) limbs: LimbVec,
    /// The limb base, in `[2, DEFAULT_BASE]`.
    pub(crate) base: u64,
    /// Sign flag. Never set when the magnitude is zero.
    pub(crate) negative: bool,
}

/// Panics unless `base` is a usable limb base.
pub(crate) fn check_base(base: u64) {
    assert!(
        (2..=DEFAULT_BASE).contains(&base),
        "limb base must lie in 2..={DEFAULT_BASE}, got {base}"
    );
}

impl BigNumber {
    /// Parses a decimal string in the default base.
    ///
    /// The string must match `-?[0-9]+`. `"-0"` normalizes to zero
    /// without a sign.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::MalformedNumber`] if the string does
    /// not match the signed-digit grammar.
    pub fn parse(s: &str) -> Result<Self, ArithmeticError> {
        Self::parse_with_base(s, DEFAULT_BASE)
    }

    /// Parses a decimal string into the given limb base.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::MalformedNumber`] if the string does
    /// not match the signed-digit grammar.
    ///
    /// # Panics
    ///
    /// Panics if `base` is not in `2..=DEFAULT_BASE`.
    pub fn parse_with_base(s: &str, base: u64) -> Result<Self, ArithmeticError> {
        check_base(base);
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ArithmeticError::MalformedNumber(s.to_owned()));
        }
        let limbs = decimal_to_limbs(digits.as_bytes(), base);
        Ok(Self::from_raw_parts(limbs, negative, base))
    }

    /// Creates a big number from a native integer in the default base.
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Self::from_i64_with_base(value, DEFAULT_BASE)
    }

    /// Creates a big number from a native integer in the given base.
    ///
    /// # Panics
    ///
    /// Panics if `base` is not in `2..=DEFAULT_BASE`.
    #[must_use]
    pub fn from_i64_with_base(value: i64, base: u64) -> Self {
        check_base(base);
        let rendered = value.to_string();
        let digits = rendered.strip_prefix('-').unwrap_or(&rendered);
        let limbs = decimal_to_limbs(digits.as_bytes(), base);
        Self::from_raw_parts(limbs, value < 0, base)
    }

    /// Builds a normalized number from parts. The buffer is owned by
    /// the new value; callers must not retain another handle to it.
    pub(crate) fn from_raw_parts(limbs: LimbVec, negative: bool, base: u64) -> Self {
        let mut value = Self {
            limbs,
            base,
            negative,
        };
        value.normalize();
        value
    }

    /// Builds a small non-negative constant directly in the given base.
    pub(crate) fn small(value: u64, base: u64) -> Self {
        let mut limbs: LimbVec = smallvec![];
        let mut rest = value;
        loop {
            limbs.push(rest % base);
            rest /= base;
            if rest == 0 {
                break;
            }
        }
        Self {
            limbs,
            base,
            negative: false,
        }
    }

    /// Strips most-significant zero limbs down to length 1 and clears
    /// the sign of zero.
    pub(crate) fn normalize(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.limbs.push(0);
        }
        if self.limbs.len() == 1 && self.limbs[0] == 0 {
            self.negative = false;
        }
    }

    /// Returns the limb base of this number.
    #[must_use]
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Returns the limbs, least-significant first.
    #[must_use]
    pub fn limbs(&self) -> &[u64] {
        &self.limbs
    }

    /// Returns true if this number is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            limbs: self.limbs.clone(),
            base: self.base,
            negative: false,
        }
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.to_string().parse().ok()
    }

    /// Reinterprets this number in a different limb base, preserving
    /// magnitude and sign.
    ///
    /// The conversion round-trips through the decimal rendering; the
    /// sign is re-applied explicitly because the magnitude rendering
    /// carries no sign.
    ///
    /// # Panics
    ///
    /// Panics if `new_base` is not in `2..=DEFAULT_BASE`.
    #[must_use]
    pub fn to_base(&self, new_base: u64) -> Self {
        check_base(new_base);
        let magnitude = self.magnitude_to_decimal();
        let limbs = decimal_to_limbs(magnitude.as_bytes(), new_base);
        Self::from_raw_parts(limbs, self.negative, new_base)
    }

    /// Compares magnitudes, ignoring sign.
    ///
    /// A longer limb array wins; on equal length the most-significant
    /// mismatching limb decides. Operands in a different base are first
    /// reconverted to this number's base.
    #[must_use]
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        if self.base != other.base {
            return self.cmp_magnitude(&other.to_base(self.base));
        }
        match self.limbs.len().cmp(&other.limbs.len()) {
            Ordering::Equal => {
                for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
                    match a.cmp(b) {
                        Ordering::Equal => {}
                        unequal => return unequal,
                    }
                }
                Ordering::Equal
            }
            unequal => unequal,
        }
    }

    /// Renders the magnitude as a decimal string by repeated division
    /// of the limb array by 10.
    pub(crate) fn magnitude_to_decimal(&self) -> String {
        // Most-significant limb first; `start` marks the live prefix as
        // leading limbs are consumed.
        let mut scratch: Vec<u64> = self.limbs.iter().rev().copied().collect();
        let mut start = 0;
        while start < scratch.len() && scratch[start] == 0 {
            start += 1;
        }
        let mut digits = String::new();
        while start < scratch.len() {
            let mut remainder = 0u64;
            for limb in &mut scratch[start..] {
                let acc = remainder * self.base + *limb;
                *limb = acc / 10;
                remainder = acc % 10;
            }
            digits.push(char::from(b'0' + remainder as u8));
            while start < scratch.len() && scratch[start] == 0 {
                start += 1;
            }
        }
        if digits.is_empty() {
            digits.push('0');
        }
        digits.chars().rev().collect()
    }
}

/// Converts a big-endian decimal digit string into limbs by repeated
/// long division of the decimal number by `base`, one limb (the
/// remainder) per iteration. Iterative on purpose: recursing once per
/// limb would grow the stack with the input length.
pub(crate) fn decimal_to_limbs(digits: &[u8], base: u64) -> LimbVec {
    let mut current: Vec<u64> = digits.iter().map(|&d| u64::from(d - b'0')).collect();
    let leading = current.iter().position(|&d| d != 0).unwrap_or(current.len());
    current.drain(..leading);

    let mut limbs: LimbVec = smallvec![];
    while !current.is_empty() {
        let mut quotient = Vec::with_capacity(current.len());
        let mut remainder = 0u64;
        for &digit in &current {
            let acc = remainder * 10 + digit;
            quotient.push(acc / base);
            remainder = acc % base;
        }
        limbs.push(remainder);
        let leading = quotient.iter().position(|&d| d != 0).unwrap_or(quotient.len());
        quotient.drain(..leading);
        current = quotient;
    }
    if limbs.is_empty() {
        limbs.push(0);
    }
    limbs
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.magnitude_to_decimal())
    }
}

impl fmt::Debug for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNumber({} in base {})", self, self.base)
    }
}

impl FromStr for BigNumber {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for BigNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl PartialOrd for BigNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BigNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigNumber {}

impl Zero for BigNumber {
    fn zero() -> Self {
        Self::small(0, DEFAULT_BASE)
    }

    fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }
}

impl One for BigNumber {
    fn one() -> Self {
        Self::small(1, DEFAULT_BASE)
    }

    fn is_one(&self) -> bool {
        !self.negative && self.limbs.len() == 1 && self.limbs[0] == 1
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<i32> for BigNumber {
    fn from(value: i32) -> Self {
        Self::from_i64(i64::from(value))
    }
}
