//! Addition, subtraction, multiplication, and exponentiation.
//!
//! All limb work happens on magnitudes; signs are resolved separately.
//! When operand bases differ, the right-hand side is reconverted into
//! the left operand's base before any limbs are touched.

use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use smallvec::smallvec;

use crate::bignum::{BigNumber, LimbVec};

impl BigNumber {
    /// Adds two magnitudes in the same base, limb-wise with carry
    /// propagation.
    fn add_magnitudes(a: &Self, b: &Self) -> LimbVec {
        let base = a.base;
        let longest = a.limbs.len().max(b.limbs.len());
        let mut result: LimbVec = smallvec![];
        let mut carry = 0;
        for i in 0..longest {
            let x = a.limbs.get(i).copied().unwrap_or(0);
            let y = b.limbs.get(i).copied().unwrap_or(0);
            let total = x + y + carry;
            carry = total / base;
            result.push(total % base);
        }
        if carry > 0 {
            result.push(carry);
        }
        result
    }

    /// Subtracts magnitudes, requiring `|a| >= |b|` and equal bases.
    ///
    /// When a limb of `b` exceeds the matching limb of `a`, the minuend
    /// limb is raised by `base` and the borrow walks through subsequent
    /// zero limbs, lifting each to `base - 1`, until a nonzero limb
    /// absorbs it.
    fn sub_magnitudes(a: &Self, b: &Self) -> LimbVec {
        let base = a.base;
        let mut minuend = a.limbs.clone();
        let mut result: LimbVec = smallvec![];
        for i in 0..minuend.len() {
            let subtrahend = b.limbs.get(i).copied().unwrap_or(0);
            if subtrahend > minuend[i] {
                minuend[i] += base;
                let mut j = i + 1;
                while j < minuend.len() && minuend[j] == 0 {
                    minuend[j] = base - 1;
                    j += 1;
                }
                if j < minuend.len() {
                    minuend[j] -= 1;
                }
            }
            result.push(minuend[i] - subtrahend);
        }
        result
    }

    /// Signed addition. Equal signs add magnitudes; opposite signs
    /// subtract the smaller magnitude from the larger, which supplies
    /// the result's sign. Equal magnitudes of opposite sign are zero.
    fn add_values(a: &Self, b: &Self) -> Self {
        let reconciled;
        let b = if a.base == b.base {
            b
        } else {
            reconciled = b.to_base(a.base);
            &reconciled
        };
        if a.negative == b.negative {
            let limbs = Self::add_magnitudes(a, b);
            return Self::from_raw_parts(limbs, a.negative, a.base);
        }
        match a.cmp_magnitude(b) {
            Ordering::Greater => {
                Self::from_raw_parts(Self::sub_magnitudes(a, b), a.negative, a.base)
            }
            Ordering::Less => Self::from_raw_parts(Self::sub_magnitudes(b, a), b.negative, a.base),
            Ordering::Equal => Self::small(0, a.base),
        }
    }

    /// Schoolbook multiplication: each limb of `b` is convolved into a
    /// shared result buffer at its offset, carries rippling upward.
    fn mul_values(a: &Self, b: &Self) -> Self {
        let reconciled;
        let b = if a.base == b.base {
            b
        } else {
            reconciled = b.to_base(a.base);
            &reconciled
        };
        let base = a.base;
        let mut result: LimbVec = smallvec![0; a.limbs.len() + b.limbs.len() + 1];
        for (offset, &multiplier) in b.limbs.iter().enumerate() {
            let mut carry = 0;
            let mut index = offset;
            for &limb in &a.limbs {
                // limb * multiplier < base^2 <= 2^63, so this cannot
                // overflow even with both carries added in.
                let total = limb * multiplier + carry + result[index];
                carry = total / base;
                result[index] = total % base;
                index += 1;
            }
            while carry > 0 {
                let total = result[index] + carry;
                carry = total / base;
                result[index] = total % base;
                index += 1;
            }
        }
        Self::from_raw_parts(result, a.negative ^ b.negative, base)
    }

    /// Raises this number to the power `n` by repeated squaring.
    ///
    /// `n <= 0` returns 1 unconditionally, including for negative `n`;
    /// an integer reciprocal would not be representable anyway.
    #[must_use]
    pub fn pow(&self, n: i64) -> Self {
        if n <= 0 {
            return Self::small(1, self.base);
        }
        if n == 1 {
            return self.clone();
        }
        let squared = self * self;
        if n % 2 == 0 {
            squared.pow(n / 2)
        } else {
            self * &squared.pow((n - 1) / 2)
        }
    }
}

impl Add for BigNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::add_values(&self, &rhs)
    }
}

impl Add<&BigNumber> for BigNumber {
    type Output = Self;

    fn add(self, rhs: &BigNumber) -> Self::Output {
        Self::add_values(&self, rhs)
    }
}

impl Add for &BigNumber {
    type Output = BigNumber;

    fn add(self, rhs: Self) -> Self::Output {
        BigNumber::add_values(self, rhs)
    }
}

impl Sub for BigNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::add_values(&self, &-rhs)
    }
}

impl Sub<&BigNumber> for BigNumber {
    type Output = Self;

    fn sub(self, rhs: &BigNumber) -> Self::Output {
        Self::add_values(&self, &-rhs)
    }
}

impl Sub for &BigNumber {
    type Output = BigNumber;

    fn sub(self, rhs: Self) -> Self::Output {
        BigNumber::add_values(self, &-rhs)
    }
}

impl Mul for BigNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::mul_values(&self, &rhs)
    }
}

impl Mul<&BigNumber> for BigNumber {
    type Output = Self;

    fn mul(self, rhs: &BigNumber) -> Self::Output {
        Self::mul_values(&self, rhs)
    }
}

impl Mul for &BigNumber {
    type Output = BigNumber;

    fn mul(self, rhs: Self) -> Self::Output {
        BigNumber::mul_values(self, rhs)
    }
}

impl Neg for BigNumber {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        if !(self.limbs.len() == 1 && self.limbs[0] == 0) {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &BigNumber {
    type Output = BigNumber;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}
