//! Division, modulo, and square root by binary search.
//!
//! Long division over an arbitrary limb base is easy to get wrong;
//! instead these operations binary-search the answer space, using the
//! monotonicity of multiplication over non-negative magnitudes as the
//! comparison oracle. Every interval update makes strict progress, so
//! the loops terminate even at boundary values such as a zero dividend.

use std::cmp::Ordering;

use crate::bignum::BigNumber;
use crate::error::ArithmeticError;

impl BigNumber {
    /// Integer division, truncating toward zero.
    ///
    /// The quotient magnitude is binary-searched over `[0, |self|]`:
    /// at each step the candidate is multiplied back against the
    /// divisor and compared to the dividend. The result sign is the
    /// XOR of the operand signs.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the divisor
    /// magnitude is zero.
    pub fn div(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        let reconciled;
        let divisor = if self.base == divisor.base {
            divisor
        } else {
            reconciled = divisor.to_base(self.base);
            &reconciled
        };
        if divisor.limbs.len() == 1 && divisor.limbs[0] == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        let negative = self.negative ^ divisor.negative;
        if divisor.limbs.len() == 1 && divisor.limbs[0] == 1 {
            return Ok(Self::from_raw_parts(self.limbs.clone(), negative, self.base));
        }

        let dividend = self.abs();
        let divisor = divisor.abs();
        let mut left = Self::small(0, self.base);
        let mut right = dividend.clone();
        while left.cmp_magnitude(&right) == Ordering::Less {
            let middle = (&left + &right).half();
            let compare = (&middle * &divisor).cmp_magnitude(&dividend);
            if compare == Ordering::Equal || middle.cmp_magnitude(&left) == Ordering::Equal {
                return Ok(Self::from_raw_parts(middle.limbs, negative, self.base));
            }
            if compare == Ordering::Less {
                left = middle;
            } else {
                right = middle;
            }
        }
        Ok(Self::from_raw_parts(left.limbs, negative, self.base))
    }

    /// Remainder of truncating division: `self - div(self, divisor) * divisor`.
    ///
    /// The divisor must be non-negative; a negative dividend yields a
    /// negative remainder.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NegativeModulus`] if the divisor is
    /// negative, or [`ArithmeticError::DivisionByZero`] if it is zero.
    pub fn rem(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        if divisor.negative {
            return Err(ArithmeticError::NegativeModulus);
        }
        let reconciled;
        let divisor = if self.base == divisor.base {
            divisor
        } else {
            reconciled = divisor.to_base(self.base);
            &reconciled
        };
        let quotient = self.div(divisor)?;
        Ok(self - &(&quotient * divisor))
    }

    /// Floor square root, binary-searched for the largest `mid` with
    /// `mid * mid <= self`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NegativeOperand`] if this number is
    /// negative.
    pub fn sqrt(&self) -> Result<Self, ArithmeticError> {
        if self.negative {
            return Err(ArithmeticError::NegativeOperand);
        }
        let one = Self::small(1, self.base);
        let mut left = Self::small(0, self.base);
        let mut right = self.clone();
        while left.cmp_magnitude(&right) == Ordering::Less {
            let middle = (&left + &right).half();
            match (&middle * &middle).cmp_magnitude(self) {
                Ordering::Equal => return Ok(middle),
                Ordering::Greater => right = middle,
                Ordering::Less => {
                    // Adjacent bounds: the interval cannot shrink
                    // further.
                    if middle.cmp_magnitude(&left) == Ordering::Equal {
                        break;
                    }
                    left = middle;
                }
            }
        }
        // The search can stall with `right` itself untested (`a = 1`
        // leaves `right = a`); at that point the floor root is `left`
        // or its successor.
        let next = &left + &one;
        if (&next * &next).cmp_magnitude(self) != Ordering::Greater {
            left = next;
        }
        Ok(left)
    }

    /// Floor division by two, used for binary-search midpoints.
    ///
    /// The limb base is not a power of two, so this cannot be a bit
    /// shift; it gallops instead: repeatedly doubling an increment
    /// while twice the candidate stays within `|self|`. Operates on the
    /// magnitude and returns a non-negative result.
    pub(crate) fn half(&self) -> Self {
        let two = Self::small(2, self.base);
        let one = Self::small(1, self.base);
        let mut half = Self::small(0, self.base);
        loop {
            let mut step = one.clone();
            let mut advanced = false;
            loop {
                let candidate = &half + &step;
                if (&candidate * &two).cmp_magnitude(self) == Ordering::Greater {
                    break;
                }
                half = candidate;
                step = &step * &two;
                advanced = true;
            }
            if !advanced {
                break;
            }
        }
        half
    }
}
