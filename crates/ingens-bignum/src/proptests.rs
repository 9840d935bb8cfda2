//! Property-based tests for big number arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{BigNumber, DEFAULT_BASE};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -100_000i64..100_000i64
    }

    // Strategy for generating positive divisors
    fn positive_int() -> impl Strategy<Value = i64> {
        1i64..10_000i64
    }

    // Strategy for generating usable limb bases
    fn any_base() -> impl Strategy<Value = u64> {
        prop_oneof![2u64..1000u64, Just(DEFAULT_BASE)]
    }

    proptest! {
        #[test]
        fn string_round_trip(v in any::<i64>()) {
            let n = BigNumber::parse(&v.to_string()).unwrap();
            prop_assert_eq!(n.to_string(), v.to_string());
        }

        #[test]
        fn base_round_trip(v in small_int(), base in any_base()) {
            let n = BigNumber::from_i64(v);
            let converted = n.to_base(base);
            prop_assert_eq!(converted.to_string(), v.to_string());
            prop_assert_eq!(converted.to_base(DEFAULT_BASE), n);
        }

        #[test]
        fn add_commutative(a in small_int(), b in small_int()) {
            let a = BigNumber::from_i64(a);
            let b = BigNumber::from_i64(b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = BigNumber::from_i64(a);
            let b = BigNumber::from_i64(b);
            let c = BigNumber::from_i64(c);
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn add_matches_native(a in small_int(), b in small_int()) {
            let sum = BigNumber::from_i64(a) + BigNumber::from_i64(b);
            prop_assert_eq!(sum.to_i64(), Some(a + b));
        }

        #[test]
        fn sub_matches_native(a in small_int(), b in small_int()) {
            let diff = BigNumber::from_i64(a) - BigNumber::from_i64(b);
            prop_assert_eq!(diff.to_i64(), Some(a - b));
        }

        #[test]
        fn mul_commutative(a in small_int(), b in small_int()) {
            let a = BigNumber::from_i64(a);
            let b = BigNumber::from_i64(b);
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn mul_matches_native(a in small_int(), b in small_int()) {
            let product = BigNumber::from_i64(a) * BigNumber::from_i64(b);
            prop_assert_eq!(product.to_i64(), Some(a * b));
        }

        #[test]
        fn additive_inverse(a in small_int()) {
            let a = BigNumber::from_i64(a);
            let sum = &a + &(-&a);
            prop_assert!(sum.is_zero());
            prop_assert!(!sum.is_negative());
        }

        #[test]
        fn add_identity(a in small_int()) {
            let a = BigNumber::from_i64(a);
            prop_assert_eq!(&a + &BigNumber::zero(), a);
        }

        #[test]
        fn division_matches_native(a in small_int(), b in positive_int()) {
            let q = BigNumber::from_i64(a).div(&BigNumber::from_i64(b)).unwrap();
            prop_assert_eq!(q.to_i64(), Some(a / b));
        }

        #[test]
        fn division_identity(a in small_int(), b in positive_int()) {
            let a = BigNumber::from_i64(a);
            let b = BigNumber::from_i64(b);
            let q = a.div(&b).unwrap();
            let r = a.rem(&b).unwrap();
            prop_assert_eq!(&(&q * &b) + &r, a);
        }

        #[test]
        fn remainder_matches_native(a in small_int(), b in positive_int()) {
            let r = BigNumber::from_i64(a).rem(&BigNumber::from_i64(b)).unwrap();
            prop_assert_eq!(r.to_i64(), Some(a % b));
        }

        #[test]
        fn sqrt_bounds(a in prop_oneof![0i64..4i64, 0i64..1_000_000i64]) {
            // The first range keeps the 0/1 boundary in every run.
            let n = BigNumber::from_i64(a);
            let root = n.sqrt().unwrap();
            let next = &root + &BigNumber::from_i64(1);
            prop_assert!(&root * &root <= n);
            prop_assert!(&next * &next > n);
        }

        #[test]
        fn cross_base_add_agrees(a in small_int(), b in small_int(), base in any_base()) {
            let lhs = BigNumber::from_i64(a);
            let rhs = BigNumber::from_i64_with_base(b, base);
            let sum = &lhs + &rhs;
            prop_assert_eq!(sum.base(), lhs.base());
            prop_assert_eq!(sum.to_i64(), Some(a + b));
        }
    }
}
