//! Property-based tests for expression evaluation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{evaluate_infix, evaluate_postfix, infix_to_postfix};

    // Strategy for generating non-negative literal operands
    fn operand() -> impl Strategy<Value = u32> {
        0u32..10_000u32
    }

    // Strategy for generating operators with native counterparts that
    // cannot fail on the operand range above
    fn total_op() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("+"), Just("-"), Just("*")]
    }

    fn native(op: &str, left: i64, right: i64) -> i64 {
        match op {
            "+" => left + right,
            "-" => left - right,
            _ => left * right,
        }
    }

    fn native_precedence(op: &str) -> u8 {
        if op == "*" {
            12
        } else {
            11
        }
    }

    proptest! {
        #[test]
        fn postfix_pair_matches_native(a in operand(), b in operand(), op in total_op()) {
            let tokens = [a.to_string(), b.to_string(), op.to_owned()];
            let result = evaluate_postfix(&tokens).unwrap();
            let expected = native(op, i64::from(a), i64::from(b));
            prop_assert_eq!(result.to_string(), expected.to_string());
        }

        #[test]
        fn infix_triple_matches_native(
            a in operand(),
            b in operand(),
            c in operand(),
            op1 in total_op(),
            op2 in total_op(),
        ) {
            let tokens = [
                a.to_string(),
                op1.to_owned(),
                b.to_string(),
                op2.to_owned(),
                c.to_string(),
            ];
            let result = evaluate_infix(&tokens).unwrap();

            // Left to right, except a lone higher-precedence op2 binds
            // b and c first.
            let (a, b, c) = (i64::from(a), i64::from(b), i64::from(c));
            let expected = if native_precedence(op2) > native_precedence(op1) {
                native(op1, a, native(op2, b, c))
            } else {
                native(op2, native(op1, a, b), c)
            };
            prop_assert_eq!(result.to_string(), expected.to_string());
        }

        #[test]
        fn parentheses_force_grouping(
            a in operand(),
            b in operand(),
            c in operand(),
            op1 in total_op(),
            op2 in total_op(),
        ) {
            let tokens = [
                "(".to_owned(),
                a.to_string(),
                op1.to_owned(),
                b.to_string(),
                ")".to_owned(),
                op2.to_owned(),
                c.to_string(),
            ];
            let result = evaluate_infix(&tokens).unwrap();
            let (a, b, c) = (i64::from(a), i64::from(b), i64::from(c));
            let expected = native(op2, native(op1, a, b), c);
            prop_assert_eq!(result.to_string(), expected.to_string());
        }

        #[test]
        fn conversion_then_evaluation_agrees(
            a in operand(),
            b in operand(),
            op in total_op(),
        ) {
            let infix = [a.to_string(), op.to_owned(), b.to_string()];
            let direct = evaluate_infix(&infix).unwrap();
            let postfix = infix_to_postfix(&infix).unwrap();
            let staged = evaluate_postfix(&postfix).unwrap();
            prop_assert_eq!(direct, staged);
        }
    }
}
