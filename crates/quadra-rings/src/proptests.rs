//! Property-based tests for the ring laws the matrix engine relies on.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Ring, Q, Z};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn assert_ring_laws<R: Ring>(a: &R, b: &R, c: &R) -> Result<(), TestCaseError> {
        prop_assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        prop_assert_eq!(
            (a.clone() + b.clone()) + c.clone(),
            a.clone() + (b.clone() + c.clone())
        );
        prop_assert_eq!(
            (a.clone() * b.clone()) * c.clone(),
            a.clone() * (b.clone() * c.clone())
        );
        prop_assert_eq!(
            a.clone() * (b.clone() + c.clone()),
            a.clone() * b.clone() + a.clone() * c.clone()
        );
        prop_assert_eq!(a.clone() - b.clone(), a.clone() + (-b.clone()));
        prop_assert_eq!(a.clone() + R::zero(), a.clone());
        prop_assert_eq!(a.clone() * R::one(), a.clone());
        Ok(())
    }

    proptest! {
        #[test]
        fn machine_integer_ring_laws(a in small_int(), b in small_int(), c in small_int()) {
            assert_ring_laws(&a, &b, &c)?;
        }

        #[test]
        fn integer_ring_laws(a in small_int(), b in small_int(), c in small_int()) {
            assert_ring_laws(&Z::new(a), &Z::new(b), &Z::new(c))?;
        }

        #[test]
        fn rational_ring_laws(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Q::new(num_a, den_a);
            let b = Q::new(num_b, den_b);
            let c = Q::new(num_c, den_c);
            assert_ring_laws(&a, &b, &c)?;
        }

        #[test]
        fn integer_embeds_in_rationals(a in small_int(), b in small_int()) {
            let z = Z::new(a) * Z::new(b) - Z::new(b);
            let q = Q::from_integer(a) * Q::from_integer(b) - Q::from_integer(b);
            prop_assert_eq!(q.numerator(), z.into_inner());
            prop_assert!(q.denominator() == dashu::integer::IBig::ONE);
        }
    }
}
