//! Algebraic law tests for the outcome container

use proptest::prelude::*;
use upshot_core::Outcome;

fn double(x: i64) -> Outcome<i64, String> {
    Outcome::success(x.wrapping_mul(2))
}

fn stringify(x: i64) -> Outcome<String, String> {
    Outcome::success(format!("{}", x))
}

proptest! {
    #[test]
    fn functor_identity(x in any::<i64>()) {
        let s: Outcome<i64, String> = Outcome::success(x);
        prop_assert_eq!(s.map(|v| v), Outcome::success(x));
    }

    #[test]
    fn functor_maps_success(x in any::<i64>()) {
        let s: Outcome<i64, String> = Outcome::success(x);
        prop_assert_eq!(s.map(|v| v.wrapping_add(1)).value(), Some(x.wrapping_add(1)));
    }

    #[test]
    fn functor_preserves_failure(e in any::<String>()) {
        let f: Outcome<i64, String> = Outcome::failure(e.clone());
        prop_assert_eq!(f.map(|v| v.wrapping_add(1)).error(), Some(e));
    }

    #[test]
    fn monad_left_identity(x in any::<i64>()) {
        prop_assert_eq!(Outcome::<i64, String>::success(x).and_then(double), double(x));
    }

    #[test]
    fn monad_right_identity_success(x in any::<i64>()) {
        let r: Outcome<i64, String> = Outcome::success(x);
        prop_assert_eq!(r.clone().and_then(Outcome::success), r);
    }

    #[test]
    fn monad_right_identity_failure(e in any::<String>()) {
        let r: Outcome<i64, String> = Outcome::failure(e);
        prop_assert_eq!(r.clone().and_then(Outcome::success), r);
    }

    #[test]
    fn monad_associativity(x in any::<i64>()) {
        let r: Outcome<i64, String> = Outcome::success(x);
        let lhs = r.clone().and_then(double).and_then(stringify);
        let rhs = r.and_then(|v| double(v).and_then(stringify));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn coalescing_matches_variant(x in any::<i64>(), d in any::<i64>(), e in any::<String>()) {
        prop_assert_eq!(Outcome::<i64, String>::success(x).unwrap_or_else(|| d), x);
        prop_assert_eq!(Outcome::<i64, String>::failure(e).unwrap_or_else(|| d), d);
    }
}
