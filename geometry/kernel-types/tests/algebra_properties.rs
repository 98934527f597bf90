//! Property-based tests for the vector and matrix kernel.
//!
//! Run with: cargo test -p kernel-types -- proptest

use approx::relative_eq;
use kernel_types::{
    Matrix3, Vector3, cross, determinant, dot, from_columns, inverse_unchecked, norm,
    try_inverse, vector,
};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_vector() -> impl Strategy<Value = Vector3<f64>> {
    prop::array::uniform3(-100.0..100.0f64).prop_map(|[x, y, z]| vector(x, y, z))
}

/// Matrices with a comfortably non-zero determinant.
fn arb_invertible() -> impl Strategy<Value = Matrix3<f64>> {
    (arb_vector(), arb_vector(), arb_vector())
        .prop_map(|(a, b, c)| from_columns(&a, &b, &c))
        .prop_filter("well conditioned", |m| {
            let scale: f64 = m.column_iter().map(|c| c.norm()).product();
            scale > 1e-3 && determinant(m).abs() > 1e-3 * scale
        })
}

// =============================================================================
// Vector algebra
// =============================================================================

proptest! {
    #[test]
    fn cross_is_anticommutative(a in arb_vector(), b in arb_vector()) {
        let ab = cross(&a, &b);
        let ba = cross(&b, &a);
        prop_assert!(relative_eq!(ab, -ba, epsilon = 1e-9));
    }

    #[test]
    fn dot_is_commutative(a in arb_vector(), b in arb_vector()) {
        prop_assert_eq!(dot(&a, &b), dot(&b, &a));
    }

    #[test]
    fn cross_is_orthogonal_to_inputs(a in arb_vector(), b in arb_vector()) {
        let c = cross(&a, &b);
        let tol = 1e-9 * (1.0 + norm(&a) * norm(&b) * (norm(&a) + norm(&b)));
        prop_assert!(dot(&c, &a).abs() < tol);
        prop_assert!(dot(&c, &b).abs() < tol);
    }

    #[test]
    fn norm_is_non_negative(a in arb_vector()) {
        let n = norm(&a);
        prop_assert!(n >= 0.0);
        prop_assert_eq!(n == 0.0, a == Vector3::zeros());
    }

    // =========================================================================
    // Matrix algebra
    // =========================================================================

    #[test]
    fn inverse_is_two_sided(m in arb_invertible()) {
        let inv = try_inverse(&m);
        prop_assert!(inv.is_ok());
        if let Ok(inv) = inv {
            prop_assert!(relative_eq!(m * inv, Matrix3::identity(), epsilon = 1e-6));
            prop_assert!(relative_eq!(inv * m, Matrix3::identity(), epsilon = 1e-6));
        }
    }

    #[test]
    fn independent_columns_have_nonzero_determinant(m in arb_invertible()) {
        prop_assert!(determinant(&m) != 0.0);
    }

    #[test]
    fn dependent_columns_are_rejected(a in arb_vector(), b in arb_vector(), k in -5.0..5.0f64) {
        let m = from_columns(&a, &b, &(a * k));
        prop_assert!(try_inverse(&m).is_err());
    }
}

#[test]
fn zero_matrix_inverse_is_non_finite() {
    let inv = inverse_unchecked(&Matrix3::zeros());
    assert!(inv.iter().all(|c| c.is_nan() || c.is_infinite()));
}
