//! Scalar functions of a single complex value.
//!
//! Everything here works through the public accessor contract of [`Complex`],
//! so the methods on the type are plain call-throughs to these functions.
//!
//! # Polar form
//!
//! A complex value `z = x + iy` can be written as `(r, θ)` where
//!
//! ```text
//! r = sqrt(x² + y²)      θ = atan2(y, x),  θ ∈ (-π, π]
//! x = r·cos θ            y = r·sin θ
//! ```
//!
//! Powers are taken in polar form: `z^e = (r^e, e·θ)`. Integer and real
//! exponents share the same real-valued power function, so `powi(z, n)` and
//! `powf(z, n as f64)` agree bit for bit.

use crate::complex::Complex;

/// Euclidean magnitude `sqrt(re² + im²)`.
///
/// Computed with `hypot`, so the squares never overflow or underflow for
/// finite parts.
#[inline]
pub fn norm(z: Complex) -> f64 {
    z.real().hypot(z.imag())
}

/// Squared magnitude `re² + im²` (no square root).
#[inline]
pub fn norm_sqr(z: Complex) -> f64 {
    z.real() * z.real() + z.imag() * z.imag()
}

/// Principal angle `atan2(im, re)` in radians.
///
/// `argument(0 + 0i)` is `0.0`, following the IEEE `atan2(+0, +0)` convention.
#[inline]
pub fn argument(z: Complex) -> f64 {
    z.imag().atan2(z.real())
}

/// Reflection across the real axis, `(re, -im)`.
#[inline]
pub fn conjugate(z: Complex) -> Complex {
    Complex::new(z.real(), -z.imag())
}

/// Build a value from magnitude and angle (radians).
#[inline]
pub fn from_polar(r: f64, theta: f64) -> Complex {
    Complex::new(r * theta.cos(), r * theta.sin())
}

/// Split a value into `(norm, argument)`.
#[inline]
pub fn to_polar(z: Complex) -> (f64, f64) {
    (norm(z), argument(z))
}

/// Raise `z` to an integer power.
pub fn powi(z: Complex, n: i32) -> Complex {
    powf(z, f64::from(n))
}

/// Raise `z` to a real power.
///
/// Zero raised to a negative exponent yields a non-finite result rather than
/// an error.
pub fn powf(z: Complex, alpha: f64) -> Complex {
    let (r, theta) = to_polar(z);
    from_polar(r.powf(alpha), alpha * theta)
}

/// Complex exponential `e^z = e^re·(cos im + i·sin im)`.
#[inline]
pub fn exp(z: Complex) -> Complex {
    from_polar(z.real().exp(), z.imag())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_norm_pythagorean_triple() {
        assert_eq!(norm(Complex::new(3.0, 4.0)), 5.0);
        assert_eq!(norm_sqr(Complex::new(3.0, 4.0)), 25.0);
    }

    #[test]
    fn test_norm_at_extreme_magnitudes() {
        let tiny = norm(Complex::new(1e-170, 1e-170));
        assert!((tiny / (1e-170 * std::f64::consts::SQRT_2) - 1.0).abs() < 1e-12);

        let huge = norm(Complex::new(1e200, 1e200));
        assert!(huge.is_finite());
        assert!((huge / (1e200 * std::f64::consts::SQRT_2) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_argument_quadrants() {
        assert_eq!(argument(Complex::ZERO), 0.0);
        assert!((argument(Complex::new(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-12);
        assert!((argument(Complex::new(-1.0, 0.0)) - PI).abs() < 1e-12);
        assert!((argument(Complex::new(0.0, -2.0)) + FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_conjugate_is_pure() {
        let z = Complex::new(1.0, 2.0);
        let c = conjugate(z);
        assert_eq!(c, Complex::new(1.0, -2.0));
        assert_eq!(z, Complex::new(1.0, 2.0));
    }

    #[test]
    fn test_polar_roundtrip_point() {
        let z = from_polar(2.0, PI / 3.0);
        let (r, theta) = to_polar(z);
        assert!((r - 2.0).abs() < 1e-12);
        assert!((theta - PI / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_powi_matches_powf() {
        let z = Complex::new(0.7, -1.3);
        for n in -3..=5 {
            assert_eq!(powi(z, n), powf(z, n as f64));
        }
    }

    #[test]
    fn test_powi_of_i() {
        // i^2 = -1, i^4 = 1
        let sq = powi(Complex::I, 2);
        assert!((sq.real() + 1.0).abs() < 1e-12);
        assert!(sq.imag().abs() < 1e-12);

        let fourth = powi(Complex::I, 4);
        assert!((fourth.real() - 1.0).abs() < 1e-12);
        assert!(fourth.imag().abs() < 1e-12);
    }

    #[test]
    fn test_square_root_of_minus_one() {
        let root = powf(Complex::new(-1.0, 0.0), 0.5);
        assert!(root.real().abs() < 1e-12);
        assert!((root.imag() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_power_edge_cases() {
        assert_eq!(powi(Complex::ZERO, 3), Complex::ZERO);
        assert_eq!(powi(Complex::ZERO, 0), Complex::ONE);

        let inv = powi(Complex::ZERO, -1);
        assert!(inv.real().is_infinite());
        assert!(inv.imag().is_nan());
    }

    #[test]
    fn test_exp_euler_identity() {
        let w = exp(Complex::new(0.0, PI));
        assert!((w.real() + 1.0).abs() < 1e-9);
        assert!(w.imag().abs() < 1e-9);
    }

    #[test]
    fn test_exp_real_axis() {
        let w = exp(Complex::new(1.0, 0.0));
        assert!((w.real() - std::f64::consts::E).abs() < 1e-12);
        assert_eq!(w.imag(), 0.0);
    }
}
