//! The complex number value type.
//!
//! [`Complex`] is a plain `Copy` pair of `f64` in Cartesian form. Queries
//! never modify the receiver; the only ways to change a value in place are
//! the compound assignment operators and the methods suffixed `_in_place`.

use crate::error::{ComplexError, ComplexResult};
use crate::ops::divide;
use crate::polar;
use num_complex::Complex64;
use std::fmt;

/// Default number of decimal digits used by [`fmt::Display`].
pub const DISPLAY_PRECISION: usize = 8;

/// A complex number `re + i·im` with double-precision parts.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    /// `0 + 0i`
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// `1 + 0i`
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// The imaginary unit `0 + 1i`.
    pub const I: Self = Self::new(0.0, 1.0);

    /// Create a value from its real and imaginary parts. No validation.
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Create a value, rejecting NaN or infinite parts.
    pub fn try_new(re: f64, im: f64) -> ComplexResult<Self> {
        if re.is_finite() && im.is_finite() {
            Ok(Self::new(re, im))
        } else {
            Err(ComplexError::NonFinite { re, im })
        }
    }

    /// Create a value from magnitude and angle (radians).
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        polar::from_polar(r, theta)
    }

    #[inline]
    pub const fn real(&self) -> f64 {
        self.re
    }

    #[inline]
    pub const fn imag(&self) -> f64 {
        self.im
    }

    /// Euclidean magnitude.
    #[inline]
    pub fn norm(&self) -> f64 {
        polar::norm(*self)
    }

    /// Squared magnitude.
    #[inline]
    pub fn norm_sqr(&self) -> f64 {
        polar::norm_sqr(*self)
    }

    /// Principal angle in `(-π, π]`.
    #[inline]
    pub fn argument(&self) -> f64 {
        polar::argument(*self)
    }

    /// `(norm, argument)`.
    #[inline]
    pub fn to_polar(&self) -> (f64, f64) {
        polar::to_polar(*self)
    }

    /// Conjugate `(re, -im)`. Does not modify `self`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        polar::conjugate(*self)
    }

    /// Negate the imaginary part of `self`.
    pub fn conjugate_in_place(&mut self) -> &mut Self {
        *self = self.conjugate();
        self
    }

    /// `self` raised to an integer power. Does not modify `self`.
    #[inline]
    pub fn powi(&self, n: i32) -> Self {
        polar::powi(*self, n)
    }

    /// `self` raised to a real power. Does not modify `self`.
    #[inline]
    pub fn powf(&self, alpha: f64) -> Self {
        polar::powf(*self, alpha)
    }

    /// Replace `self` with `self^n`.
    pub fn powi_in_place(&mut self, n: i32) -> &mut Self {
        *self = self.powi(n);
        self
    }

    /// Replace `self` with `self^alpha`.
    pub fn powf_in_place(&mut self, alpha: f64) -> &mut Self {
        *self = self.powf(alpha);
        self
    }

    /// Complex exponential of `self`.
    #[inline]
    pub fn exp(&self) -> Self {
        polar::exp(*self)
    }

    /// Reciprocal `1 / self`.
    #[inline]
    pub fn recip(&self) -> Self {
        divide(Self::ONE, *self)
    }

    /// Divide by a complex value, failing on a zero-magnitude divisor.
    pub fn checked_div(&self, rhs: Self) -> ComplexResult<Self> {
        if rhs.re == 0.0 && rhs.im == 0.0 {
            return Err(ComplexError::DivisionByZero);
        }
        Ok(divide(*self, rhs))
    }

    /// Divide by a real scalar, failing when it is zero.
    pub fn checked_div_scalar(&self, rhs: f64) -> ComplexResult<Self> {
        if rhs == 0.0 {
            return Err(ComplexError::DivisionByZero);
        }
        Ok(*self / rhs)
    }

    /// Reciprocal, failing on zero.
    pub fn checked_recip(&self) -> ComplexResult<Self> {
        Self::ONE.checked_div(*self)
    }

    /// True when both parts are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// True when either part is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Component-wise comparison within an absolute tolerance.
    pub fn approx_eq(&self, other: Self, tolerance: f64) -> bool {
        (self.re - other.re).abs() <= tolerance && (self.im - other.im).abs() <= tolerance
    }

    /// Write the value to standard output, newline-terminated.
    pub fn print(&self) {
        println!("{}", self);
    }
}

/// Formats as `(re, im)` with [`DISPLAY_PRECISION`] decimals unless the
/// format string asks for a different precision.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DISPLAY_PRECISION);
        write!(f, "({:.*}, {:.*})", precision, self.re, precision, self.im)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Self::new(re, im)
    }
}

impl From<Complex> for (f64, f64) {
    fn from(z: Complex) -> Self {
        (z.re, z.im)
    }
}

impl From<Complex64> for Complex {
    fn from(z: Complex64) -> Self {
        Self::new(z.re, z.im)
    }
}

impl From<Complex> for Complex64 {
    fn from(z: Complex) -> Self {
        Complex64::new(z.re, z.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        assert_eq!(Complex::default(), Complex::ZERO);

        let z = Complex::new(1.5, -2.0);
        assert_eq!(z.real(), 1.5);
        assert_eq!(z.imag(), -2.0);

        let copy = z;
        assert_eq!(copy, z);
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        assert!(Complex::try_new(1.0, 2.0).is_ok());
        assert!(matches!(
            Complex::try_new(f64::NAN, 0.0),
            Err(ComplexError::NonFinite { .. })
        ));
        assert!(matches!(
            Complex::try_new(0.0, f64::INFINITY),
            Err(ComplexError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_norm_and_argument_scenarios() {
        assert_eq!(Complex::new(3.0, 4.0).norm(), 5.0);
        assert_eq!(Complex::ZERO.argument(), 0.0);
    }

    #[test]
    fn test_method_and_free_function_agree() {
        let z = Complex::new(-0.25, 3.5);
        assert_eq!(z.norm(), polar::norm(z));
        assert_eq!(z.argument(), polar::argument(z));
        assert_eq!(z.conjugate(), polar::conjugate(z));
        assert_eq!(z.powi(3), polar::powi(z, 3));
        assert_eq!(z.powf(1.5), polar::powf(z, 1.5));
    }

    #[test]
    fn test_queries_leave_receiver_untouched() {
        let z = Complex::new(2.0, 1.0);
        let _ = z.conjugate();
        let _ = z.powi(4);
        let _ = z.powf(0.5);
        assert_eq!(z, Complex::new(2.0, 1.0));
    }

    #[test]
    fn test_in_place_variants_chain() {
        let mut z = Complex::new(1.0, 1.0);
        z.conjugate_in_place().powi_in_place(2);

        // (1 - i)^2 = -2i
        assert!(z.approx_eq(Complex::new(0.0, -2.0), 1e-12));

        z.powf_in_place(0.5);
        assert!(z.approx_eq(Complex::new(1.0, -1.0), 1e-12));
    }

    #[test]
    fn test_display_default_precision() {
        let z = Complex::new(1.5, -2.25);
        assert_eq!(z.to_string(), "(1.50000000, -2.25000000)");
    }

    #[test]
    fn test_display_custom_precision() {
        let z = Complex::new(1.0 / 3.0, 2.0);
        assert_eq!(format!("{:.3}", z), "(0.333, 2.000)");
    }

    #[test]
    fn test_checked_division() {
        let z = Complex::new(1.0, 2.0);
        assert_eq!(z.checked_div(Complex::ZERO), Err(ComplexError::DivisionByZero));
        assert_eq!(z.checked_div_scalar(0.0), Err(ComplexError::DivisionByZero));
        assert_eq!(Complex::ZERO.checked_recip(), Err(ComplexError::DivisionByZero));

        let q = z.checked_div(Complex::new(0.0, 1.0)).unwrap();
        assert!(q.approx_eq(Complex::new(2.0, -1.0), 1e-12));
    }

    #[test]
    fn test_checked_division_by_tiny_divisor() {
        let b = Complex::new(1e-170, 0.0);
        assert!(b.norm() > 0.0);

        let q = Complex::ONE.checked_div(b).unwrap();
        assert!((q.real() / 1e170 - 1.0).abs() < 1e-12);
        assert_eq!(q.imag(), 0.0);

        let a = Complex::new(1e-170, 1e-170);
        assert!(a.checked_div(a).unwrap().approx_eq(Complex::ONE, 1e-12));
    }

    #[test]
    fn test_recip() {
        let r = Complex::new(0.0, 2.0).recip();
        assert!(r.approx_eq(Complex::new(0.0, -0.5), 1e-12));
    }

    #[test]
    fn test_num_complex_conversion() {
        let z = Complex::new(0.5, -1.5);
        let nc: Complex64 = z.into();
        assert_eq!(nc, Complex64::new(0.5, -1.5));
        assert_eq!(Complex::from(nc), z);

        assert_eq!(Complex::from(2.0), Complex::new(2.0, 0.0));
        assert_eq!(Complex::from((1.0, 2.0)), Complex::new(1.0, 2.0));
        assert_eq!(<(f64, f64)>::from(z), (0.5, -1.5));
    }

    #[test]
    fn test_nan_propagates() {
        let z = Complex::new(f64::NAN, 1.0);
        assert!(z.is_nan());
        assert!(!z.is_finite());
        assert!((z * 2.0).is_nan());
    }
}
