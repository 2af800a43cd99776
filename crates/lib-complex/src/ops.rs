//! Arithmetic operators for [`Complex`].
//!
//! Binary operators return fresh values. Compound assignment operators
//! update the left-hand side in place. Every operator with a complex divisor
//! goes through [`divide`].

use crate::complex::Complex;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Complex division `a / b = a·conj(b) / |b|²`.
///
/// The divisor is scaled by its largest component first so `|b|²` stays in
/// range for very large or very small finite divisors.
///
/// A zero-magnitude divisor is not rejected; the result is NaN or infinite
/// per IEEE 754. Use [`Complex::checked_div`] to get an error instead.
pub fn divide(a: Complex, b: Complex) -> Complex {
    let scale = b.real().abs().max(b.imag().abs());
    if scale == 0.0 || !scale.is_finite() {
        let denom = b.norm_sqr();
        return Complex::new(
            (a.real() * b.real() + a.imag() * b.imag()) / denom,
            (a.imag() * b.real() - a.real() * b.imag()) / denom,
        );
    }

    let (br, bi) = (b.real() / scale, b.imag() / scale);
    let denom = br * br + bi * bi;
    Complex::new(
        (a.real() * br + a.imag() * bi) / denom / scale,
        (a.imag() * br - a.real() * bi) / denom / scale,
    )
}

impl Add for Complex {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.real() + rhs.real(), self.imag() + rhs.imag())
    }
}

impl Sub for Complex {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.real() - rhs.real(), self.imag() - rhs.imag())
    }
}

impl Mul for Complex {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.real() * rhs.real() - self.imag() * rhs.imag(),
            self.real() * rhs.imag() + self.imag() * rhs.real(),
        )
    }
}

impl Mul<f64> for Complex {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.real() * rhs, self.imag() * rhs)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Complex {
        rhs * self
    }
}

impl Div for Complex {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        divide(self, rhs)
    }
}

impl Div<f64> for Complex {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.real() / rhs, self.imag() / rhs)
    }
}

impl Div<Complex> for f64 {
    type Output = Complex;
    fn div(self, rhs: Complex) -> Complex {
        divide(Complex::from(self), rhs)
    }
}

impl Neg for Complex {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.real(), -self.imag())
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Complex {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f64> for Complex {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign for Complex {
    fn div_assign(&mut self, rhs: Self) {
        *self = divide(*self, rhs);
    }
}

impl DivAssign<f64> for Complex {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}
