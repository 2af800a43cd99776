//! Expression evaluation over `lib_complex`.

use anyhow::{Context, Result};
use lib_complex::Complex;
use std::fmt;
use std::str::FromStr;

/// A command-line operand: `re,im` is complex, a bare number is a real scalar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Complex(Complex),
}

impl Operand {
    /// Lift onto the complex plane.
    pub fn to_complex(self) -> Complex {
        match self {
            Self::Scalar(s) => Complex::from(s),
            Self::Complex(z) => z,
        }
    }
}

impl FromStr for Operand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let inner = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s);

        match inner.split_once(',') {
            Some((re, im)) => {
                let re = parse_part(re, "real part")?;
                let im = parse_part(im, "imaginary part")?;
                Ok(Self::Complex(Complex::try_new(re, im)?))
            }
            None => {
                let value = parse_part(inner, "scalar")?;
                if !value.is_finite() {
                    anyhow::bail!("Scalar operand must be finite, got {:?}", value);
                }
                Ok(Self::Scalar(value))
            }
        }
    }
}

fn parse_part(s: &str, what: &str) -> Result<f64> {
    s.trim()
        .parse::<f64>()
        .with_context(|| format!("Invalid {}: {:?}", what, s.trim()))
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{:?}", s),
            Self::Complex(z) => write!(f, "({:?},{:?})", z.real(), z.imag()),
        }
    }
}

/// Binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl FromStr for BinaryOp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "+" | "add" => Ok(Self::Add),
            "-" | "sub" => Ok(Self::Sub),
            "*" | "x" | "mul" => Ok(Self::Mul),
            "/" | "div" => Ok(Self::Div),
            other => anyhow::bail!("Unknown operator {:?}. Use one of + - * /", other),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        f.write_str(symbol)
    }
}

/// Power exponent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Exponent {
    Integer(i32),
    Real(f64),
}

/// A named quantity reported alongside the main result.
#[derive(Clone, Debug, PartialEq)]
pub enum Detail {
    Scalar(&'static str, f64),
    Complex(&'static str, Complex),
}

/// Result of one evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// Human-readable form of what was evaluated.
    pub expression: String,

    /// The resulting value.
    pub value: Complex,

    /// Extra quantities, in display order.
    pub details: Vec<Detail>,
}

impl Report {
    fn new(expression: String, value: Complex) -> Self {
        Self {
            expression,
            value,
            details: Vec::new(),
        }
    }
}

/// Evaluates single expressions.
pub struct Evaluator {
    checked: bool,
}

impl Evaluator {
    /// Create a new evaluator. `checked` turns zero divisors into errors.
    pub fn new(checked: bool) -> Self {
        Self { checked }
    }

    /// Describe a value: parts, polar form and conjugate.
    pub fn show(&self, z: Complex) -> Report {
        let mut report = Report::new(format!("({:?},{:?})", z.real(), z.imag()), z);
        report.details = vec![
            Detail::Scalar("real", z.real()),
            Detail::Scalar("imag", z.imag()),
            Detail::Scalar("norm", z.norm()),
            Detail::Scalar("argument", z.argument()),
            Detail::Complex("conjugate", z.conjugate()),
        ];
        report
    }

    /// Evaluate `lhs op rhs`.
    pub fn binary(&self, lhs: Operand, op: BinaryOp, rhs: Operand) -> Result<Report> {
        tracing::debug!("Evaluating {:?} {} {:?}", lhs, op, rhs);

        let value = match op {
            BinaryOp::Add => lhs.to_complex() + rhs.to_complex(),
            BinaryOp::Sub => lhs.to_complex() - rhs.to_complex(),
            BinaryOp::Mul => match (lhs, rhs) {
                (Operand::Complex(a), Operand::Complex(b)) => a * b,
                (Operand::Complex(a), Operand::Scalar(s)) => a * s,
                (Operand::Scalar(s), Operand::Complex(b)) => s * b,
                (Operand::Scalar(a), Operand::Scalar(b)) => Complex::from(a * b),
            },
            BinaryOp::Div => self.divide(lhs, rhs)?,
        };

        if !value.is_finite() {
            tracing::warn!("{} {} {} produced a non-finite result", lhs, op, rhs);
        }

        Ok(Report::new(format!("{} {} {}", lhs, op, rhs), value))
    }

    fn divide(&self, lhs: Operand, rhs: Operand) -> Result<Complex> {
        if self.checked {
            let quotient = match rhs {
                Operand::Scalar(s) => lhs.to_complex().checked_div_scalar(s),
                Operand::Complex(b) => lhs.to_complex().checked_div(b),
            };
            return quotient.with_context(|| format!("Cannot divide {} by {}", lhs, rhs));
        }

        Ok(match (lhs, rhs) {
            (Operand::Complex(a), Operand::Complex(b)) => a / b,
            (Operand::Complex(a), Operand::Scalar(s)) => a / s,
            (Operand::Scalar(s), Operand::Complex(b)) => s / b,
            (Operand::Scalar(a), Operand::Scalar(b)) => Complex::from(a) / b,
        })
    }

    /// Raise `z` to a power.
    pub fn power(&self, z: Complex, exponent: Exponent) -> Report {
        let (value, label) = match exponent {
            Exponent::Integer(n) => (z.powi(n), n.to_string()),
            Exponent::Real(alpha) => (z.powf(alpha), format!("{:?}", alpha)),
        };
        tracing::debug!("({:?},{:?})^{} = {:?}", z.real(), z.imag(), label, value);

        let mut report = Report::new(format!("({:?},{:?})^{}", z.real(), z.imag(), label), value);
        report.details = polar_details(value);
        report
    }

    /// Complex exponential of `z`.
    pub fn exp(&self, z: Complex) -> Report {
        let value = z.exp();
        let mut report = Report::new(format!("exp({:?},{:?})", z.real(), z.imag()), value);
        report.details = polar_details(value);
        report
    }

    /// Build a value from magnitude and angle.
    pub fn polar(&self, r: f64, theta: f64) -> Report {
        Report::new(format!("polar({:?}, {:?})", r, theta), Complex::from_polar(r, theta))
    }
}

fn polar_details(z: Complex) -> Vec<Detail> {
    vec![
        Detail::Scalar("norm", z.norm()),
        Detail::Scalar("argument", z.argument()),
    ]
}
