//! # lib-complex
//!
//! Double-precision complex number value type.
//!
//! - [`Complex`]: Cartesian `(re, im)` pair with the usual operators
//! - [`polar`]: norm, argument, conjugate, powers and exponential as free functions
//! - [`ops`]: operator impls and the shared division routine
//! - [`ComplexError`]: failures reported by the checked operations
//!
//! ```
//! use lib_complex::Complex;
//!
//! let z = Complex::new(3.0, 4.0);
//! assert_eq!(z.norm(), 5.0);
//! assert_eq!(z.to_string(), "(3.00000000, 4.00000000)");
//! ```

pub mod complex;
pub mod error;
pub mod ops;
pub mod polar;

pub use complex::{Complex, DISPLAY_PRECISION};
pub use error::{ComplexError, ComplexResult};
pub use polar::{argument, conjugate, exp, norm, powf, powi};

/// Re-export num_complex for interop
pub use num_complex::Complex64;
