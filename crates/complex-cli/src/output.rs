//! Result formatting and writing.

use crate::config::OutputConfig;
use crate::eval::{Detail, Report};
use anyhow::Result;
use lib_complex::Complex;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Output format for evaluation results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Write a report in the configured format, newline-terminated.
pub fn write_report<W: Write>(writer: &mut W, report: &Report, config: &OutputConfig) -> Result<()> {
    match config.format {
        OutputFormat::Text => write_text(writer, report, config.precision)?,
        OutputFormat::Json => {
            let json = to_json(report);
            writeln!(writer, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }
    Ok(())
}

fn write_text<W: Write>(writer: &mut W, report: &Report, precision: usize) -> Result<()> {
    writeln!(writer, "{} = {:.*}", report.expression, precision, report.value)?;
    for detail in &report.details {
        match detail {
            Detail::Scalar(name, v) => writeln!(writer, "  {:<10} {:.*}", name, precision, v)?,
            Detail::Complex(name, z) => writeln!(writer, "  {:<10} {:.*}", name, precision, z)?,
        }
    }
    Ok(())
}

fn to_json(report: &Report) -> serde_json::Value {
    let mut details = serde_json::Map::new();
    for detail in &report.details {
        match detail {
            Detail::Scalar(name, v) => {
                details.insert(name.to_string(), json_number(*v));
            }
            Detail::Complex(name, z) => {
                details.insert(name.to_string(), json_complex(*z));
            }
        }
    }

    serde_json::json!({
        "expression": report.expression,
        "value": json_complex(report.value),
        "details": details,
    })
}

fn json_complex(z: Complex) -> serde_json::Value {
    serde_json::json!({ "re": json_number(z.real()), "im": json_number(z.imag()) })
}

/// JSON has no NaN or infinity, so those go out as the strings
/// `"NaN"`, `"inf"` and `"-inf"` instead of `null`.
fn json_number(v: f64) -> serde_json::Value {
    if v.is_finite() {
        serde_json::json!(v)
    } else {
        serde_json::Value::String(format!("{:?}", v))
    }
}
