//! Matrix operands given on the command line: a gate name or a JSON literal.
use anyhow::{anyhow, bail, Context, Result};
use serde_json::Value;

use crate::core::convert::{qonvert, QData};
use crate::core::gates;
use crate::core::QMatrix;

fn number(v: &Value) -> Result<f64> {
    v.as_f64().ok_or_else(|| anyhow!("expected a number, found {v}"))
}

/// Parse `[[..],[..]]`, `[..]`, or a bare number into conversion data.
pub fn parse_data(src: &str) -> Result<QData> {
    let value: Value = serde_json::from_str(src).with_context(|| format!("parsing literal {src:?}"))?;
    match &value {
        Value::Number(_) => Ok(QData::from(number(&value)?)),
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_array) => {
            let rows = items
                .iter()
                .filter_map(Value::as_array)
                .map(|xs| xs.iter().map(number).collect::<Result<Vec<f64>>>())
                .collect::<Result<Vec<Vec<f64>>>>()?;
            Ok(QData::from(rows))
        }
        Value::Array(items) => Ok(QData::from(items.iter().map(number).collect::<Result<Vec<f64>>>()?)),
        other => bail!("unsupported literal {other}"),
    }
}

/// Resolve an operand: gate names first, then JSON literals.
pub fn parse_operand(src: &str, sparse: bool) -> Result<QMatrix> {
    let trimmed = src.trim();
    if trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return gates::named(trimmed, sparse).with_context(|| format!("operand {src:?}"));
    }
    let data = parse_data(trimmed)?;
    qonvert(data, None, sparse, false).with_context(|| format!("operand {src:?}"))
}
