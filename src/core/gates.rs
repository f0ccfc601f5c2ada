//! Named single-qubit operators.
use crate::core::error::{QuijyError, Result};
use crate::core::qmatrix::{c, QMatrix};

fn op2(entries: [(f64, f64); 4], sparse: bool) -> QMatrix {
    let data = entries.map(|(r, i)| c(r, i));
    QMatrix::from_row_slice(2, 2, &data).into_storage(sparse)
}

/// Pauli matrix by direction: `x`/`1`, `y`/`2`, `z`/`3`, or `i`/`0` for the identity.
pub fn sig(dir: &str, sparse: bool) -> Result<QMatrix> {
    let entries = match dir.to_ascii_lowercase().as_str() {
        "i" | "0" => [(1.0, 0.0), (0.0, 0.0), (0.0, 0.0), (1.0, 0.0)],
        "x" | "1" => [(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (0.0, 0.0)],
        "y" | "2" => [(0.0, 0.0), (0.0, -1.0), (0.0, 1.0), (0.0, 0.0)],
        "z" | "3" => [(1.0, 0.0), (0.0, 0.0), (0.0, 0.0), (-1.0, 0.0)],
        other => return Err(QuijyError::UnknownOperator(other.to_string())),
    };
    Ok(op2(entries, sparse))
}

pub fn hadamard(sparse: bool) -> QMatrix {
    let s = 1.0_f64 / 2.0_f64.sqrt();
    op2([(s, 0.0), (s, 0.0), (s, 0.0), (-s, 0.0)], sparse)
}

/// Any operator [`sig`] knows, plus `h` for Hadamard.
pub fn named(name: &str, sparse: bool) -> Result<QMatrix> {
    match name.to_ascii_lowercase().as_str() {
        "h" => Ok(hadamard(sparse)),
        other => sig(other, sparse),
    }
}
