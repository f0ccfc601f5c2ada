use anyhow::Result;

use super::operand::parse_operand;
use super::Session;
use crate::core::classify::{classify, isherm, Classification};
use crate::core::ops::{infer_num_qubits, tr};
use crate::core::QMatrix;

/// Summary lines for one matrix.
pub fn describe(m: &QMatrix) -> String {
    let (nrows, ncols) = m.shape();
    let kind = match classify(m) {
        Classification::Ket => "ket",
        Classification::Bra => "bra",
        Classification::Operator => "operator",
        Classification::Neither => "neither",
    };
    let mut lines = vec![
        format!("shape: {nrows}x{ncols}"),
        format!("storage: {}", if m.is_sparse() { "sparse" } else { "dense" }),
        format!("nnz: {}", m.nnz()),
        format!("class: {kind}"),
        format!("qubits: {}", infer_num_qubits(m)),
    ];
    if nrows == ncols {
        lines.push(format!("hermitian: {}", isherm(m)));
        lines.push(format!("trace: {}", tr(m)));
    }
    lines.join("\n")
}

/// `quijy info MAT`
pub fn info_cmd(mat: &str, session: &Session) -> Result<()> {
    let m = parse_operand(mat, session.config.sparse)?;
    session.emit(&format!("info({mat})"), &describe(&m))
}
