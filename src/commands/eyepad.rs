use anyhow::{Context, Result};

use super::operand::parse_operand;
use super::Session;
use crate::core::eyepad::{eyepad, try_eyepad};

/// `quijy eyepad MAT --dims .. --inds ..`
pub fn eyepad_cmd(
    mat: &str,
    dims: &[usize],
    inds: &[usize],
    sparse: Option<bool>,
    check: bool,
    session: &Session,
) -> Result<()> {
    let a = parse_operand(mat, session.config.sparse)?;
    let padded = if check {
        try_eyepad(&a, dims, inds, sparse).context("eyepad layout check failed")?
    } else {
        eyepad(&a, dims, inds, sparse)
    };
    session.emit_matrix(&format!("eyepad({mat}, dims={dims:?}, inds={inds:?})"), padded)
}
