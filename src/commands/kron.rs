use anyhow::Result;

use super::operand::parse_operand;
use super::Session;
use crate::core::kron::{kron, kronpow};
use crate::core::QMatrix;

/// `quijy kron MAT...`
pub fn kron_cmd(mats: &[String], session: &Session) -> Result<()> {
    let factors = mats
        .iter()
        .map(|m| parse_operand(m, session.config.sparse))
        .collect::<Result<Vec<QMatrix>>>()?;
    let refs: Vec<&QMatrix> = factors.iter().collect();
    session.emit_matrix(&format!("kron({})", mats.join(", ")), kron(&refs))
}

/// `quijy kronpow MAT PWR`
pub fn kronpow_cmd(mat: &str, pwr: usize, session: &Session) -> Result<()> {
    let a = parse_operand(mat, session.config.sparse)?;
    session.emit_matrix(&format!("kronpow({mat}, {pwr})"), kronpow(&a, pwr))
}
