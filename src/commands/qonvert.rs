use anyhow::Result;

use super::operand::parse_data;
use super::Session;
use crate::core::convert::{qonvert, QType};

/// `quijy qonvert DATA [--qtype ..] [--sparse] [--normalize]`
pub fn qonvert_cmd(data: &str, qtype: Option<QType>, sparse: bool, normalize: bool, session: &Session) -> Result<()> {
    let p = qonvert(parse_data(data)?, qtype, sparse || session.config.sparse, normalize)?;
    let label = qtype.map_or_else(|| "matrix".to_string(), |q| format!("{q:?}").to_lowercase());
    session.emit_matrix(&label, p)
}
