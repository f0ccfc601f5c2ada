//! Subcommand implementations behind the `quijy` binary.

pub mod eyepad;
pub mod info;
pub mod kron;
pub mod operand;
pub mod qonvert;

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::QuijyConfig;
use crate::core::{ops::chop, QMatrix};
use crate::io::atomic::atomic_write;

/// Resolved global options shared by every subcommand.
#[derive(Clone, Debug)]
pub struct Session {
    pub config: QuijyConfig,
    pub precision: usize,
    pub chop: bool,
    pub out: Option<PathBuf>,
}

impl Session {
    pub fn new(config: QuijyConfig, precision: Option<usize>, chop: bool, out: Option<PathBuf>) -> Self {
        let precision = precision.unwrap_or(config.precision);
        Self { config, precision, chop, out }
    }

    /// Matrix as it will be printed: optionally chopped, rendered at the session precision.
    pub fn render(&self, mut m: QMatrix) -> String {
        if self.chop {
            chop(&mut m, self.config.chop_tol);
        }
        format!("{:.*}", self.precision, m)
    }

    /// Print a titled result, or write it to `--out`.
    pub fn emit(&self, title: &str, body: &str) -> Result<()> {
        match &self.out {
            Some(path) => {
                atomic_write(path, format!("{body}\n"))
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("{} {} -> {}", "wrote".green().bold(), title, path.display());
            }
            None => {
                println!("{}", title.cyan().bold());
                println!("{body}");
            }
        }
        Ok(())
    }

    pub fn emit_matrix(&self, title: &str, m: QMatrix) -> Result<()> {
        let title = format!("{title} {}x{}", m.nrows(), m.ncols());
        let body = self.render(m);
        self.emit(&title, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::qmatrix::c;

    #[test]
    fn cli_precision_overrides_config() {
        let s = Session::new(QuijyConfig::default(), Some(1), false, None);
        assert_eq!(s.precision, 1);
        let s = Session::new(QuijyConfig::default(), None, false, None);
        assert_eq!(s.precision, 4);
    }

    #[test]
    fn render_chops_when_asked() {
        let m = QMatrix::from_row_slice(1, 2, &[c(1.0, 0.0), c(1e-20, 0.0)]).into_sparse();
        let raw = Session::new(QuijyConfig::default(), Some(0), false, None).render(m.clone());
        let chopped = Session::new(QuijyConfig::default(), Some(0), true, None).render(m);
        assert_eq!(raw, "sparse 1x2 nnz=2\n1+0i  0+0i");
        assert_eq!(chopped, "sparse 1x2 nnz=1\n1+0i  0+0i");
    }

    #[test]
    fn emit_writes_out_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("m.txt");
        let s = Session::new(QuijyConfig::default(), Some(0), false, Some(out.clone()));
        s.emit_matrix("eye", crate::core::eye(2, false)).unwrap();
        assert_eq!(std::fs::read_to_string(out).unwrap(), "1+0i  0+0i\n0+0i  1+0i\n");
    }
}
