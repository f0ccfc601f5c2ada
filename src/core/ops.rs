//! Cleanup, normalization, trace, commutator, and diagonal scaling.
use num_complex::Complex64 as C64;

use crate::core::classify::{isbra, isket};
use crate::core::error::{QuijyError, Result};
use crate::core::qmatrix::{csr_from_triplets, lex_cmp, QMatrix};

/// Default relative tolerance for [`chop`].
pub const CHOP_TOL: f64 = 1.0e-14;

/// `|max - min|` over all entries, ordered by real part then imaginary part.
/// Sparse matrices that are not full count their implicit zero.
fn value_range(x: &QMatrix) -> f64 {
    let entries: Box<dyn Iterator<Item = C64> + '_> = match x {
        QMatrix::Dense(m) => Box::new(m.iter().copied()),
        QMatrix::Sparse(m) => {
            let implicit = m.nnz() < m.nrows() * m.ncols();
            Box::new(m.values().iter().copied().chain(implicit.then(C64::default)))
        }
    };
    let bounds = entries.fold(None, |acc: Option<(C64, C64)>, z| match acc {
        None => Some((z, z)),
        Some((lo, hi)) => Some((
            std::cmp::min_by(lo, z, lex_cmp),
            std::cmp::max_by(hi, z, lex_cmp),
        )),
    });
    bounds.map_or(0.0, |(lo, hi)| (hi - lo).norm())
}

/// Zero the real and imaginary parts smaller than `tol` relative to the
/// value range of `x`. Acts in place; sparse matrices then drop their zeros.
pub fn chop(x: &mut QMatrix, tol: f64) -> &mut QMatrix {
    let minm = value_range(x) * tol;
    let snap = |z: &mut C64| {
        if z.re.abs() < minm {
            z.re = 0.0;
        }
        if z.im.abs() < minm {
            z.im = 0.0;
        }
    };
    match x {
        QMatrix::Dense(m) => m.iter_mut().for_each(snap),
        QMatrix::Sparse(m) => m.values_mut().iter_mut().for_each(snap),
    }
    x.eliminate_zeros();
    debug_log!("chop: tol={tol:e} cutoff={minm:e} nnz={}", x.nnz());
    x
}

/// `diag(v) · m` without building the diagonal matrix: row `i` scaled by `v[i]`.
pub fn ldmul(v: &[C64], m: &QMatrix) -> Result<QMatrix> {
    if v.len() != m.nrows() {
        return Err(QuijyError::ShapeMismatch { op: "ldmul", expected: m.nrows(), found: v.len() });
    }
    Ok(match m {
        QMatrix::Dense(d) => QMatrix::Dense(d.map_with_location(|i, _, z| v[i] * z)),
        QMatrix::Sparse(s) => QMatrix::Sparse(csr_from_triplets(
            s.nrows(),
            s.ncols(),
            s.triplet_iter().map(|(i, j, z)| (i, j, v[i] * z)),
        )),
    })
}

/// `m · diag(v)` without building the diagonal matrix: column `j` scaled by `v[j]`.
pub fn rdmul(m: &QMatrix, v: &[C64]) -> Result<QMatrix> {
    if v.len() != m.ncols() {
        return Err(QuijyError::ShapeMismatch { op: "rdmul", expected: m.ncols(), found: v.len() });
    }
    Ok(match m {
        QMatrix::Dense(d) => QMatrix::Dense(d.map_with_location(|_, j, z| z * v[j])),
        QMatrix::Sparse(s) => QMatrix::Sparse(csr_from_triplets(
            s.nrows(),
            s.ncols(),
            s.triplet_iter().map(|(i, j, z)| (i, j, z * v[j])),
        )),
    })
}

/// Commutator `a·b − b·a`.
pub fn comm(a: &QMatrix, b: &QMatrix) -> QMatrix {
    &(a * b) - &(b * a)
}

/// Sum of the real parts of the diagonal.
pub fn tr(a: &QMatrix) -> f64 {
    match a {
        QMatrix::Dense(m) => {
            let mut x = 0.0;
            for i in 0..m.nrows().min(m.ncols()) {
                x += m[(i, i)].re;
            }
            x
        }
        QMatrix::Sparse(m) => m.triplet_iter().filter(|(i, j, _)| i == j).map(|(_, _, z)| z.re).sum(),
    }
}

/// Rescale to unit norm: kets and bras by `sqrt(⟨ψ|ψ⟩)`, anything else by its trace.
pub fn nrmlz(p: &QMatrix) -> QMatrix {
    let norm = if isket(p) || isbra(p) { p.norm_sqr().sqrt() } else { tr(p) };
    p.scale(C64::new(1.0 / norm, 0.0))
}

/// Qubit count of a register whose larger dimension is `2^n`.
pub fn infer_num_qubits(p: &QMatrix) -> usize {
    let (m, n) = p.shape();
    m.max(n).ilog2() as usize
}
