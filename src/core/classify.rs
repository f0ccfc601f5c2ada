//! Shape predicates: ket (column), bra (row), operator (square).
//!
//! A 1×1 matrix is none of the three; it classifies as `Neither`.
use crate::core::qmatrix::{allclose, QMatrix};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    Ket,
    Bra,
    Operator,
    Neither,
}

/// Column vector with more than one row.
pub fn isket(p: &QMatrix) -> bool {
    let (m, n) = p.shape();
    m > 1 && n == 1
}

/// Row vector with more than one column.
pub fn isbra(p: &QMatrix) -> bool {
    let (m, n) = p.shape();
    m == 1 && n > 1
}

/// Square with more than one row.
pub fn isop(p: &QMatrix) -> bool {
    let (m, n) = p.shape();
    m == n && m > 1
}

/// Sparse matrices must equal their conjugate transpose exactly; dense ones
/// only up to `allclose`.
pub fn isherm(a: &QMatrix) -> bool {
    if a.is_sparse() {
        a.dag() == *a
    } else {
        allclose(a, &a.dag())
    }
}

pub fn classify(p: &QMatrix) -> Classification {
    if isket(p) {
        Classification::Ket
    } else if isbra(p) {
        Classification::Bra
    } else if isop(p) {
        Classification::Operator
    } else {
        Classification::Neither
    }
}
