//! Kronecker (tensor) products over dense and sparse matrices.
//!
//! Chains are composed right to left: `kron(&[a, b, c])` is `a ⊗ (b ⊗ c)`.
//! Subsystem `k` of the product is the `k`-th factor, which is the order
//! `eyepad` relies on.
use nalgebra::DMatrix;
use nalgebra_sparse::CsrMatrix;
use num_complex::Complex64 as C64;

use crate::core::qmatrix::{csr_from_triplets, QMatrix};

/// Dense `a ⊗ b`: block `(i, j)` of the output is `a[i, j] · b`.
pub fn krnd2(a: &DMatrix<C64>, b: &DMatrix<C64>) -> DMatrix<C64> {
    let (m, n) = a.shape();
    let (p, q) = b.shape();
    let mut x = DMatrix::<C64>::zeros(m * p, n * q);
    // column-major storage: walk columns outermost
    for j in 0..n {
        for i in 0..m {
            let aij = a[(i, j)];
            for l in 0..q {
                for k in 0..p {
                    x[(i * p + k, j * q + l)] = aij * b[(k, l)];
                }
            }
        }
    }
    x
}

/// Sparse `a ⊗ b` over stored entries only.
pub fn krns2(a: &CsrMatrix<C64>, b: &CsrMatrix<C64>) -> CsrMatrix<C64> {
    let (p, q) = (b.nrows(), b.ncols());
    let mut triplets = Vec::with_capacity(a.nnz() * b.nnz());
    for (ia, ja, va) in a.triplet_iter() {
        for (ib, jb, vb) in b.triplet_iter() {
            triplets.push((ia * p + ib, ja * q + jb, va * vb));
        }
    }
    csr_from_triplets(a.nrows() * p, a.ncols() * q, triplets)
}

/// `a ⊗ b`, sparse if either operand is sparse.
pub fn kron2(a: &QMatrix, b: &QMatrix) -> QMatrix {
    match (a, b) {
        (QMatrix::Dense(da), QMatrix::Dense(db)) => QMatrix::Dense(krnd2(da, db)),
        _ => QMatrix::Sparse(krns2(&a.csr(), &b.csr())),
    }
}

/// Tensor product of all `ps`, in order. A single factor comes back unchanged;
/// an empty list yields the 1×1 unity.
pub fn kron(ps: &[&QMatrix]) -> QMatrix {
    match ps.split_last() {
        None => QMatrix::unity(),
        Some((last, rest)) => {
            let out = rest.iter().rev().fold((*last).clone(), |acc, p| kron2(p, &acc));
            debug_log!("kron: {} factors -> {:?} sparse={}", ps.len(), out.shape(), out.is_sparse());
            out
        }
    }
}

/// `a` tensored with itself `pwr` times; zero factors give the 1×1 unity.
pub fn kronpow(a: &QMatrix, pwr: usize) -> QMatrix {
    match pwr {
        0 => QMatrix::unity(),
        1 => a.clone(),
        _ => kron(&vec![a; pwr]),
    }
}

/// Variadic [`kron`]: `kron![a, b, c]` accepts matrices or references to them.
#[macro_export]
macro_rules! kron {
    ($($p:expr),+ $(,)?) => {
        $crate::core::kron::kron(&[$(::std::borrow::Borrow::<$crate::core::qmatrix::QMatrix>::borrow(&$p)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::qmatrix::{c, eye};

    fn seq(m: usize, n: usize, offset: f64) -> QMatrix {
        let data: Vec<C64> = (0..m * n).map(|k| c(k as f64 + offset, k as f64 * 0.5)).collect();
        QMatrix::from_row_slice(m, n, &data)
    }

    #[test]
    fn dense_blocks_are_scaled_copies() {
        let a = seq(2, 3, 1.0);
        let b = seq(3, 2, -2.0);
        let x = kron2(&a, &b);
        assert_eq!(x.shape(), (6, 6));
        for i in 0..2 {
            for j in 0..3 {
                for k in 0..3 {
                    for l in 0..2 {
                        assert_eq!(x.get(i * 3 + k, j * 2 + l), a.get(i, j) * b.get(k, l));
                    }
                }
            }
        }
    }

    #[test]
    fn sparse_operand_gives_sparse_result() {
        let a = seq(2, 2, 0.0);
        let b = eye(2, true);
        let mixed = kron2(&a, &b);
        assert!(mixed.is_sparse());
        assert_eq!(mixed.into_dense(), kron2(&a, &eye(2, false)));
    }

    #[test]
    fn chain_is_right_associated() {
        let (a, b, d) = (seq(2, 1, 1.0), seq(1, 2, 2.0), seq(2, 2, 3.0));
        assert_eq!(kron(&[&a, &b, &d]), kron2(&a, &kron2(&b, &d)));
        assert_eq!(kron![a, b, d], kron(&[&a, &b, &d]));
        assert_eq!(kron![&a], a);
    }

    #[test]
    fn powers() {
        let a = seq(2, 2, 1.0);
        assert_eq!(kronpow(&a, 0), QMatrix::unity());
        assert_eq!(kronpow(&a, 1), a);
        assert_eq!(kronpow(&a, 3), kron![a, a, a]);
        assert_eq!(kron(&[]), QMatrix::unity());
    }
}
