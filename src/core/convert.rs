//! Raw numeric data → classified quantum matrices (kets are columns).
use std::str::FromStr;

use nalgebra::DMatrix;
use num_complex::Complex64 as C64;

use crate::core::classify::isop;
use crate::core::error::{QuijyError, Result};
use crate::core::ops::nrmlz;
use crate::core::qmatrix::QMatrix;

/// Requested output classification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QType {
    Ket,
    Bra,
    /// Density operator; vectors are turned into `|ψ⟩⟨ψ|`.
    Dop,
}

impl FromStr for QType {
    type Err = QuijyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "k" | "ket" => Ok(Self::Ket),
            "b" | "bra" => Ok(Self::Bra),
            "p" | "d" | "r" | "rho" | "op" | "dop" => Ok(Self::Dop),
            other => Err(QuijyError::UnknownQType(other.to_string())),
        }
    }
}

/// Nested numeric input: scalar, 1-D, 2-D, or an existing matrix.
#[derive(Clone, Debug, PartialEq)]
pub enum QData {
    Scalar(C64),
    Vector(Vec<C64>),
    Rows(Vec<Vec<C64>>),
    Matrix(QMatrix),
}

impl QData {
    /// Build the dense matrix. 1-D data becomes a single row.
    fn into_dense(self) -> Result<DMatrix<C64>> {
        match self {
            Self::Scalar(z) => Ok(DMatrix::from_element(1, 1, z)),
            Self::Vector(v) if v.is_empty() => Err(QuijyError::EmptyData),
            Self::Vector(v) => Ok(DMatrix::from_row_slice(1, v.len(), &v)),
            Self::Rows(rows) => {
                let ncols = rows.first().map_or(0, Vec::len);
                if ncols == 0 {
                    return Err(QuijyError::EmptyData);
                }
                if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
                    return Err(QuijyError::RaggedData { row, expected: ncols, found: r.len() });
                }
                Ok(DMatrix::from_row_slice(rows.len(), ncols, &rows.concat()))
            }
            Self::Matrix(m) => Ok(m.to_dense()),
        }
    }
}

fn real(v: &[f64]) -> Vec<C64> {
    v.iter().map(|&x| C64::new(x, 0.0)).collect()
}

impl From<f64> for QData {
    fn from(x: f64) -> Self {
        Self::Scalar(C64::new(x, 0.0))
    }
}

impl From<C64> for QData {
    fn from(z: C64) -> Self {
        Self::Scalar(z)
    }
}

impl From<&[f64]> for QData {
    fn from(v: &[f64]) -> Self {
        Self::Vector(real(v))
    }
}

impl From<Vec<f64>> for QData {
    fn from(v: Vec<f64>) -> Self {
        Self::Vector(real(&v))
    }
}

impl<const N: usize> From<[f64; N]> for QData {
    fn from(v: [f64; N]) -> Self {
        Self::Vector(real(&v))
    }
}

impl From<&[C64]> for QData {
    fn from(v: &[C64]) -> Self {
        Self::Vector(v.to_vec())
    }
}

impl From<Vec<C64>> for QData {
    fn from(v: Vec<C64>) -> Self {
        Self::Vector(v)
    }
}

impl<const N: usize> From<[C64; N]> for QData {
    fn from(v: [C64; N]) -> Self {
        Self::Vector(v.to_vec())
    }
}

impl From<Vec<Vec<f64>>> for QData {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self::Rows(rows.iter().map(|r| real(r)).collect())
    }
}

impl<const M: usize, const N: usize> From<[[f64; N]; M]> for QData {
    fn from(rows: [[f64; N]; M]) -> Self {
        Self::Rows(rows.iter().map(|r| real(r)).collect())
    }
}

impl From<Vec<Vec<C64>>> for QData {
    fn from(rows: Vec<Vec<C64>>) -> Self {
        Self::Rows(rows)
    }
}

impl From<QMatrix> for QData {
    fn from(m: QMatrix) -> Self {
        Self::Matrix(m)
    }
}

impl From<&QMatrix> for QData {
    fn from(m: &QMatrix) -> Self {
        Self::Matrix(m.clone())
    }
}

/// Same entries in row-major order, laid out as `nrows × ncols`.
fn reshape(m: &DMatrix<C64>, nrows: usize, ncols: usize) -> DMatrix<C64> {
    let flat: Vec<C64> = m.transpose().iter().copied().collect();
    DMatrix::from_row_slice(nrows, ncols, &flat)
}

/// Convert `data` into a quantum matrix.
///
/// * `Ket` unravels into a column, `Bra` into a conjugated row.
/// * `Dop` builds `|ψ⟩⟨ψ|` from non-square input; square input is taken to
///   already be the operator and is left as given.
/// * `normalize` rescales with [`nrmlz`]; `sparse` compresses the result.
pub fn qonvert(
    data: impl Into<QData>,
    qtype: Option<QType>,
    sparse: bool,
    normalize: bool,
) -> Result<QMatrix> {
    let mut p = QMatrix::Dense(data.into().into_dense()?);
    if let Some(qtype) = qtype {
        let dense = p.to_dense();
        let sz = dense.len();
        p = match qtype {
            QType::Ket => QMatrix::Dense(reshape(&dense, sz, 1)),
            QType::Bra => QMatrix::Dense(reshape(&dense, 1, sz)).conj(),
            QType::Dop if !isop(&p) => {
                let k = reshape(&dense, sz, 1);
                QMatrix::Dense(&k * k.adjoint())
            }
            QType::Dop => p,
        };
    }
    if normalize {
        p = nrmlz(&p);
    }
    debug_log!("qonvert: {:?} -> {:?} sparse={sparse}", qtype, p.shape());
    Ok(p.into_storage(sparse))
}

/// Column vector from `data`.
pub fn ket(data: impl Into<QData>) -> Result<QMatrix> {
    qonvert(data, Some(QType::Ket), false, false)
}

/// Conjugated row vector from `data`.
pub fn bra(data: impl Into<QData>) -> Result<QMatrix> {
    qonvert(data, Some(QType::Bra), false, false)
}

/// Density operator from a state vector (or an operator, unchanged).
pub fn dop(data: impl Into<QData>) -> Result<QMatrix> {
    qonvert(data, Some(QType::Dop), false, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::qmatrix::c;

    #[test]
    fn qtype_aliases() {
        for s in ["k", "ket"] {
            assert_eq!(s.parse::<QType>().unwrap(), QType::Ket);
        }
        for s in ["b", "bra"] {
            assert_eq!(s.parse::<QType>().unwrap(), QType::Bra);
        }
        for s in ["p", "d", "r", "rho", "op", "dop"] {
            assert_eq!(s.parse::<QType>().unwrap(), QType::Dop);
        }
        assert_eq!("q".parse::<QType>(), Err(QuijyError::UnknownQType("q".into())));
    }

    #[test]
    fn untyped_vector_is_a_row() {
        let p = qonvert([1.0, 2.0, 3.0], None, false, false).unwrap();
        assert_eq!(p.shape(), (1, 3));
        let s = qonvert(2.0, None, false, false).unwrap();
        assert_eq!(s.shape(), (1, 1));
    }

    #[test]
    fn ket_unravels_row_major() {
        let k = ket([[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(k.shape(), (4, 1));
        let col: Vec<f64> = (0..4).map(|i| k.get(i, 0).re).collect();
        assert_eq!(col, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn bra_is_conjugated() {
        let b = bra(vec![c(1.0, 1.0), c(0.0, 2.0)]).unwrap();
        assert_eq!(b.shape(), (1, 2));
        assert_eq!(b.get(0, 0), c(1.0, -1.0));
        assert_eq!(b.get(0, 1), c(0.0, -2.0));
    }

    #[test]
    fn dop_builds_outer_product_or_keeps_square() {
        let rho = dop(vec![c(0.0, 1.0), c(1.0, 0.0)]).unwrap();
        assert_eq!(rho.shape(), (2, 2));
        assert_eq!(rho.get(0, 0), c(1.0, 0.0));
        assert_eq!(rho.get(0, 1), c(0.0, 1.0));
        assert_eq!(rho.get(1, 0), c(0.0, -1.0));

        let square = [[1.0, 2.0], [3.0, 4.0]];
        let kept = dop(square).unwrap();
        assert_eq!(kept, qonvert(square, None, false, false).unwrap());
    }

    #[test]
    fn flags_normalize_and_sparsify() {
        let k = qonvert([3.0, 4.0], Some(QType::Ket), true, true).unwrap();
        assert!(k.is_sparse());
        assert!((k.get(0, 0).re - 0.6).abs() < 1e-12);
        assert!((k.get(1, 0).re - 0.8).abs() < 1e-12);
    }

    #[test]
    fn bad_data_is_rejected() {
        assert_eq!(qonvert(Vec::<f64>::new(), None, false, false), Err(QuijyError::EmptyData));
        let ragged = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            qonvert(ragged, None, false, false),
            Err(QuijyError::RaggedData { row: 1, expected: 2, found: 1 })
        );
    }
}
