//! Dense/sparse complex matrices behind one tagged union.
//!
//! `QMatrix` is the value every quantum routine consumes and produces. Dense
//! storage is a column-major `nalgebra::DMatrix`, sparse storage is a
//! compressed-row `nalgebra_sparse::CsrMatrix`. Sparse matrices are always
//! assembled through a `CooMatrix`, which sums duplicates and sorts columns,
//! so construction cannot fail.
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

use nalgebra::DMatrix;
use nalgebra_sparse::{CooMatrix, CsrMatrix};
use num_complex::Complex64 as C64;

/// numpy `allclose` defaults.
pub const RTOL: f64 = 1e-5;
pub const ATOL: f64 = 1e-8;

#[inline]
pub fn c(r: f64, i: f64) -> C64 {
    C64::new(r, i)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Storage {
    Dense,
    Sparse,
}

#[derive(Clone, Debug)]
pub enum QMatrix {
    Dense(DMatrix<C64>),
    Sparse(CsrMatrix<C64>),
}

/// Assemble a CSR matrix from `(row, col, value)` triplets. Duplicates are summed.
pub fn csr_from_triplets<I>(nrows: usize, ncols: usize, triplets: I) -> CsrMatrix<C64>
where
    I: IntoIterator<Item = (usize, usize, C64)>,
{
    let mut coo = CooMatrix::new(nrows, ncols);
    for (i, j, v) in triplets {
        coo.push(i, j, v);
    }
    CsrMatrix::from(&coo)
}

/// Identity of size `n`, dense or compressed-row.
pub fn eye(n: usize, sparse: bool) -> QMatrix {
    if sparse {
        QMatrix::Sparse(CsrMatrix::identity(n))
    } else {
        QMatrix::Dense(DMatrix::identity(n, n))
    }
}

/// Elementwise `|a - b| <= ATOL + RTOL * |b|` over matrices of equal shape.
pub fn allclose(a: &QMatrix, b: &QMatrix) -> bool {
    if a.shape() != b.shape() {
        return false;
    }
    let (da, db) = (a.dense(), b.dense());
    da.iter()
        .zip(db.iter())
        .all(|(x, y)| (x - y).norm() <= ATOL + RTOL * y.norm())
}

impl QMatrix {
    /// Dense matrix from entries listed row by row.
    pub fn from_row_slice(nrows: usize, ncols: usize, data: &[C64]) -> Self {
        Self::Dense(DMatrix::from_row_slice(nrows, ncols, data))
    }

    /// The 1×1 matrix `[[1]]`, the neutral element of the tensor product.
    pub fn unity() -> Self {
        Self::Dense(DMatrix::from_element(1, 1, c(1.0, 0.0)))
    }

    pub fn shape(&self) -> (usize, usize) {
        match self {
            Self::Dense(m) => m.shape(),
            Self::Sparse(m) => (m.nrows(), m.ncols()),
        }
    }

    pub fn nrows(&self) -> usize {
        self.shape().0
    }

    pub fn ncols(&self) -> usize {
        self.shape().1
    }

    pub fn storage(&self) -> Storage {
        match self {
            Self::Dense(_) => Storage::Dense,
            Self::Sparse(_) => Storage::Sparse,
        }
    }

    pub fn is_sparse(&self) -> bool {
        matches!(self, Self::Sparse(_))
    }

    /// Number of nonzero entries (stored entries for sparse matrices).
    pub fn nnz(&self) -> usize {
        match self {
            Self::Dense(m) => m.iter().filter(|z| **z != C64::default()).count(),
            Self::Sparse(m) => m.nnz(),
        }
    }

    /// Entry `(i, j)`; implicit sparse zeros read as zero.
    pub fn get(&self, i: usize, j: usize) -> C64 {
        match self {
            Self::Dense(m) => m[(i, j)],
            Self::Sparse(m) => {
                let (lo, hi) = (m.row_offsets()[i], m.row_offsets()[i + 1]);
                m.col_indices()[lo..hi]
                    .binary_search(&j)
                    .map(|k| m.values()[lo + k])
                    .unwrap_or_default()
            }
        }
    }

    /// Borrowed dense view; materializes sparse matrices.
    pub fn dense(&self) -> Cow<'_, DMatrix<C64>> {
        match self {
            Self::Dense(m) => Cow::Borrowed(m),
            Self::Sparse(m) => {
                let mut out = DMatrix::zeros(m.nrows(), m.ncols());
                for (i, j, v) in m.triplet_iter() {
                    out[(i, j)] += *v;
                }
                Cow::Owned(out)
            }
        }
    }

    /// Borrowed CSR view; compresses dense matrices, dropping zeros.
    pub fn csr(&self) -> Cow<'_, CsrMatrix<C64>> {
        match self {
            Self::Sparse(m) => Cow::Borrowed(m),
            Self::Dense(m) => {
                let zero = C64::default();
                let (nrows, ncols) = m.shape();
                let triplets = (0..nrows)
                    .flat_map(|i| (0..ncols).map(move |j| (i, j)))
                    .map(|(i, j)| (i, j, m[(i, j)]))
                    .filter(|(_, _, v)| *v != zero);
                Cow::Owned(csr_from_triplets(nrows, ncols, triplets))
            }
        }
    }

    pub fn to_dense(&self) -> DMatrix<C64> {
        self.dense().into_owned()
    }

    pub fn into_dense(self) -> Self {
        match self {
            Self::Sparse(_) => Self::Dense(self.to_dense()),
            dense => dense,
        }
    }

    pub fn into_sparse(self) -> Self {
        match self {
            Self::Dense(_) => Self::Sparse(self.csr().into_owned()),
            sparse => sparse,
        }
    }

    /// Convert to the requested storage mode.
    pub fn into_storage(self, sparse: bool) -> Self {
        if sparse {
            self.into_sparse()
        } else {
            self.into_dense()
        }
    }

    /// Entries in row-major (C) order, implicit zeros included.
    pub fn row_major(&self) -> Vec<C64> {
        self.dense().transpose().iter().copied().collect()
    }

    /// Apply `f` to every stored entry. For sparse matrices `f` must map zero to zero.
    pub fn map<F: FnMut(C64) -> C64>(&self, mut f: F) -> Self {
        match self {
            Self::Dense(m) => Self::Dense(m.map(f)),
            Self::Sparse(m) => {
                let mut out = m.clone();
                out.values_mut().iter_mut().for_each(|v| *v = f(*v));
                Self::Sparse(out)
            }
        }
    }

    pub fn scale(&self, s: C64) -> Self {
        self.map(|z| z * s)
    }

    pub fn conj(&self) -> Self {
        self.map(|z| z.conj())
    }

    /// Conjugate transpose.
    pub fn dag(&self) -> Self {
        match self {
            Self::Dense(m) => Self::Dense(m.adjoint()),
            Self::Sparse(m) => Self::Sparse(csr_from_triplets(
                m.ncols(),
                m.nrows(),
                m.triplet_iter().map(|(i, j, v)| (j, i, v.conj())),
            )),
        }
    }

    /// Drop explicitly stored zeros from a sparse matrix; dense matrices are untouched.
    pub fn eliminate_zeros(&mut self) {
        if let Self::Sparse(m) = self {
            let zero = C64::default();
            *m = csr_from_triplets(
                m.nrows(),
                m.ncols(),
                m.triplet_iter()
                    .filter(|(_, _, v)| **v != zero)
                    .map(|(i, j, v)| (i, j, *v)),
            );
        }
    }

    /// Sum of squared magnitudes of all entries.
    pub fn norm_sqr(&self) -> f64 {
        match self {
            Self::Dense(m) => m.iter().map(|z| z.norm_sqr()).sum(),
            Self::Sparse(m) => m.values().iter().map(|z| z.norm_sqr()).sum(),
        }
    }
}

/// Storage mode, shape, and every entry must agree exactly.
impl PartialEq for QMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.storage() == other.storage()
            && self.shape() == other.shape()
            && *self.dense() == *other.dense()
    }
}

fn sparse_combine(a: &CsrMatrix<C64>, b: &CsrMatrix<C64>, sign: f64) -> CsrMatrix<C64> {
    assert_eq!(
        (a.nrows(), a.ncols()),
        (b.nrows(), b.ncols()),
        "sparse add/sub: shape mismatch"
    );
    let lhs = a.triplet_iter().map(|(i, j, v)| (i, j, *v));
    let rhs = b.triplet_iter().map(|(i, j, v)| (i, j, *v * sign));
    csr_from_triplets(a.nrows(), a.ncols(), lhs.chain(rhs))
}

impl<'a, 'b> Mul<&'b QMatrix> for &'a QMatrix {
    type Output = QMatrix;

    fn mul(self, rhs: &'b QMatrix) -> QMatrix {
        match (self, rhs) {
            (QMatrix::Sparse(a), QMatrix::Sparse(b)) => QMatrix::Sparse(a * b),
            (QMatrix::Dense(a), QMatrix::Dense(b)) => QMatrix::Dense(a * b),
            _ => QMatrix::Dense(&*self.dense() * &*rhs.dense()),
        }
    }
}

impl<'a, 'b> Add<&'b QMatrix> for &'a QMatrix {
    type Output = QMatrix;

    fn add(self, rhs: &'b QMatrix) -> QMatrix {
        match (self, rhs) {
            (QMatrix::Sparse(a), QMatrix::Sparse(b)) => QMatrix::Sparse(sparse_combine(a, b, 1.0)),
            _ => QMatrix::Dense(&*self.dense() + &*rhs.dense()),
        }
    }
}

impl<'a, 'b> Sub<&'b QMatrix> for &'a QMatrix {
    type Output = QMatrix;

    fn sub(self, rhs: &'b QMatrix) -> QMatrix {
        match (self, rhs) {
            (QMatrix::Sparse(a), QMatrix::Sparse(b)) => QMatrix::Sparse(sparse_combine(a, b, -1.0)),
            _ => QMatrix::Dense(&*self.dense() - &*rhs.dense()),
        }
    }
}

impl Mul for QMatrix {
    type Output = QMatrix;
    fn mul(self, rhs: QMatrix) -> QMatrix {
        &self * &rhs
    }
}

impl Add for QMatrix {
    type Output = QMatrix;
    fn add(self, rhs: QMatrix) -> QMatrix {
        &self + &rhs
    }
}

impl Sub for QMatrix {
    type Output = QMatrix;
    fn sub(self, rhs: QMatrix) -> QMatrix {
        &self - &rhs
    }
}

impl From<DMatrix<C64>> for QMatrix {
    fn from(m: DMatrix<C64>) -> Self {
        Self::Dense(m)
    }
}

impl From<CsrMatrix<C64>> for QMatrix {
    fn from(m: CsrMatrix<C64>) -> Self {
        Self::Sparse(m)
    }
}

/// Lexicographic (real, then imaginary) ordering of complex values.
pub fn lex_cmp(a: &C64, b: &C64) -> Ordering {
    a.re.partial_cmp(&b.re)
        .unwrap_or(Ordering::Equal)
        .then(a.im.partial_cmp(&b.im).unwrap_or(Ordering::Equal))
}

fn fmt_entry(z: C64, precision: usize) -> String {
    // adding 0.0 folds -0.0 into 0.0
    let (re, im) = (z.re + 0.0, z.im + 0.0);
    let sign = if im < 0.0 { '-' } else { '+' };
    format!("{re:.precision$}{sign}{:.precision$}i", im.abs())
}

/// Plain-text rendering; `{:.N}` sets the digits after the decimal point (default 4).
impl fmt::Display for QMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(4);
        let (nrows, ncols) = self.shape();
        if let Self::Sparse(m) = self {
            writeln!(f, "sparse {nrows}x{ncols} nnz={}", m.nnz())?;
        }
        let dense = self.dense();
        let cells: Vec<String> = (0..nrows)
            .flat_map(|i| (0..ncols).map(move |j| (i, j)))
            .map(|(i, j)| fmt_entry(dense[(i, j)], precision))
            .collect();
        let width = cells.iter().map(String::len).max().unwrap_or(0);
        for (i, row) in cells.chunks(ncols.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|s| format!("{s:>width$}")).collect();
            write!(f, "{}", line.join("  "))?;
        }
        Ok(())
    }
}
