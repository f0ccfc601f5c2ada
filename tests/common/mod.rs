#![allow(dead_code)]
use num_complex::Complex64 as C64;
use proptest::prelude::*;
use quijy::core::QMatrix;

pub fn c(r: f64, i: f64) -> C64 {
    C64::new(r, i)
}

pub fn from_rows(rows: &[&[f64]]) -> QMatrix {
    let ncols = rows[0].len();
    let data: Vec<C64> = rows.iter().flat_map(|r| r.iter().map(|&x| c(x, 0.0))).collect();
    QMatrix::from_row_slice(rows.len(), ncols, &data)
}

prop_compose! {
    pub fn arbitrary_matrix(max_dim: usize)(nrows in 1..max_dim, ncols in 1..max_dim)
        (entries in prop::collection::vec((-2.0..2.0f64, -2.0..2.0f64), nrows * ncols),
         nrows in Just(nrows), ncols in Just(ncols)) -> QMatrix {
        let data: Vec<C64> = entries.into_iter().map(|(r, i)| c(r, i)).collect();
        QMatrix::from_row_slice(nrows, ncols, &data)
    }
}

prop_compose! {
    /// Roughly half the entries zeroed, stored as CSR.
    pub fn arbitrary_sparse(max_dim: usize)(m in arbitrary_matrix(max_dim)) -> QMatrix {
        m.map(|z| if z.re.abs() < 1.0 { c(0.0, 0.0) } else { z }).into_sparse()
    }
}

prop_compose! {
    pub fn arbitrary_square(max_dim: usize)(n in 1..max_dim)
        (entries in prop::collection::vec((-2.0..2.0f64, -2.0..2.0f64), n * n), n in Just(n)) -> QMatrix {
        let data: Vec<C64> = entries.into_iter().map(|(r, i)| c(r, i)).collect();
        QMatrix::from_row_slice(n, n, &data)
    }
}
