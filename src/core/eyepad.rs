//! Embed an operator into a tensor-product space, padding with identities.
use crate::core::error::{QuijyError, Result};
use crate::core::kron::kron2;
use crate::core::qmatrix::{eye, QMatrix};

/// Product of `dims[lo..hi]`, with slice bounds clamped the way numpy slices
/// are: an empty or inverted range multiplies to 1.
fn prod(dims: &[usize], lo: usize, hi: usize) -> usize {
    let hi = hi.min(dims.len());
    dims.get(lo..hi).map_or(1, |s| s.iter().product())
}

/// Pad `a` with identities so that it acts on each subsystem in `inds` of the
/// composite space with subsystem dimensions `dims`.
///
/// `inds` must be ascending. The sizes `dims[inds]` are never read: `a` is
/// assumed to match them, and a mismatch gives a wrongly sized result rather
/// than an error (see [`try_eyepad`] for the checked form). `sparse` picks the
/// storage of the padding identities, defaulting to that of `a`. The result is
/// sparse if either the identities or `a` are, so a sparse `a` always gives a
/// sparse result. An empty `inds` yields the identity on the whole space.
///
/// ```
/// use quijy::core::{eyepad, gates::sig, qmatrix::eye};
/// let x = sig("x", false).unwrap();
/// let b1 = quijy::kron![x, eye(2, false), x, eye(2, false)];
/// let b2 = eyepad(&x, &[2, 2, 2, 2], &[0, 2], None);
/// assert_eq!(b1, b2);
/// ```
pub fn eyepad(a: &QMatrix, dims: &[usize], inds: &[usize], sparse: Option<bool>) -> QMatrix {
    let sparse = sparse.unwrap_or_else(|| a.is_sparse());
    debug_log!("eyepad: dims={dims:?} inds={inds:?} sparse={sparse}");
    let (Some(&first), Some(&last)) = (inds.first(), inds.last()) else {
        return eye(prod(dims, 0, dims.len()), sparse);
    };
    let mut b = eye(prod(dims, 0, first), sparse);
    for pair in inds.windows(2) {
        b = kron2(&b, a);
        let pad_size = prod(dims, pair[0] + 1, pair[1]);
        b = kron2(&b, &eye(pad_size, sparse));
    }
    b = kron2(&b, a);
    let pad_size = prod(dims, last + 1, dims.len());
    kron2(&b, &eye(pad_size, sparse))
}

/// [`eyepad`] after checking the layout: `inds` non-empty, strictly ascending,
/// in range, and every selected subsystem exactly the size of the square `a`.
pub fn try_eyepad(a: &QMatrix, dims: &[usize], inds: &[usize], sparse: Option<bool>) -> Result<QMatrix> {
    if inds.is_empty() {
        return Err(QuijyError::InvalidLayout("no subsystem selected".into()));
    }
    if let Some(pair) = inds.windows(2).find(|p| p[0] >= p[1]) {
        return Err(QuijyError::InvalidLayout(format!(
            "indices must be strictly ascending, got {} before {}",
            pair[0], pair[1]
        )));
    }
    let (nrows, ncols) = a.shape();
    if nrows != ncols {
        return Err(QuijyError::InvalidLayout(format!("operator is {nrows}x{ncols}, not square")));
    }
    for &i in inds {
        match dims.get(i) {
            None => {
                return Err(QuijyError::InvalidLayout(format!(
                    "index {i} out of range for {} subsystems",
                    dims.len()
                )))
            }
            Some(&d) if d != nrows => {
                return Err(QuijyError::ShapeMismatch { op: "eyepad", expected: d, found: nrows })
            }
            Some(_) => {}
        }
    }
    Ok(eyepad(a, dims, inds, sparse))
}
