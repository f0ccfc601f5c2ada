//! Quantum matrix core: dense/sparse storage, conversion, tensor products,
//! identity padding, and the small numeric utilities around them.

#[macro_use]
pub mod debug; // gated debug logging (QUIJY_DEBUG=1) provides debug_log!

pub mod classify;
pub mod convert;
pub mod error;
pub mod eyepad;
pub mod gates;
pub mod kron;
pub mod ops;
pub mod qmatrix;

pub use classify::{classify, isbra, isherm, isket, isop, Classification};
pub use convert::{bra, dop, ket, qonvert, QData, QType};
pub use error::{QuijyError, Result};
pub use eyepad::{eyepad, try_eyepad};
pub use kron::{kron, kron2, kronpow, krnd2, krns2};
pub use ops::{chop, comm, infer_num_qubits, ldmul, nrmlz, rdmul, tr, CHOP_TOL};
pub use qmatrix::{allclose, eye, QMatrix, Storage};
