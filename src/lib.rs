//! Dense and sparse complex matrices for quantum states and operators:
//! conversion into kets, bras, and density operators, tensor products,
//! identity padding onto composite spaces, and numeric cleanup.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;

pub use crate::core::{
    bra, chop, comm, dop, eye, eyepad, infer_num_qubits, isbra, isherm, isket, isop, ket, kron,
    kronpow, ldmul, nrmlz, qonvert, rdmul, tr, try_eyepad, QMatrix, QType, QuijyError,
};
