//! Lattice basis reduction over fixed-point arithmetic: modified
//! Gram-Schmidt, LLL, Babai nearest-plane CVP, and basis quality
//! metrics. All computation stays in BigFixed at the basis working
//! scale; no coordinate ever round-trips through floating point.

mod basis;
mod cvp;
mod error;
mod gram_schmidt;
mod lll;
mod metrics;

pub use basis::LatticeBasis;
pub use cvp::babai_nearest_plane;
pub use error::Error;
pub use gram_schmidt::{gram_schmidt, GramSchmidt};
pub use lll::{is_lll_reduced, lll_reduce, Reduction};
pub use metrics::{determinant, hermite_factor, orthogonality_defect, shortest_vector};
