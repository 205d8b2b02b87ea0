//! Basis quality metrics: determinant, orthogonality defect, Hermite
//! factor, and the LLL shortest-vector approximation.

use crate::basis::{norm_sq, LatticeBasis};
use crate::gram_schmidt::{gram_schmidt, GramSchmidt};
use crate::lll::lll_reduce;
use crate::Error;
use bigfixed::BigFixed;

/// Lattice determinant (covolume). The 2x2 case uses the exact closed
/// form |a*d - b*c|; higher ranks multiply the Gram-Schmidt norms, which
/// equals the determinant for any full-rank basis.
pub fn determinant(basis: &LatticeBasis) -> Result<BigFixed, Error> {
    if basis.rank() == 2 && basis.dimension() == 2 {
        let (r0, r1) = (basis.vector(0), basis.vector(1));
        let det: BigFixed = r0[0].mul(&r1[1]).sub(&r0[1].mul(&r1[0]));
        return Ok(det.abs());
    }
    let gs: GramSchmidt = gram_schmidt(basis)?;
    let mut det: BigFixed = BigFixed::from_i64(1, basis.scale());
    for n in gs.norms_sq.iter() {
        det = det.mul(&n.sqrt()?);
    }
    Ok(det)
}

/// Orthogonality defect: prod ||b_i|| / det(B). Equals 1 exactly when
/// the rows are pairwise orthogonal and grows as they skew.
pub fn orthogonality_defect(basis: &LatticeBasis) -> Result<BigFixed, Error> {
    let det: BigFixed = determinant(basis)?;
    let mut prod: BigFixed = BigFixed::from_i64(1, basis.scale());
    for row in basis.vectors() {
        prod = prod.mul(&norm_sq(row).sqrt()?);
    }
    Ok(prod.div(&det)?)
}

/// Hermite factor: ||b_1|| / det(B)^(1/rank). Measures how short the
/// leading vector is relative to the lattice covolume.
pub fn hermite_factor(basis: &LatticeBasis) -> Result<BigFixed, Error> {
    let det_root: BigFixed = determinant(basis)?.nth_root(basis.rank() as u32)?;
    let first: BigFixed = norm_sq(basis.vector(0)).sqrt()?;
    Ok(first.div(&det_root)?)
}

/// Approximate shortest vector: LLL-reduce a copy of the basis and take
/// its leading row. Returns `Ok(None)` when the reduction hits the step
/// cap before converging.
pub fn shortest_vector(
    basis: &LatticeBasis,
    delta: f64,
    max_steps: usize,
) -> Result<Option<Vec<BigFixed>>, Error> {
    let mut work: LatticeBasis = basis.clone();
    if lll_reduce(&mut work, delta, max_steps)?.is_none() {
        return Ok(None);
    }
    Ok(Some(work.vector(0).to_vec()))
}
