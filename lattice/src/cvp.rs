//! Babai's nearest-plane approximation to the closest vector problem.

use crate::basis::{add_scaled, inner_product, sub_scaled, LatticeBasis};
use crate::gram_schmidt::{gram_schmidt, GramSchmidt};
use crate::Error;
use bigfixed::BigFixed;
use bigint::BigInt;

/// Nearest-plane walk from the last basis vector to the first: project
/// the running residual onto each b*_i, round the coefficient, and peel
/// off that integer multiple of the true basis vector b_i. The returned
/// lattice point is within a 2^(rank/2) factor of the true closest
/// vector when the basis is LLL-reduced.
pub fn babai_nearest_plane(
    basis: &LatticeBasis,
    target: &[BigFixed],
) -> Result<Vec<BigFixed>, Error> {
    if target.len() != basis.dimension() {
        return Err(Error::DimensionMismatch {
            expected: basis.dimension(),
            got: target.len(),
        });
    }
    let scale: usize = basis.scale();
    let gs: GramSchmidt = gram_schmidt(basis)?;

    let mut residual: Vec<BigFixed> = target.iter().map(|x| x.rescale(scale)).collect();
    let mut point: Vec<BigFixed> = vec![BigFixed::zero(scale); basis.dimension()];
    for i in (0..basis.rank()).rev() {
        let coeff: BigFixed = inner_product(&residual, &gs.orthogonal[i]).div(&gs.norms_sq[i])?;
        let r: BigInt = coeff.round();
        if r.is_zero() {
            continue;
        }
        let c: BigFixed = BigFixed::from_bigint(&r, scale);
        residual = sub_scaled(&residual, &c, basis.vector(i));
        point = add_scaled(&point, &c, basis.vector(i));
    }
    Ok(point)
}
