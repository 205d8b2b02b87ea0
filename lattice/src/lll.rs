//! LLL reduction and the reducedness check.

use crate::basis::{add_scaled, LatticeBasis};
use crate::gram_schmidt::{gram_schmidt, GramSchmidt};
use crate::Error;
use bigfixed::BigFixed;
use bigint::BigInt;

/// Outcome of a completed reduction pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reduction {
    /// Consecutive-pair swaps performed.
    pub swaps: usize,
    /// Main-loop steps consumed.
    pub steps: usize,
}

fn check_delta(delta: f64, scale: usize) -> Result<BigFixed, Error> {
    if !(delta > 0.25 && delta <= 1.0) {
        return Err(Error::InvalidDelta(delta));
    }
    Ok(BigFixed::from_f64(delta, scale)?)
}

/// Lovász condition for the pair (k-1, k):
/// ||b*_k||^2 >= (delta - mu_{k,k-1}^2) * ||b*_{k-1}||^2.
fn lovasz_holds(gs: &GramSchmidt, k: usize, delta: &BigFixed) -> bool {
    let m: &BigFixed = &gs.mu[k][k - 1];
    let bound: BigFixed = delta.sub(&m.mul(m)).mul(&gs.norms_sq[k - 1]);
    gs.norms_sq[k] >= bound
}

/// Subtracts round(mu[k][j]) * b_j from b_k for j = k-1 down to 0,
/// updating the mu row as it goes so later coefficients see the
/// already-reduced vector.
fn size_reduce(basis: &mut LatticeBasis, gs: &mut GramSchmidt, k: usize) {
    let scale: usize = basis.scale();
    for j in (0..k).rev() {
        let r: BigInt = gs.mu[k][j].round();
        if r.is_zero() {
            continue;
        }
        let c: BigFixed = BigFixed::from_bigint(&r, scale).neg();
        let reduced: Vec<BigFixed> = {
            let rows = basis.rows_mut();
            add_scaled(&rows[k], &c, &rows[j])
        };
        basis.rows_mut()[k] = reduced;
        for l in 0..j {
            let adj: BigFixed = gs.mu[k][l].add(&c.mul(&gs.mu[j][l]));
            gs.mu[k][l] = adj;
        }
        gs.mu[k][j] = gs.mu[k][j].add(&c);
    }
}

/// LLL reduction in place. The index k starts at 1; each step
/// re-orthogonalizes, size-reduces b_k, then tests the Lovász condition:
/// on success k advances, on failure b_k and b_{k-1} swap and k steps
/// back (floored at 1). Terminates when k reaches the rank.
///
/// Returns the swap/step counts, or `Ok(None)` when `max_steps` ran out
/// before the basis was fully reduced; the basis is left in its
/// partially reduced state in that case.
pub fn lll_reduce(
    basis: &mut LatticeBasis,
    delta: f64,
    max_steps: usize,
) -> Result<Option<Reduction>, Error> {
    let delta: BigFixed = check_delta(delta, basis.scale())?;
    let mut swaps: usize = 0;
    let mut steps: usize = 0;
    let mut k: usize = 1;
    while k < basis.rank() {
        if steps == max_steps {
            return Ok(None);
        }
        steps += 1;
        let mut gs: GramSchmidt = gram_schmidt(basis)?;
        size_reduce(basis, &mut gs, k);
        if lovasz_holds(&gs, k, &delta) {
            k += 1;
        } else {
            basis.rows_mut().swap(k, k - 1);
            swaps += 1;
            k = k.max(2) - 1;
        }
    }
    basis.mark_reduced();
    Ok(Some(Reduction { swaps, steps }))
}

/// Verifies |mu_{i,j}| <= 1/2 for all j < i and the Lovász condition for
/// every consecutive pair, with a small scale-relative tolerance on the
/// size-reduction bound.
pub fn is_lll_reduced(basis: &LatticeBasis, delta: f64) -> Result<bool, Error> {
    let delta: BigFixed = check_delta(delta, basis.scale())?;
    let gs: GramSchmidt = gram_schmidt(basis)?;
    let scale: usize = basis.scale();
    let bound: BigFixed = BigFixed::from_f64(0.5, scale)?
        .add(&BigFixed::from_f64(2f64.powi(-((scale / 2) as i32)), scale)?);
    for i in 1..basis.rank() {
        for j in 0..i {
            if gs.mu[i][j].abs() > bound {
                return Ok(false);
            }
        }
        if !lovasz_holds(&gs, i, &delta) {
            return Ok(false);
        }
    }
    Ok(true)
}
