//! Modified Gram-Schmidt orthogonalization with the mu coefficient
//! matrix the reduction algorithms consume.

use crate::basis::{inner_product, norm_sq, sub_scaled, LatticeBasis};
use crate::Error;
use bigfixed::BigFixed;

/// Output of an orthogonalization pass: the orthogonal vectors b*_i,
/// the projection coefficients mu[i][j] = <b_i, b*_j> / <b*_j, b*_j>
/// for j < i, and the squared norms of the b*_i.
pub struct GramSchmidt {
    pub orthogonal: Vec<Vec<BigFixed>>,
    pub mu: Vec<Vec<BigFixed>>,
    pub norms_sq: Vec<BigFixed>,
}

/// Modified Gram-Schmidt: each projection is taken against the running
/// remainder of b_i rather than the original vector, which keeps the
/// coefficients stable at a fixed working scale. Fails if any remainder
/// collapses to zero, i.e. the rows are linearly dependent.
pub fn gram_schmidt(basis: &LatticeBasis) -> Result<GramSchmidt, Error> {
    let mut orthogonal: Vec<Vec<BigFixed>> = Vec::with_capacity(basis.rank());
    let mut mu: Vec<Vec<BigFixed>> = Vec::with_capacity(basis.rank());
    let mut norms_sq: Vec<BigFixed> = Vec::with_capacity(basis.rank());

    for i in 0..basis.rank() {
        let mut v: Vec<BigFixed> = basis.vector(i).to_vec();
        let mut row: Vec<BigFixed> = Vec::with_capacity(i);
        for j in 0..i {
            let m: BigFixed = inner_product(&v, &orthogonal[j]).div(&norms_sq[j])?;
            v = sub_scaled(&v, &m, &orthogonal[j]);
            row.push(m);
        }
        let n: BigFixed = norm_sq(&v);
        if n.is_zero() {
            return Err(Error::DegenerateBasis);
        }
        orthogonal.push(v);
        mu.push(row);
        norms_sq.push(n);
    }
    Ok(GramSchmidt {
        orthogonal,
        mu,
        norms_sq,
    })
}

impl LatticeBasis {
    /// Replaces the rows with their Gram-Schmidt orthogonalization and
    /// sets the orthogonal flag. The result spans the same subspace but
    /// generally NOT the same lattice.
    pub fn orthogonalize(&mut self) -> Result<(), Error> {
        let gs: GramSchmidt = gram_schmidt(self)?;
        *self.rows_mut() = gs.orthogonal;
        self.mark_orthogonal();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orthogonal_input_is_a_fixed_point() {
        let basis = LatticeBasis::from_i64_rows(&[vec![2, 0], vec![0, 3]], 64).unwrap();
        let gs = gram_schmidt(&basis).unwrap();
        assert_eq!(gs.orthogonal[0], basis.vector(0).to_vec());
        assert_eq!(gs.orthogonal[1], basis.vector(1).to_vec());
        assert!(gs.mu[1][0].is_zero());
    }

    #[test]
    fn projections_are_orthogonal() {
        let basis =
            LatticeBasis::from_i64_rows(&[vec![3, 1, 0], vec![1, 2, 1], vec![0, 1, 4]], 96)
                .unwrap();
        let gs = gram_schmidt(&basis).unwrap();
        let tol = BigFixed::from_f64(2f64.powi(-40), 96).unwrap();
        for i in 0..3 {
            for j in 0..i {
                let ip = inner_product(&gs.orthogonal[i], &gs.orthogonal[j]).abs();
                assert!(ip < tol, "b*_{} not orthogonal to b*_{}", i, j);
            }
        }
    }

    #[test]
    fn dependent_rows_are_detected() {
        let basis = LatticeBasis::from_i64_rows(&[vec![1, 2], vec![2, 4]], 64).unwrap();
        assert!(matches!(gram_schmidt(&basis), Err(Error::DegenerateBasis)));
    }

    #[test]
    fn orthogonalize_sets_the_flag() {
        let mut basis = LatticeBasis::from_i64_rows(&[vec![1, 1], vec![0, 2]], 64).unwrap();
        assert!(!basis.is_orthogonal());
        basis.orthogonalize().unwrap();
        assert!(basis.is_orthogonal());
    }
}
