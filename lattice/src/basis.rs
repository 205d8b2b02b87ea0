//! The LatticeBasis container and the small vector kernel every
//! reduction algorithm is written against.

use crate::Error;
use bigfixed::BigFixed;
use itertools::izip;

/// A rank x dimension matrix of fixed-point coordinates, all held at one
/// working scale. Reduction algorithms mutate the rows in place; the two
/// flags record what the current rows are known to satisfy and are
/// cleared by any outside mutation.
#[derive(Clone, Debug)]
pub struct LatticeBasis {
    vectors: Vec<Vec<BigFixed>>,
    scale: usize,
    orthogonal: bool,
    reduced: bool,
}

impl LatticeBasis {
    /// Builds a basis from row vectors, normalizing every coordinate to
    /// the working scale. All rows must share one non-zero dimension.
    pub fn new(vectors: Vec<Vec<BigFixed>>, scale: usize) -> Result<Self, Error> {
        let dimension: usize = match vectors.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(Error::EmptyBasis),
        };
        for row in vectors.iter() {
            if row.len() != dimension {
                return Err(Error::DimensionMismatch {
                    expected: dimension,
                    got: row.len(),
                });
            }
        }
        let vectors: Vec<Vec<BigFixed>> = vectors
            .iter()
            .map(|row| row.iter().map(|x| x.rescale(scale)).collect())
            .collect();
        Ok(LatticeBasis {
            vectors,
            scale,
            orthogonal: false,
            reduced: false,
        })
    }

    /// Convenience constructor for integer-coordinate lattices.
    pub fn from_i64_rows(rows: &[Vec<i64>], scale: usize) -> Result<Self, Error> {
        let vectors: Vec<Vec<BigFixed>> = rows
            .iter()
            .map(|row| row.iter().map(|&v| BigFixed::from_i64(v, scale)).collect())
            .collect();
        Self::new(vectors, scale)
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.vectors[0].len()
    }

    #[inline]
    pub fn scale(&self) -> usize {
        self.scale
    }

    pub fn vector(&self, i: usize) -> &[BigFixed] {
        &self.vectors[i]
    }

    pub fn vectors(&self) -> &[Vec<BigFixed>] {
        &self.vectors
    }

    /// True once the rows have been replaced by their Gram-Schmidt
    /// orthogonalization.
    #[inline]
    pub fn is_orthogonal(&self) -> bool {
        self.orthogonal
    }

    /// True once a reduction pass has completed on the current rows.
    #[inline]
    pub fn is_reduced(&self) -> bool {
        self.reduced
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Vec<BigFixed>> {
        self.orthogonal = false;
        self.reduced = false;
        &mut self.vectors
    }

    pub(crate) fn mark_orthogonal(&mut self) {
        self.orthogonal = true;
    }

    pub(crate) fn mark_reduced(&mut self) {
        self.reduced = true;
    }
}

pub(crate) fn inner_product(a: &[BigFixed], b: &[BigFixed]) -> BigFixed {
    let mut acc: BigFixed = BigFixed::zero(a[0].scale().max(b[0].scale()));
    for (x, y) in izip!(a.iter(), b.iter()) {
        acc = acc.add(&x.mul(y));
    }
    acc
}

pub(crate) fn norm_sq(a: &[BigFixed]) -> BigFixed {
    inner_product(a, a)
}

/// a - c * b, componentwise.
pub(crate) fn sub_scaled(a: &[BigFixed], c: &BigFixed, b: &[BigFixed]) -> Vec<BigFixed> {
    izip!(a.iter(), b.iter())
        .map(|(x, y)| x.sub(&c.mul(y)))
        .collect()
}

/// a + c * b, componentwise.
pub(crate) fn add_scaled(a: &[BigFixed], c: &BigFixed, b: &[BigFixed]) -> Vec<BigFixed> {
    izip!(a.iter(), b.iter())
        .map(|(x, y)| x.add(&c.mul(y)))
        .collect()
}
