use nalgebra::Matrix3;

/// A point-group operation acting on integer Miller triples.
///
/// Rotations, mirrors and the inversion all act linearly on `(h, k, l)`
/// with integer coefficients in the Miller basis, so the whole group
/// theory stays exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MillerOp {
    pub matrix: Matrix3<i32>,
}

impl MillerOp {
    pub fn new(matrix: Matrix3<i32>) -> Self {
        Self { matrix }
    }

    /// Identity operation E.
    pub fn identity() -> Self {
        Self::new(Matrix3::identity())
    }

    /// Inversion: `(h,k,l) → (−h,−k,−l)`.
    pub fn inversion() -> Self {
        Self::new(Matrix3::new(-1, 0, 0, 0, -1, 0, 0, 0, -1))
    }

    /// Sixfold rotation about c: `(h,k,l) → (h+k, −h, l)`.
    pub fn c6z() -> Self {
        Self::new(Matrix3::new(1, 1, 0, -1, 0, 0, 0, 0, 1))
    }

    /// Threefold rotation about c: `(h,k,l) → (k, −h−k, l)`.
    pub fn c3z() -> Self {
        Self::new(Matrix3::new(0, 1, 0, -1, -1, 0, 0, 0, 1))
    }

    /// Twofold rotation about [100]: `(h,k,l) → (h+k, −k, −l)`.
    pub fn c2_100() -> Self {
        Self::new(Matrix3::new(1, 1, 0, 0, -1, 0, 0, 0, -1))
    }

    /// Twofold rotation about [110]: `(h,k,l) → (k, h, −l)`.
    pub fn c2_110() -> Self {
        Self::new(Matrix3::new(0, 1, 0, 1, 0, 0, 0, 0, -1))
    }

    /// Mirror normal to c: `(h,k,l) → (h, k, −l)`.
    pub fn mz() -> Self {
        Self::new(Matrix3::new(1, 0, 0, 0, 1, 0, 0, 0, -1))
    }

    /// Mirror normal to [100]: `(h,k,l) → (−h−k, k, l)`.
    pub fn m_100() -> Self {
        Self::new(Matrix3::new(-1, -1, 0, 0, 1, 0, 0, 0, 1))
    }

    /// Apply the operation to a Miller triple.
    pub fn apply(&self, hkl: (i32, i32, i32)) -> (i32, i32, i32) {
        let (h, k, l) = hkl;
        let m = &self.matrix;
        (
            m[(0, 0)] * h + m[(0, 1)] * k + m[(0, 2)] * l,
            m[(1, 0)] * h + m[(1, 1)] * k + m[(1, 2)] * l,
            m[(2, 0)] * h + m[(2, 1)] * k + m[(2, 2)] * l,
        )
    }

    /// Composition `self ∘ other`.
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(self.matrix * other.matrix)
    }

    pub fn is_identity(&self) -> bool {
        self.matrix == Matrix3::identity()
    }
}
