use crate::math::{Matrix, Point, Real, Vector};

/// The mass properties of a solid shape: mass, center of mass, and the
/// inertia tensor taken about the center of mass, in the local frame of the
/// shape.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct MassProperties {
    /// The center of mass, in the local frame of the shape.
    pub local_com: Point<Real>,
    /// The mass.
    pub mass: Real,
    /// The inertia tensor about `local_com`, expressed in the local frame of
    /// the shape.
    pub inertia: Matrix<Real>,
}

impl MassProperties {
    /// Initializes the mass properties of a shape whose inertia tensor is
    /// diagonal in its local frame.
    pub fn new(local_com: Point<Real>, mass: Real, principal_inertia: Vector<Real>) -> Self {
        Self::with_inertia_matrix(local_com, mass, Matrix::from_diagonal(&principal_inertia))
    }

    /// Initializes the mass properties of a shape from its full inertia
    /// tensor.
    pub fn with_inertia_matrix(local_com: Point<Real>, mass: Real, inertia: Matrix<Real>) -> Self {
        MassProperties {
            local_com,
            mass,
            inertia,
        }
    }

    /// The mass properties of a massless body.
    pub fn zero() -> Self {
        Self::with_inertia_matrix(Point::origin(), 0.0, Matrix::zeros())
    }

    /// The diagonal of the inertia tensor.
    #[inline]
    pub fn principal_inertia(&self) -> Vector<Real> {
        self.inertia.diagonal()
    }
}
