//! The closed family of collision shapes and its validating constructors.

use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::mass_properties::MassProperties;
use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::{
    Ball, Capsule, Cone, ConvexPolyhedron, Cuboid, Cylinder, Ellipsoid, HalfSpace, Plane,
    SupportMap, Triangle,
};
use core::fmt;
use na::Unit;

/// The type tag of a shape, one per supported primitive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// A ball.
    Ball,
    /// A box.
    Cuboid,
    /// An ellipsoid.
    Ellipsoid,
    /// A capsule.
    Capsule,
    /// A cone.
    Cone,
    /// A cylinder.
    Cylinder,
    /// A convex polyhedron.
    ConvexPolyhedron,
    /// A half-space.
    HalfSpace,
    /// A plane.
    Plane,
    /// A triangle.
    Triangle,
}

/// An error raised when constructing a shape from invalid parameters.
///
/// Validation happens once, at construction: the query entry points never
/// re-validate shape parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// A scalar parameter is NaN or infinite.
    NonFiniteParameter,
    /// A radius or half-extent is zero or negative.
    NonPositiveParameter,
    /// A plane or half-space normal is not a unit vector.
    NonUnitNormal,
    /// A convex polyhedron does not contain four non-coplanar vertices, or
    /// its index buffer is inconsistent.
    DegenerateConvexSet,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::NonFiniteParameter => f.pad("shape parameter is not finite"),
            ShapeError::NonPositiveParameter => f.pad("shape parameter must be positive"),
            ShapeError::NonUnitNormal => f.pad("normal must be a unit vector"),
            ShapeError::DegenerateConvexSet => {
                f.pad("convex polyhedron needs at least four non-coplanar vertices")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// The geometric data of a shape, as a closed tagged union.
///
/// Keeping the family closed lets the query dispatcher enumerate the whole
/// pair matrix in a single `match`, checked for completeness by the compiler.
#[derive(PartialEq, Debug, Clone)]
pub enum ShapeData {
    /// A ball.
    Ball(Ball),
    /// A box.
    Cuboid(Cuboid),
    /// An ellipsoid.
    Ellipsoid(Ellipsoid),
    /// A capsule.
    Capsule(Capsule),
    /// A cone.
    Cone(Cone),
    /// A cylinder.
    Cylinder(Cylinder),
    /// A convex polyhedron.
    ConvexPolyhedron(ConvexPolyhedron),
    /// A half-space.
    HalfSpace(HalfSpace),
    /// A plane.
    Plane(Plane),
    /// A triangle.
    Triangle(Triangle),
}

/// A collision shape: one of the supported primitives together with its
/// precomputed local-frame bounds.
///
/// Shapes are immutable once constructed. Transforms are never stored with a
/// shape; they are supplied at each query.
#[derive(PartialEq, Debug, Clone)]
pub struct Shape {
    data: ShapeData,
    local_aabb: Aabb,
    local_bounding_sphere: BoundingSphere,
}

fn finite(values: &[Real]) -> Result<(), ShapeError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ShapeError::NonFiniteParameter)
    }
}

fn positive(values: &[Real]) -> Result<(), ShapeError> {
    if values.iter().all(|v| *v > 0.0) {
        Ok(())
    } else {
        Err(ShapeError::NonPositiveParameter)
    }
}

fn unit_normal(normal: Vector<Real>) -> Result<Unit<Vector<Real>>, ShapeError> {
    finite(normal.as_slice())?;

    if (normal.norm() - 1.0).abs() > DEFAULT_EPSILON.sqrt() {
        return Err(ShapeError::NonUnitNormal);
    }

    Ok(Unit::new_normalize(normal))
}

impl Shape {
    fn from_data(data: ShapeData) -> Shape {
        let local_aabb = match &data {
            ShapeData::Ball(s) => s.local_aabb(),
            ShapeData::Cuboid(s) => s.local_aabb(),
            ShapeData::Ellipsoid(s) => s.local_aabb(),
            ShapeData::Capsule(s) => s.local_aabb(),
            ShapeData::Cone(s) => s.local_aabb(),
            ShapeData::Cylinder(s) => s.local_aabb(),
            ShapeData::ConvexPolyhedron(s) => s.local_aabb(),
            ShapeData::HalfSpace(s) => s.local_aabb(),
            ShapeData::Plane(s) => s.local_aabb(),
            ShapeData::Triangle(s) => s.local_aabb(),
        };

        // An unbounded AABB has no meaningful enclosing sphere; keep the
        // radius infinite so callers relying on it overestimate.
        let local_bounding_sphere = if matches!(
            data,
            ShapeData::HalfSpace(_) | ShapeData::Plane(_)
        ) {
            BoundingSphere::new(Point::origin(), Real::INFINITY)
        } else {
            local_aabb.bounding_sphere()
        };

        Shape {
            data,
            local_aabb,
            local_bounding_sphere,
        }
    }

    /// Creates a ball shape.
    pub fn ball(radius: Real) -> Result<Shape, ShapeError> {
        finite(&[radius])?;
        positive(&[radius])?;
        Ok(Self::from_data(ShapeData::Ball(Ball::new(radius))))
    }

    /// Creates a box shape from its half-extents.
    pub fn cuboid(half_extents: Vector<Real>) -> Result<Shape, ShapeError> {
        finite(half_extents.as_slice())?;
        positive(half_extents.as_slice())?;
        Ok(Self::from_data(ShapeData::Cuboid(Cuboid::new(
            half_extents,
        ))))
    }

    /// Creates an ellipsoid shape from its radii.
    pub fn ellipsoid(radii: Vector<Real>) -> Result<Shape, ShapeError> {
        finite(radii.as_slice())?;
        positive(radii.as_slice())?;
        Ok(Self::from_data(ShapeData::Ellipsoid(Ellipsoid::new(radii))))
    }

    /// Creates a capsule shape aligned with the local `z` axis.
    ///
    /// A zero `half_height` degenerates to a ball-like capsule and is
    /// accepted.
    pub fn capsule(half_height: Real, radius: Real) -> Result<Shape, ShapeError> {
        finite(&[half_height, radius])?;
        positive(&[radius])?;
        if half_height < 0.0 {
            return Err(ShapeError::NonPositiveParameter);
        }
        Ok(Self::from_data(ShapeData::Capsule(Capsule::new(
            half_height,
            radius,
        ))))
    }

    /// Creates a cone shape aligned with the local `z` axis, apex toward
    /// `+z`.
    pub fn cone(half_height: Real, radius: Real) -> Result<Shape, ShapeError> {
        finite(&[half_height, radius])?;
        positive(&[half_height, radius])?;
        Ok(Self::from_data(ShapeData::Cone(Cone::new(
            half_height,
            radius,
        ))))
    }

    /// Creates a cylinder shape aligned with the local `z` axis.
    pub fn cylinder(half_height: Real, radius: Real) -> Result<Shape, ShapeError> {
        finite(&[half_height, radius])?;
        positive(&[half_height, radius])?;
        Ok(Self::from_data(ShapeData::Cylinder(Cylinder::new(
            half_height,
            radius,
        ))))
    }

    /// Creates a convex polyhedron from its vertices and triangulated faces.
    pub fn convex_polyhedron(
        points: Vec<Point<Real>>,
        faces: &[[u32; 3]],
    ) -> Result<Shape, ShapeError> {
        let poly = ConvexPolyhedron::from_convex_mesh(points, faces)
            .ok_or(ShapeError::DegenerateConvexSet)?;
        Ok(Self::from_data(ShapeData::ConvexPolyhedron(poly)))
    }

    /// Creates a half-space with outward unit normal `normal`, containing
    /// all points `x` with `normal · x ≤ offset`.
    pub fn halfspace(normal: Vector<Real>, offset: Real) -> Result<Shape, ShapeError> {
        finite(&[offset])?;
        let normal = unit_normal(normal)?;
        Ok(Self::from_data(ShapeData::HalfSpace(HalfSpace::new(
            normal, offset,
        ))))
    }

    /// Creates a plane with unit normal `normal`: the surface of points `x`
    /// with `normal · x = offset`.
    pub fn plane(normal: Vector<Real>, offset: Real) -> Result<Shape, ShapeError> {
        finite(&[offset])?;
        let normal = unit_normal(normal)?;
        Ok(Self::from_data(ShapeData::Plane(Plane::new(
            normal, offset,
        ))))
    }

    /// Creates a triangle shape from its three vertices.
    pub fn triangle(
        a: Point<Real>,
        b: Point<Real>,
        c: Point<Real>,
    ) -> Result<Shape, ShapeError> {
        finite(a.coords.as_slice())?;
        finite(b.coords.as_slice())?;
        finite(c.coords.as_slice())?;
        Ok(Self::from_data(ShapeData::Triangle(Triangle::new(a, b, c))))
    }

    /// The geometric data of this shape.
    #[inline]
    pub fn data(&self) -> &ShapeData {
        &self.data
    }

    /// The type tag of this shape.
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        match &self.data {
            ShapeData::Ball(_) => ShapeType::Ball,
            ShapeData::Cuboid(_) => ShapeType::Cuboid,
            ShapeData::Ellipsoid(_) => ShapeType::Ellipsoid,
            ShapeData::Capsule(_) => ShapeType::Capsule,
            ShapeData::Cone(_) => ShapeType::Cone,
            ShapeData::Cylinder(_) => ShapeType::Cylinder,
            ShapeData::ConvexPolyhedron(_) => ShapeType::ConvexPolyhedron,
            ShapeData::HalfSpace(_) => ShapeType::HalfSpace,
            ShapeData::Plane(_) => ShapeType::Plane,
            ShapeData::Triangle(_) => ShapeType::Triangle,
        }
    }

    /// The local-frame AABB of this shape, precomputed at construction.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.local_aabb
    }

    /// The local-frame bounding sphere of this shape, precomputed at
    /// construction.
    #[inline]
    pub fn local_bounding_sphere(&self) -> &BoundingSphere {
        &self.local_bounding_sphere
    }

    /// The world-space AABB of this shape under the transform `pos`.
    #[inline]
    pub fn compute_aabb(&self, pos: &Isometry<Real>) -> Aabb {
        self.local_aabb.transform_by(pos)
    }

    /// The world-space AABB of this shape translated by `translation`,
    /// without rotation.
    ///
    /// Cheaper than [`Shape::compute_aabb`] when a caller only has a
    /// translation.
    #[inline]
    pub fn translated_aabb(&self, translation: &Vector<Real>) -> Aabb {
        self.local_aabb.translated(translation)
    }

    /// This shape seen through its support mapping, if it has one.
    ///
    /// Unbounded shapes (plane, half-space) have no support mapping.
    #[inline]
    pub fn as_support_map(&self) -> Option<&dyn SupportMap> {
        match &self.data {
            ShapeData::Ball(s) => Some(s),
            ShapeData::Cuboid(s) => Some(s),
            ShapeData::Ellipsoid(s) => Some(s),
            ShapeData::Capsule(s) => Some(s),
            ShapeData::Cone(s) => Some(s),
            ShapeData::Cylinder(s) => Some(s),
            ShapeData::ConvexPolyhedron(s) => Some(s),
            ShapeData::Triangle(s) => Some(s),
            ShapeData::HalfSpace(_) | ShapeData::Plane(_) => None,
        }
    }

    /// The mass properties of this shape for the given density, if it is a
    /// solid.
    ///
    /// Planes, half-spaces and triangles enclose no volume and return `None`.
    pub fn mass_properties(&self, density: Real) -> Option<MassProperties> {
        match &self.data {
            ShapeData::Ball(s) => Some(MassProperties::from_ball(density, s.radius)),
            ShapeData::Cuboid(s) => Some(MassProperties::from_cuboid(density, s.half_extents)),
            ShapeData::Ellipsoid(s) => Some(MassProperties::from_ellipsoid(density, s.radii)),
            ShapeData::Capsule(s) => Some(MassProperties::from_capsule(
                density,
                s.half_height,
                s.radius,
            )),
            ShapeData::Cone(s) => Some(MassProperties::from_cone(density, s.half_height, s.radius)),
            ShapeData::Cylinder(s) => Some(MassProperties::from_cylinder(
                density,
                s.half_height,
                s.radius,
            )),
            ShapeData::ConvexPolyhedron(s) => {
                Some(MassProperties::from_convex_polyhedron(density, s))
            }
            ShapeData::HalfSpace(_) | ShapeData::Plane(_) | ShapeData::Triangle(_) => None,
        }
    }

    /// The volume of this shape, if it is a solid.
    pub fn volume(&self) -> Option<Real> {
        match &self.data {
            ShapeData::Ball(s) => Some(MassProperties::ball_volume_unit_inertia(s.radius).0),
            ShapeData::Cuboid(s) => {
                Some(MassProperties::cuboid_volume_unit_inertia(s.half_extents).0)
            }
            ShapeData::Ellipsoid(s) => {
                Some(MassProperties::ellipsoid_volume_unit_inertia(s.radii).0)
            }
            ShapeData::Capsule(s) => Some(
                MassProperties::cylinder_z_volume_unit_inertia(s.half_height, s.radius).0
                    + MassProperties::ball_volume_unit_inertia(s.radius).0,
            ),
            ShapeData::Cone(s) => {
                Some(MassProperties::cone_z_volume_unit_inertia(s.half_height, s.radius).0)
            }
            ShapeData::Cylinder(s) => {
                Some(MassProperties::cylinder_z_volume_unit_inertia(s.half_height, s.radius).0)
            }
            ShapeData::ConvexPolyhedron(s) => {
                let (vol, _) = crate::mass_properties::convex_signed_volume_and_center_of_mass(s);
                Some(vol.abs())
            }
            ShapeData::Triangle(_) => Some(0.0),
            ShapeData::HalfSpace(_) | ShapeData::Plane(_) => None,
        }
    }
}

macro_rules! downcast_impl(
    ($name: ident, $variant: ident, $shape: ident) => {
        impl Shape {
            /// Returns the underlying primitive if this shape is of the
            /// corresponding variant.
            #[inline]
            pub fn $name(&self) -> Option<&$shape> {
                if let ShapeData::$variant(s) = &self.data {
                    Some(s)
                } else {
                    None
                }
            }
        }
    }
);

downcast_impl!(as_ball, Ball, Ball);
downcast_impl!(as_cuboid, Cuboid, Cuboid);
downcast_impl!(as_ellipsoid, Ellipsoid, Ellipsoid);
downcast_impl!(as_capsule, Capsule, Capsule);
downcast_impl!(as_cone, Cone, Cone);
downcast_impl!(as_cylinder, Cylinder, Cylinder);
downcast_impl!(as_convex_polyhedron, ConvexPolyhedron, ConvexPolyhedron);
downcast_impl!(as_halfspace, HalfSpace, HalfSpace);
downcast_impl!(as_plane, Plane, Plane);
downcast_impl!(as_triangle, Triangle, Triangle);
