//! Scene primitives and their intersection tests.

use opal_math::{Ray, Vec3};

use crate::Color;

/// Minimum accepted intersection distance. Anything at or below this is
/// treated as a ray re-hitting the surface it just left and rejected.
pub const MIN_HIT_DISTANCE: f64 = 0.001;

/// How a surface redirects the light path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    /// Random hemisphere scatter.
    Diffuse,
    /// Perfect mirror reflection.
    Specular,
    /// Snell's-law transmission.
    Refractive,
}

/// Shading attributes shared by every primitive.
#[derive(Debug, Clone, Copy)]
pub struct Surface {
    pub color: Color,
    pub emittance: f64,
    pub material: MaterialKind,
    pub refractive_index: f64,
}

impl Surface {
    /// Create a surface. The refractive index defaults to 1.0; only
    /// `Refractive` surfaces read it.
    pub fn new(color: Color, emittance: f64, material: MaterialKind) -> Self {
        Self {
            color,
            emittance,
            material,
            refractive_index: 1.0,
        }
    }

    /// Set the refractive index.
    pub fn with_refractive_index(mut self, index: f64) -> Self {
        self.refractive_index = index;
        self
    }
}

/// Scene geometry.
///
/// A closed set of shapes dispatched by pattern match; adding a shape means
/// extending every match in this file.
#[derive(Debug, Clone)]
pub enum Primitive {
    Sphere {
        center: Vec3,
        radius: f64,
        surface: Surface,
    },
    Plane {
        normal: Vec3,
        offset: f64,
        surface: Surface,
    },
}

impl Primitive {
    /// Create a sphere. Panics unless `radius` is strictly positive.
    pub fn sphere(center: Vec3, radius: f64, surface: Surface) -> Self {
        assert!(radius > 0.0, "sphere radius must be positive, got {radius}");
        Self::Sphere {
            center,
            radius,
            surface,
        }
    }

    /// Create the plane `normal . P + offset = 0`. The normal is normalized
    /// here; panics on a zero normal.
    pub fn plane(normal: Vec3, offset: f64, surface: Surface) -> Self {
        assert!(
            normal.length_squared() > 0.0,
            "plane normal must be non-zero"
        );
        Self::Plane {
            normal: normal.normalize(),
            offset,
            surface,
        }
    }

    /// Distance along `ray` to the nearest acceptable intersection, or
    /// `None` for a miss. Roots at or below [`MIN_HIT_DISTANCE`] never
    /// count as hits.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        match self {
            Self::Sphere { center, radius, .. } => {
                // Quadratic in s for |O + sD - C|^2 = r^2, with the
                // leading coefficient fixed at 1: directions are treated
                // as unit length.
                let oc = ray.origin() - *center;
                let b = 2.0 * oc.dot(ray.direction());
                let c = oc.length_squared() - radius * radius;
                let discriminant = b * b - 4.0 * c;
                if discriminant < 0.0 {
                    return None;
                }
                let sqrt_d = discriminant.sqrt();
                let near = (-b - sqrt_d) / 2.0;
                let far = (-b + sqrt_d) / 2.0;
                if near > MIN_HIT_DISTANCE {
                    Some(near)
                } else if far > MIN_HIT_DISTANCE {
                    Some(far)
                } else {
                    None
                }
            }
            Self::Plane { normal, offset, .. } => {
                let denom = normal.dot(ray.direction());
                if denom == 0.0 {
                    return None; // parallel
                }
                let s = -(normal.dot(ray.origin()) + offset) / denom;
                if s > MIN_HIT_DISTANCE {
                    Some(s)
                } else {
                    None
                }
            }
        }
    }

    /// Outward unit normal at `point`, which is assumed to lie on the
    /// surface.
    pub fn surface_normal(&self, point: Vec3) -> Vec3 {
        match self {
            Self::Sphere { center, .. } => (point - *center).normalize(),
            Self::Plane { normal, .. } => *normal,
        }
    }

    /// Shading attributes.
    pub fn surface(&self) -> &Surface {
        match self {
            Self::Sphere { surface, .. } | Self::Plane { surface, .. } => surface,
        }
    }
}
