use crate::Vec3;

/// Bounce geometry helpers on [`Vec3`].
pub trait VecExt {
    /// Reflect about `normal` (mirror bounce).
    fn reflect(self, normal: Vec3) -> Vec3;

    /// Bend through a surface with the given refractive index.
    ///
    /// The incident direction may point into or out of the surface; exiting
    /// rays (positive dot with `normal`) flip the normal and use the inverse
    /// index ratio. Returns `None` on total internal reflection.
    fn refract(self, normal: Vec3, index: f64) -> Option<Vec3>;
}

impl VecExt for Vec3 {
    #[inline]
    fn reflect(self, normal: Vec3) -> Vec3 {
        self - normal * (2.0 * self.dot(normal))
    }

    #[inline]
    fn refract(self, normal: Vec3, index: f64) -> Option<Vec3> {
        let (normal, eta) = if self.dot(normal) > 0.0 {
            (-normal, index)
        } else {
            (normal, 1.0 / index)
        };
        let cos_in = -normal.dot(self);
        let k = 1.0 - eta * eta * (1.0 - cos_in * cos_in);
        if k > 0.0 {
            Some(self * eta + normal * (eta * cos_in - k.sqrt()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect() {
        let incoming = Vec3::new(1.0, -1.0, 0.0);
        let normal = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(incoming.reflect(normal), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_reflect_preserves_length() {
        let incoming = Vec3::new(0.6, -0.8, 0.0);
        let reflected = incoming.reflect(Vec3::new(0.0, 1.0, 0.0));
        assert!((reflected.length() - incoming.length()).abs() < 1e-12);
    }

    #[test]
    fn test_refract_normal_incidence_goes_straight_through() {
        let incoming = Vec3::new(0.0, 0.0, -1.0);
        let normal = Vec3::new(0.0, 0.0, 1.0);
        let out = incoming.refract(normal, 4.0).unwrap();
        assert!((out - incoming).length() < 1e-12);
    }

    #[test]
    fn test_refract_index_one_is_identity() {
        let incoming = Vec3::new(0.6, 0.0, -0.8);
        let normal = Vec3::new(0.0, 0.0, 1.0);
        let out = incoming.refract(normal, 1.0).unwrap();
        assert!((out - incoming).length() < 1e-12);
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        use std::f64::consts::FRAC_1_SQRT_2;

        // Exiting a dense medium at 45 degrees, well past the critical angle.
        let incoming = Vec3::new(0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2);
        let normal = Vec3::new(0.0, 1.0, 0.0);
        assert!(incoming.refract(normal, 2.0).is_none());
    }

    #[test]
    fn test_refract_exit_near_normal_transmits() {
        // Nearly perpendicular exit stays below the critical angle.
        let incoming = Vec3::new(0.1, 0.0, 0.0) + Vec3::new(0.0, 1.0, 0.0);
        let normal = Vec3::new(0.0, 1.0, 0.0);
        assert!(incoming.normalize().refract(normal, 1.5).is_some());
    }

    #[test]
    fn test_refract_bends_toward_normal_when_entering() {
        // Entering a denser medium: the transmitted ray hugs the normal.
        let incoming = Vec3::new(0.8, -0.6, 0.0);
        let normal = Vec3::new(0.0, 1.0, 0.0);
        let out = incoming.refract(normal, 2.0).unwrap();
        // Tangential component shrinks by the index ratio.
        assert!((out.x - 0.4).abs() < 1e-12);
        assert!(out.y < 0.0);
    }
}
