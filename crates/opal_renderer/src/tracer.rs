//! Recursive light transport.

use std::f64::consts::PI;

use opal_math::{Ray, Vec3, VecExt};

use crate::{Color, MaterialKind, Sampler, Scene};

/// Follow `ray` through `scene`, accumulating radiance.
///
/// `depth` counts bounces taken so far; past `max_depth` a path is cut off
/// and contributes black, which is the sole recursion bound. The returned
/// radiance is unclamped; pixel finalization handles display range.
pub fn trace(
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    max_depth: u32,
    sampler: &mut Sampler,
) -> Color {
    if depth > max_depth {
        return Color::ZERO;
    }
    let Some(hit) = scene.intersect(ray) else {
        return Color::ZERO;
    };

    let point = ray.at(hit.distance);
    let normal = hit.object.surface_normal(point);
    let surface = hit.object.surface();

    // Emission contributes at a fixed factor of two, bounced or not.
    let mut color = Color::splat(2.0 * surface.emittance);

    match surface.material {
        MaterialKind::Diffuse => {
            let (u1, u2) = sampler.next_hemisphere();
            // The scatter direction keeps its raw length; the cosine weight
            // below folds that length into the 0.1-damped combination.
            let direction = normal + hemisphere_direction(u1, u2, sampler.uniform());
            let cosine = direction.dot(normal);
            let bounced = trace(&Ray::raw(point, direction), scene, depth + 1, max_depth, sampler);
            color += bounced * surface.color * (cosine * 0.1);
        }
        MaterialKind::Specular => {
            let direction = ray.direction().reflect(normal);
            color += trace(&Ray::new(point, direction), scene, depth + 1, max_depth, sampler);
        }
        MaterialKind::Refractive => {
            match ray.direction().refract(normal, surface.refractive_index) {
                Some(direction) => {
                    color += trace(&Ray::new(point, direction), scene, depth + 1, max_depth, sampler);
                }
                // Total internal reflection swallows the whole path,
                // emission included.
                None => return Color::ZERO,
            }
        }
    }

    color
}

/// Direction over the hemisphere whose axis is +Z: `u2` picks the angle
/// around the axis, `radial` the distance from it, `u1` the height.
fn hemisphere_direction(u1: f64, u2: f64, radial: f64) -> Vec3 {
    let phi = 2.0 * PI * u2;
    Vec3::new(phi.cos() * radial, phi.sin() * radial, u1)
}
