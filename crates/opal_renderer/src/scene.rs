//! Primitive collection and nearest-hit resolution.

use opal_math::{Ray, Vec3};

use crate::{Color, MaterialKind, Primitive, Surface};

/// Nearest accepted intersection along a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub distance: f64,
    pub object: &'a Primitive,
}

/// An unordered set of primitives, built before rendering starts and
/// read-only from then on.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    objects: Vec<Primitive>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    pub fn add(&mut self, object: Primitive) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Test every primitive and keep the closest hit.
    ///
    /// A plain linear scan; there is no acceleration structure in front of
    /// it.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut nearest: Option<Hit<'_>> = None;
        for object in &self.objects {
            if let Some(distance) = object.intersect(ray) {
                if nearest.map_or(true, |hit| distance < hit.distance) {
                    nearest = Some(Hit { distance, object });
                }
            }
        }
        nearest
    }
}

/// The built-in room: five spheres boxed in by seven walls.
///
/// These literals define the renderer's reference output; golden tests
/// depend on every one of them.
pub fn reference_scene() -> Scene {
    let mut scene = Scene::new();

    // Middle sphere, dull yellow
    scene.add(Primitive::sphere(
        Vec3::new(1.45, -3.0, -4.4),
        1.05,
        Surface::new(Color::new(12.0, 12.0, 0.0), 0.0, MaterialKind::Diffuse),
    ));

    // Right sphere, glass-like and faintly glowing
    scene.add(Primitive::sphere(
        Vec3::new(0.0, 0.0, -6.0),
        1.0,
        Surface::new(Color::new(10.0, 10.0, 1.0), 5.0, MaterialKind::Refractive)
            .with_refractive_index(4.0),
    ));

    // Left sphere, blue
    scene.add(Primitive::sphere(
        Vec3::new(1.95, -1.75, -3.1),
        0.6,
        Surface::new(Color::new(4.0, 4.0, 12.0), 0.0, MaterialKind::Diffuse),
    ));

    // Light sphere
    scene.add(Primitive::sphere(
        Vec3::new(0.0, 3.0, -8.0),
        0.3,
        Surface::new(Color::new(12.0, 12.0, 12.0), 100.0, MaterialKind::Diffuse),
    ));

    // Rear sphere, mirror
    scene.add(Primitive::sphere(
        Vec3::new(1.95, -1.75, -8.0),
        0.6,
        Surface::new(Color::new(12.0, 12.0, 12.0), 0.0, MaterialKind::Specular),
    ));

    // Bottom plane
    scene.add(Primitive::plane(
        Vec3::new(-1.0, 0.0, 0.0),
        2.5,
        Surface::new(Color::new(6.0, 6.0, 6.0), 0.0, MaterialKind::Diffuse),
    ));

    // Back window
    scene.add(Primitive::plane(
        Vec3::new(0.0, 0.0, 1.0),
        5.0,
        Surface::new(Color::new(6.0, 6.0, 6.0), 0.0, MaterialKind::Refractive)
            .with_refractive_index(2.0),
    ));

    // Left plane, glowing
    scene.add(Primitive::plane(
        Vec3::new(0.0, 1.0, 0.0),
        5.0,
        Surface::new(Color::new(8.0, 8.0, 8.0), 60.0, MaterialKind::Diffuse),
    ));

    // Right plane, slanted
    scene.add(Primitive::plane(
        Vec3::new(-1.0, -1.0, 0.0),
        2.75,
        Surface::new(Color::new(10.0, 3.0, 10.0), 0.0, MaterialKind::Diffuse),
    ));

    // Ceiling plane
    scene.add(Primitive::plane(
        Vec3::new(1.0, 0.0, 0.0),
        3.0,
        Surface::new(Color::new(6.0, 6.0, 6.0), 0.0, MaterialKind::Diffuse),
    ));

    // Front plane, mirror
    scene.add(Primitive::plane(
        Vec3::new(0.0, 0.0, -1.0),
        0.5,
        Surface::new(Color::new(6.0, 6.0, 6.0), 0.0, MaterialKind::Specular),
    ));

    // Back plane
    scene.add(Primitive::plane(
        Vec3::new(0.0, 0.0, 1.0),
        12.0,
        Surface::new(Color::new(8.0, 8.0, 8.0), 0.0, MaterialKind::Diffuse),
    ));

    scene
}
