pub use crate::camera::{Camera, CameraConfig};
pub use crate::color::{Color, write_ppm};
pub use crate::error::RenderError;
pub use crate::hittable::{HitRecord, Hittable};
pub use crate::hittable_list::HittableList;
pub use crate::interval::Interval;
pub use crate::material::{Dielectric, Lambertian, Material, Metal};
pub use crate::ray::Ray;
pub use crate::sphere::Sphere;
pub use crate::vec3::{Point3, Vec3};

pub use rand::RngCore;
pub use std::sync::Arc;

use rand::Rng;

pub const INFINITY: f64 = f64::INFINITY;
pub const PI: f64 = std::f64::consts::PI;

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Uniform in [0, 1).
#[inline]
pub fn random_f64(rng: &mut dyn RngCore) -> f64 {
    rng.random::<f64>()
}

#[inline]
pub fn random_f64_range(rng: &mut dyn RngCore, min: f64, max: f64) -> f64 {
    min + (max - min) * random_f64(rng)
}
