use crate::rtweekend::*;

/// One ray/surface intersection. `normal` is unit length and always opposes the
/// incoming ray; `front_face` records which side of the surface was actually struck.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    pub p: Point3,
    pub normal: Vec3,
    pub t: f64,
    pub mat: &'a dyn Material,
    pub front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// `outward_normal` must be unit length and point away from the surface's outside.
    pub fn new(r: &Ray, t: f64, outward_normal: Vec3, mat: &'a dyn Material) -> Self {
        let front_face = r.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            p: r.at(t),
            normal,
            t,
            mat,
            front_face,
        }
    }
}

pub trait Hittable: Send + Sync {
    fn hit<'a>(&'a self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'a>>;
}
