use crate::rtweekend::*;

pub type Vec3 = glam::DVec3;
pub type Point3 = Vec3;

#[inline]
pub fn near_zero(v: Vec3) -> bool {
    let s = 1e-8;
    v.x.abs() < s && v.y.abs() < s && v.z.abs() < s
}

pub fn random_vec3(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(random_f64(rng), random_f64(rng), random_f64(rng))
}

pub fn random_vec3_range(rng: &mut dyn RngCore, min: f64, max: f64) -> Vec3 {
    Vec3::new(
        random_f64_range(rng, min, max),
        random_f64_range(rng, min, max),
        random_f64_range(rng, min, max),
    )
}

/// Rejection sample from the [-1, 1] cube until the point falls inside the unit ball.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_vec3_range(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_in_unit_sphere(rng);
        // Points this close to the origin lose too much precision when normalized.
        if p.length_squared() > 1e-160 {
            return p.normalize();
        }
    }
}

pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            random_f64_range(rng, -1.0, 1.0),
            random_f64_range(rng, -1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Snell's law for a unit incident vector `uv`. The caller has already ruled out
/// total internal reflection.
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f64) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -((1.0 - r_out_perp.length_squared()).max(0.0).sqrt()) * n;
    r_out_perp + r_out_parallel
}
