use crate::rtweekend::*;
use crate::vec3::{near_zero, random_in_unit_sphere, random_unit_vector, reflect, refract};

/// Returns the scattered ray and its attenuation, or `None` when the ray is absorbed.
/// Materials are immutable once built and shared read-only across render threads.
pub trait Material: Send + Sync {
    fn scatter(&self, r_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<(Ray, Color)>;
}

pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(&self, _r_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<(Ray, Color)> {
        let mut scatter_direction = rec.normal + random_unit_vector(rng);

        // Sample landed opposite the normal.
        if near_zero(scatter_direction) {
            scatter_direction = rec.normal;
        }

        Some((Ray::new(rec.p, scatter_direction), self.albedo))
    }
}

pub struct Metal {
    albedo: Color,
    fuzz: f64,
}

impl Metal {
    /// `fuzz` is clamped to [0, 1]; 0 is a perfect mirror.
    pub fn new(albedo: Color, fuzz: f64) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(&self, r_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<(Ray, Color)> {
        let reflected = reflect(r_in.direction, rec.normal).normalize()
            + self.fuzz * random_in_unit_sphere(rng);

        // Fuzz pushed the ray below the surface: absorb it.
        if reflected.dot(rec.normal) <= 0.0 {
            return None;
        }

        Some((Ray::new(rec.p, reflected), self.albedo))
    }
}

pub struct Dielectric {
    /// Refractive index in vacuum or air, or the ratio of the material's index over
    /// the index of the enclosing medium.
    refraction_index: f64,
}

impl Dielectric {
    pub fn new(refraction_index: f64) -> Self {
        Self { refraction_index }
    }

    /// Schlick's approximation of Fresnel reflectance.
    fn reflectance(cosine: f64, refraction_index: f64) -> f64 {
        let r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
        let r0 = r0 * r0;
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Dielectric {
    fn scatter(&self, r_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<(Ray, Color)> {
        let ri = if rec.front_face {
            1.0 / self.refraction_index
        } else {
            self.refraction_index
        };

        let unit_direction = r_in.direction.normalize();
        let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let cannot_refract = ri * sin_theta > 1.0;
        let direction =
            if cannot_refract || Self::reflectance(cos_theta, ri) > random_f64(rng) {
                reflect(unit_direction, rec.normal)
            } else {
                refract(unit_direction, rec.normal, ri)
            };

        Some((Ray::new(rec.p, direction), Color::ONE))
    }
}
