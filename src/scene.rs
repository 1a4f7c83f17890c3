//! Built-in scenes, each paired with the camera that frames it.

use crate::rtweekend::*;
use crate::vec3::{random_vec3, random_vec3_range};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Ground, a field of small random spheres, and three large feature spheres.
    Cover,
    /// One sphere per material, including a hollow glass shell.
    Materials,
    /// A single diffuse ground sphere under the sky.
    Ground,
}

impl Preset {
    pub fn build(self, rng: &mut dyn RngCore) -> (HittableList, CameraConfig) {
        match self {
            Preset::Cover => cover(rng),
            Preset::Materials => materials(),
            Preset::Ground => ground(),
        }
    }
}

fn cover(rng: &mut dyn RngCore) -> (HittableList, CameraConfig) {
    let mut world = HittableList::new();

    let ground_material: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)));
    world.add(Arc::new(Sphere::new(Point3::new(0.0, -1000.0, 0.0), 1000.0, ground_material)));

    let glass: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = random_f64(rng);
            let center = Point3::new(
                a as f64 + 0.9 * random_f64(rng),
                0.2,
                b as f64 + 0.9 * random_f64(rng),
            );

            if (center - Point3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let sphere_material: Arc<dyn Material> = if choose_mat < 0.8 {
                let albedo = random_vec3(rng) * random_vec3(rng);
                Arc::new(Lambertian::new(albedo))
            } else if choose_mat < 0.95 {
                let albedo = random_vec3_range(rng, 0.5, 1.0);
                let fuzz = random_f64_range(rng, 0.0, 0.5);
                Arc::new(Metal::new(albedo, fuzz))
            } else {
                glass.clone()
            };
            world.add(Arc::new(Sphere::new(center, 0.2, sphere_material)));
        }
    }

    world.add(Arc::new(Sphere::new(Point3::new(0.0, 1.0, 0.0), 1.0, glass)));
    world.add(Arc::new(Sphere::new(
        Point3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1))),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)),
    )));

    let camera = CameraConfig {
        aspect_ratio: 16.0 / 9.0,
        image_width: 400,
        samples_per_pixel: 100,
        max_depth: 50,
        vfov: 20.0,
        lookfrom: Point3::new(13.0, 2.0, 3.0),
        lookat: Point3::ZERO,
        vup: Vec3::Y,
        defocus_angle: 0.6,
        focus_dist: 10.0,
    };

    (world, camera)
}

fn materials() -> (HittableList, CameraConfig) {
    let mut world = HittableList::new();

    let material_ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let material_center: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.1, 0.2, 0.5)));
    let material_glass: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));
    let material_right: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 1.0));

    world.add(Arc::new(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0, material_ground)));
    world.add(Arc::new(Sphere::new(Point3::new(0.0, 0.0, -1.2), 0.5, material_center)));
    // Outer glass shell and an inverted inner sphere sharing its material.
    world.add(Arc::new(Sphere::new(Point3::new(-1.0, 0.0, -1.0), 0.5, material_glass.clone())));
    world.add(Arc::new(Sphere::new(Point3::new(-1.0, 0.0, -1.0), -0.4, material_glass)));
    world.add(Arc::new(Sphere::new(Point3::new(1.0, 0.0, -1.0), 0.5, material_right)));

    let camera = CameraConfig {
        aspect_ratio: 16.0 / 9.0,
        image_width: 400,
        samples_per_pixel: 100,
        max_depth: 50,
        vfov: 20.0,
        lookfrom: Point3::new(-2.0, 2.0, 1.0),
        lookat: Point3::new(0.0, 0.0, -1.0),
        vup: Vec3::Y,
        defocus_angle: 10.0,
        focus_dist: 3.4,
    };

    (world, camera)
}

fn ground() -> (HittableList, CameraConfig) {
    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, -100.0, 0.0),
        100.0,
        Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5))),
    )));

    let camera = CameraConfig {
        aspect_ratio: 16.0 / 9.0,
        image_width: 400,
        samples_per_pixel: 50,
        max_depth: 10,
        vfov: 90.0,
        lookfrom: Point3::new(0.0, 1.0, 0.0),
        lookat: Point3::new(0.0, 1.0, -1.0),
        vup: Vec3::Y,
        defocus_angle: 0.0,
        focus_dist: 10.0,
    };

    (world, camera)
}
