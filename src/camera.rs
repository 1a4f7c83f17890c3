use crate::rtweekend::*;
use crate::vec3::random_in_unit_disk;

/// Everything a render needs to know about the view. Set once before rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    pub aspect_ratio: f64,
    pub image_width: usize,
    pub samples_per_pixel: u32,
    pub max_depth: u32,

    /// Vertical field of view in degrees.
    pub vfov: f64,
    pub lookfrom: Point3,
    pub lookat: Point3,
    pub vup: Vec3,

    /// Variation angle of rays through each pixel, in degrees. Zero is a pinhole.
    pub defocus_angle: f64,
    /// Distance from `lookfrom` to the plane of perfect focus.
    pub focus_dist: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.0,
            image_width: 100,
            samples_per_pixel: 10,
            max_depth: 10,
            vfov: 90.0,
            lookfrom: Point3::ZERO,
            lookat: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            defocus_angle: 0.0,
            focus_dist: 10.0,
        }
    }
}

impl CameraConfig {
    pub fn image_height(&self) -> usize {
        ((self.image_width as f64 / self.aspect_ratio) as usize).max(1)
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        let invalid = |msg: String| Err(RenderError::InvalidConfig(msg));

        if self.image_width == 0 {
            return invalid("image width must be at least 1".into());
        }
        if !(self.aspect_ratio > 0.0 && self.aspect_ratio.is_finite()) {
            return invalid(format!("aspect ratio must be positive, got {}", self.aspect_ratio));
        }
        if self.samples_per_pixel == 0 {
            return invalid("samples per pixel must be at least 1".into());
        }
        if self.max_depth == 0 {
            return invalid("max depth must be at least 1".into());
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return invalid(format!("vertical fov must be in (0, 180) degrees, got {}", self.vfov));
        }
        if !(self.focus_dist > 0.0) {
            return invalid(format!("focus distance must be positive, got {}", self.focus_dist));
        }
        if self.defocus_angle < 0.0 {
            return invalid(format!("defocus angle must not be negative, got {}", self.defocus_angle));
        }
        if (self.lookfrom - self.lookat).length_squared() == 0.0 {
            return invalid("lookfrom and lookat must differ".into());
        }
        Ok(())
    }
}

/// Camera with its viewport geometry derived from a [`CameraConfig`].
#[derive(Debug, Clone)]
pub struct Camera {
    config: CameraConfig,

    image_height: usize,
    pixel_samples_scale: f64,
    center: Point3,
    pixel00_loc: Point3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,
}

impl Camera {
    pub fn new(config: CameraConfig) -> Self {
        let image_height = config.image_height();
        let center = config.lookfrom;

        let theta = degrees_to_radians(config.vfov);
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * config.focus_dist;
        let viewport_width = viewport_height * (config.image_width as f64 / image_height as f64);

        // Orthonormal basis: w points back at the viewer, u right, v up.
        let w = (config.lookfrom - config.lookat).normalize();
        let u = config.vup.cross(w).normalize();
        let v = w.cross(u);

        let viewport_u = viewport_width * u;
        let viewport_v = viewport_height * -v;

        let pixel_delta_u = viewport_u / config.image_width as f64;
        let pixel_delta_v = viewport_v / image_height as f64;

        let viewport_upper_left = center - config.focus_dist * w - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        let defocus_radius = config.focus_dist * degrees_to_radians(config.defocus_angle / 2.0).tan();

        Self {
            image_height,
            pixel_samples_scale: 1.0 / config.samples_per_pixel as f64,
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
            defocus_disk_u: u * defocus_radius,
            defocus_disk_v: v * defocus_radius,
            config,
        }
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn image_width(&self) -> usize {
        self.config.image_width
    }

    pub fn image_height(&self) -> usize {
        self.image_height
    }

    /// Monte Carlo estimate of the radiance through pixel (i, j).
    pub fn render_pixel(&self, i: usize, j: usize, world: &dyn Hittable, rng: &mut dyn RngCore) -> Color {
        let mut pixel_color = Color::ZERO;
        for _sample in 0..self.config.samples_per_pixel {
            let r = self.get_ray(i, j, rng);
            pixel_color += ray_color(&r, self.config.max_depth, world, rng);
        }
        pixel_color * self.pixel_samples_scale
    }

    /// Ray toward a jittered point inside pixel (i, j), starting on the defocus
    /// disk, or at the camera center for a pinhole.
    pub fn get_ray(&self, i: usize, j: usize, rng: &mut dyn RngCore) -> Ray {
        let offset = self.sample_square(rng);
        let pixel_sample = self.pixel00_loc
            + ((i as f64 + offset.x) * self.pixel_delta_u)
            + ((j as f64 + offset.y) * self.pixel_delta_v);

        let ray_origin = if self.config.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample(rng)
        };

        Ray::new(ray_origin, pixel_sample - ray_origin)
    }

    /// Offset in [-0.5, 0.5) on both axes of the pixel square.
    fn sample_square(&self, rng: &mut dyn RngCore) -> Vec3 {
        Vec3::new(random_f64(rng) - 0.5, random_f64(rng) - 0.5, 0.0)
    }

    fn defocus_disk_sample(&self, rng: &mut dyn RngCore) -> Point3 {
        let p = random_in_unit_disk(rng);
        self.center + (p.x * self.defocus_disk_u) + (p.y * self.defocus_disk_v)
    }
}

/// Color carried back along `r`, following at most `depth` further bounces.
pub fn ray_color(r: &Ray, depth: u32, world: &dyn Hittable, rng: &mut dyn RngCore) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    // 0.001 keeps a scattered ray from re-hitting the surface it left.
    if let Some(rec) = world.hit(r, Interval::new(0.001, INFINITY)) {
        return match rec.mat.scatter(r, &rec, rng) {
            Some((scattered, attenuation)) => attenuation * ray_color(&scattered, depth - 1, world, rng),
            None => Color::ZERO,
        };
    }

    sky(r)
}

fn sky(r: &Ray) -> Color {
    let unit_direction = r.direction.normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color::new(1.0, 1.0, 1.0) + a * Color::new(0.5, 0.7, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Camera axes recovered from the pixel grid: right, up, and back toward the viewer.
    fn axes(cam: &Camera) -> (Vec3, Vec3, Vec3) {
        let u = cam.pixel_delta_u.normalize();
        let v = -cam.pixel_delta_v.normalize();
        (u, v, u.cross(v))
    }

    fn ground(mat: Arc<dyn Material>) -> HittableList {
        let mut world = HittableList::new();
        world.add(Arc::new(Sphere::new(Point3::new(0.0, -100.0, 0.0), 100.0, mat)));
        world
    }

    #[test]
    fn basis_is_orthonormal() {
        let cam = Camera::new(CameraConfig {
            lookfrom: Point3::new(13.0, 2.0, 3.0),
            lookat: Point3::ZERO,
            ..CameraConfig::default()
        });

        let (u, v, w) = axes(&cam);
        assert!(u.dot(v).abs() < 1e-12);
        assert!((w.length() - 1.0).abs() < 1e-12);
        // Level horizon: the right axis has no vertical component.
        assert!(u.y.abs() < 1e-12);
        assert!(v.y > 0.0);
        assert!(w.dot(Point3::new(13.0, 2.0, 3.0).normalize()) > 0.999);
    }

    #[test]
    fn image_height_truncates_and_never_drops_below_one() {
        let cfg = CameraConfig {
            aspect_ratio: 16.0 / 9.0,
            image_width: 400,
            ..CameraConfig::default()
        };
        assert_eq!(cfg.image_height(), 225);

        let thin = CameraConfig {
            aspect_ratio: 1000.0,
            image_width: 10,
            ..CameraConfig::default()
        };
        assert_eq!(thin.image_height(), 1);
    }

    #[test]
    fn viewport_height_follows_fov_and_focus() {
        let cam = Camera::new(CameraConfig {
            image_width: 10,
            vfov: 90.0,
            focus_dist: 2.0,
            ..CameraConfig::default()
        });
        // tan(45 deg) * 2 * focus_dist spread over 10 rows.
        assert!((cam.pixel_delta_v.length() - 0.4).abs() < 1e-12);
        assert!((cam.pixel_delta_u.length() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn pinhole_rays_leave_from_center() {
        let cam = Camera::new(CameraConfig::default());
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let r = cam.get_ray(50, 50, &mut rng);
            assert_eq!(r.origin, Point3::ZERO);
            assert!(r.direction.z < 0.0);
        }
    }

    #[test]
    fn jitter_stays_inside_pixel_footprint() {
        let cam = Camera::new(CameraConfig::default());
        let (u, v, _) = axes(&cam);
        let center = cam.pixel00_loc + 7.0 * cam.pixel_delta_u + 3.0 * cam.pixel_delta_v;
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..200 {
            let r = cam.get_ray(7, 3, &mut rng);
            let target = r.origin + r.direction;
            let d = target - center;
            assert!(d.dot(u).abs() <= 0.5 * cam.pixel_delta_u.length() + 1e-12);
            assert!(d.dot(v).abs() <= 0.5 * cam.pixel_delta_v.length() + 1e-12);
        }
    }

    #[test]
    fn single_sample_is_still_jittered() {
        let cam = Camera::new(CameraConfig {
            samples_per_pixel: 1,
            ..CameraConfig::default()
        });
        let center = cam.pixel00_loc + 4.0 * cam.pixel_delta_u + 4.0 * cam.pixel_delta_v;
        let mut rng = StdRng::seed_from_u64(1);

        let targets: Vec<Point3> = (0..100)
            .map(|_| {
                let r = cam.get_ray(4, 4, &mut rng);
                r.origin + r.direction
            })
            .collect();
        assert!(targets.iter().all(|&t| (t - center).length() <= cam.pixel_delta_u.length()));
        assert!(targets.iter().any(|&t| (t - center).length() > 1e-6));
        assert!(targets.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn defocus_origins_lie_on_lens_disk() {
        let cam = Camera::new(CameraConfig {
            defocus_angle: 10.0,
            focus_dist: 3.0,
            ..CameraConfig::default()
        });
        let radius = 3.0 * degrees_to_radians(5.0).tan();
        let (_, _, w) = axes(&cam);
        let mut rng = StdRng::seed_from_u64(77);

        let mut moved = false;
        for _ in 0..200 {
            let r = cam.get_ray(10, 10, &mut rng);
            let offset = r.origin - cam.center;
            assert!(offset.length() < radius + 1e-12);
            assert!(offset.dot(w).abs() < 1e-12);
            moved |= offset.length() > 0.0;
        }
        assert!(moved);
    }

    #[test]
    fn depth_zero_is_black() {
        let world = ground(Arc::new(Lambertian::new(Color::ONE)));
        let mut rng = StdRng::seed_from_u64(0);
        for dir in [Vec3::Y, Vec3::NEG_Y, Vec3::new(1.0, 0.2, -3.0)] {
            let r = Ray::new(Point3::new(0.0, 1.0, 0.0), dir);
            assert_eq!(ray_color(&r, 0, &world, &mut rng), Color::ZERO);
        }
    }

    #[test]
    fn misses_see_sky_gradient() {
        let world = HittableList::new();
        let mut rng = StdRng::seed_from_u64(0);

        let up = ray_color(&Ray::new(Point3::ZERO, Vec3::Y), 5, &world, &mut rng);
        assert!((up - Color::new(0.5, 0.7, 1.0)).length() < 1e-12);

        let down = ray_color(&Ray::new(Point3::ZERO, Vec3::NEG_Y), 5, &world, &mut rng);
        assert!((down - Color::ONE).length() < 1e-12);

        let level = ray_color(&Ray::new(Point3::ZERO, Vec3::X), 5, &world, &mut rng);
        assert!((level - Color::new(0.75, 0.85, 1.0)).length() < 1e-12);
    }

    #[test]
    fn surfaces_never_amplify_light() {
        let mut rng = StdRng::seed_from_u64(31);
        let origin = Point3::new(0.0, 1.0, 0.0);
        let materials: [(Arc<dyn Material>, f64); 2] = [
            (Arc::new(Lambertian::new(Color::splat(0.5))), 0.5),
            (Arc::new(Metal::new(Color::splat(0.7), 0.3)), 0.7),
        ];

        for (mat, albedo) in materials {
            let world = ground(mat);
            for _ in 0..500 {
                let dir = Vec3::new(random_f64_range(&mut rng, -1.0, 1.0), -1.0, random_f64_range(&mut rng, -1.0, 1.0));
                let c = ray_color(&Ray::new(origin, dir), 8, &world, &mut rng);
                // One bounce off the ground at most, then sky of brightness <= 1.
                assert!(c.max_element() <= albedo + 1e-12, "{c:?}");
                assert!(c.min_element() >= 0.0);
            }
        }
    }

    #[test]
    fn render_pixel_averages_samples() {
        let world = HittableList::new();
        let cam = Camera::new(CameraConfig {
            samples_per_pixel: 16,
            ..CameraConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(4);
        let c = cam.render_pixel(50, 0, &world, &mut rng);
        // Sky only: the average stays within the gradient's range.
        assert!(c.x >= 0.5 && c.x <= 1.0);
        assert!((c.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_degenerate_settings() {
        assert!(CameraConfig::default().validate().is_ok());

        let bad = [
            CameraConfig { image_width: 0, ..CameraConfig::default() },
            CameraConfig { samples_per_pixel: 0, ..CameraConfig::default() },
            CameraConfig { max_depth: 0, ..CameraConfig::default() },
            CameraConfig { aspect_ratio: 0.0, ..CameraConfig::default() },
            CameraConfig { vfov: 180.0, ..CameraConfig::default() },
            CameraConfig { focus_dist: -1.0, ..CameraConfig::default() },
            CameraConfig { defocus_angle: -0.5, ..CameraConfig::default() },
            CameraConfig { lookat: Point3::ZERO, ..CameraConfig::default() },
        ];
        for cfg in bad {
            assert!(matches!(cfg.validate(), Err(RenderError::InvalidConfig(_))), "{cfg:?}");
        }
    }
}
