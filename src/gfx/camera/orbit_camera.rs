use super::camera_utils::{convert_matrix4_to_array, Camera, CameraUniform};
use cgmath::*;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Factor applied to the orbit distance by one zoom-in step.
pub const ZOOM_STEP: f32 = 0.8;

/// World units the target moves per pan step.
pub const PAN_STEP: f32 = 0.5;

/// Gap kept below straight-down so the view matrix never degenerates.
pub const PITCH_EPSILON: f32 = 1e-3;

/// Orbit camera around a target point, Y up.
///
/// Pitch 0 looks along the horizon; the bounds keep the eye at or above it.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub bounds: OrbitCameraBounds,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub uniform: CameraUniform,
    home: OrbitPose,
}

/// The part of the camera state that "Reset View" restores.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OrbitPose {
    distance: f32,
    pitch: f32,
    yaw: f32,
    target: Vector3<f32>,
}

impl Camera for OrbitCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.eye);
        let target = Point3::from_vec(self.target);
        let view = Matrix4::look_at_rh(eye, target, self.up);
        let proj = OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }
}

impl Default for OrbitCamera {
    /// Eye at (0, 0, 5) looking at the origin with a 50 degree field of view.
    fn default() -> Self {
        Self::new(5.0, 0.0, 0.0, Vector3::zero(), 1.5)
    }
}

impl OrbitCamera {
    pub fn new(distance: f32, pitch: f32, yaw: f32, target: Vector3<f32>, aspect: f32) -> Self {
        let bounds = OrbitCameraBounds::default();
        let mut camera = Self {
            distance: bounds.clamp_distance(distance),
            pitch: pitch.clamp(bounds.min_pitch, bounds.max_pitch),
            yaw,
            eye: Vector3::zero(), // Will be auto-calculated in `update()` nevertheless.
            target: bounds.clamp_target(target),
            up: Vector3::unit_y(),
            bounds,
            aspect,
            fovy: Deg(50.0).into(),
            znear: 0.1,
            zfar: 1000.0,
            uniform: CameraUniform::default(),
            home: OrbitPose {
                distance,
                pitch,
                yaw,
                target,
            },
        };
        camera.home = camera.pose();
        camera.update();
        camera
    }

    fn pose(&self) -> OrbitPose {
        OrbitPose {
            distance: self.distance,
            pitch: self.pitch,
            yaw: self.yaw,
            target: self.target,
        }
    }

    /// Restores the pose the camera was created with.
    pub fn reset_to_default(&mut self) {
        let home = self.home;
        self.distance = home.distance;
        self.pitch = home.pitch;
        self.yaw = home.yaw;
        self.target = home.target;
        self.update();
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = self.bounds.clamp_distance(distance);
        self.update();
    }

    /// Scroll-wheel zoom, scaled so steps feel even across the range.
    pub fn add_distance(&mut self, delta: f32) {
        let corrected_zoom = f32::log10(self.distance.max(1.0 + f32::EPSILON)) * delta;
        self.set_distance(self.distance + corrected_zoom);
    }

    pub fn zoom_in(&mut self) {
        self.set_distance(self.distance * ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_distance(self.distance / ZOOM_STEP);
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(self.bounds.min_pitch, self.bounds.max_pitch);
        self.update();
    }

    pub fn add_pitch(&mut self, delta: f32) {
        self.set_pitch(self.pitch + delta);
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        let mut bounded_yaw = yaw;
        if let Some(min_yaw) = self.bounds.min_yaw {
            bounded_yaw = bounded_yaw.max(min_yaw);
        }
        if let Some(max_yaw) = self.bounds.max_yaw {
            bounded_yaw = bounded_yaw.min(max_yaw);
        }
        self.yaw = bounded_yaw;
        self.update();
    }

    pub fn add_yaw(&mut self, delta: f32) {
        self.set_yaw(self.yaw + delta);
    }

    /// Moves the target along the world X and Y axes; the eye follows.
    pub fn pan_target(&mut self, dx: f32, dy: f32) {
        self.target = self
            .bounds
            .clamp_target(self.target + Vector3::new(dx, dy, 0.0));
        self.update();
    }

    /// Pans the camera relative to the current view direction
    /// delta.0 = horizontal pan (left/right relative to camera view)
    /// delta.1 = vertical pan (up/down relative to camera view)
    pub fn pan(&mut self, delta: (f32, f32)) {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward).normalize(); // True "up" relative to camera

        // Scale pan movement by distance for consistent feel at all zoom levels
        let pan_scale = self.distance * 0.1;

        let movement = right * delta.0 * pan_scale + up * delta.1 * pan_scale;
        self.target = self.bounds.clamp_target(self.target + movement);
        self.update();
    }

    /// Updates the camera after changing `distance`, `pitch`, `yaw` or `target`.
    fn update(&mut self) {
        self.eye = calculate_cartesian_eye_position(self.pitch, self.yaw, self.distance, self.target);
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn update_view_proj(&mut self) {
        self.uniform.view_position = [self.eye.x, self.eye.y, self.eye.z, 1.0];
        self.uniform.view_proj = convert_matrix4_to_array(self.build_view_projection_matrix());
    }

    /// Projects a world point to pixel coordinates, origin top-left.
    ///
    /// Returns `None` for points behind the camera or outside the depth range.
    pub fn project_to_screen(&self, world: Vector3<f32>, width: f32, height: f32) -> Option<[f32; 2]> {
        let clip = self.build_view_projection_matrix() * world.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        if !(0.0..=1.0).contains(&ndc.z) {
            return None;
        }
        Some([(ndc.x + 1.0) * 0.5 * width, (1.0 - ndc.y) * 0.5 * height])
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OrbitCameraBounds {
    pub min_distance: Option<f32>,
    pub max_distance: Option<f32>,
    pub min_pitch: f32,
    pub max_pitch: f32,
    pub min_yaw: Option<f32>,
    pub max_yaw: Option<f32>,
    /// Largest absolute value of each target component.
    pub pan_extent: f32,
}

impl Default for OrbitCameraBounds {
    fn default() -> Self {
        Self {
            min_distance: Some(2.0),
            max_distance: Some(20.0),
            min_pitch: 0.0,
            max_pitch: std::f32::consts::FRAC_PI_2 - PITCH_EPSILON,
            min_yaw: None,
            max_yaw: None,
            pan_extent: 10.0,
        }
    }
}

impl OrbitCameraBounds {
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(
            self.min_distance.unwrap_or(f32::EPSILON),
            self.max_distance.unwrap_or(f32::MAX),
        )
    }

    pub fn clamp_target(&self, target: Vector3<f32>) -> Vector3<f32> {
        let extent = self.pan_extent.abs();
        Vector3::new(
            target.x.clamp(-extent, extent),
            target.y.clamp(-extent, extent),
            target.z.clamp(-extent, extent),
        )
    }
}

fn calculate_cartesian_eye_position(pitch: f32, yaw: f32, distance: f32, target: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(
        distance * yaw.sin() * pitch.cos(),
        distance * pitch.sin(),
        distance * yaw.cos() * pitch.cos(),
    ) + target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).magnitude() < 1e-4
    }

    #[test]
    fn test_default_eye_looks_at_origin_from_z() {
        let camera = OrbitCamera::default();
        assert!(close(camera.eye, Vector3::new(0.0, 0.0, 5.0)));
        assert!(close(camera.target, Vector3::zero()));
        let fov: Deg<f32> = camera.fovy.into();
        assert!((fov.0 - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_zoom_steps_and_clamps() {
        let mut camera = OrbitCamera::default();
        camera.zoom_in();
        assert!((camera.distance - 4.0).abs() < 1e-5);
        camera.zoom_out();
        assert!((camera.distance - 5.0).abs() < 1e-5);

        for _ in 0..50 {
            camera.zoom_in();
        }
        assert_eq!(camera.distance, 2.0);
        for _ in 0..50 {
            camera.zoom_out();
        }
        assert_eq!(camera.distance, 20.0);
    }

    #[test]
    fn test_pan_moves_target_and_eye_until_extent() {
        let mut camera = OrbitCamera::default();
        camera.pan_target(PAN_STEP, 0.0);
        assert!(close(camera.target, Vector3::new(0.5, 0.0, 0.0)));
        assert!(close(camera.eye, Vector3::new(0.5, 0.0, 5.0)));

        let mut last = camera.target.y;
        for _ in 0..40 {
            camera.pan_target(0.0, -PAN_STEP);
            assert!(camera.target.y <= last);
            last = camera.target.y;
        }
        assert_eq!(camera.target.y, -10.0);
    }

    #[test]
    fn test_pitch_stays_above_horizon() {
        let mut camera = OrbitCamera::default();
        camera.add_pitch(-1.0);
        assert_eq!(camera.pitch, 0.0);
        camera.add_pitch(10.0);
        assert_eq!(camera.pitch, std::f32::consts::FRAC_PI_2 - PITCH_EPSILON);
        assert!(camera.eye.y > 0.0);
    }

    #[test]
    fn test_reset_restores_initial_pose() {
        let mut camera = OrbitCamera::default();
        camera.zoom_in();
        camera.add_yaw(0.7);
        camera.pan_target(1.0, 1.0);
        camera.reset_to_default();
        assert!(close(camera.eye, Vector3::new(0.0, 0.0, 5.0)));
        assert_eq!(camera.distance, 5.0);
    }

    #[test]
    fn test_target_projects_to_screen_centre() {
        let camera = OrbitCamera::default();
        let [x, y] = camera
            .project_to_screen(Vector3::zero(), 800.0, 600.0)
            .expect("target is in front of the camera");
        assert!((x - 400.0).abs() < 1e-2);
        assert!((y - 300.0).abs() < 1e-2);
        assert!(camera
            .project_to_screen(Vector3::new(0.0, 0.0, 10.0), 800.0, 600.0)
            .is_none());
    }
}
