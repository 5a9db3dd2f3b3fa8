use eframe::egui::{Pos2, pos2};
use glam::Vec3;

#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub fov: f32,
    pub distance: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

pub struct Rotation {
    pub angle: f32,
    pub speed: f32,
}

pub fn rotate_about_y(position: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(
        position.x * cos - position.z * sin,
        position.y,
        position.x * sin + position.z * cos,
    )
}

impl Camera {
    pub fn project(&self, position: Vec3, angle: f32, viewport: Viewport) -> (Pos2, f32) {
        let rotated = rotate_about_y(position, angle);
        let scale = self.fov / (self.distance + rotated.z);
        let screen = pos2(
            rotated.x * scale + viewport.width / 2.0,
            rotated.y * scale + viewport.height / 2.0,
        );
        (screen, scale)
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Rotation {
    pub fn new(speed: f32) -> Self {
        Self { angle: 0.0, speed }
    }

    pub fn advance(&mut self) {
        self.angle += self.speed;
    }
}
