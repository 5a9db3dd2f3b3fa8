mod projection;
mod topology;

pub use projection::{Camera, Rotation, Viewport, rotate_about_y};
pub use topology::{NetworkLayout, Node};
