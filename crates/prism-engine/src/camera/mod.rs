//! Free-fly camera.
//!
//! [`Camera`] owns the viewer pose and turns discrete movement commands and
//! cursor offsets into pose updates. Everything that touches the GPU
//! ([`CameraUniform`]) or the window ([`FlyControls`], [`CursorTracker`]) sits
//! around it and only reads or drives the public operations.

mod controls;
mod cursor;
mod fly;
mod projection;
mod uniform;

pub use controls::FlyControls;
pub use cursor::CursorTracker;
pub use fly::{
    Camera, CameraMovement, DEFAULT_PITCH, DEFAULT_SENSITIVITY, DEFAULT_SPEED, DEFAULT_YAW,
    DEFAULT_ZOOM, PITCH_LIMIT, ZOOM_MAX, ZOOM_MIN,
};
pub use projection::Projection;
pub use uniform::CameraUniform;
