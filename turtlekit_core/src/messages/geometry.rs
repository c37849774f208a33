use serde::{Deserialize, Serialize};

use super::Message;

/// 3-dimensional vector with double precision components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

// Enable zero-copy serialization with bytemuck
unsafe impl bytemuck::Pod for Vector3 {}
unsafe impl bytemuck::Zeroable for Vector3 {}

impl Message for Vector3 {
    fn type_name() -> &'static str {
        "geometry_msgs/Vector3"
    }
}

/// Velocity command message
///
/// Standard message type for driving a robot: linear velocity in m/s and
/// angular velocity in rad/s, each as a free 3-vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Twist {
    pub linear: Vector3,
    pub angular: Vector3,
}

impl Twist {
    pub fn new(linear: Vector3, angular: Vector3) -> Self {
        Self { linear, angular }
    }

    /// Create a zero velocity command (stop)
    pub fn zero() -> Self {
        Self::new(Vector3::zero(), Vector3::zero())
    }
}

unsafe impl bytemuck::Pod for Twist {}
unsafe impl bytemuck::Zeroable for Twist {}

impl Message for Twist {
    fn type_name() -> &'static str {
        "geometry_msgs/Twist"
    }
}
