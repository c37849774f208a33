//! Message types moved by the turtlekit tools.
//!
//! Every message knows its canonical wire name (`std_msgs/String`,
//! `geometry_msgs/Twist`, ...); bags store that name next to each record so
//! readers can check what they are decoding.

pub mod geometry;
pub mod std_msgs;

pub use geometry::{Twist, Vector3};
pub use std_msgs::StringMessage;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A value that can travel through a bag record or a broker payload.
pub trait Message: Serialize + DeserializeOwned {
    /// Canonical wire name recorded next to every bag record.
    fn type_name() -> &'static str;
}
