//! # turtlekit core
//!
//! Shared building blocks for the turtlekit command-line tools:
//!
//! - **Messages**: the fixed-shape records the tools move around
//!   (`Twist`, `Vector3`, `StringMessage`)
//! - **Bags**: timestamped message logs written once and replayed later
//! - **Broker plumbing**: MQTT configuration, subscribe loop, and a thin
//!   publisher handle
//!
//! ## Quick start
//!
//! ```no_run
//! use turtlekit_core::{BagWriter, StringMessage, Time};
//!
//! # fn main() -> turtlekit_core::TurtlekitResult<()> {
//! let mut bag = BagWriter::create("objective.bag")?;
//! bag.write("/turtle1/cmd", &StringMessage::new("go"), Time::from_sec(0.1))?;
//! bag.close()?;
//! # Ok(())
//! # }
//! ```

pub mod bag;
pub mod error;
pub mod messages;
pub mod mqtt;
pub mod time;

// Re-export commonly used types for easy access
pub use bag::{BagReader, BagRecord, BagWriter, TopicInfo};
pub use error::{TurtlekitError, TurtlekitResult};
pub use messages::{Message, StringMessage, Twist, Vector3};
pub use mqtt::{MqttConfig, MqttPublisher};
pub use time::Time;
