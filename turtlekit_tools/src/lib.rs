//! Command-line tools around the turtlekit bag and broker stack.
//!
//! The binaries stay thin; anything worth testing lives here.

pub mod genbag;
pub mod watch;
