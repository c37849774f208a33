//! Pre-canned objective bags for the turtle demo.
//!
//! Two fixed command sequences: a one-line text objective, and a velocity
//! sweep that drives the turtle in a circle for a while and stops it on both
//! ends.

use std::path::Path;

use turtlekit_core::bag::BagWriter;
use turtlekit_core::error::TurtlekitResult;
use turtlekit_core::messages::{StringMessage, Twist, Vector3};
use turtlekit_core::time::Time;

/// Topic carrying the text objective
pub const STRING_TOPIC: &str = "/turtle1/cmd";
/// Topic carrying velocity commands
pub const TWIST_TOPIC: &str = "/turtle1/cmd_vel";
/// The text objective payload
pub const STRING_OBJECTIVE: &str = "Dear turtle, please make a circle. Thanks!";

/// Repetitions of the circling command
const TWIST_REPEATS: u32 = 239;
/// Seconds between repeated velocity commands
const TWIST_SPACING_SECS: f64 = 0.01;

/// Write the single-message text objective bag. Returns the record count.
pub fn write_string_objective(path: &Path) -> TurtlekitResult<usize> {
    let mut bag = BagWriter::create(path)?;
    bag.write(
        STRING_TOPIC,
        &StringMessage::new(STRING_OBJECTIVE),
        Time::from_sec(0.1),
    )?;

    let written = bag.len();
    bag.close()?;
    Ok(written)
}

/// Write the velocity sweep bag: stop at t = 0, then the circling command
/// repeated every 10 ms from t = 1 s, then stop again at t = 5 s. Returns the
/// record count.
pub fn write_twist_objective(path: &Path) -> TurtlekitResult<usize> {
    let mut bag = BagWriter::create(path)?;
    let stop = Twist::zero();
    let circle = Twist::new(Vector3::new(2.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 2.0));

    bag.write(TWIST_TOPIC, &stop, Time::ZERO)?;
    for i in 0..TWIST_REPEATS {
        let t = Time::from_sec(1.0 + TWIST_SPACING_SECS * f64::from(i));
        bag.write(TWIST_TOPIC, &circle, t)?;
    }
    bag.write(TWIST_TOPIC, &stop, Time::from_sec(5.0))?;

    let written = bag.len();
    bag.close()?;
    Ok(written)
}
