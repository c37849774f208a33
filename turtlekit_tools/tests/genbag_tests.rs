use approx::assert_relative_eq;
use tempfile::tempdir;

use turtlekit_core::bag::BagReader;
use turtlekit_core::messages::{Message, StringMessage, Twist};
use turtlekit_core::time::Time;
use turtlekit_tools::genbag;

#[test]
fn string_objective_bag_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("objective_string.bag");

    let written = genbag::write_string_objective(&path).unwrap();
    assert_eq!(written, 1);

    let reader = BagReader::open(&path).unwrap();
    assert_eq!(reader.len(), 1);

    let record = &reader.records()[0];
    assert_eq!(record.topic, "/turtle1/cmd");
    assert_eq!(record.msg_type, StringMessage::type_name());
    assert_eq!(record.time, Time::from_sec(0.1));

    let msg: StringMessage = record.decode().unwrap();
    assert_eq!(msg.data, "Dear turtle, please make a circle. Thanks!");
}

#[test]
fn twist_objective_bag_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("twist.bag");

    let written = genbag::write_twist_objective(&path).unwrap();
    assert_eq!(written, 241);

    let reader = BagReader::open(&path).unwrap();
    assert_eq!(reader.len(), 241);

    for record in reader.records() {
        assert_eq!(record.topic, "/turtle1/cmd_vel");
        assert_eq!(record.msg_type, Twist::type_name());
    }

    // stop commands bound the sweep on both ends
    let first = &reader.records()[0];
    assert_eq!(first.time, Time::ZERO);
    let stop: Twist = first.decode().unwrap();
    assert_eq!(stop, Twist::zero());

    let last = &reader.records()[240];
    assert_eq!(last.time, Time::from_sec(5.0));
    let stop: Twist = last.decode().unwrap();
    assert_eq!(stop, Twist::zero());

    // 239 circling commands from t = 1.0s, spaced 10ms apart
    for (i, record) in reader.records()[1..240].iter().enumerate() {
        assert_eq!(record.time, Time::from_sec(1.0 + 0.01 * i as f64));

        let cmd: Twist = record.decode().unwrap();
        assert_relative_eq!(cmd.linear.x, 2.0);
        assert_relative_eq!(cmd.linear.y, 0.0);
        assert_relative_eq!(cmd.linear.z, 0.0);
        assert_relative_eq!(cmd.angular.x, 0.0);
        assert_relative_eq!(cmd.angular.y, 0.0);
        assert_relative_eq!(cmd.angular.z, 2.0);
    }

    let sweep = &reader.records()[1..240];
    for pair in sweep.windows(2) {
        assert_eq!(pair[1].time.as_nanos() - pair[0].time.as_nanos(), 10_000_000);
    }
}

#[test]
fn twist_objective_topic_summary() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("twist.bag");
    genbag::write_twist_objective(&path).unwrap();

    let reader = BagReader::open(&path).unwrap();
    let topics = reader.topics();
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0].topic, "/turtle1/cmd_vel");
    assert_eq!(topics[0].msg_type, "geometry_msgs/Twist");
    assert_eq!(topics[0].count, 241);

    assert_eq!(reader.start_time(), Some(Time::ZERO));
    assert_eq!(reader.end_time(), Some(Time::from_sec(5.0)));
}
