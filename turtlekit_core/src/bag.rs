//! Timestamped message logs ("bags") for later replay.
//!
//! A bag is written once, front to back, and read back as a whole. Records
//! keep the topic, the message's wire name, a timestamp, and the encoded
//! payload, so a reader can rebuild the original message stream without any
//! out-of-band schema.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{TurtlekitError, TurtlekitResult};
use crate::messages::{Message, StringMessage, Twist, Vector3};
use crate::time::Time;

/// On-disk format revision
const BAG_VERSION: u32 = 1;

/// One timestamped message in a bag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BagRecord {
    /// Topic the message was addressed to
    pub topic: String,
    /// Wire name of the payload, e.g. `geometry_msgs/Twist`
    pub msg_type: String,
    /// Timestamp of the record
    pub time: Time,
    /// Encoded payload
    pub data: Vec<u8>,
}

impl BagRecord {
    /// Decode the payload back into its message type.
    ///
    /// Fails when `M` is not the type the record was written with.
    pub fn decode<M: Message>(&self) -> TurtlekitResult<M> {
        if self.msg_type != M::type_name() {
            return Err(TurtlekitError::bag(format!(
                "record on {} holds {}, not {}",
                self.topic,
                self.msg_type,
                M::type_name()
            )));
        }
        Ok(bincode::deserialize(&self.data)?)
    }

    /// Decode the payload into JSON for transports that want readable bytes.
    pub fn to_json(&self) -> TurtlekitResult<serde_json::Value> {
        match self.msg_type.as_str() {
            t if t == StringMessage::type_name() => {
                Ok(serde_json::to_value(self.decode::<StringMessage>()?)?)
            }
            t if t == Twist::type_name() => Ok(serde_json::to_value(self.decode::<Twist>()?)?),
            t if t == Vector3::type_name() => Ok(serde_json::to_value(self.decode::<Vector3>()?)?),
            other => Err(TurtlekitError::bag(format!(
                "no JSON mapping for message type {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BagFile {
    version: u32,
    records: Vec<BagRecord>,
}

/// Topic summary produced by [`BagReader::topics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicInfo {
    pub topic: String,
    pub msg_type: String,
    pub count: usize,
}

/// Writes a bag front to back.
///
/// The file is claimed when the writer is created and hits disk when
/// [`close`](BagWriter::close) is called. Dropping an unclosed writer saves
/// whatever was written so far, so the bag survives every exit path.
pub struct BagWriter {
    path: PathBuf,
    file: Option<File>,
    bag: BagFile,
}

impl BagWriter {
    /// Create a bag at `path`, truncating any previous file there.
    pub fn create(path: impl AsRef<Path>) -> TurtlekitResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(&path)?;

        Ok(Self {
            path,
            file: Some(file),
            bag: BagFile {
                version: BAG_VERSION,
                records: Vec::new(),
            },
        })
    }

    /// Append one message at `time`.
    pub fn write<M: Message>(&mut self, topic: &str, msg: &M, time: Time) -> TurtlekitResult<()> {
        let data = bincode::serialize(msg)?;
        self.bag.records.push(BagRecord {
            topic: topic.to_string(),
            msg_type: M::type_name().to_string(),
            time,
            data,
        });
        Ok(())
    }

    /// Number of records written so far
    pub fn len(&self) -> usize {
        self.bag.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bag.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&mut self) -> TurtlekitResult<()> {
        let file = match self.file.take() {
            Some(file) => file,
            None => return Ok(()),
        };
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, &self.bag)?;
        writer.flush()?;
        Ok(())
    }

    /// Finish the bag and write it to disk.
    pub fn close(mut self) -> TurtlekitResult<()> {
        self.save()
    }
}

impl Drop for BagWriter {
    fn drop(&mut self) {
        if self.file.is_some() {
            if let Err(err) = self.save() {
                tracing::warn!("bag {} not fully written: {}", self.path.display(), err);
            }
        }
    }
}

/// Read-only view of a bag loaded from disk.
pub struct BagReader {
    bag: BagFile,
}

impl BagReader {
    pub fn open(path: impl AsRef<Path>) -> TurtlekitResult<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let bag: BagFile = bincode::deserialize_from(reader)?;
        if bag.version != BAG_VERSION {
            return Err(TurtlekitError::bag(format!(
                "unsupported bag version {}",
                bag.version
            )));
        }
        Ok(Self { bag })
    }

    /// Records in written order.
    pub fn records(&self) -> &[BagRecord] {
        &self.bag.records
    }

    pub fn len(&self) -> usize {
        self.bag.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bag.records.is_empty()
    }

    /// Topics present in the bag, in first-seen order, with message type and
    /// record count.
    pub fn topics(&self) -> Vec<TopicInfo> {
        let mut infos: Vec<TopicInfo> = Vec::new();
        for record in &self.bag.records {
            match infos.iter_mut().find(|info| info.topic == record.topic) {
                Some(info) => info.count += 1,
                None => infos.push(TopicInfo {
                    topic: record.topic.clone(),
                    msg_type: record.msg_type.clone(),
                    count: 1,
                }),
            }
        }
        infos
    }

    /// Earliest record timestamp, if any.
    pub fn start_time(&self) -> Option<Time> {
        self.bag.records.iter().map(|r| r.time).min()
    }

    /// Latest record timestamp, if any.
    pub fn end_time(&self) -> Option<Time> {
        self.bag.records.iter().map(|r| r.time).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mixed.bag");

        let mut bag = BagWriter::create(&path).unwrap();
        bag.write("/cmd", &StringMessage::new("go"), Time::from_sec(0.1))
            .unwrap();
        bag.write(
            "/cmd_vel",
            &Twist::new(Vector3::new(2.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 2.0)),
            Time::from_sec(1.0),
        )
        .unwrap();
        assert_eq!(bag.len(), 2);
        bag.close().unwrap();

        let reader = BagReader::open(&path).unwrap();
        assert_eq!(reader.len(), 2);

        let text: StringMessage = reader.records()[0].decode().unwrap();
        assert_eq!(text.data, "go");
        let twist: Twist = reader.records()[1].decode().unwrap();
        assert_eq!(twist.linear.x, 2.0);
        assert_eq!(twist.angular.z, 2.0);

        assert_eq!(reader.start_time(), Some(Time::from_sec(0.1)));
        assert_eq!(reader.end_time(), Some(Time::from_sec(1.0)));
    }

    #[test]
    fn test_decode_checks_type_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("typed.bag");

        let mut bag = BagWriter::create(&path).unwrap();
        bag.write("/cmd", &StringMessage::new("go"), Time::ZERO)
            .unwrap();
        bag.close().unwrap();

        let reader = BagReader::open(&path).unwrap();
        let err = reader.records()[0].decode::<Twist>().unwrap_err();
        assert!(err.to_string().contains("std_msgs/String"));
    }

    #[test]
    fn test_drop_saves_unclosed_bag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dropped.bag");

        {
            let mut bag = BagWriter::create(&path).unwrap();
            bag.write("/cmd", &StringMessage::new("kept"), Time::ZERO)
                .unwrap();
            // no close(), the Drop guard must flush
        }

        let reader = BagReader::open(&path).unwrap();
        assert_eq!(reader.len(), 1);
        let msg: StringMessage = reader.records()[0].decode().unwrap();
        assert_eq!(msg.data, "kept");
    }

    #[test]
    fn test_topics_summary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("topics.bag");

        let mut bag = BagWriter::create(&path).unwrap();
        bag.write("/cmd_vel", &Twist::zero(), Time::ZERO).unwrap();
        bag.write("/cmd_vel", &Twist::zero(), Time::from_sec(1.0))
            .unwrap();
        bag.write("/cmd", &StringMessage::new("hi"), Time::from_sec(2.0))
            .unwrap();
        bag.close().unwrap();

        let reader = BagReader::open(&path).unwrap();
        let topics = reader.topics();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].topic, "/cmd_vel");
        assert_eq!(topics[0].msg_type, "geometry_msgs/Twist");
        assert_eq!(topics[0].count, 2);
        assert_eq!(topics[1].topic, "/cmd");
        assert_eq!(topics[1].count, 1);
    }

    #[test]
    fn test_record_to_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("json.bag");

        let mut bag = BagWriter::create(&path).unwrap();
        bag.write("/cmd", &StringMessage::new("circle"), Time::ZERO)
            .unwrap();
        bag.write(
            "/cmd_vel",
            &Twist::new(Vector3::new(2.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 2.0)),
            Time::from_sec(1.0),
        )
        .unwrap();
        bag.close().unwrap();

        let reader = BagReader::open(&path).unwrap();
        let text = reader.records()[0].to_json().unwrap();
        assert_eq!(text["data"], "circle");
        let twist = reader.records()[1].to_json().unwrap();
        assert_eq!(twist["linear"]["x"], 2.0);
        assert_eq!(twist["angular"]["z"], 2.0);
    }
}
