use serde::{Deserialize, Serialize};

use super::Message;

/// Plain UTF-8 text message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StringMessage {
    pub data: String,
}

impl StringMessage {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

impl From<&str> for StringMessage {
    fn from(data: &str) -> Self {
        Self::new(data)
    }
}

impl Message for StringMessage {
    fn type_name() -> &'static str {
        "std_msgs/String"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_message() {
        let msg = StringMessage::new("hello");
        assert_eq!(msg.data, "hello");
        assert_eq!(StringMessage::from("hello"), msg);
        assert_eq!(StringMessage::type_name(), "std_msgs/String");
    }
}
