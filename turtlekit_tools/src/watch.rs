//! Rendering for the digital-twin watcher.

/// Render one incoming publish the way the watcher prints it.
///
/// Payloads are not parsed or validated; non-UTF-8 bytes are rendered lossily.
pub fn render_publish(topic: &str, payload: &[u8]) -> String {
    format!("at topic {} data: {}", topic, String::from_utf8_lossy(payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_topic_and_payload() {
        let line = render_publish("digitaltwin", b"{\"id\":42}");
        assert!(line.contains("digitaltwin"));
        assert!(line.contains("{\"id\":42}"));
    }

    #[test]
    fn test_render_survives_non_utf8() {
        let line = render_publish("digitaltwin", &[0xff, 0xfe, b'o', b'k']);
        assert!(line.contains("ok"));
    }
}
