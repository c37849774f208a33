//! MQTT broker plumbing shared by the tools.
//!
//! Connection handling stays inside rumqttc's event loop; the helpers here
//! only decide what to do with each event. Subscriptions are (re)issued on
//! every connection acknowledgement, so a reconnect renews them.

use rumqttc::{AsyncClient, Event, MqttOptions, Packet, QoS};
use std::time::Duration;
use tokio::time::sleep;

use crate::error::{TurtlekitError, TurtlekitResult};

/// Default broker host
pub const DEFAULT_HOST: &str = "localhost";
/// Default broker port
pub const DEFAULT_PORT: u16 = 1883;

/// Backoff after a failed event-loop poll
const RECONNECT_DELAY_SECS: u64 = 5;
/// Keep-alive interval sent to the broker
const KEEP_ALIVE_SECS: u64 = 30;
/// Event-loop request queue capacity
const REQUEST_CAP: usize = 10;

/// Broker connection settings.
#[derive(Debug, Clone)]
pub struct MqttConfig {
    pub host: String,
    pub port: u16,
    pub client_id: String,
}

impl Default for MqttConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl MqttConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            client_id: "turtlekit".to_string(),
        }
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Parse a broker URL such as `mqtt://localhost:1883`.
    ///
    /// The `mqtt://` and `mqtts://` prefixes are optional; the port defaults
    /// to 1883 when absent.
    pub fn from_url(url: &str) -> TurtlekitResult<Self> {
        let url = url.trim();
        let url = url
            .strip_prefix("mqtt://")
            .or_else(|| url.strip_prefix("mqtts://"))
            .unwrap_or(url);

        if let Some((host, port_str)) = url.split_once(':') {
            let port = port_str.parse::<u16>().map_err(|_| {
                TurtlekitError::config(format!("invalid port in broker URL: {}", port_str))
            })?;
            Ok(Self::new(host, port))
        } else {
            Ok(Self::new(url, DEFAULT_PORT))
        }
    }

    fn options(&self) -> MqttOptions {
        let mut options = MqttOptions::new(self.client_id.clone(), self.host.clone(), self.port);
        options.set_keep_alive(Duration::from_secs(KEEP_ALIVE_SECS));
        options
    }
}

/// Connect to the broker and dispatch every publish on `topic` to
/// `on_message`.
///
/// Blocks forever: the event loop owns reconnection, and the subscription is
/// renewed on each CONNACK. Only a failed subscribe request returns an error.
pub async fn subscribe_loop<F>(
    config: &MqttConfig,
    topic: &str,
    mut on_message: F,
) -> TurtlekitResult<()>
where
    F: FnMut(&str, &[u8]),
{
    let (client, mut eventloop) = AsyncClient::new(config.options(), REQUEST_CAP);

    loop {
        match eventloop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(ack))) => {
                tracing::info!(
                    "connected to {}:{} ({:?})",
                    config.host,
                    config.port,
                    ack.code
                );
                client
                    .subscribe(topic, QoS::AtMostOnce)
                    .await
                    .map_err(|e| {
                        TurtlekitError::communication(format!(
                            "failed to subscribe to {}: {}",
                            topic, e
                        ))
                    })?;
            }
            Ok(Event::Incoming(Packet::SubAck(_))) => {
                tracing::debug!("subscription to {} acknowledged", topic);
            }
            Ok(Event::Incoming(Packet::Publish(publish))) => {
                on_message(&publish.topic, &publish.payload);
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(
                    "broker poll failed: {}; retrying in {}s",
                    err,
                    RECONNECT_DELAY_SECS
                );
                sleep(Duration::from_secs(RECONNECT_DELAY_SECS)).await;
            }
        }
    }
}

/// Thin publisher handle.
///
/// The connection is driven by a background task; the handle itself only
/// queues publish requests.
pub struct MqttPublisher {
    client: AsyncClient,
}

impl MqttPublisher {
    /// Connect to the broker and start polling the event loop.
    pub fn connect(config: &MqttConfig) -> Self {
        let (client, mut eventloop) = AsyncClient::new(config.options(), REQUEST_CAP);

        tokio::spawn(async move {
            loop {
                if let Err(err) = eventloop.poll().await {
                    tracing::warn!(
                        "broker poll failed: {}; retrying in {}s",
                        err,
                        RECONNECT_DELAY_SECS
                    );
                    sleep(Duration::from_secs(RECONNECT_DELAY_SECS)).await;
                }
            }
        });

        Self { client }
    }

    pub async fn publish(
        &self,
        topic: &str,
        payload: impl Into<Vec<u8>>,
    ) -> TurtlekitResult<()> {
        self.client
            .publish(topic, QoS::AtMostOnce, false, payload.into())
            .await
            .map_err(|e| {
                TurtlekitError::communication(format!("failed to publish on {}: {}", topic, e))
            })
    }

    pub async fn disconnect(&self) -> TurtlekitResult<()> {
        self.client
            .disconnect()
            .await
            .map_err(|e| TurtlekitError::communication(format!("failed to disconnect: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_url_with_port() {
        let config = MqttConfig::from_url("mqtt://localhost:1883").unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 1883);
    }

    #[test]
    fn test_from_url_defaults_port() {
        let config = MqttConfig::from_url("mqtt://broker.example.com").unwrap();
        assert_eq!(config.host, "broker.example.com");
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_from_url_bare_host() {
        let config = MqttConfig::from_url("10.0.0.7:1884").unwrap();
        assert_eq!(config.host, "10.0.0.7");
        assert_eq!(config.port, 1884);
    }

    #[test]
    fn test_from_url_rejects_bad_port() {
        assert!(MqttConfig::from_url("mqtt://localhost:not-a-port").is_err());
    }
}
