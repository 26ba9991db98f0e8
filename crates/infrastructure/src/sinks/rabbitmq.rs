use async_trait::async_trait;
use lapin::options::{BasicPublishOptions, QueueDeclareOptions};
use lapin::types::FieldTable;
use lapin::{BasicProperties, Channel, Connection, ConnectionProperties};
use subwatch_application::ports::NotificationSink;
use subwatch_domain::config::RabbitMqConfig;
use subwatch_domain::DomainError;
use tokio::sync::Mutex;
use tracing::{debug, warn};

const SINK_NAME: &str = "rabbitmq";

struct Session {
    connection: Connection,
    channel: Channel,
}

/// Publishes every notification to a named queue through the default
/// exchange.
///
/// The broker connection is opened on the first send of a run and reused
/// for the rest of it; `close` releases it. A failed publish drops the
/// session so the next send reconnects.
pub struct RabbitMqSink {
    url: String,
    queue: String,
    session: Mutex<Option<Session>>,
}

impl RabbitMqSink {
    pub fn new(url: impl Into<String>, queue: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            queue: queue.into(),
            session: Mutex::new(None),
        }
    }

    pub fn from_config(config: &RabbitMqConfig) -> Result<Self, DomainError> {
        let url = config.url.as_ref().ok_or_else(|| {
            DomainError::InvalidData("RabbitMQ output needs a broker URL".to_string())
        })?;
        Ok(Self::new(url.clone(), config.queue.clone()))
    }

    pub fn queue(&self) -> &str {
        &self.queue
    }

    async fn open(&self) -> Result<Session, lapin::Error> {
        let connection = Connection::connect(&self.url, ConnectionProperties::default()).await?;
        let channel = connection.create_channel().await?;
        channel
            .queue_declare(
                &self.queue,
                QueueDeclareOptions::default(),
                FieldTable::default(),
            )
            .await?;

        debug!(queue = %self.queue, "RabbitMQ session opened");
        Ok(Session {
            connection,
            channel,
        })
    }

    async fn publish(&self, session: &Session, message: &str) -> Result<(), lapin::Error> {
        session
            .channel
            .basic_publish(
                "",
                &self.queue,
                BasicPublishOptions::default(),
                message.as_bytes(),
                BasicProperties::default(),
            )
            .await?
            .await?;
        Ok(())
    }
}

#[async_trait]
impl NotificationSink for RabbitMqSink {
    fn name(&self) -> &str {
        SINK_NAME
    }

    async fn send(&self, message: &str) -> Result<(), DomainError> {
        let mut guard = self.session.lock().await;

        if guard.is_none() {
            let session = self
                .open()
                .await
                .map_err(|e| DomainError::sink(SINK_NAME, format!("connect failed: {}", e)))?;
            *guard = Some(session);
        }

        let session = guard
            .as_ref()
            .ok_or_else(|| DomainError::sink(SINK_NAME, "no broker session"))?;

        let published = self.publish(session, message).await;
        if let Err(e) = published {
            *guard = None;
            return Err(DomainError::sink(SINK_NAME, format!("publish failed: {}", e)));
        }

        Ok(())
    }

    async fn close(&self) {
        let Some(session) = self.session.lock().await.take() else {
            return;
        };

        if let Err(e) = session.connection.close(200, "OK").await {
            warn!(error = %e, "Failed to close RabbitMQ connection cleanly");
        } else {
            debug!("RabbitMQ session closed");
        }
    }
}
