//! Telegram processing node

use crate::error::BhResult;
use crate::payload::Payload;
use crate::settings::NodeSettings;
use crate::sink::ErrorSink;
use bh_codec::TelegramCodec;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Decodes inbound frames and encodes outbound telegram records
///
/// The node holds only its settings; any number of messages may be handled
/// concurrently through shared references.
#[derive(Debug, Clone, Copy, Default)]
pub struct TelegramNode {
    settings: NodeSettings,
    codec: TelegramCodec,
}

impl TelegramNode {
    pub fn new(settings: NodeSettings) -> Self {
        Self {
            settings,
            codec: TelegramCodec::new(settings.codec),
        }
    }

    pub fn settings(&self) -> &NodeSettings {
        &self.settings
    }

    pub fn codec(&self) -> &TelegramCodec {
        &self.codec
    }

    /// Decode text or bytes, encode a telegram record
    pub fn handle(&self, payload: Payload) -> BhResult<Payload> {
        match payload {
            Payload::Text(text) => self.codec.decode(text.as_bytes()).map(Payload::Telegram),
            Payload::Bytes(bytes) => self.codec.decode(&bytes).map(Payload::Telegram),
            Payload::Telegram(telegram) => self.codec.encode(&telegram).map(Payload::Text),
        }
    }

    /// [`handle`](Self::handle) for JSON message payloads
    pub fn handle_json(&self, value: Value) -> BhResult<Value> {
        let payload = Payload::from_json(value)?;
        self.handle(payload)?.to_json()
    }

    /// Handle one message, reporting failures instead of returning them
    ///
    /// Returns `None` when the message was dropped.
    pub fn process(&self, payload: Payload, sink: &dyn ErrorSink) -> Option<Payload> {
        let kind = payload.kind();
        match self.handle(payload) {
            Ok(output) => Some(output),
            Err(e) => {
                log::debug!("Failed to process {} payload: {}", kind, e);
                sink.report(&e);
                None
            }
        }
    }

    /// Pump messages from `rx` to `tx` until either side closes
    ///
    /// Returns the number of messages forwarded.
    pub async fn run(
        &self,
        mut rx: mpsc::Receiver<Payload>,
        tx: mpsc::Sender<Payload>,
        sink: Arc<dyn ErrorSink>,
    ) -> usize {
        let mut forwarded = 0;

        while let Some(payload) = rx.recv().await {
            let Some(output) = self.process(payload, sink.as_ref()) else {
                continue;
            };
            if tx.send(output).await.is_err() {
                log::info!("Outbound channel closed, stopping telegram node");
                break;
            }
            forwarded += 1;
        }

        forwarded
    }

    /// Spawn [`run`](Self::run) on the current runtime
    ///
    /// Returns the inbound sender, the outbound receiver and the task handle.
    pub fn spawn(
        self,
        sink: Arc<dyn ErrorSink>,
    ) -> (
        mpsc::Sender<Payload>,
        mpsc::Receiver<Payload>,
        JoinHandle<usize>,
    ) {
        let capacity = self.settings.channel_capacity.max(1);
        let (in_tx, in_rx) = mpsc::channel(capacity);
        let (out_tx, out_rx) = mpsc::channel(capacity);

        let handle = tokio::spawn(async move { self.run(in_rx, out_tx, sink).await });
        (in_tx, out_rx, handle)
    }
}
