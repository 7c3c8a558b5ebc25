//! JSON-lines rendition of the UI ports.
//!
//! Every line is one [`PortMessage`]. Inbound lines addressed to the inbound
//! port become start requests; anything else is logged and skipped. Outbound
//! messages are written one per line and flushed immediately.

use std::io::BufRead;

use anyhow::Context;
use fb_core::StartRequest;
use fb_infra::UiMessage;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::events::{PortMessage, PortNames};

/// Read start requests from `reader` until EOF or until the bridge stops listening.
///
/// Blocks the calling thread: run it on a dedicated thread, never on the
/// runtime. A blocking read of stdin cannot be cancelled, and a runtime waits
/// for its blocking tasks on shutdown.
pub fn pump_inbound_lines<R>(
    reader: R,
    inbound_port: &str,
    requests: mpsc::Sender<StartRequest>,
) -> anyhow::Result<()>
where
    R: BufRead,
{
    for line in reader.lines() {
        let line = line.context("Failed to read ui inbound line")?;
        let Some(request) = parse_start_request(&line, inbound_port) else {
            continue;
        };

        if requests.blocking_send(request).is_err() {
            debug!("Bridge stopped listening for start requests");
            break;
        }
    }

    info!(port = %inbound_port, "UI inbound port closed");
    Ok(())
}

fn parse_start_request(line: &str, inbound_port: &str) -> Option<StartRequest> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let message: PortMessage = match serde_json::from_str(line) {
        Ok(message) => message,
        Err(err) => {
            warn!(error = %err, "Skipping malformed ui message");
            return None;
        }
    };

    if message.port != inbound_port {
        debug!(port = %message.port, "Skipping message for unknown port");
        return None;
    }

    match message.payload {
        serde_json::Value::Object(fields) => Some(StartRequest::new(fields)),
        other => {
            warn!(payload = %other, "Skipping start request whose payload is not an object");
            None
        }
    }
}

/// Write outbound ui messages to `writer` until the bridge side closes.
pub async fn pump_outbound_lines<W>(
    mut writer: W,
    names: PortNames,
    mut messages: mpsc::UnboundedReceiver<UiMessage>,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(message) = messages.recv().await {
        let envelope = names.envelope(&message);
        let mut line =
            serde_json::to_string(&envelope).context("Failed to encode ui message")?;
        line.push('\n');

        writer
            .write_all(line.as_bytes())
            .await
            .context("Failed to write ui message")?;
        writer.flush().await.context("Failed to flush ui output")?;
    }

    Ok(())
}
