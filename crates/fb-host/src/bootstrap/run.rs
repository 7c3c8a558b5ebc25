use anyhow::Context;
use fb_core::{AppConfig, ItemKey, RawItem};
use tracing::{error, info, info_span, Instrument};

use super::wiring::{wire, Wired};
use crate::adapters::{pump_inbound_lines, pump_outbound_lines};

/// Run the bridge against stdin/stdout until ctrl-c.
///
/// The feed subscription lives for the whole process; closing stdin only ends
/// the inbound port.
pub async fn run_bridge(config: AppConfig, seed: Vec<(ItemKey, RawItem)>) -> anyhow::Result<()> {
    let Wired {
        bridge,
        feed,
        ports,
        start_requests,
        ui_messages,
    } = wire(&config, seed)?;

    info!(
        collection = %feed.name(),
        records = feed.len(),
        inbound = %ports.inbound,
        outbound = %ports.outbound,
        forward_changes = config.forward_changes,
        "Starting feed bridge"
    );

    let mut running = bridge
        .start()
        .await
        .context("Failed to start feed bridge")?;

    // stdin is read on a plain thread: a pending read there cannot hold up
    // runtime shutdown after ctrl-c. The thread ends with the process.
    let inbound_port = ports.inbound.clone();
    std::thread::Builder::new()
        .name("feedbridge-stdin".to_string())
        .spawn(move || {
            let _span = info_span!("host.stdin").entered();
            let stdin = std::io::stdin().lock();
            if let Err(err) = pump_inbound_lines(stdin, &inbound_port, start_requests) {
                error!(error = %err, "UI inbound pump failed");
            }
        })
        .context("Failed to spawn stdin reader")?;
    let stdout_task = tokio::spawn(
        async move {
            if let Err(err) = pump_outbound_lines(tokio::io::stdout(), ports, ui_messages).await {
                error!(error = %err, "UI outbound pump failed");
            }
        }
        .instrument(info_span!("host.stdout")),
    );

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result.context("Failed to listen for ctrl-c")?;
            info!("Received ctrl-c, shutting down");
        }
        _ = running.wait() => info!("Bridge inputs closed"),
    }

    running.shutdown().await;
    // The outbound pump ends once the bridge releases its sender.
    drop(bridge);
    if let Err(err) = stdout_task.await {
        error!(error = %err, "UI outbound pump panicked");
    }

    Ok(())
}
