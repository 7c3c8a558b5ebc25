use std::sync::Arc;

use fb_core::ports::{FeedCollectionPort, FeedError, UiInboundPort, UiOutboundPort, UiPortError};
use fb_core::{FeedEvent, FeedSubscription, ItemKey, RawItem, StartRequest};
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, info, info_span, warn, Instrument};

use super::BridgeContext;
use crate::usecases::{ForwardAddedItem, ForwardChangedItem, SubmitStart};

/// Errors raised while establishing the bridge subscriptions.
#[derive(Debug, thiserror::Error)]
pub enum StartBridgeError {
    #[error("failed to subscribe to feed: {0}")]
    Feed(#[from] FeedError),

    #[error("failed to subscribe to ui inbound port: {0}")]
    Inbound(#[from] UiPortError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BridgeOptions {
    /// Also forward "changed" notifications on the updated port.
    pub forward_changes: bool,
}

/// Helper for constructing the bridge with explicit dependency fields.
pub struct FeedBridgeDeps {
    pub feed: Arc<dyn FeedCollectionPort>,
    pub ui_inbound: Arc<dyn UiInboundPort>,
    pub ui_outbound: Arc<dyn UiOutboundPort>,
    pub context: Arc<BridgeContext>,
}

/// Bridges an external feed and the UI runtime.
///
/// One-way normalization and forwarding of feed items toward the UI, plus
/// one-way submission of UI start requests toward the feed. Holds no state
/// besides the diagnostic [`BridgeContext`].
pub struct FeedBridge {
    feed: Arc<dyn FeedCollectionPort>,
    ui_inbound: Arc<dyn UiInboundPort>,
    forward_added: Arc<ForwardAddedItem>,
    forward_changed: Arc<ForwardChangedItem>,
    submit_start: Arc<SubmitStart>,
    context: Arc<BridgeContext>,
    options: BridgeOptions,
}

impl FeedBridge {
    pub fn from_deps(deps: FeedBridgeDeps, options: BridgeOptions) -> Self {
        let FeedBridgeDeps {
            feed,
            ui_inbound,
            ui_outbound,
            context,
        } = deps;

        Self {
            forward_added: Arc::new(ForwardAddedItem::new(ui_outbound.clone(), context.clone())),
            forward_changed: Arc::new(ForwardChangedItem::new(ui_outbound)),
            submit_start: Arc::new(SubmitStart::new(feed.clone())),
            feed,
            ui_inbound,
            context,
            options,
        }
    }

    pub fn context(&self) -> &Arc<BridgeContext> {
        &self.context
    }

    /// Forward one "added" record to the UI.
    pub fn on_item_added(&self, raw: RawItem, key: ItemKey) {
        self.forward_added.execute(raw, key);
    }

    /// Submit one start request to the feed and log the outcome.
    pub async fn submit_start(&self, request: StartRequest) {
        self.submit_start.execute(request).await;
    }

    /// Establish the subscriptions and spawn the pumps driving them.
    ///
    /// The "added" subscription is opened first so the initial sync reaches the
    /// UI before any request the UI sends is acted on.
    pub async fn start(&self) -> Result<RunningBridge, StartBridgeError> {
        let span = info_span!("bridge.start", forward_changes = self.options.forward_changes);

        async {
            let added = self.feed.subscribe_added().await?;
            let changed = if self.options.forward_changes {
                Some(self.feed.subscribe_changed().await?)
            } else {
                None
            };
            let requests = self.ui_inbound.subscribe_start_requests().await?;

            let mut pumps = vec![tokio::spawn(
                pump_added(added, self.forward_added.clone()).in_current_span(),
            )];
            if let Some(changed) = changed {
                pumps.push(tokio::spawn(
                    pump_changed(changed, self.forward_changed.clone()).in_current_span(),
                ));
            }
            pumps.push(tokio::spawn(
                pump_requests(requests, self.submit_start.clone()).in_current_span(),
            ));

            info!(pumps = pumps.len(), "Feed bridge started");
            Ok(RunningBridge { pumps })
        }
        .instrument(span)
        .await
    }
}

async fn pump_added(mut subscription: FeedSubscription<FeedEvent>, forward: Arc<ForwardAddedItem>) {
    while let Some(event) = subscription.recv().await {
        match event {
            FeedEvent::Added(record) => forward.execute(record.value, record.key),
            FeedEvent::Changed(record) => {
                warn!(key = %record.key, "Ignoring change event on added subscription")
            }
        }
    }
    debug!("Added subscription ended");
}

async fn pump_changed(
    mut subscription: FeedSubscription<FeedEvent>,
    forward: Arc<ForwardChangedItem>,
) {
    while let Some(event) = subscription.recv().await {
        match event {
            FeedEvent::Changed(record) => forward.execute(record.value, record.key),
            FeedEvent::Added(record) => {
                warn!(key = %record.key, "Ignoring added event on changed subscription")
            }
        }
    }
    debug!("Changed subscription ended");
}

/// Each request runs on its own task: the pump never waits on the feed, and
/// outcomes land in whatever order the feed resolves them.
async fn pump_requests(mut requests: mpsc::Receiver<StartRequest>, submit: Arc<SubmitStart>) {
    let mut in_flight = JoinSet::new();

    loop {
        tokio::select! {
            request = requests.recv() => match request {
                Some(request) => {
                    let submit = submit.clone();
                    in_flight.spawn(async move { submit.execute(request).await }.in_current_span());
                }
                None => break,
            },
            Some(_) = in_flight.join_next(), if !in_flight.is_empty() => {}
        }
    }

    debug!(pending = in_flight.len(), "Inbound port closed, draining submissions");
    while in_flight.join_next().await.is_some() {}
}

/// Handle on a started bridge.
///
/// Dropping the handle aborts the pumps, which releases the feed subscriptions.
pub struct RunningBridge {
    pumps: Vec<JoinHandle<()>>,
}

impl RunningBridge {
    /// Resolve once every input has ended: the feed closed its subscriptions
    /// and the UI closed its inbound port.
    ///
    /// Cancel-safe.
    pub async fn wait(&mut self) {
        while let Some(pump) = self.pumps.first_mut() {
            if let Err(err) = pump.await {
                if err.is_panic() {
                    warn!("Bridge pump panicked");
                }
            }
            self.pumps.remove(0);
        }
    }

    /// Stop the pumps and release the subscriptions before returning.
    pub async fn shutdown(mut self) {
        for pump in &self.pumps {
            pump.abort();
        }
        for pump in self.pumps.drain(..) {
            let _ = pump.await;
        }
        info!("Feed bridge stopped");
    }
}

impl Drop for RunningBridge {
    fn drop(&mut self) {
        for pump in &self.pumps {
            pump.abort();
        }
    }
}
