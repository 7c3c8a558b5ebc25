//! Use case for submitting a UI start request to the feed collection
//! 将 UI 的创建请求提交到集合的用例

use std::sync::Arc;

use fb_core::ports::FeedCollectionPort;
use fb_core::StartRequest;
use tracing::{error, info, info_span, Instrument};

/// Submits a start request to the collection's create API.
///
/// ## Behavior / 行为
/// - No local validation; the collection decides what it accepts
/// - Success logs the assigned key and sends nothing to the UI. The new item
///   reaches the UI later through the feed's own "added" notification
/// - Failure logs an error and is swallowed: no retry, no UI signal
///
/// The silence on failure is deliberate until the UI grows a failure port.
pub struct SubmitStart {
    feed: Arc<dyn FeedCollectionPort>,
}

impl SubmitStart {
    pub fn new(feed: Arc<dyn FeedCollectionPort>) -> Self {
        Self { feed }
    }

    pub async fn execute(&self, request: StartRequest) {
        let span = info_span!("usecase.submit_start.execute");

        async {
            info!(request = %serde_json::Value::Object(request.fields().clone()), "Submitting start request");

            match self.feed.create(request).await {
                Ok(key) => info!(key = %key, "Start request accepted"),
                Err(err) => error!(error = %err, "Start request failed"),
            }
        }
        .instrument(span)
        .await
    }
}
