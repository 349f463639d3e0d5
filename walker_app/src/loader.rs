//! Asset-load task wiring.
//!
//! The model loads on a spawned task and publishes once through a oneshot
//! channel; the frame loop polls the channel between ticks. A failed load
//! drops the sender, which the loop observes as a closed channel and keeps
//! running without an avatar.

use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::warn;

use walker_shared::asset::{ModelNode, ModelSource};

/// Starts loading the model in the background and returns the receiving end
/// of the one-shot publish.
pub fn spawn_model_load(
    source: Arc<dyn ModelSource>,
    path: String,
) -> oneshot::Receiver<ModelNode> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        match source.load_model(&path).await {
            Ok(node) => {
                // The loop may have shut down already; nothing to do then.
                let _ = tx.send(node);
            }
            Err(e) => {
                warn!(error = %e, path = %path, "Model load failed");
            }
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use walker_shared::asset::{BrokenModelSource, FixedModelSource};

    #[tokio::test]
    async fn publishes_loaded_node_once() -> anyhow::Result<()> {
        let rx = spawn_model_load(
            Arc::new(FixedModelSource { height: 1.8 }),
            "models/avatar.glb".to_string(),
        );
        let node = rx.await?;
        assert_eq!(node.height(), 1.8);
        Ok(())
    }

    #[tokio::test]
    async fn failed_load_closes_the_channel() {
        let rx = spawn_model_load(
            Arc::new(BrokenModelSource),
            "models/missing.glb".to_string(),
        );
        assert!(rx.await.is_err());
    }
}
