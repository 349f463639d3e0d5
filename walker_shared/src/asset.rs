//! Asset contracts.
//!
//! Model loading is asynchronous and out of core scope; the frame loop only
//! needs the loaded node's bounding box to place the avatar on the floor.
//! Format parsing belongs to the [`ModelSource`] implementation.

use async_trait::async_trait;
use tracing::debug;

use crate::math::Vec3;

/// Root node of a loaded model with its axis-aligned bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelNode {
    pub name: String,
    pub bbox_min: Vec3,
    pub bbox_max: Vec3,
}

impl ModelNode {
    /// Vertical extent used for initial avatar placement.
    pub fn height(&self) -> f32 {
        self.bbox_max.y - self.bbox_min.y
    }
}

/// Supplies a model root node, asynchronously.
#[async_trait]
pub trait ModelSource: Send + Sync {
    async fn load_model(&self, path: &str) -> anyhow::Result<ModelNode>;
}

/// Serves a synthetic model of a fixed height. Stands in for a real loader
/// in demos and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedModelSource {
    pub height: f32,
}

#[async_trait]
impl ModelSource for FixedModelSource {
    async fn load_model(&self, path: &str) -> anyhow::Result<ModelNode> {
        debug!(path = %path, height = self.height, "Serving fixed model");
        Ok(ModelNode {
            name: "avatar".to_string(),
            bbox_min: Vec3::new(-0.25, 0.0, -0.25),
            bbox_max: Vec3::new(0.25, self.height, 0.25),
        })
    }
}

/// Always fails; exercises the load-never-completes path in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrokenModelSource;

#[async_trait]
impl ModelSource for BrokenModelSource {
    async fn load_model(&self, path: &str) -> anyhow::Result<ModelNode> {
        anyhow::bail!("model not available: {path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_source_reports_requested_height() -> anyhow::Result<()> {
        let source = FixedModelSource { height: 1.8 };
        let node = source.load_model("models/avatar.glb").await?;
        assert_eq!(node.height(), 1.8);
        Ok(())
    }

    #[tokio::test]
    async fn broken_source_errors() {
        let source = BrokenModelSource;
        assert!(source.load_model("models/avatar.glb").await.is_err());
    }
}
