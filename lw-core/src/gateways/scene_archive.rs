use async_trait::async_trait;
use lw_entities::pass::{SceneId, SceneQuery};

use super::Result;

#[async_trait]
pub trait SceneArchiveGateway {
    async fn download_scenes(&self, query: &SceneQuery) -> Result<Vec<SceneId>>;
}
