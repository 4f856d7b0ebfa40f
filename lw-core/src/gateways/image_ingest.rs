use async_trait::async_trait;
use lw_entities::{
    geo::OverlayBounds,
    image::{ImageRef, ImageUpload},
};

use super::Result;

/// Two-step ingest: the backend first processes the raster
/// and afterwards reports the rectangle it covers.
#[async_trait]
pub trait ImageIngestGateway {
    async fn process_image(&self, upload: ImageUpload) -> Result<ImageRef>;
    async fn overlay_bounds(&self) -> Result<OverlayBounds>;
}
