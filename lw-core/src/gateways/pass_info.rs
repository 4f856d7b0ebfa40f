use async_trait::async_trait;
use lw_entities::{geo::GeoPoint, pass::PassPrediction};

use super::Result;

#[async_trait]
pub trait PassInfoGateway {
    async fn next_passes(&self, point: GeoPoint) -> Result<PassPrediction>;
}
