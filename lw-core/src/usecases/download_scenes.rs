use std::collections::HashSet;

use super::prelude::*;

pub async fn download_scenes<G>(gateway: &G, query: &SceneQuery) -> Result<Vec<SceneId>>
where
    G: SceneArchiveGateway + ?Sized,
{
    if query.end < query.start {
        return Err(Error::EndDateBeforeStart);
    }
    if query.max_cloud_cover > 100 {
        return Err(Error::InvalidCloudCover(query.max_cloud_cover));
    }
    log::debug!(
        "Downloading scenes of {} from {} to {}",
        query.point,
        query.start,
        query.end
    );
    let scenes = gateway.download_scenes(query).await?;
    let mut seen = HashSet::with_capacity(scenes.len());
    let scenes: Vec<_> = scenes
        .into_iter()
        .filter(|scene| seen.insert(scene.clone()))
        .collect();
    log::info!("{} scenes downloaded", scenes.len());
    Ok(scenes)
}
