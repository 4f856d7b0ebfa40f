mod download_scenes;
mod ingest_overlay_image;
mod lookup_pass;

#[cfg(test)]
mod tests;

pub use self::{download_scenes::*, ingest_overlay_image::*, lookup_pass::*};

mod prelude {
    pub use crate::{
        entities::*,
        gateways::{
            image_ingest::ImageIngestGateway, pass_info::PassInfoGateway,
            scene_archive::SceneArchiveGateway,
        },
        Error, Result,
    };
}
