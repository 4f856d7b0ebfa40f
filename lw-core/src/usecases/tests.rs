use super::{prelude::*, *};
use crate::gateways;
use async_trait::async_trait;
use lw_entities::builders::*;
use time::macros::date;

#[derive(Default)]
struct MockBackend {
    prediction: Option<PassPrediction>,
    scenes: Vec<SceneId>,
    image: Option<ImageRef>,
    bounds: Option<OverlayBounds>,
}

fn unavailable() -> gateways::Error {
    gateways::Error::Api {
        status: 503,
        message: "unavailable".into(),
    }
}

#[async_trait]
impl PassInfoGateway for MockBackend {
    async fn next_passes(&self, _: GeoPoint) -> gateways::Result<PassPrediction> {
        self.prediction.clone().ok_or_else(unavailable)
    }
}

#[async_trait]
impl SceneArchiveGateway for MockBackend {
    async fn download_scenes(&self, _: &SceneQuery) -> gateways::Result<Vec<SceneId>> {
        Ok(self.scenes.clone())
    }
}

#[async_trait]
impl ImageIngestGateway for MockBackend {
    async fn process_image(&self, _: ImageUpload) -> gateways::Result<ImageRef> {
        self.image.clone().ok_or_else(unavailable)
    }
    async fn overlay_bounds(&self) -> gateways::Result<OverlayBounds> {
        self.bounds.ok_or_else(unavailable)
    }
}

fn point() -> GeoPoint {
    GeoPoint::try_from_lat_lng_deg(44.032052, -65.488756).unwrap()
}

fn upload() -> ImageUpload {
    ImageUpload {
        file_name: "field.tif".into(),
        content_type: Some("image/tiff".into()),
        bytes: vec![1, 2, 3],
    }
}

#[tokio::test]
async fn lookup_pass_returns_prediction() {
    let backend = MockBackend {
        prediction: Some(PassPrediction::build().path_row(10, 33).finish()),
        ..Default::default()
    };
    let prediction = lookup_pass(&backend, point()).await.unwrap();
    assert_eq!((prediction.path, prediction.row), (10, 33));
}

#[tokio::test]
async fn lookup_pass_rejects_impossible_tiles() {
    let backend = MockBackend {
        prediction: Some(PassPrediction::build().path_row(0, 33).finish()),
        ..Default::default()
    };
    assert!(matches!(
        lookup_pass(&backend, point()).await,
        Err(Error::Gateway(gateways::Error::Malformed(_)))
    ));
    let backend = MockBackend {
        prediction: Some(PassPrediction::build().path_row(10, 249).finish()),
        ..Default::default()
    };
    assert!(lookup_pass(&backend, point()).await.is_err());
}

#[tokio::test]
async fn lookup_pass_propagates_network_errors() {
    let backend = MockBackend::default();
    assert!(matches!(
        lookup_pass(&backend, point()).await,
        Err(Error::Gateway(gateways::Error::Api { status: 503, .. }))
    ));
}

#[tokio::test]
async fn download_scenes_validates_query() {
    let backend = MockBackend::default();
    let mut query = SceneQuery {
        point: point(),
        start: date!(2022 - 12 - 31),
        end: date!(2022 - 01 - 01),
        max_cloud_cover: 10,
    };
    assert!(matches!(
        download_scenes(&backend, &query).await,
        Err(Error::EndDateBeforeStart)
    ));
    query.start = date!(2022 - 01 - 01);
    query.end = date!(2022 - 12 - 31);
    query.max_cloud_cover = 101;
    assert!(matches!(
        download_scenes(&backend, &query).await,
        Err(Error::InvalidCloudCover(101))
    ));
}

#[tokio::test]
async fn download_scenes_removes_duplicates() {
    let backend = MockBackend {
        scenes: vec!["LC08_A".into(), "LC09_B".into(), "LC08_A".into()],
        ..Default::default()
    };
    let query = SceneQuery {
        point: point(),
        start: date!(2022 - 01 - 01),
        end: date!(2022 - 12 - 31),
        max_cloud_cover: 10,
    };
    let scenes = download_scenes(&backend, &query).await.unwrap();
    assert_eq!(scenes, vec![SceneId::from("LC08_A"), SceneId::from("LC09_B")]);
}

#[tokio::test]
async fn ingest_image_with_bounds() {
    let bounds = OverlayBounds::new(44.0, -66.0, 45.0, -65.0).unwrap();
    let backend = MockBackend {
        image: Some(ImageRef::new("image/png", vec![9, 9])),
        bounds: Some(bounds),
        ..Default::default()
    };
    let georeferenced = ingest_overlay_image(&backend, upload()).await.unwrap();
    assert_eq!(georeferenced.bounds, bounds);
    assert_eq!(georeferenced.image.content_type, "image/png");
}

#[tokio::test]
async fn ingest_image_rejects_empty_upload() {
    let backend = MockBackend::default();
    let mut empty = upload();
    empty.bytes.clear();
    assert!(matches!(
        ingest_overlay_image(&backend, empty).await,
        Err(Error::EmptyImage)
    ));
}

#[tokio::test]
async fn ingest_image_rejects_invalid_bounds() {
    let backend = MockBackend {
        image: Some(ImageRef::new("image/png", vec![9, 9])),
        bounds: Some(OverlayBounds::new_unchecked(45.0, -66.0, 44.0, -65.0)),
        ..Default::default()
    };
    assert!(matches!(
        ingest_overlay_image(&backend, upload()).await,
        Err(Error::InvalidBounds)
    ));
}

#[tokio::test]
async fn ingest_image_without_georeference() {
    let backend = MockBackend {
        image: Some(ImageRef::new("image/png", vec![9, 9])),
        ..Default::default()
    };
    assert!(matches!(
        ingest_overlay_image(&backend, upload()).await,
        Err(Error::Gateway(_))
    ));
}
