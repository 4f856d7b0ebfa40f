use std::time::Duration;

use async_trait::async_trait;
use lw_boundary as json;
use lw_core::gateways::{
    self, image_ingest::ImageIngestGateway, pass_info::PassInfoGateway,
    scene_archive::SceneArchiveGateway,
};
use lw_entities::{
    geo::{GeoPoint, OverlayBounds},
    image::{ImageRef, ImageUpload},
    pass::{PassPrediction, SceneId, SceneQuery},
};
use reqwest::{header::CONTENT_TYPE, multipart, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

const DEFAULT_IMAGE_CONTENT_TYPE: &str = "application/octet-stream";

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("{message} ({status})")]
    Api { status: u16, message: String },

    #[error(transparent)]
    Conversion(#[from] json::ConversionError),
}

impl From<Error> for gateways::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Api { status, message } => Self::Api { status, message },
            Error::Conversion(err) => Self::Malformed(err.to_string()),
            Error::Http(err) if err.is_decode() => Self::Malformed(err.to_string()),
            Error::Http(err) => Self::Other(anyhow::Error::new(err)),
        }
    }
}

/// Client of the landsat-watch backend API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, request_timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(request_timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_landsat_pass(&self, point: GeoPoint) -> Result<PassPrediction> {
        let response = self
            .client
            .post(self.url("api/get-landsat-pass"))
            .json(&json::Coordinate::from(point))
            .send()
            .await?;
        let pass: json::LandsatPass = into_json(response).await?;
        Ok(pass.try_into()?)
    }

    async fn download_landsat(&self, query: SceneQuery) -> Result<Vec<SceneId>> {
        let response = self
            .client
            .post(self.url("api/download-landsat"))
            .json(&json::DownloadLandsat::from(query))
            .send()
            .await?;
        let scenes: json::DownloadedScenes = into_json(response).await?;
        Ok(scenes.into())
    }

    async fn post_image(&self, upload: ImageUpload) -> Result<ImageRef> {
        let ImageUpload {
            file_name,
            content_type,
            bytes,
        } = upload;
        let mut part = multipart::Part::bytes(bytes).file_name(file_name);
        if let Some(mime) = content_type {
            part = part.mime_str(&mime)?;
        }
        let form = multipart::Form::new().part("file", part);
        let response = self
            .client
            .post(self.url("process-image"))
            .multipart(form)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(DEFAULT_IMAGE_CONTENT_TYPE)
            .to_owned();
        let bytes = response.bytes().await?;
        log::debug!("Received processed image ({} bytes)", bytes.len());
        Ok(ImageRef::new(content_type, bytes.to_vec()))
    }

    async fn get_coordinates(&self) -> Result<OverlayBounds> {
        let response = self.client.get(self.url("coordinates")).send().await?;
        let coordinates: json::OverlayCoordinates = into_json(response).await?;
        Ok(coordinates.try_into()?)
    }
}

#[async_trait]
impl PassInfoGateway for HttpBackend {
    async fn next_passes(&self, point: GeoPoint) -> gateways::Result<PassPrediction> {
        Ok(self.get_landsat_pass(point).await?)
    }
}

#[async_trait]
impl SceneArchiveGateway for HttpBackend {
    async fn download_scenes(&self, query: &SceneQuery) -> gateways::Result<Vec<SceneId>> {
        Ok(self.download_landsat(*query).await?)
    }
}

#[async_trait]
impl ImageIngestGateway for HttpBackend {
    async fn process_image(&self, upload: ImageUpload) -> gateways::Result<ImageRef> {
        Ok(self.post_image(upload).await?)
    }

    async fn overlay_bounds(&self) -> gateways::Result<OverlayBounds> {
        Ok(self.get_coordinates().await?)
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await?;
    Err(api_error(status, &body))
}

async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(ensure_success(response).await?.json().await?)
}

fn api_error(status: StatusCode, body: &str) -> Error {
    let message = match serde_json::from_str::<json::Error>(body) {
        Ok(err) => err.message,
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_owned(),
        Err(_) => body.trim().to_owned(),
    };
    Error::Api {
        status: status.as_u16(),
        message,
    }
}
