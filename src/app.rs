use lw_core::{
    coordinates::CoordinateField,
    entities::*,
    gateways::{
        image_ingest::ImageIngestGateway, notify::NotificationGateway,
        pass_info::PassInfoGateway, scene_archive::SceneArchiveGateway,
    },
    map::MapWidget,
    session::{MapSession, PassLookup, SceneDownload},
    usecases,
    workflow::FieldUpdate,
    Result,
};
use time::{Date, OffsetDateTime};
use tokio::sync::Mutex;

/// Connects the map session with the backend.
///
/// The session lock is never held while waiting for the backend.
/// Responses that arrive after a newer request was issued are dropped
/// by the session.
pub struct App<M, B, N> {
    session: Mutex<MapSession<M>>,
    backend: B,
    notify: N,
}

impl<M, B, N> App<M, B, N>
where
    M: MapWidget + Send,
    B: PassInfoGateway + SceneArchiveGateway + ImageIngestGateway + Send + Sync,
    N: NotificationGateway + Send + Sync,
{
    pub fn new(session: MapSession<M>, backend: B, notify: N) -> Self {
        Self {
            session: Mutex::new(session),
            backend,
            notify,
        }
    }

    /// Read access to the current state.
    pub async fn with_session<R>(&self, f: impl FnOnce(&MapSession<M>) -> R) -> R {
        f(&*self.session.lock().await)
    }

    pub async fn select_on_map(&self, point: GeoPoint) -> bool {
        let lookup = self.session.lock().await.select_on_map(point);
        self.fetch_pass_info(lookup).await
    }

    pub async fn type_coordinate(&self, field: CoordinateField, raw_text: &str) -> bool {
        let lookup = self.session.lock().await.type_coordinate(field, raw_text);
        match lookup {
            Some(lookup) => self.fetch_pass_info(lookup).await,
            None => false,
        }
    }

    pub async fn open_popup_at_marker(&self) -> bool {
        let lookup = self.session.lock().await.open_popup_at_marker();
        match lookup {
            Some(lookup) => self.fetch_pass_info(lookup).await,
            None => false,
        }
    }

    /// Applies the raw value of a popup input.
    pub async fn update_field(&self, name: &str, value: &str) -> Result<()> {
        let update = FieldUpdate::parse(name, value)?;
        self.session.lock().await.update_field(update)
    }

    pub async fn submit(&self) -> Result<()> {
        self.submit_on(OffsetDateTime::now_utc().date()).await
    }

    /// Submits the popup as of `today`.
    ///
    /// Succeeds as soon as the session accepted the submission, even if
    /// downloading the historical scenes fails afterwards.
    pub async fn submit_on(&self, today: Date) -> Result<()> {
        let download = self.session.lock().await.submit(today, &self.notify)?;
        if let Some(download) = download {
            self.download_scenes(download).await;
        }
        Ok(())
    }

    pub async fn close_popup(&self) {
        self.session.lock().await.close_popup();
    }

    pub async fn reset(&self) {
        self.session.lock().await.reset();
    }

    /// Uploads an image and drapes the result over the map.
    ///
    /// Returns `Ok(false)` if a newer upload or clearing
    /// the overlay superseded this upload.
    pub async fn upload_image(&self, upload: ImageUpload) -> Result<bool> {
        let ticket = self.session.lock().await.begin_upload();
        log::debug!("Uploading {}", upload.file_name);
        let result = usecases::ingest_overlay_image(&self.backend, upload).await;
        self.session
            .lock()
            .await
            .apply_overlay(ticket, result)
            .inspect_err(|err| log::warn!("Unable to display the uploaded image: {err}"))
    }

    pub async fn clear_overlay(&self) -> bool {
        self.session.lock().await.clear_overlay()
    }

    async fn fetch_pass_info(&self, lookup: PassLookup) -> bool {
        let PassLookup { ticket, point } = lookup;
        let result = usecases::lookup_pass(&self.backend, point).await;
        self.session.lock().await.apply_pass_info(ticket, result)
    }

    async fn download_scenes(&self, download: SceneDownload) -> bool {
        let SceneDownload { ticket, query } = download;
        let result = usecases::download_scenes(&self.backend, &query).await;
        self.session
            .lock()
            .await
            .apply_downloaded_scenes(ticket, result)
    }
}
