//! The interactive state of one map view.
//!
//! Every user gesture is applied synchronously. Gestures that need the
//! backend hand out a ticketed request; the response is applied together
//! with its ticket and silently dropped if a newer request superseded it.

use lw_entities::{
    geo::GeoPoint,
    image::GeoreferencedImage,
    pass::{PassPrediction, SceneId, SceneQuery},
};
use time::Date;

use crate::{
    coordinates::{CoordinateField, CoordinateStore},
    gateways::notify::{NotificationEvent, NotificationGateway},
    map::MapWidget,
    overlay::{ActiveOverlay, OverlayGeoreferencer},
    revisit::DEFAULT_REVISIT_CYCLE_DAYS,
    workflow::{FieldUpdate, NotificationWorkflow, WorkflowState},
    Result,
};

pub const DEFAULT_MAX_CLOUD_COVER: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    pub default_center: GeoPoint,
    pub revisit_cycle_days: i64,
    /// Percentage
    pub max_cloud_cover: u8,
}

impl SessionSettings {
    pub const fn new(default_center: GeoPoint) -> Self {
        Self {
            default_center,
            revisit_cycle_days: DEFAULT_REVISIT_CYCLE_DAYS,
            max_cloud_cover: DEFAULT_MAX_CLOUD_COVER,
        }
    }
}

macro_rules! ticket {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(u64);

        impl $name {
            pub const fn generation(self) -> u64 {
                self.0
            }
        }
    };
}

ticket!(
    /// Issued for every pass info lookup.
    PassTicket
);
ticket!(
    /// Issued for every historical scene download.
    DownloadTicket
);
ticket!(
    /// Issued for every image upload.
    UploadTicket
);

#[derive(Debug, Default)]
struct Generation(u64);

impl Generation {
    fn bump(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    const fn is_current(&self, generation: u64) -> bool {
        self.0 == generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassLookup {
    pub ticket: PassTicket,
    pub point: GeoPoint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneDownload {
    pub ticket: DownloadTicket,
    pub query: SceneQuery,
}

#[derive(Debug)]
pub struct MapSession<M> {
    map: M,
    settings: SessionSettings,
    coordinates: CoordinateStore,
    overlay: OverlayGeoreferencer,
    workflow: NotificationWorkflow,
    center: GeoPoint,
    pass_info: Option<PassPrediction>,
    history: Option<Vec<Date>>,
    scenes: Vec<SceneId>,
    pass_generation: Generation,
    download_generation: Generation,
    upload_generation: Generation,
}

impl<M> MapSession<M>
where
    M: MapWidget,
{
    /// Takes over `map` and centers it on the default location.
    pub fn new(mut map: M, settings: SessionSettings) -> Self {
        map.pan_to(settings.default_center);
        Self {
            map,
            settings,
            coordinates: CoordinateStore::new(settings.default_center),
            overlay: OverlayGeoreferencer::new(),
            workflow: NotificationWorkflow::new(),
            center: settings.default_center,
            pass_info: None,
            history: None,
            scenes: Vec::new(),
            pass_generation: Generation::default(),
            download_generation: Generation::default(),
            upload_generation: Generation::default(),
        }
    }

    pub const fn map(&self) -> &M {
        &self.map
    }

    pub const fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub const fn coordinates(&self) -> &CoordinateStore {
        &self.coordinates
    }

    pub const fn marker(&self) -> Option<GeoPoint> {
        self.coordinates.marker()
    }

    /// The last location the map was explicitly moved to.
    pub const fn center(&self) -> GeoPoint {
        self.center
    }

    pub const fn active_overlay(&self) -> Option<&ActiveOverlay> {
        self.overlay.active()
    }

    pub const fn workflow_state(&self) -> &WorkflowState {
        self.workflow.state()
    }

    pub const fn pass_info(&self) -> Option<&PassPrediction> {
        self.pass_info.as_ref()
    }

    pub fn history(&self) -> Option<&[Date]> {
        self.history.as_deref()
    }

    pub fn scenes(&self) -> &[SceneId] {
        &self.scenes
    }

    pub fn select_on_map(&mut self, point: GeoPoint) -> PassLookup {
        self.coordinates.set_from_map_click(point, &mut self.map);
        self.workflow.open_at(point);
        self.new_selection(point)
    }

    /// Returns a lookup only if the typed text moved the marker.
    pub fn type_coordinate(&mut self, field: CoordinateField, raw_text: &str) -> Option<PassLookup> {
        let point = self
            .coordinates
            .set_from_typed_field(field, raw_text, &mut self.map)?;
        self.center = point;
        self.workflow.move_draft_to(point);
        Some(self.new_selection(point))
    }

    /// Opens the popup at the current marker, if there is one.
    pub fn open_popup_at_marker(&mut self) -> Option<PassLookup> {
        let Some(point) = self.coordinates.marker() else {
            log::debug!("No marker to open the notification popup at");
            return None;
        };
        self.workflow.open_at(point);
        Some(self.new_selection(point))
    }

    pub fn update_field(&mut self, update: FieldUpdate) -> Result<()> {
        self.workflow.update_field(update)
    }

    /// Submits the popup.
    ///
    /// The subscription is reported as accepted right away. If historical
    /// data was requested with an anchor date, the matching scene download
    /// is returned.
    pub fn submit<N>(&mut self, today: Date, notify: &N) -> Result<Option<SceneDownload>>
    where
        N: NotificationGateway + ?Sized,
    {
        let submission = self
            .workflow
            .submit(today, self.settings.revisit_cycle_days)?;
        self.history = submission.history().map(<[Date]>::to_vec);
        let config = submission.config();
        let alert_at = self.pass_info.as_ref().and_then(|pass| {
            pass.soonest()
                .checked_sub(config.advance_notice.to_duration())
        });
        notify.notify(NotificationEvent::SubscriptionRequested { config, alert_at });

        if !config.show_history {
            return Ok(None);
        }
        let Some(start) = config.history_anchor_date else {
            return Ok(None);
        };
        if start > today {
            log::debug!("No historical scenes before {start}");
            return Ok(None);
        }
        let query = SceneQuery {
            point: config.point,
            start,
            end: today,
            max_cloud_cover: self.settings.max_cloud_cover,
        };
        notify.notify(NotificationEvent::HistoryRequested { query: &query });
        let ticket = DownloadTicket(self.download_generation.bump());
        Ok(Some(SceneDownload { ticket, query }))
    }

    pub fn close_popup(&mut self) {
        self.workflow.close();
    }

    /// Clears the selection and everything derived from it.
    ///
    /// The image overlay stays.
    pub fn reset(&mut self) {
        self.coordinates.reset(&mut self.map);
        self.center = self.settings.default_center;
        self.workflow.close();
        self.pass_info = None;
        self.history = None;
        self.scenes.clear();
        self.pass_generation.bump();
        self.download_generation.bump();
    }

    /// Returns `false` if the response was superseded.
    pub fn apply_pass_info(
        &mut self,
        ticket: PassTicket,
        result: Result<PassPrediction>,
    ) -> bool {
        if !self.pass_generation.is_current(ticket.0) {
            log::debug!("Discarding stale pass info #{}", ticket.generation());
            return false;
        }
        self.pass_info = match result {
            Ok(prediction) => Some(prediction),
            Err(err) => {
                log::warn!("Unable to fetch pass info: {err}");
                None
            }
        };
        true
    }

    /// Returns `false` if the response was superseded.
    pub fn apply_downloaded_scenes(
        &mut self,
        ticket: DownloadTicket,
        result: Result<Vec<SceneId>>,
    ) -> bool {
        if !self.download_generation.is_current(ticket.0) {
            log::debug!("Discarding stale scene download #{}", ticket.generation());
            return false;
        }
        self.scenes = match result {
            Ok(scenes) => {
                log::info!("Downloaded {} historical scenes", scenes.len());
                scenes
            }
            Err(err) => {
                log::warn!("Unable to download historical scenes: {err}");
                Vec::new()
            }
        };
        true
    }

    pub fn begin_upload(&mut self) -> UploadTicket {
        UploadTicket(self.upload_generation.bump())
    }

    /// Attaches the georeferenced image of the latest upload.
    ///
    /// Returns `Ok(false)` if the upload was superseded. A failed
    /// upload leaves the current overlay in place.
    pub fn apply_overlay(
        &mut self,
        ticket: UploadTicket,
        result: Result<GeoreferencedImage>,
    ) -> Result<bool> {
        if !self.upload_generation.is_current(ticket.0) {
            log::debug!("Discarding stale upload #{}", ticket.generation());
            return Ok(false);
        }
        let GeoreferencedImage { image, bounds } = result?;
        self.overlay.attach(&mut self.map, &image, bounds)?;
        if let Some(center) = bounds.center() {
            self.center = center;
        }
        Ok(true)
    }

    /// Removes the overlay and ignores pending uploads.
    pub fn clear_overlay(&mut self) -> bool {
        self.upload_generation.bump();
        self.overlay.detach(&mut self.map).is_some()
    }

    /// Supersedes all lookups and downloads of the previous selection.
    fn new_selection(&mut self, point: GeoPoint) -> PassLookup {
        self.pass_info = None;
        self.download_generation.bump();
        let ticket = PassTicket(self.pass_generation.bump());
        log::debug!("Select {point} (#{})", ticket.generation());
        PassLookup { ticket, point }
    }
}
