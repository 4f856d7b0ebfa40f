use lw_entities::{
    geo::{GeoPoint, OverlayBounds},
    image::ImageRef,
};

/// Identifies a ground overlay that has been added to a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayHandle(u64);

impl OverlayHandle {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Imperative primitives of the map widget.
///
/// Clicks are delivered by the host as [`GeoPoint`]s, everything
/// else is requested through this trait.
pub trait MapWidget {
    fn place_marker(&mut self, point: GeoPoint);
    fn clear_marker(&mut self);
    fn pan_to(&mut self, point: GeoPoint);
    fn fit_bounds(&mut self, bounds: &OverlayBounds);
    fn add_ground_overlay(&mut self, image: &ImageRef, bounds: &OverlayBounds) -> OverlayHandle;
    fn remove_ground_overlay(&mut self, handle: OverlayHandle);
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroundOverlay {
    pub handle: OverlayHandle,
    pub bounds: OverlayBounds,
    pub image: ImageRef,
}

/// A map without any rendering that only keeps track of its state.
#[derive(Debug, Default)]
pub struct HeadlessMap {
    marker: Option<GeoPoint>,
    center: Option<GeoPoint>,
    viewport: Option<OverlayBounds>,
    overlays: Vec<GroundOverlay>,
    next_handle: u64,
    pan_count: usize,
}

impl HeadlessMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn marker(&self) -> Option<GeoPoint> {
        self.marker
    }

    pub const fn center(&self) -> Option<GeoPoint> {
        self.center
    }

    pub const fn viewport(&self) -> Option<OverlayBounds> {
        self.viewport
    }

    pub fn overlays(&self) -> &[GroundOverlay] {
        &self.overlays
    }

    /// Number of explicit pan requests.
    pub const fn pan_count(&self) -> usize {
        self.pan_count
    }
}

impl MapWidget for HeadlessMap {
    fn place_marker(&mut self, point: GeoPoint) {
        self.marker = Some(point);
    }

    fn clear_marker(&mut self) {
        self.marker = None;
    }

    fn pan_to(&mut self, point: GeoPoint) {
        self.pan_count += 1;
        self.center = Some(point);
    }

    fn fit_bounds(&mut self, bounds: &OverlayBounds) {
        self.viewport = Some(*bounds);
        self.center = bounds.center();
    }

    fn add_ground_overlay(&mut self, image: &ImageRef, bounds: &OverlayBounds) -> OverlayHandle {
        self.next_handle += 1;
        let handle = OverlayHandle::new(self.next_handle);
        self.overlays.push(GroundOverlay {
            handle,
            bounds: *bounds,
            image: image.clone(),
        });
        handle
    }

    fn remove_ground_overlay(&mut self, handle: OverlayHandle) {
        self.overlays.retain(|o| o.handle != handle);
    }
}
