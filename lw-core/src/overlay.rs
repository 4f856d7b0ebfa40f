use lw_entities::{geo::OverlayBounds, image::ImageRef};

use crate::{
    map::{MapWidget, OverlayHandle},
    Error, Result,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveOverlay {
    pub handle: OverlayHandle,
    pub bounds: OverlayBounds,
}

/// Owns the single overlay slot of a map.
#[derive(Debug, Default)]
pub struct OverlayGeoreferencer {
    active: Option<ActiveOverlay>,
}

impl OverlayGeoreferencer {
    pub const fn new() -> Self {
        Self { active: None }
    }

    pub const fn active(&self) -> Option<&ActiveOverlay> {
        self.active.as_ref()
    }

    /// Drapes `image` over `bounds`, replacing the current overlay,
    /// and fits the viewport to the new overlay.
    ///
    /// Invalid bounds leave the map untouched.
    pub fn attach<M>(
        &mut self,
        map: &mut M,
        image: &ImageRef,
        bounds: OverlayBounds,
    ) -> Result<OverlayHandle>
    where
        M: MapWidget + ?Sized,
    {
        if !bounds.is_valid() {
            log::warn!("Refusing to attach overlay with invalid bounds {bounds}");
            return Err(Error::InvalidBounds);
        }
        if let Some(previous) = self.detach(map) {
            log::debug!("Replacing overlay #{}", previous.handle.id());
        }
        let handle = map.add_ground_overlay(image, &bounds);
        map.fit_bounds(&bounds);
        self.active = Some(ActiveOverlay { handle, bounds });
        Ok(handle)
    }

    pub fn detach<M>(&mut self, map: &mut M) -> Option<ActiveOverlay>
    where
        M: MapWidget + ?Sized,
    {
        let active = self.active.take()?;
        map.remove_ground_overlay(active.handle);
        Some(active)
    }
}
