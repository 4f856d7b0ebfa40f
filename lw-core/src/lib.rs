//! Interactive geospatial state of a landsat-watch map view.
//!
//! All mutations of the map go through [`coordinates::CoordinateStore`]
//! (marker and panning) and [`overlay::OverlayGeoreferencer`] (ground
//! overlay and viewport fitting). [`session::MapSession`] ties both
//! together with the notification workflow.

pub mod coordinates;
pub mod error;
pub mod gateways;
pub mod map;
pub mod overlay;
pub mod revisit;
pub mod session;
pub mod usecases;
pub mod workflow;

pub use self::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

pub mod entities {
    pub use lw_entities::{date::*, geo::*, image::*, notification::*, pass::*};
}
