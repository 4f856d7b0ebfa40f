//! Adapters that connect the landsat-watch core to the outside world.

mod backend;
mod notify;

pub use self::{
    backend::{Error, HttpBackend},
    notify::Notify,
};
