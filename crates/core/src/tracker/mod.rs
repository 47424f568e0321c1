//! Storage facade - the single entry point used by UI and CLI layers.

mod sample_data;
mod tracker_service;
mod tracker_traits;


pub use tracker_service::TrackerService;
pub use tracker_traits::TrackerServiceTrait;
