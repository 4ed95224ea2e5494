//! HTTP inbound adapter exposing the catalogue and placement endpoints.

pub mod cache_control;
pub mod catalogue;
pub mod error;
pub mod health;
pub mod placements;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
