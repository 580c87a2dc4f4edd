//! Data contracts shared between the hosting page and the frontend.
//!
//! Everything here is plain serde data: the sales records injected by the
//! server and the page configuration.

pub mod dashboards;
pub mod shared;
