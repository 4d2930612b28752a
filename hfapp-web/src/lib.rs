pub(crate) mod components;
pub(crate) mod host_bridge;

pub mod app;
