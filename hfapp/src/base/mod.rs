pub mod host;
pub mod lifecycle;
pub mod params;
pub mod scripted_host;
