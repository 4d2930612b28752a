pub(crate) mod base;
pub(crate) mod error;

pub use base::host::{AppHost, HostFuture};
pub use base::lifecycle::{CommitOutcome, ConfigLifecycle, LifecyclePhase};
pub use base::params::{
    InstallationParameters, ParameterField, ParameterStore,
    DEFAULT_IMAGE_MODEL_ID, DEFAULT_TEXT_MODEL_ID,
};
pub use base::scripted_host::{HostEvent, ScriptedHost};
pub use error::ConfigError;
