use std::future::Future;
use std::pin::Pin;

use super::params::InstallationParameters;
use crate::error::ConfigError;

pub type HostFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, ConfigError>> + 'a>>;

/// Capability set the surrounding platform exposes to its extensions.
///
/// The screen is a pure consumer of these hooks: parameters are fetched once
/// at startup, the readiness signal dismisses the host's loading indicator,
/// and the deployment state is fetched per commit and forwarded unchanged.
pub trait AppHost {
    /// Opaque deployment/target state; passed through without inspection.
    type State;

    fn get_parameters(&self) -> HostFuture<'_, Option<InstallationParameters>>;

    fn get_current_state(&self) -> HostFuture<'_, Self::State>;

    fn set_ready(&self);
}
