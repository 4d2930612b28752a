use std::cell::RefCell;
use std::collections::VecDeque;

use super::host::{AppHost, HostFuture};
use super::params::InstallationParameters;
use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    ParametersFetched,
    Ready,
    StateFetched,
}

/// Scripted stand-in for the host SDK.
///
/// Replays pre-seeded results and records every call, so lifecycle ordering
/// (fetch before ready, state fetched per commit) can be asserted without a
/// real host environment. Deployment states are a queue: consecutive commits
/// may legitimately observe different values.
#[derive(Debug, Default)]
pub struct ScriptedHost {
    saved: RefCell<Option<InstallationParameters>>,
    parameters_error: RefCell<Option<String>>,
    states: RefCell<VecDeque<String>>,
    events: RefCell<Vec<HostEvent>>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_saved(self, parameters: InstallationParameters) -> Self {
        *self.saved.borrow_mut() = Some(parameters);
        self
    }

    pub fn with_parameters_error<S: Into<String>>(self, message: S) -> Self {
        *self.parameters_error.borrow_mut() = Some(message.into());
        self
    }

    pub fn push_state<S: Into<String>>(&self, state: S) {
        self.states.borrow_mut().push_back(state.into());
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.events.borrow().clone()
    }
}

impl AppHost for ScriptedHost {
    type State = String;

    fn get_parameters(&self) -> HostFuture<'_, Option<InstallationParameters>> {
        self.events.borrow_mut().push(HostEvent::ParametersFetched);
        let result = match self.parameters_error.borrow().clone() {
            Some(message) => Err(ConfigError::Host(message)),
            None => Ok(self.saved.borrow().clone()),
        };
        Box::pin(async move { result })
    }

    fn get_current_state(&self) -> HostFuture<'_, String> {
        self.events.borrow_mut().push(HostEvent::StateFetched);
        let state = self.states.borrow_mut().pop_front().ok_or_else(|| {
            ConfigError::Host("no deployment state scripted".to_string())
        });
        Box::pin(async move { state })
    }

    fn set_ready(&self) {
        self.events.borrow_mut().push(HostEvent::Ready);
    }
}
