use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};

use super::host::AppHost;
use super::params::{InstallationParameters, ParameterStore};
use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecyclePhase {
    Loading,
    Ready,
}

/// Result of a host-initiated commit. `Refused` is a bare signal; the host
/// keeps the operator on the form and renders its own messaging.
#[derive(Clone, Debug, PartialEq)]
pub enum CommitOutcome<S> {
    Refused,
    Accepted {
        parameters: InstallationParameters,
        target_state: S,
    },
}

/// Bridges the parameter store to the host's configuration lifecycle.
///
/// The store is shared with the input layer through `Rc<RefCell<..>>`; all
/// access is serialized by the single-threaded event loop, so no further
/// synchronization is involved.
pub struct ConfigLifecycle<H: AppHost> {
    host: H,
    store: Rc<RefCell<ParameterStore>>,
    phase: LifecyclePhase,
}

impl<H: AppHost> ConfigLifecycle<H> {
    pub fn new(host: H, store: Rc<RefCell<ParameterStore>>) -> Self {
        Self {
            host,
            store,
            phase: LifecyclePhase::Loading,
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn store(&self) -> Rc<RefCell<ParameterStore>> {
        self.store.clone()
    }

    /// Fetches previously saved parameters, seeds the store and signals
    /// readiness — strictly in that order, so the host never dismisses its
    /// loading indicator while the form still shows stale defaults.
    ///
    /// A stored record replaces the store wholesale; edits made before the
    /// fetch resolves are overwritten. Host failures propagate unretried.
    pub async fn load(&mut self) -> Result<(), ConfigError> {
        let saved = self.host.get_parameters().await?;
        match &saved {
            Some(_) => info!("Loaded previously saved parameters"),
            None => info!("No saved parameters found, keeping defaults"),
        }
        self.store.borrow_mut().load_from(saved);
        self.host.set_ready();
        self.phase = LifecyclePhase::Ready;
        Ok(())
    }

    /// Handles a host-initiated commit request. Callable any number of
    /// times; each call re-snapshots the store and re-fetches the current
    /// deployment state.
    ///
    /// Validation is presence-only: the conjunction of three non-emptiness
    /// checks. Credential or model-id format is not this layer's concern.
    pub async fn commit(&self) -> Result<CommitOutcome<H::State>, ConfigError> {
        let parameters = self.store.borrow().snapshot();
        if !parameters.is_complete() {
            warn!("Commit refused: one or more required fields are empty");
            return Ok(CommitOutcome::Refused);
        }

        let target_state = self.host.get_current_state().await?;
        info!("Commit accepted");
        Ok(CommitOutcome::Accepted {
            parameters,
            target_state,
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::base::params::{
        ParameterField, DEFAULT_IMAGE_MODEL_ID, DEFAULT_TEXT_MODEL_ID,
    };
    use crate::base::scripted_host::{HostEvent, ScriptedHost};

    fn new_lifecycle(host: ScriptedHost) -> ConfigLifecycle<ScriptedHost> {
        ConfigLifecycle::new(host, Rc::new(RefCell::new(ParameterStore::new())))
    }

    fn saved_parameters() -> InstallationParameters {
        InstallationParameters {
            api_key: Some("hf_abc".to_string()),
            text_model_id: Some("m1".to_string()),
            image_model_id: Some("m2".to_string()),
        }
    }

    #[test]
    fn test_commit_without_api_key_is_refused() {
        let host = ScriptedHost::new();
        host.push_state("installed");
        let mut lifecycle = new_lifecycle(host);

        block_on(lifecycle.load()).unwrap();
        let outcome = block_on(lifecycle.commit()).unwrap();

        assert_eq!(outcome, CommitOutcome::Refused);
        // refusal short-circuits before the host is asked for its state
        assert!(!lifecycle
            .host()
            .events()
            .contains(&HostEvent::StateFetched));
    }

    #[test]
    fn test_load_applies_saved_parameters_before_ready() {
        let host = ScriptedHost::new().with_saved(saved_parameters());
        let mut lifecycle = new_lifecycle(host);

        block_on(lifecycle.load()).unwrap();

        assert_eq!(lifecycle.store().borrow().snapshot(), saved_parameters());
        assert_eq!(lifecycle.phase(), LifecyclePhase::Ready);
        assert_eq!(
            lifecycle.host().events(),
            vec![HostEvent::ParametersFetched, HostEvent::Ready]
        );
    }

    #[test]
    fn test_commit_carries_snapshot_and_target_state() {
        let host = ScriptedHost::new();
        host.push_state("env-main");
        let mut lifecycle = new_lifecycle(host);

        block_on(lifecycle.load()).unwrap();
        lifecycle
            .store()
            .borrow_mut()
            .set_field(ParameterField::ApiKey, "hf_xyz");

        let outcome = block_on(lifecycle.commit()).unwrap();
        assert_eq!(outcome, CommitOutcome::Accepted {
            parameters: InstallationParameters {
                api_key: Some("hf_xyz".to_string()),
                text_model_id: Some(DEFAULT_TEXT_MODEL_ID.to_string()),
                image_model_id: Some(DEFAULT_IMAGE_MODEL_ID.to_string()),
            },
            target_state: "env-main".to_string(),
        });
    }

    #[test]
    fn test_each_empty_field_independently_refuses() {
        for field in ParameterField::ALL {
            let host = ScriptedHost::new().with_saved(saved_parameters());
            host.push_state("installed");
            let mut lifecycle = new_lifecycle(host);

            block_on(lifecycle.load()).unwrap();
            lifecycle.store().borrow_mut().set_field(field, "");

            let outcome = block_on(lifecycle.commit()).unwrap();
            assert_eq!(outcome, CommitOutcome::Refused, "{} empty", field.as_str());
        }
    }

    #[test]
    fn test_target_state_is_fetched_per_commit() {
        let host = ScriptedHost::new().with_saved(saved_parameters());
        host.push_state("state-1");
        host.push_state("state-2");
        let mut lifecycle = new_lifecycle(host);

        block_on(lifecycle.load()).unwrap();

        let first = block_on(lifecycle.commit()).unwrap();
        let second = block_on(lifecycle.commit()).unwrap();

        match (first, second) {
            (
                CommitOutcome::Accepted {
                    target_state: state_1,
                    ..
                },
                CommitOutcome::Accepted {
                    target_state: state_2,
                    ..
                },
            ) => {
                assert_eq!(state_1, "state-1");
                assert_eq!(state_2, "state-2");
            }
            other => panic!("expected two accepted commits, got {:?}", other),
        }
    }

    #[test]
    fn test_commit_preserves_values_verbatim() {
        let host = ScriptedHost::new();
        host.push_state("installed");
        let mut lifecycle = new_lifecycle(host);

        block_on(lifecycle.load()).unwrap();
        lifecycle
            .store()
            .borrow_mut()
            .set_field(ParameterField::ApiKey, " hf_padded ");

        match block_on(lifecycle.commit()).unwrap() {
            CommitOutcome::Accepted { parameters, .. } => {
                assert_eq!(parameters.api_key.as_deref(), Some(" hf_padded "));
            }
            CommitOutcome::Refused => panic!("expected acceptance"),
        }
    }

    #[test]
    fn test_load_failure_propagates_and_stays_loading() {
        let host = ScriptedHost::new().with_parameters_error("sdk unavailable");
        let mut lifecycle = new_lifecycle(host);

        let result = block_on(lifecycle.load());
        assert!(matches!(result, Err(ConfigError::Host(_))));
        assert_eq!(lifecycle.phase(), LifecyclePhase::Loading);
        assert!(!lifecycle.host().events().contains(&HostEvent::Ready));
    }

    #[test]
    fn test_state_failure_propagates() {
        // no scripted state: the host call fails, and the failure is
        // surfaced rather than turned into a refusal
        let host = ScriptedHost::new().with_saved(saved_parameters());
        let mut lifecycle = new_lifecycle(host);

        block_on(lifecycle.load()).unwrap();
        let result = block_on(lifecycle.commit());
        assert!(matches!(result, Err(ConfigError::Host(_))));
    }

    #[test]
    fn test_edits_during_loading_are_overwritten() {
        // known race, preserved on purpose: the fetch result replaces the
        // store wholesale even if the operator already typed something
        let host = ScriptedHost::new().with_saved(saved_parameters());
        let mut lifecycle = new_lifecycle(host);

        lifecycle
            .store()
            .borrow_mut()
            .set_field(ParameterField::ApiKey, "hf_typed_too_early");
        block_on(lifecycle.load()).unwrap();

        assert_eq!(
            lifecycle.store().borrow().field(ParameterField::ApiKey),
            "hf_abc"
        );
    }
}
