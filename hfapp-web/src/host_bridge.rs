use std::rc::Rc;

use hfapp::{
    AppHost, CommitOutcome, ConfigError, ConfigLifecycle, HostFuture,
    InstallationParameters,
};
use js_sys::{Function, Object, Promise, Reflect, JSON};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

#[wasm_bindgen]
extern "C" {
    /// `app` namespace of the SDK object the host console injects into the
    /// page as `window.hostSdk`.
    pub type HostApp;

    #[wasm_bindgen(method, js_name = getParameters)]
    fn get_parameters(this: &HostApp) -> Promise;

    #[wasm_bindgen(method, js_name = getCurrentState)]
    fn get_current_state(this: &HostApp) -> Promise;

    #[wasm_bindgen(method, js_name = setReady)]
    fn set_ready(this: &HostApp);

    #[wasm_bindgen(method, js_name = onConfigure)]
    fn on_configure(this: &HostApp, handler: &Function);
}

/// `AppHost` implementation backed by the host's JavaScript SDK. Parameter
/// records cross the boundary as JSON; the deployment state stays an opaque
/// `JsValue` end to end.
pub struct HostBridge {
    app: HostApp,
}

impl HostBridge {
    pub fn new(app: HostApp) -> Self {
        Self { app }
    }

    pub fn from_page() -> Result<Self, ConfigError> {
        let window = web_sys::window()
            .ok_or_else(|| ConfigError::Host("no window object".to_string()))?;
        let sdk = Reflect::get(window.as_ref(), &JsValue::from_str("hostSdk"))
            .map_err(js_error)?;
        if sdk.is_undefined() || sdk.is_null() {
            return Err(ConfigError::Host(
                "host sdk not present on the page".to_string(),
            ));
        }
        let app =
            Reflect::get(&sdk, &JsValue::from_str("app")).map_err(js_error)?;
        if app.is_undefined() || app.is_null() {
            return Err(ConfigError::Host(
                "host sdk has no app namespace".to_string(),
            ));
        }
        Ok(Self {
            app: app.unchecked_into(),
        })
    }

    pub fn app(&self) -> &HostApp {
        &self.app
    }
}

impl AppHost for HostBridge {
    type State = JsValue;

    fn get_parameters(&self) -> HostFuture<'_, Option<InstallationParameters>> {
        let promise = self.app.get_parameters();
        Box::pin(async move {
            let value = JsFuture::from(promise).await.map_err(js_error)?;
            parameters_from_js(&value)
        })
    }

    fn get_current_state(&self) -> HostFuture<'_, JsValue> {
        let promise = self.app.get_current_state();
        Box::pin(async move { JsFuture::from(promise).await.map_err(js_error) })
    }

    fn set_ready(&self) {
        self.app.set_ready();
    }
}

/// Arms the host's commit hook. Registration happens once, after load; the
/// host may invoke the handler any number of times afterwards, so the
/// closure is leaked for the remainder of the page's lifetime.
pub fn register_commit_handler(lifecycle: Rc<ConfigLifecycle<HostBridge>>) {
    let handler_lifecycle = lifecycle.clone();
    let handler = Closure::<dyn FnMut() -> Promise>::new(move || {
        let lifecycle = handler_lifecycle.clone();
        future_to_promise(async move {
            match lifecycle.commit().await {
                // `false` tells the host to keep the operator on the form
                Ok(CommitOutcome::Refused) => Ok(JsValue::FALSE),
                Ok(CommitOutcome::Accepted {
                    parameters,
                    target_state,
                }) => {
                    let result = Object::new();
                    Reflect::set(
                        &result,
                        &JsValue::from_str("parameters"),
                        &parameters_to_js(&parameters)?,
                    )?;
                    Reflect::set(
                        &result,
                        &JsValue::from_str("targetState"),
                        &target_state,
                    )?;
                    Ok(result.into())
                }
                Err(error) => Err(JsValue::from_str(&error.to_string())),
            }
        })
    });
    lifecycle
        .host()
        .app()
        .on_configure(handler.as_ref().unchecked_ref());
    handler.forget();
}

fn parameters_from_js(
    value: &JsValue,
) -> Result<Option<InstallationParameters>, ConfigError> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    let json = JSON::stringify(value).map_err(js_error)?;
    let json = String::from(json);
    Ok(Some(serde_json::from_str(&json)?))
}

fn parameters_to_js(
    parameters: &InstallationParameters,
) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(parameters)
        .map_err(|error| JsValue::from_str(&error.to_string()))?;
    JSON::parse(&json)
}

fn js_error(value: JsValue) -> ConfigError {
    ConfigError::Host(
        value
            .as_string()
            .unwrap_or_else(|| "Unknown error".to_string()),
    )
}
