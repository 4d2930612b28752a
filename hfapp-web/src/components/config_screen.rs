use std::cell::RefCell;
use std::rc::Rc;

use hfapp::{
    ConfigLifecycle, ParameterField, ParameterStore, DEFAULT_IMAGE_MODEL_ID,
    DEFAULT_TEXT_MODEL_ID,
};
use leptos::*;

use super::TextInputView;
use crate::host_bridge::{register_commit_handler, HostBridge};

/// Settings form for the Hugging Face integration.
///
/// On mount, previously saved parameters are fetched from the host and the
/// host is signaled ready; afterwards every keystroke writes straight into
/// the shared parameter store. Saving is driven by the host, through the
/// commit handler armed after load.
#[component]
pub fn ConfigScreen() -> impl IntoView {
    let store = Rc::new(RefCell::new(ParameterStore::new()));

    let is_loading = create_rw_signal(true);
    let load_error = create_rw_signal(None::<String>);

    // per-field display values, mirroring the store
    let api_key = create_rw_signal(String::new());
    let text_model_id = create_rw_signal(String::new());
    let image_model_id = create_rw_signal(String::new());

    let refresh = {
        let store = store.clone();
        move || {
            let store = store.borrow();
            api_key.set(store.field(ParameterField::ApiKey).to_string());
            text_model_id
                .set(store.field(ParameterField::TextModelId).to_string());
            image_model_id
                .set(store.field(ParameterField::ImageModelId).to_string());
        }
    };
    refresh();

    let edit_field = {
        let store = store.clone();
        move |field: ParameterField| {
            let store = store.clone();
            Callback::new(move |value: String| {
                store.borrow_mut().set_field(field, value);
            })
        }
    };
    let on_api_key = edit_field(ParameterField::ApiKey);
    let on_text_model_id = edit_field(ParameterField::TextModelId);
    let on_image_model_id = edit_field(ParameterField::ImageModelId);

    spawn_local(async move {
        match HostBridge::from_page() {
            Ok(bridge) => {
                let mut lifecycle = ConfigLifecycle::new(bridge, store);
                match lifecycle.load().await {
                    Ok(()) => {
                        refresh();
                        register_commit_handler(Rc::new(lifecycle));
                        is_loading.set(false);
                    }
                    Err(error) => {
                        log::error!("Failed to load parameters: {}", error);
                        load_error.set(Some(error.to_string()));
                        is_loading.set(false);
                    }
                }
            }
            Err(error) => {
                log::error!("Host SDK unavailable: {}", error);
                load_error.set(Some(error.to_string()));
                is_loading.set(false);
            }
        }
    });

    view! {
        <div class="flex flex-col m-20 max-w-3xl">
            {move || {
                if let Some(error) = load_error.get() {
                    view! {
                        <div class="text-red-500">{format!("Error: {}", error)}</div>
                    }
                    .into_view()
                } else if is_loading.get() {
                    view! { <div>"Loading..."</div> }.into_view()
                } else {
                    view! {
                        <form>
                            <h1 class="text-2xl font-semibold mb-2">
                                "Hugging Face Integration Configuration"
                            </h1>
                            <p class="mb-4">
                                "Configure your Hugging Face API settings to enable AI image generation."
                            </p>

                            <div class="border-l-4 border-yellow-400 bg-yellow-50 p-4 my-6">
                                <p class="font-semibold">"Security Notice"</p>
                                <p>
                                    "Your API key will be stored securely by the platform. Never share or expose your API key in client-side code."
                                </p>
                            </div>

                            <TextInputView
                                label="Hugging Face API Key"
                                value=api_key
                                on_change=on_api_key
                                placeholder="hf_..."
                                help_text="Enter your Hugging Face API key. You can find this in your Hugging Face account settings."
                                is_password=true
                            />

                            <div class="border-l-4 border-blue-400 bg-blue-50 p-4 my-6">
                                <p class="font-semibold">"Model Requirements"</p>
                                <p>
                                    "The selected models must be available on the Hugging Face Inference API to work with this integration."
                                </p>
                            </div>

                            <TextInputView
                                label="Text Model ID"
                                value=text_model_id
                                on_change=on_text_model_id
                                placeholder=DEFAULT_TEXT_MODEL_ID
                                help_text="Enter the Hugging Face model ID for text processing. (Must be a Text Generation model)"
                            />

                            <TextInputView
                                label="Image Model ID"
                                value=image_model_id
                                on_change=on_image_model_id
                                placeholder=DEFAULT_IMAGE_MODEL_ID
                                help_text="Enter the Hugging Face model ID for image generation. (Must be a Text-to-Image model)"
                            />
                        </form>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}
