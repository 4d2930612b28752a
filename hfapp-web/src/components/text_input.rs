use leptos::*;

/// Labeled text input with optional password masking and help text.
#[component]
pub fn TextInputView(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] help_text: &'static str,
    #[prop(optional)] is_password: bool,
) -> impl IntoView {
    let input_type = if is_password { "password" } else { "text" };

    view! {
        <div class="w-full flex-col items-start text-left mb-2 p-2 bg-white text-gray-800">
            <label class="text-left px-2 w-full font-semibold">{label}</label>
            <input
                type=input_type
                class="appearance-none border rounded w-full py-2 px-3 text-gray-700 leading-tight focus:outline-none"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    let new_value = event_target_value(&ev);
                    value.set(new_value.clone());
                    on_change.call(new_value);
                }
            />
            {(!help_text.is_empty()).then(|| {
                view! {
                    <p class="text-sm text-gray-500 px-2">{help_text}</p>
                }
            })}
        </div>
    }
}
