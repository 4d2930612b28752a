use leptos::*;

use crate::components::ConfigScreen;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigScreen />
    }
}
