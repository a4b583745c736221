//! Heading Component

use leptos::prelude::*;

/// Section header
#[component]
pub fn Heading(#[prop(into)] title: String) -> impl IntoView {
    view! { <h2>{title}</h2> }
}
