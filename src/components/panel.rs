//! Panel Component
//!
//! Emphasized container around arbitrary nested content.

use leptos::prelude::*;

#[component]
pub fn Panel(children: Children) -> impl IntoView {
    view! {
        <div style="padding: 1rem; font-weight: bold;">
            {children()}
        </div>
    }
}
