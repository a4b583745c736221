//! Action Button Component
//!
//! Shared activatable control with a fixed visual style.

use leptos::prelude::*;

/// Style forced onto every action button, after any caller styling
const BUTTON_STYLE: &str = "background-color: red; color: white; font-size: xx-large;";

/// Merge caller-supplied inline style with the fixed override. The
/// override comes last so its properties win.
fn button_style(caller: Option<&str>) -> String {
    match caller {
        Some(style) => format!("{}; {}", style.trim_end_matches([';', ' ']), BUTTON_STYLE),
        None => BUTTON_STYLE.to_string(),
    }
}

/// Button whose label is `title` when supplied, else its children.
///
/// Other activation/display attributes pass through unchanged: spread
/// them at the call site (`<ActionButton {..} disabled=true ...>`) and
/// they land on the underlying `<button>`.
///
/// # Arguments
/// * `title` - Optional label taking precedence over the children
/// * `style` - Caller inline style; the fixed override is applied on top
/// * `on_press` - Callback to execute on activation
#[component]
pub fn ActionButton(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(into)] on_press: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <button style=button_style(style.as_deref()) on:click=move |_| on_press.run(())>
            {match title {
                Some(title) => title.into_any(),
                None => children().into_any(),
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_style_without_caller_style() {
        assert_eq!(button_style(None), BUTTON_STYLE);
    }

    #[test]
    fn test_fixed_style_overrides_caller_style() {
        // Inline CSS is last-wins, so the caller's properties must
        // precede the fixed ones.
        let merged = button_style(Some("margin: 2px; background-color: blue;"));
        assert_eq!(
            merged,
            "margin: 2px; background-color: blue; background-color: red; color: white; font-size: xx-large;"
        );
        assert!(merged.find("background-color: blue").unwrap() < merged.find("background-color: red").unwrap());
    }
}
