//! Customer lookup by id.

use crate::shared::icons::icon;
use contracts::shared::page_config::ErrorDisplay;
use leptos::ev::SubmitEvent;
use leptos::html::Input;
use leptos::prelude::*;
use web_sys::window;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("⚠️ 顧客IDを入力してください。")]
    EmptyCustomerId,
}

/// Trimmed customer id, or an error when nothing was entered.
///
/// Only surrounding whitespace is removed. The id is not checked for
/// digits or escaped, the detail page decides whether it exists.
///
/// # Examples
///
/// ```
/// use frontend::pages::search::{customer_path, validate_customer_id, SearchError};
///
/// let id = validate_customer_id("  10001\n").unwrap();
/// assert_eq!(id, "10001");
/// assert_eq!(customer_path(&id), "/customer/10001");
///
/// // Whitespace only counts as empty
/// assert_eq!(validate_customer_id(" \t "), Err(SearchError::EmptyCustomerId));
/// ```
pub fn validate_customer_id(raw: &str) -> Result<String, SearchError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(SearchError::EmptyCustomerId);
    }
    Ok(id.to_string())
}

/// Detail page of a customer; the id is used as entered.
pub fn customer_path(id: &str) -> String {
    format!("/customer/{}", id)
}

fn navigate_to(path: &str) {
    let Some(window) = window() else {
        return;
    };
    if let Err(err) = window.location().set_href(path) {
        log::error!("Navigation to {} failed: {:?}", path, err);
    }
}

fn show_alert(message: &str) {
    if let Some(window) = window() {
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("alert() failed: {:?}", err);
        }
    }
}

#[component]
pub fn SearchForm(error_display: ErrorDisplay) -> impl IntoView {
    let customer_id = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(String::new());

        match validate_customer_id(&customer_id.get_untracked()) {
            Ok(id) => navigate_to(&customer_path(&id)),
            Err(err) => {
                match error_display {
                    ErrorDisplay::Inline => set_error_message.set(err.to_string()),
                    ErrorDisplay::Alert => show_alert(&err.to_string()),
                }
                if let Some(input) = input_ref.get_untracked() {
                    if let Err(err) = input.focus() {
                        log::warn!("Cannot focus #customer_id: {:?}", err);
                    }
                }
            }
        }
    };

    view! {
        <form class="search-form" on:submit=on_submit>
            <label for="customer_id" class="search-form__label">"顧客ID"</label>
            <div class="search-form__row">
                <input
                    id="customer_id"
                    type="text"
                    class="search-form__input"
                    placeholder="例: 10001"
                    autocomplete="off"
                    node_ref=input_ref
                    bind:value=customer_id
                />
                <button type="submit" class="button button--primary">
                    {icon("search")}
                    <span>"検索"</span>
                </button>
            </div>
            <div id="error-message" class="search-form__error" role="alert">
                {move || error_message.get()}
            </div>
        </form>
    }
}

#[component]
pub fn SearchPage(error_display: ErrorDisplay) -> impl IntoView {
    view! {
        <div class="search-page">
            <h1 class="page__title">"顧客検索"</h1>
            <SearchForm error_display=error_display />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(validate_customer_id(""), Err(SearchError::EmptyCustomerId));
        assert_eq!(validate_customer_id("   \t\n"), Err(SearchError::EmptyCustomerId));
    }

    #[test]
    fn test_id_is_trimmed_and_not_escaped() {
        assert_eq!(validate_customer_id("  123 "), Ok("123".to_string()));
        assert_eq!(customer_path("123"), "/customer/123");
        assert_eq!(customer_path("a b/c"), "/customer/a b/c");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            SearchError::EmptyCustomerId.to_string(),
            "⚠️ 顧客IDを入力してください。"
        );
    }
}
