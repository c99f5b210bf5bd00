//! Login page: paste an id token issued by the identity provider.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::auth::use_auth_store;
use crate::state::ui::UiState;

const BEARER_SCHEME: &str = "Bearer";

/// Trim pasted input and drop a leading `Bearer ` scheme.
pub fn normalize_token_input(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    // The scheme only counts as a whole word, so a bare "Bearer" is empty.
    let token = match trimmed.strip_prefix(BEARER_SCHEME) {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim(),
        _ => trimmed,
    };
    if token.is_empty() {
        return Err("Paste an id token first.");
    }
    if token.chars().any(char::is_whitespace) {
        return Err("Token must not contain spaces.");
    }
    Ok(token.to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_store();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match normalize_token_input(&ui.get_untracked().token_draft) {
            Ok(token) => {
                auth.update(|a| a.login(token));
                ui.update(UiState::clear_draft);
            }
            Err(message) => ui.update(|u| u.set_notice(message)),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"ExpediteCommerce"</h1>
                <p class="login-card__subtitle">"Sign in with your id token"</p>
                <form class="login-form" on:submit=on_submit>
                    <textarea
                        class="login-input"
                        rows="4"
                        placeholder="eyJ..."
                        prop:value=move || ui.with(|u| u.token_draft.clone())
                        on:input=move |ev| ui.update(|u| u.token_draft = event_target_value(&ev))
                    ></textarea>
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || ui.with(|u| u.notice.is_some())>
                    <p class="login-message">{move || ui.with(|u| u.notice.clone().unwrap_or_default())}</p>
                </Show>
            </div>
        </div>
    }
}
