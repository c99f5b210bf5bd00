//! Top bar for a signed-in session: email, role badge, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Surfaces the identity derived from the id token. Admin status here is a
//! display hint only; the backend authorizes every request on its own.

#[cfg(test)]
#[path = "session_bar_test.rs"]
mod session_bar_test;

use leptos::prelude::*;

use crate::state::auth::{AuthStore, use_auth_store};

pub fn role_label(is_admin: bool) -> &'static str {
    if is_admin { "Admin" } else { "User" }
}

pub fn role_class(is_admin: bool) -> &'static str {
    if is_admin {
        "session-bar__role session-bar__role--admin"
    } else {
        "session-bar__role"
    }
}

/// Email to show, falling back to a generic label for tokens without one.
pub fn display_identity(email: Option<&str>) -> String {
    email.unwrap_or("Signed in").to_owned()
}

#[component]
pub fn SessionBar() -> impl IntoView {
    let auth = use_auth_store();

    let is_admin = Memo::new(move |_| auth.with(AuthStore::is_admin));
    let email = Memo::new(move |_| auth.with(AuthStore::user_email));

    let on_logout = move |_| auth.update(AuthStore::logout);

    view! {
        <div class="session-bar">
            <span class="session-bar__identity">{move || display_identity(email.get().as_deref())}</span>
            <span class=move || role_class(is_admin.get())>{move || role_label(is_admin.get())}</span>
            <span class="session-bar__spacer"></span>
            <button class="btn session-bar__logout" on:click=on_logout title="Sign out">
                "Logout"
            </button>
        </div>
    }
}
