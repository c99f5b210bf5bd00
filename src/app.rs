//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::session_bar::SessionBar;
use crate::pages::login::LoginPage;
use crate::state::auth::{AuthStore, use_auth_store};

/// Root application component.
///
/// Expects the state container to be provided by the bootstrap. Shows the
/// login page until a token is present.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = use_auth_store();
    let logged_in = Memo::new(move |_| auth.with(AuthStore::is_logged_in));

    view! {
        <Title text="ExpediteCommerce"/>

        <Show when=move || logged_in.get() fallback=|| view! { <LoginPage/> }>
            <SessionBar/>
        </Show>
    }
}
