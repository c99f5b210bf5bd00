use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::util::storage::MemoryStorage;

fn admin_token() -> String {
    let body = URL_SAFE_NO_PAD.encode(r#"{"cognito:groups":["admins"],"email":"a@x.com"}"#);
    format!("eyJhbGciOiJSUzI1NiJ9.{body}.c2ln")
}

#[test]
fn install_stores_provides_auth_and_ui_contexts() {
    let owner = Owner::new();
    owner.with(|| {
        let storage = MemoryStorage::new();
        let auth = install_stores(&AppConfig::default(), Arc::new(storage));

        let from_context = use_context::<RwSignal<AuthStore>>().expect("auth context");
        assert_eq!(from_context, auth);
        assert!(use_context::<RwSignal<UiState>>().is_some());
    });
}

#[test]
fn install_stores_loads_persisted_token() {
    let owner = Owner::new();
    owner.with(|| {
        let storage = MemoryStorage::new();
        storage.set("idToken", &admin_token());
        let auth = install_stores(&AppConfig::default(), Arc::new(storage));

        assert!(auth.with_untracked(AuthStore::is_admin));
        assert_eq!(auth.with_untracked(AuthStore::user_email).as_deref(), Some("a@x.com"));
    });
}

#[test]
fn logout_resets_ui_state() {
    let owner = Owner::new();
    owner.with(|| {
        let storage = MemoryStorage::new();
        let auth = install_stores(&AppConfig::default(), Arc::new(storage.clone()));
        let ui = use_context::<RwSignal<UiState>>().expect("ui context");

        auth.update(|a| a.login(admin_token()));
        ui.update(|u| {
            u.token_draft = "half-typed".to_owned();
            u.set_notice("Signed in.");
        });

        auth.update(AuthStore::logout);

        assert_eq!(ui.get_untracked(), UiState::default());
        assert!(!auth.with_untracked(AuthStore::is_logged_in));
        assert_eq!(storage.get("idToken"), None);
    });
}

#[test]
fn reload_hook_registered_only_when_configured() {
    let owner = Owner::new();
    owner.with(|| {
        let config = AppConfig { reload_on_logout: true, ..AppConfig::default() };
        let auth = install_stores(&config, Arc::new(MemoryStorage::new()));
        let rendered = auth.with_untracked(|a| format!("{a:?}"));
        assert!(rendered.contains("page-reload"));

        let auth = install_stores(&AppConfig::default(), Arc::new(MemoryStorage::new()));
        let rendered = auth.with_untracked(|a| format!("{a:?}"));
        assert!(!rendered.contains("page-reload"));
    });
}
