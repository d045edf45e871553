use std::sync::Arc;

use axum::extract::State;
use axum::response::Redirect;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use crate::consent::{ConsentBanner, ConsentState, DocumentHead, SettingsPage};
use crate::server::ServerState;

#[derive(Debug, Serialize)]
pub(crate) struct ConsentResponse {
    state: ConsentState,
}

/// Current stored state; what reconciling views re-read after a change
/// signal.
pub(crate) async fn current(State(state): State<Arc<ServerState>>) -> Json<ConsentResponse> {
    Json(ConsentResponse {
        state: state.store.read(),
    })
}

/// Banner "accept all". The page re-renders after the redirect, so the
/// transition runs against a transient head model.
pub(crate) async fn accept(State(state): State<Arc<ServerState>>) -> Redirect {
    let head = DocumentHead::new();
    let mut banner = ConsentBanner::mount(&state.store, &state.loader, &head);
    banner.accept(&state.store, &state.loader, &head);
    Redirect::to("/")
}

/// Banner "essential only".
pub(crate) async fn reject(State(state): State<Arc<ServerState>>) -> Redirect {
    let head = DocumentHead::new();
    let mut banner = ConsentBanner::mount(&state.store, &state.loader, &head);
    banner.reject(&state.store, &state.loader, &head);
    Redirect::to("/")
}

#[derive(Debug, Deserialize)]
pub(crate) struct SettingsForm {
    /// Present (as "on") only when the checkbox is checked.
    #[serde(default)]
    analytics: Option<String>,
}

/// Settings save: persist the toggle, align the script state, and
/// broadcast the change to other open views.
pub(crate) async fn save_settings(
    State(state): State<Arc<ServerState>>,
    Form(form): Form<SettingsForm>,
) -> Redirect {
    let head = DocumentHead::new();
    let mut page = SettingsPage::mount(&state.store, &state.loader, &head);
    page.set_analytics(form.analytics.is_some());
    page.save(&state.store, &state.loader, &head, &state.bus);
    Redirect::to("/cookie-settings?saved=1")
}
