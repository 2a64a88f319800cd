use crate::shell::{DisplayShell, ViewState};
use axum::{extract::State, response::Json};
use tracing::debug;

#[derive(Clone)]
pub struct AppState {
    pub shell: DisplayShell,
}

pub async fn render(State(state): State<AppState>) -> String {
    let view = state.shell.view();
    debug!("Rendering shell {} in state {}", state.shell.id(), view.name());
    view.render()
}

pub async fn view_state(State(state): State<AppState>) -> Json<ViewState> {
    Json(state.shell.view())
}
