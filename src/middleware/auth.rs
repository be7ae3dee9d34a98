use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::flash::{self, FlashKind};
use crate::state::AppState;

/// Gate for admin routes: a valid session cookie puts an
/// [`AdminSession`](crate::services::session::AdminSession) into the request
/// extensions, anything else is sent to the login page.
pub async fn require_admin(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    match state.sessions.from_jar(&jar, state.admin.username()) {
        Some(admin) => {
            req.extensions_mut().insert(admin);
            next.run(req).await
        }
        None => {
            tracing::info!(path = %req.uri().path(), "unauthenticated admin access");
            flash::redirect(jar, FlashKind::Warning, "Acesso restrito. Faça login.", "/login")
        }
    }
}
