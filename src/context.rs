use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use sea_orm::DatabaseConnection;

use crate::error::AppResult;
use crate::flash::{self, Flash, FlashKind};
use crate::services::session::AdminSession;
use crate::services::uploads::UploadStore;
use crate::state::AppState;

/// Everything a handler needs for one request: the database handle, upload
/// storage, the authenticated admin (if any) and the request's cookies.
pub struct RequestContext {
    pub db: DatabaseConnection,
    pub uploads: UploadStore,
    pub admin: Option<AdminSession>,
    pub jar: CookieJar,
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let admin = state.sessions.from_jar(&jar, state.admin.username());

        Ok(Self {
            db: state.db.clone(),
            uploads: state.uploads.clone(),
            admin,
            jar,
        })
    }
}

impl RequestContext {
    pub fn is_admin(&self) -> bool {
        self.admin.is_some()
    }

    /// Pending flash messages; the returned jar clears them on the response.
    pub fn take_flashes(&mut self) -> Vec<Flash> {
        let (jar, flashes) = flash::take(std::mem::take(&mut self.jar));
        self.jar = jar;
        flashes
    }

    pub fn redirect(self, kind: FlashKind, message: impl Into<String>, to: &str) -> Response {
        flash::redirect(self.jar, kind, message, to)
    }

    /// Turn a handler outcome into a redirect: success and user-fixable errors
    /// become flash messages, anything else propagates.
    pub fn finish(self, outcome: AppResult<String>, to: &str) -> AppResult<Response> {
        match outcome {
            Ok(message) => Ok(self.redirect(FlashKind::Success, message, to)),
            Err(e) => match e.user_message() {
                Some(message) => {
                    tracing::info!(reason = %message, "form rejected");
                    let message = message.to_string();
                    Ok(self.redirect(FlashKind::Danger, message, to))
                }
                None => Err(e),
            },
        }
    }
}
