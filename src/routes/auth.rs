use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::context::RequestContext;
use crate::error::AppResult;
use crate::flash::{self, FlashKind};
use crate::services::session::{clear_session, session_cookie};
use crate::state::AppState;
use crate::views::login;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

#[utoipa::path(
    get,
    path = "/login",
    responses(
        (status = 200, description = "Login form", content_type = "text/html"),
        (status = 303, description = "Already logged in, redirect to the admin panel")
    ),
    tag = "Authentication"
)]
pub async fn login_page(mut ctx: RequestContext) -> Response {
    if ctx.is_admin() {
        return Redirect::to("/admin").into_response();
    }
    let flashes = ctx.take_flashes();
    (ctx.jar, Html(login::render(&flashes))).into_response()
}

#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Session cookie set and redirect to /admin, or back to /login on failure")
    ),
    tag = "Authentication"
)]
pub async fn login(
    State(state): State<AppState>,
    ctx: RequestContext,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    if ctx.is_admin() {
        return Ok(Redirect::to("/admin").into_response());
    }

    if !state.admin.verify(&form.username, &form.password) {
        tracing::warn!(username = %form.username, "failed admin login");
        return Ok(ctx.redirect(FlashKind::Danger, "Usuário ou senha incorretos.", "/login"));
    }

    let token = state.sessions.issue(state.admin.username())?;
    tracing::info!(username = %form.username, "admin logged in");
    let jar = ctx.jar.add(session_cookie(token));
    Ok(flash::redirect(jar, FlashKind::Success, "Login efetuado com sucesso.", "/admin"))
}

#[utoipa::path(
    get,
    path = "/logout",
    responses(
        (status = 303, description = "Session cleared, redirect to /login")
    ),
    tag = "Authentication"
)]
pub async fn logout(ctx: RequestContext) -> Response {
    if let Some(admin) = &ctx.admin {
        tracing::info!(username = %admin.username, "admin logged out");
    }
    let jar = clear_session(ctx.jar);
    flash::redirect(jar, FlashKind::Info, "Você saiu do sistema.", "/login")
}
