use axum::{extract::Form, response::{Html, IntoResponse, Response}};
use serde::Deserialize;

use crate::context::RequestContext;
use crate::error::AppResult;
use crate::services::uploads::UploadCategory;
use crate::store;
use crate::views::public::{self, PublicPage};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct InterestForm {
    #[serde(default)]
    nome: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    tipo: String,
    #[serde(default)]
    mensagem: String,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Public site", content_type = "text/html")
    ),
    tag = "Public"
)]
pub async fn index(mut ctx: RequestContext) -> AppResult<Response> {
    let carousel = ctx.uploads.list(UploadCategory::Carousel).await?;
    let data = PublicPage {
        settings: store::settings::site_settings(&ctx.db).await?,
        carousel,
        projects: store::projects::list_projects(&ctx.db).await?,
        members: store::members::list_members(&ctx.db).await?,
        sections: store::sections::list_sections(&ctx.db).await?,
        gallery: store::gallery::list_images(&ctx.db).await?,
        is_admin: ctx.is_admin(),
    };

    let flashes = ctx.take_flashes();
    Ok((ctx.jar, Html(public::render(&data, &flashes))).into_response())
}

#[utoipa::path(
    post,
    path = "/",
    request_body(content = InterestForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect back to the site with a flash message")
    ),
    tag = "Public"
)]
pub async fn submit_interest(ctx: RequestContext, Form(form): Form<InterestForm>) -> AppResult<Response> {
    let outcome = store::leads::create_lead(&ctx.db, &form.nome, &form.email, &form.tipo, &form.mensagem)
        .await
        .map(|_| "Obrigado! Seu interesse foi registrado.".to_string());
    ctx.finish(outcome, "/")
}
