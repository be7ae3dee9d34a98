use axum::{
    extract::{Form, Path},
    response::Response,
};
use serde::Deserialize;

use super::stale_reference;
use crate::context::RequestContext;
use crate::error::AppResult;
use crate::store::members;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct MemberForm {
    #[serde(default)]
    nome: String,
    #[serde(default)]
    email: String,
}

#[utoipa::path(
    post,
    path = "/admin/members",
    request_body(content = MemberForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Member created, or rejected (missing field, duplicate email), redirect to /admin")
    ),
    tag = "Members"
)]
pub async fn create_member(ctx: RequestContext, Form(form): Form<MemberForm>) -> AppResult<Response> {
    let outcome = members::create_member(&ctx.db, &form.nome, &form.email)
        .await
        .map(|member| format!("Membro {} adicionado.", member.name));
    ctx.finish(outcome, "/admin")
}

#[utoipa::path(
    post,
    path = "/admin/members/{id}/delete",
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 303, description = "Member deleted (projects it led lose their leader), or unknown id reported, redirect to /admin")
    ),
    tag = "Members"
)]
pub async fn delete_member(ctx: RequestContext, Path(id): Path<i32>) -> AppResult<Response> {
    let outcome = members::delete_member(&ctx.db, id)
        .await
        .map_err(stale_reference)
        .map(|member| format!("Membro {} excluído.", member.name));
    ctx.finish(outcome, "/admin")
}
