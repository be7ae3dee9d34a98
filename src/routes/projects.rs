use axum::{
    extract::{Form, Multipart, Path},
    response::Response,
};
use serde::Deserialize;

use super::forms::{parse_optional_id, MultipartForm};
use super::{release_file, release_superseded, stale_reference, store_optional, store_required};
use crate::context::RequestContext;
use crate::error::{AppError, AppResult};
use crate::services::uploads::UploadCategory;
use crate::store::{members, projects};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct LeaderForm {
    /// Member ID; empty clears the leader.
    #[serde(default)]
    lider_id: String,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct TeamMemberForm {
    #[serde(default)]
    membro_id: String,
}

#[utoipa::path(
    post,
    path = "/admin/projects",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Project created (or rejected), redirect to /admin")
    ),
    tag = "Projects"
)]
pub async fn create_project(ctx: RequestContext, multipart: Multipart) -> AppResult<Response> {
    let form = MultipartForm::read(multipart).await?;
    let title = form.text("titulo");
    let description = form.text("descricao");
    let leader_id = form.int("lider_id");

    if let Err(e) = projects::validate_fields(title, description) {
        return ctx.finish(Err(e), "/admin");
    }
    if let Some(leader_id) = leader_id {
        if members::find_member(&ctx.db, leader_id).await.is_err() {
            let e = AppError::Validation("O líder escolhido não existe.".to_string());
            return ctx.finish(Err(e), "/admin");
        }
    }

    let image = match store_required(&ctx.uploads, UploadCategory::Projects, form.file("imagem")).await {
        Ok(image) => image,
        Err(e) => return ctx.finish(Err(e), "/admin"),
    };

    let project = projects::create_project(
        &ctx.db,
        projects::NewProject {
            title: title.to_string(),
            description: description.to_string(),
            image,
            leader_id,
        },
    )
    .await?;

    ctx.finish(Ok(format!("Projeto \"{}\" criado.", project.title)), "/admin")
}

#[utoipa::path(
    post,
    path = "/admin/projects/{id}/update",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Project updated, redirect to /admin"),
        (status = 404, description = "Project not found")
    ),
    tag = "Projects"
)]
pub async fn update_project(
    ctx: RequestContext,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> AppResult<Response> {
    let form = MultipartForm::read(multipart).await?;
    let title = form.text("titulo");
    let description = form.text("descricao");

    if let Err(e) = projects::validate_fields(title, description) {
        return ctx.finish(Err(e), "/admin");
    }
    projects::find_project(&ctx.db, id).await?;

    let image = match store_optional(&ctx.uploads, UploadCategory::Projects, form.file("imagem")).await {
        Ok(image) => image,
        Err(e) => return ctx.finish(Err(e), "/admin"),
    };

    let (project, previous) = projects::update_project(&ctx.db, id, title, description, image).await?;
    let note = release_superseded(
        &ctx.db,
        &ctx.uploads,
        UploadCategory::Projects,
        previous.as_deref(),
        &project.image,
    )
    .await?;

    ctx.finish(Ok(format!("Projeto \"{}\" atualizado.{note}", project.title)), "/admin")
}

#[utoipa::path(
    post,
    path = "/admin/projects/{id}/delete",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 303, description = "Project and its image deleted, redirect to /admin"),
        (status = 404, description = "Project not found")
    ),
    tag = "Projects"
)]
pub async fn delete_project(ctx: RequestContext, Path(id): Path<i32>) -> AppResult<Response> {
    let project = projects::delete_project(&ctx.db, id).await?;
    let note = release_file(&ctx.db, &ctx.uploads, UploadCategory::Projects, &project.image).await?;

    ctx.finish(Ok(format!("Projeto \"{}\" excluído.{note}", project.title)), "/admin")
}

#[utoipa::path(
    post,
    path = "/admin/projects/{id}/leader",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body(content = LeaderForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Leader set or cleared, or unknown id reported, redirect to /admin")
    ),
    tag = "Projects"
)]
pub async fn set_leader(
    ctx: RequestContext,
    Path(id): Path<i32>,
    Form(form): Form<LeaderForm>,
) -> AppResult<Response> {
    let leader_id = parse_optional_id(&form.lider_id);
    let outcome = projects::set_leader(&ctx.db, id, leader_id)
        .await
        .map_err(stale_reference)
        .map(|_| match leader_id {
            Some(_) => "Líder do projeto atualizado.".to_string(),
            None => "Projeto ficou sem líder.".to_string(),
        });
    ctx.finish(outcome, "/admin")
}

#[utoipa::path(
    post,
    path = "/admin/projects/{id}/members",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body(content = TeamMemberForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Member added to the team (no-op if already there), or unknown id reported, redirect to /admin")
    ),
    tag = "Projects"
)]
pub async fn add_team_member(
    ctx: RequestContext,
    Path(id): Path<i32>,
    Form(form): Form<TeamMemberForm>,
) -> AppResult<Response> {
    let Some(member_id) = parse_optional_id(&form.membro_id) else {
        return ctx.finish(Err(AppError::Validation("Selecione um membro.".to_string())), "/admin");
    };

    let outcome = projects::add_team_member(&ctx.db, id, member_id)
        .await
        .map_err(stale_reference)
        .map(|added| {
            if added {
                "Membro adicionado à equipe.".to_string()
            } else {
                "Esse membro já faz parte da equipe.".to_string()
            }
        });
    ctx.finish(outcome, "/admin")
}

#[utoipa::path(
    post,
    path = "/admin/projects/{id}/members/{member_id}/remove",
    params(
        ("id" = i32, Path, description = "Project ID"),
        ("member_id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 303, description = "Member removed from the team, or rejected when it is the current leader or the id is unknown")
    ),
    tag = "Projects"
)]
pub async fn remove_team_member(
    ctx: RequestContext,
    Path((id, member_id)): Path<(i32, i32)>,
) -> AppResult<Response> {
    let outcome = projects::remove_team_member(&ctx.db, id, member_id)
        .await
        .map_err(stale_reference)
        .map(|()| "Membro removido da equipe.".to_string());
    ctx.finish(outcome, "/admin")
}
