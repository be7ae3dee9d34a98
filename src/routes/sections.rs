use axum::{
    extract::{Multipart, Path},
    response::Response,
};

use super::forms::MultipartForm;
use super::{release_file, release_superseded, store_optional};
use crate::context::RequestContext;
use crate::error::AppResult;
use crate::services::uploads::UploadCategory;
use crate::store::sections::{self, SectionInput};

fn section_input(form: &MultipartForm) -> SectionInput {
    SectionInput {
        title: form.text("titulo").to_string(),
        text: form.text("texto").to_string(),
        position: form.int("ordem"),
    }
}

#[utoipa::path(
    post,
    path = "/admin/sections",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Section created, or rejected (missing title, duplicate slug, bad file), redirect to /admin")
    ),
    tag = "Custom Sections"
)]
pub async fn create_section(ctx: RequestContext, multipart: Multipart) -> AppResult<Response> {
    let form = MultipartForm::read(multipart).await?;
    let input = section_input(&form);

    if let Err(e) = sections::validate_fields(&input.title) {
        return ctx.finish(Err(e), "/admin");
    }
    if let Err(e) = sections::ensure_slug_available(&ctx.db, &input.title, None).await {
        return ctx.finish(Err(e), "/admin");
    }

    let image = match store_optional(&ctx.uploads, UploadCategory::Sections, form.file("imagem")).await {
        Ok(image) => image,
        Err(e) => return ctx.finish(Err(e), "/admin"),
    };

    let outcome = sections::create_section(&ctx.db, input, image)
        .await
        .map(|section| format!("Seção \"{}\" criada.", section.title));
    ctx.finish(outcome, "/admin")
}

#[utoipa::path(
    post,
    path = "/admin/sections/{id}/update",
    params(
        ("id" = i32, Path, description = "Section ID")
    ),
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Section updated, redirect to /admin"),
        (status = 404, description = "Section not found")
    ),
    tag = "Custom Sections"
)]
pub async fn update_section(
    ctx: RequestContext,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> AppResult<Response> {
    let form = MultipartForm::read(multipart).await?;
    let input = section_input(&form);

    if let Err(e) = sections::validate_fields(&input.title) {
        return ctx.finish(Err(e), "/admin");
    }
    sections::find_section(&ctx.db, id).await?;
    if let Err(e) = sections::ensure_slug_available(&ctx.db, &input.title, Some(id)).await {
        return ctx.finish(Err(e), "/admin");
    }

    let image = match store_optional(&ctx.uploads, UploadCategory::Sections, form.file("imagem")).await {
        Ok(image) => image,
        Err(e) => return ctx.finish(Err(e), "/admin"),
    };

    let (section, previous) = match sections::update_section(&ctx.db, id, input, image).await {
        Ok(updated) => updated,
        Err(e) => return ctx.finish(Err(e), "/admin"),
    };
    let note = match &section.image {
        Some(current) => {
            release_superseded(
                &ctx.db,
                &ctx.uploads,
                UploadCategory::Sections,
                previous.as_deref(),
                current,
            )
            .await?
        }
        None => "",
    };

    ctx.finish(Ok(format!("Seção \"{}\" atualizada.{note}", section.title)), "/admin")
}

#[utoipa::path(
    post,
    path = "/admin/sections/{id}/delete",
    params(
        ("id" = i32, Path, description = "Section ID")
    ),
    responses(
        (status = 303, description = "Section and its image deleted, redirect to /admin"),
        (status = 404, description = "Section not found")
    ),
    tag = "Custom Sections"
)]
pub async fn delete_section(ctx: RequestContext, Path(id): Path<i32>) -> AppResult<Response> {
    let section = sections::delete_section(&ctx.db, id).await?;
    let note = match &section.image {
        Some(image) => release_file(&ctx.db, &ctx.uploads, UploadCategory::Sections, image).await?,
        None => "",
    };

    ctx.finish(Ok(format!("Seção \"{}\" excluída.{note}", section.title)), "/admin")
}
