use axum::{
    extract::{Multipart, Path},
    response::Response,
};

use super::forms::MultipartForm;
use super::{release_file, store_required};
use crate::context::RequestContext;
use crate::error::AppResult;
use crate::services::uploads::UploadCategory;
use crate::store::gallery;

#[utoipa::path(
    post,
    path = "/admin/gallery",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Image appended to the gallery, redirect to /admin")
    ),
    tag = "Gallery"
)]
pub async fn upload_image(ctx: RequestContext, multipart: Multipart) -> AppResult<Response> {
    let form = MultipartForm::read(multipart).await?;

    let name = match store_required(&ctx.uploads, UploadCategory::Gallery, form.file("imagem")).await {
        Ok(name) => name,
        Err(e) => return ctx.finish(Err(e), "/admin"),
    };
    let image = gallery::add_image(&ctx.db, &name).await?;

    ctx.finish(Ok(format!("Imagem adicionada à galeria (posição {}).", image.position)), "/admin")
}

#[utoipa::path(
    post,
    path = "/admin/gallery/{id}/delete",
    params(
        ("id" = i32, Path, description = "Gallery image ID")
    ),
    responses(
        (status = 303, description = "Image deleted, redirect to /admin"),
        (status = 404, description = "Image not found")
    ),
    tag = "Gallery"
)]
pub async fn delete_image(ctx: RequestContext, Path(id): Path<i32>) -> AppResult<Response> {
    let image = gallery::delete_image(&ctx.db, id).await?;
    let note = release_file(&ctx.db, &ctx.uploads, UploadCategory::Gallery, &image.filename).await?;

    ctx.finish(Ok(format!("Imagem removida da galeria.{note}")), "/admin")
}
