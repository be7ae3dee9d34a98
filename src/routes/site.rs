use axum::{
    extract::{Form, Multipart, Path},
    response::Response,
};
use serde::Deserialize;

use super::forms::MultipartForm;
use super::{release_superseded, store_optional, store_required};
use crate::context::RequestContext;
use crate::error::{AppError, AppResult};
use crate::models::settings::keys;
use crate::services::uploads::{allowed_file, sanitize_filename, UploadCategory};
use crate::store::settings;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct ContactForm {
    #[serde(default)]
    contato_email: String,
    #[serde(default)]
    contato_telefone: String,
    #[serde(default)]
    contato_endereco: String,
    #[serde(default)]
    contato_instagram: String,
}

/// Point a config key at a freshly stored image, then drop the file it used
/// to reference unless a section still shows it. Returns a note for the flash
/// message when that cleanup failed.
async fn replace_config_image(
    ctx: &RequestContext,
    key: &str,
    category: UploadCategory,
    new_file: &str,
) -> AppResult<&'static str> {
    let previous = settings::get(&ctx.db, key).await?;
    settings::upsert(&ctx.db, key, new_file).await?;
    release_superseded(&ctx.db, &ctx.uploads, category, previous.as_deref(), new_file).await
}

#[utoipa::path(
    post,
    path = "/admin/carousel",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Image stored (or rejected), redirect to /admin")
    ),
    tag = "Site Content"
)]
pub async fn upload_carousel(ctx: RequestContext, multipart: Multipart) -> AppResult<Response> {
    let form = MultipartForm::read(multipart).await?;
    let outcome = store_required(&ctx.uploads, UploadCategory::Carousel, form.file("imagem"))
        .await
        .map(|name| format!("Imagem {name} adicionada ao carrossel."));
    ctx.finish(outcome, "/admin")
}

#[utoipa::path(
    post,
    path = "/admin/carousel/{filename}/delete",
    params(
        ("filename" = String, Path, description = "Stored carousel file name")
    ),
    responses(
        (status = 303, description = "Image removed, redirect to /admin")
    ),
    tag = "Site Content"
)]
pub async fn delete_carousel(ctx: RequestContext, Path(filename): Path<String>) -> AppResult<Response> {
    if sanitize_filename(&filename) != filename || !allowed_file(&filename) {
        return ctx.finish(Err(AppError::Validation("Arquivo inválido.".to_string())), "/admin");
    }

    let outcome = match ctx.uploads.remove(UploadCategory::Carousel, &filename).await {
        Ok(()) => Ok("Imagem removida do carrossel.".to_string()),
        Err(e) => {
            tracing::warn!(file = %filename, error = %e, "could not delete carousel image");
            Err(AppError::Validation(
                "Não foi possível remover a imagem do carrossel.".to_string(),
            ))
        }
    };
    ctx.finish(outcome, "/admin")
}

#[utoipa::path(
    post,
    path = "/admin/about",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "About text (and image) saved, redirect to /admin")
    ),
    tag = "Site Content"
)]
pub async fn update_about(ctx: RequestContext, multipart: Multipart) -> AppResult<Response> {
    let form = MultipartForm::read(multipart).await?;

    let image = match store_optional(&ctx.uploads, UploadCategory::Sections, form.file("imagem")).await {
        Ok(image) => image,
        Err(e) => return ctx.finish(Err(e), "/admin"),
    };

    settings::upsert(&ctx.db, keys::ABOUT_TEXT, form.text("sobre_texto")).await?;
    let note = match image {
        Some(name) => replace_config_image(&ctx, keys::ABOUT_IMAGE, UploadCategory::Sections, &name).await?,
        None => "",
    };

    ctx.finish(Ok(format!("Seção \"Sobre\" atualizada.{note}")), "/admin")
}

#[utoipa::path(
    post,
    path = "/admin/background",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Background replaced, redirect to /admin")
    ),
    tag = "Site Content"
)]
pub async fn update_background(ctx: RequestContext, multipart: Multipart) -> AppResult<Response> {
    let form = MultipartForm::read(multipart).await?;

    let name = match store_required(&ctx.uploads, UploadCategory::Sections, form.file("imagem")).await {
        Ok(name) => name,
        Err(e) => return ctx.finish(Err(e), "/admin"),
    };
    let note = replace_config_image(&ctx, keys::BACKGROUND_IMAGE, UploadCategory::Sections, &name).await?;

    ctx.finish(Ok(format!("Imagem de fundo atualizada.{note}")), "/admin")
}

#[utoipa::path(
    post,
    path = "/admin/contact",
    request_body(content = ContactForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Contact fields saved, redirect to /admin")
    ),
    tag = "Site Content"
)]
pub async fn update_contact(ctx: RequestContext, Form(form): Form<ContactForm>) -> AppResult<Response> {
    for (key, value) in [
        (keys::CONTACT_EMAIL, &form.contato_email),
        (keys::CONTACT_PHONE, &form.contato_telefone),
        (keys::CONTACT_ADDRESS, &form.contato_endereco),
        (keys::CONTACT_INSTAGRAM, &form.contato_instagram),
    ] {
        settings::upsert(&ctx.db, key, value.trim()).await?;
    }
    ctx.finish(Ok("Informações de contato atualizadas.".to_string()), "/admin")
}
