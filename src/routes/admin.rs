use axum::{
    extract::Path,
    http::header,
    response::{Html, IntoResponse, Response},
    Extension,
};

use crate::context::RequestContext;
use crate::error::AppResult;
use crate::flash::FlashKind;
use crate::services::csv_export::leads_csv;
use crate::services::session::AdminSession;
use crate::services::uploads::UploadCategory;
use crate::store;
use crate::views::admin::{self, AdminPage};

#[utoipa::path(
    get,
    path = "/admin",
    responses(
        (status = 200, description = "Admin dashboard", content_type = "text/html"),
        (status = 303, description = "Not logged in, redirect to /login")
    ),
    tag = "Admin"
)]
pub async fn dashboard(
    Extension(admin): Extension<AdminSession>,
    mut ctx: RequestContext,
) -> AppResult<Response> {
    let data = AdminPage {
        username: admin.username,
        leads: store::leads::list_leads(&ctx.db).await?,
        settings: store::settings::site_settings(&ctx.db).await?,
        carousel: ctx.uploads.list(UploadCategory::Carousel).await?,
        projects: store::projects::list_projects(&ctx.db).await?,
        members: store::members::list_members(&ctx.db).await?,
        sections: store::sections::list_sections(&ctx.db).await?,
        gallery: store::gallery::list_images(&ctx.db).await?,
    };

    let flashes = ctx.take_flashes();
    Ok((ctx.jar, Html(admin::render(&data, &flashes))).into_response())
}

#[utoipa::path(
    get,
    path = "/export.csv",
    responses(
        (status = 200, description = "Leads as CSV attachment, newest first", content_type = "text/csv"),
        (status = 303, description = "Not logged in, redirect to /login")
    ),
    tag = "Admin"
)]
pub async fn export_csv(ctx: RequestContext) -> AppResult<Response> {
    let leads = store::leads::list_leads(&ctx.db).await?;
    tracing::info!(rows = leads.len(), "leads exported");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment;filename=interessados.csv"),
        ],
        leads_csv(&leads),
    )
        .into_response())
}

#[utoipa::path(
    post,
    path = "/delete/{id}",
    params(
        ("id" = i32, Path, description = "Lead ID")
    ),
    responses(
        (status = 303, description = "Lead deleted, redirect to /admin")
    ),
    tag = "Admin"
)]
pub async fn delete_lead(ctx: RequestContext, Path(id): Path<i32>) -> AppResult<Response> {
    if store::leads::delete_lead(&ctx.db, id).await? {
        tracing::info!(lead_id = id, "lead deleted");
        Ok(ctx.redirect(FlashKind::Success, "Registro excluído.", "/admin"))
    } else {
        Ok(ctx.redirect(FlashKind::Warning, "Registro não encontrado.", "/admin"))
    }
}
