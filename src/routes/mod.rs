mod admin;
mod auth;
pub mod forms;
mod gallery;
mod home;
mod members;
mod projects;
mod sections;
mod site;

use std::io;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::require_admin;
use crate::services::session::SESSION_COOKIE;
use crate::services::uploads::{UploadCategory, UploadStore};
use crate::state::AppState;
use crate::store::references;
use forms::UploadedFile;

// Define the OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Public page
        home::index,
        home::submit_interest,
        // Authentication
        auth::login_page,
        auth::login,
        auth::logout,
        // Admin dashboard and leads
        admin::dashboard,
        admin::export_csv,
        admin::delete_lead,
        // Site content
        site::upload_carousel,
        site::delete_carousel,
        site::update_about,
        site::update_background,
        site::update_contact,
        // Members
        members::create_member,
        members::delete_member,
        // Projects
        projects::create_project,
        projects::update_project,
        projects::delete_project,
        projects::set_leader,
        projects::add_team_member,
        projects::remove_team_member,
        // Custom sections
        sections::create_section,
        sections::update_section,
        sections::delete_section,
        // Gallery
        gallery::upload_image,
        gallery::delete_image,
    ),
    components(
        schemas(
            home::InterestForm,
            auth::LoginForm,
            site::ContactForm,
            members::MemberForm,
            projects::LeaderForm,
            projects::TeamMemberForm,
        )
    ),
    tags(
        (name = "Public", description = "Public page and the interest form"),
        (name = "Authentication", description = "Admin login and logout"),
        (name = "Admin", description = "Dashboard, lead listing, CSV export and lead deletion"),
        (name = "Site Content", description = "Carousel, about, background and contact settings"),
        (name = "Members", description = "Organization members"),
        (name = "Projects", description = "Projects, leaders and teams"),
        (name = "Custom Sections", description = "Admin-defined page sections"),
        (name = "Gallery", description = "Ordered photo gallery")
    ),
    info(
        title = "ONG Portal",
        version = "0.1.0",
        description = "Public website and administration panel for a non-profit organization",
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

// Admin routes authenticate with the session cookie
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Cookie(
                        utoipa::openapi::security::ApiKeyValue::new(SESSION_COOKIE),
                    ),
                ),
            );
        }
    }
}

/// Store an upload if the form carried one.
pub(crate) async fn store_optional(
    uploads: &UploadStore,
    category: UploadCategory,
    file: Option<&UploadedFile>,
) -> AppResult<Option<String>> {
    match file {
        Some(file) => Ok(Some(uploads.save(category, &file.filename, &file.data).await?)),
        None => Ok(None),
    }
}

/// Store an upload the form must carry.
pub(crate) async fn store_required(
    uploads: &UploadStore,
    category: UploadCategory,
    file: Option<&UploadedFile>,
) -> AppResult<String> {
    store_optional(uploads, category, file)
        .await?
        .ok_or_else(|| AppError::Validation("Nenhum arquivo selecionado.".to_string()))
}

/// Suffix for a success message when an old file could not be deleted. The
/// database change stands either way.
fn cleanup_note(removed: io::Result<()>, file: &str) -> &'static str {
    match removed {
        Ok(()) => "",
        Err(e) => {
            tracing::warn!(file, error = %e, "could not delete replaced upload");
            " Aviso: não foi possível remover o arquivo antigo."
        }
    }
}

/// Delete a stored file once the database change that dropped a reference to
/// it is done. Files another row still points at are kept. Returns a note for
/// the flash message when the delete failed.
pub(crate) async fn release_file(
    db: &DatabaseConnection,
    uploads: &UploadStore,
    category: UploadCategory,
    filename: &str,
) -> AppResult<&'static str> {
    if filename.is_empty() {
        return Ok("");
    }
    if references::is_referenced(db, category, filename).await? {
        tracing::debug!(category = category.dir_name(), file = %filename, "upload still referenced, kept");
        return Ok("");
    }
    Ok(cleanup_note(uploads.remove(category, filename).await, filename))
}

/// [`release_file`] for the file a replaced reference used to point at.
/// Nothing happens when the new upload kept the same stored name, since it
/// overwrote the old file in place.
pub(crate) async fn release_superseded(
    db: &DatabaseConnection,
    uploads: &UploadStore,
    category: UploadCategory,
    previous: Option<&str>,
    current: &str,
) -> AppResult<&'static str> {
    match previous {
        Some(old) if old != current => release_file(db, uploads, category, old).await,
        _ => Ok(""),
    }
}

/// Unknown ids submitted from an admin form are a stale page, not a missing
/// resource: report them as a flash message.
pub(crate) fn stale_reference(err: AppError) -> AppError {
    match err {
        AppError::NotFound(msg) => AppError::Validation(msg),
        other => other,
    }
}

pub fn create_routes(state: AppState) -> Router {
    // Swagger UI (stateless)
    let swagger_router: Router = SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into();

    // Everything behind the admin session
    let admin_routes = Router::new()
        .route("/admin", get(admin::dashboard))
        .route("/export.csv", get(admin::export_csv))
        .route("/delete/{id}", post(admin::delete_lead))
        .route("/admin/carousel", post(site::upload_carousel))
        .route("/admin/carousel/{filename}/delete", post(site::delete_carousel))
        .route("/admin/about", post(site::update_about))
        .route("/admin/background", post(site::update_background))
        .route("/admin/contact", post(site::update_contact))
        .route("/admin/members", post(members::create_member))
        .route("/admin/members/{id}/delete", post(members::delete_member))
        .route("/admin/projects", post(projects::create_project))
        .route("/admin/projects/{id}/update", post(projects::update_project))
        .route("/admin/projects/{id}/delete", post(projects::delete_project))
        .route("/admin/projects/{id}/leader", post(projects::set_leader))
        .route("/admin/projects/{id}/members", post(projects::add_team_member))
        .route(
            "/admin/projects/{id}/members/{member_id}/remove",
            post(projects::remove_team_member),
        )
        .route("/admin/sections", post(sections::create_section))
        .route("/admin/sections/{id}/update", post(sections::update_section))
        .route("/admin/sections/{id}/delete", post(sections::delete_section))
        .route("/admin/gallery", post(gallery::upload_image))
        .route("/admin/gallery/{id}/delete", post(gallery::delete_image))
        .layer(middleware::from_fn_with_state(state.clone(), require_admin));

    // Public routes, then merge all together
    let app_routes = Router::new()
        .route("/", get(home::index).post(home::submit_interest))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .merge(admin_routes)
        .nest_service("/uploads", ServeDir::new(state.uploads.root()))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .with_state(state);

    Router::new()
        .merge(swagger_router)
        .merge(app_routes)
        .layer(TraceLayer::new_for_http())
}
