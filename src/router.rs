//! Axum route configuration and API documentation.
//!
//! Assembles the versioned REST API under `/api/v1`, the health probe, and
//! the Swagger UI serving the utoipa-generated OpenAPI document.

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{auth, guest, invitation, stats, table},
    dto,
    state::AppState,
};

/// Registers the bearer-token security scheme referenced by the protected
/// endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        auth::register,
        auth::login,
        auth::me,
        guest::create_guest,
        guest::get_guests,
        guest::get_guest_by_id,
        guest::update_guest,
        guest::delete_guest,
        invitation::create_invitation,
        invitation::create_invitation_with_guests,
        invitation::get_invitations,
        invitation::get_invitation_by_id,
        invitation::update_invitation,
        invitation::delete_invitation,
        table::create_table,
        table::get_tables,
        table::get_table_by_id,
        table::update_table,
        table::delete_table,
        stats::get_dashboard_stats,
        stats::get_table_stats,
    ),
    components(schemas(
        dto::api::ErrorDto,
        dto::api::ErrorBody,
        dto::api::HealthDto,
        dto::auth::RegisterDto,
        dto::auth::LoginDto,
        dto::auth::UserDto,
        dto::auth::RoleDto,
        dto::auth::AuthResponseDto,
        dto::guest::SideDto,
        dto::guest::StatusDto,
        dto::guest::CreateGuestDto,
        dto::guest::UpdateGuestDto,
        dto::guest::GuestDto,
        dto::invitation::CreateInvitationDto,
        dto::invitation::UpdateInvitationDto,
        dto::invitation::InvitationGuestDto,
        dto::invitation::CreateInvitationWithGuestsDto,
        dto::invitation::InvitationDto,
        dto::invitation::InvitationDetailDto,
        dto::table::CreateTableDto,
        dto::table::UpdateTableDto,
        dto::table::TableDto,
        dto::stats::DashboardStatsDto,
        dto::stats::TableStatsItemDto,
        dto::stats::TableStatsDto,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login, and profile"),
        (name = "guests", description = "Guest management"),
        (name = "invitations", description = "Invitation management"),
        (name = "tables", description = "Seating table management"),
        (name = "stats", description = "Aggregate statistics"),
        (name = "health", description = "Service health"),
    )
)]
struct ApiDoc;

/// Health probe.
///
/// # Returns
/// - `200 OK` - The service is up
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = dto::api::HealthDto)
    ),
)]
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(dto::api::HealthDto {
            status: "ok".to_string(),
        }),
    )
}

/// Builds the application router with all routes, documentation, and
/// middleware layers attached.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        .route("/guests", post(guest::create_guest).get(guest::get_guests))
        .route(
            "/guests/{id}",
            get(guest::get_guest_by_id)
                .put(guest::update_guest)
                .delete(guest::delete_guest),
        )
        .route(
            "/invitations",
            post(invitation::create_invitation).get(invitation::get_invitations),
        )
        .route(
            "/invitations/with-guests",
            post(invitation::create_invitation_with_guests),
        )
        .route(
            "/invitations/{id}",
            get(invitation::get_invitation_by_id)
                .put(invitation::update_invitation)
                .delete(invitation::delete_invitation),
        )
        .route("/tables", post(table::create_table).get(table::get_tables))
        .route(
            "/tables/{id}",
            get(table::get_table_by_id)
                .put(table::update_table)
                .delete(table::delete_table),
        )
        .route("/stats/dashboard", get(stats::get_dashboard_stats))
        .route("/stats/tables", get(stats::get_table_stats));

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
