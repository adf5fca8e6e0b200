use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    controller::validate_dto,
    dto::{
        api::ErrorDto,
        auth::{AuthResponseDto, LoginDto, RegisterDto, UserDto},
    },
    error::AppError,
    middleware::auth::AuthUser,
    model::user::{LoginParams, RegisterParams},
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user.
///
/// Creates an account with the default `user` role and returns a signed
/// bearer token alongside the profile. The email must not be taken.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Registration data (email, password, optional name)
///
/// # Returns
/// - `201 Created` - Account created; body carries token and user
/// - `400 Bad Request` - Malformed email or password too short
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Hashing or database error
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Successfully registered", body = AuthResponseDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    validate_dto(&payload)?;

    let service = AuthService::new(&state.db, state.bcrypt_cost);

    let user = service.register(RegisterParams::from_dto(payload)).await?;
    let token = state.jwt.issue(&user)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Login with email and password.
///
/// Verifies credentials and returns a fresh bearer token. Unknown email and
/// wrong password return the identical error.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Login credentials
///
/// # Returns
/// - `200 OK` - Credentials valid; body carries token and user
/// - `400 Bad Request` - Malformed request body
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Hashing or database error
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = AuthResponseDto),
        (status = 400, description = "Invalid login data", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    validate_dto(&payload)?;

    let service = AuthService::new(&state.db, state.bcrypt_cost);

    let user = service.login(LoginParams::from_dto(payload)).await?;
    let token = state.jwt.issue(&user)?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Get the current user profile.
///
/// Requires a valid bearer token; returns the profile of the token subject.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `auth` - Claims extracted from the verified bearer token
///
/// # Returns
/// - `200 OK` - Current profile
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Token subject no longer exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = AUTH_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Current user profile", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, state.bcrypt_cost);

    let user = service.get_profile(auth.user_id()?).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
