//! Handlers for the user CRUD endpoints.

use axum::{
    Json,
    extract::{OriginalUri, Path, State},
    http::{StatusCode, Uri},
};
use validator::Validate;

use crate::api::dto::user::UserDto;
use crate::error::{AppError, ErrorResponse};
use crate::state::AppState;

/// Request context description carried in error bodies.
fn request_description(uri: &Uri) -> String {
    format!("uri={}", uri.path())
}

/// Creates a new user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// {
///   "firstName": "Ada",
///   "lastName": "Lovelace",
///   "email": "ada@example.com"
/// }
/// ```
///
/// # Responses
///
/// - **201 Created** with the stored user, including its assigned id
/// - **400 Bad Request** if validation fails
/// - **404 Not Found** with code `EMAIL_ALREADY_EXIST` if the email is taken
///   (status inherited from the original service contract)
pub async fn create_user_handler(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<UserDto>,
) -> Result<(StatusCode, Json<UserDto>), ErrorResponse> {
    payload
        .validate()
        .map_err(|e| AppError::from(e).with_request(request_description(&uri)))?;

    let user = state
        .user_service
        .create_user(payload.into_new_user())
        .await
        .map_err(|e| e.with_request(request_description(&uri)))?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Fetches a single user by id.
///
/// # Endpoint
///
/// `GET /api/users/{id}`
///
/// # Responses
///
/// - **200 OK** with the user
/// - **404 Not Found** with code `USER_NOT_FOUND` if no user has that id
pub async fn get_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<UserDto>, ErrorResponse> {
    let user = state
        .user_service
        .get_user_by_id(id)
        .await
        .map_err(|e| e.with_request(request_description(&uri)))?;

    Ok(Json(user.into()))
}

/// Lists all users.
///
/// # Endpoint
///
/// `GET /api/users`
///
/// # Responses
///
/// - **200 OK** with an array of users (order unspecified)
pub async fn list_users_handler(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<UserDto>>, ErrorResponse> {
    let users = state
        .user_service
        .get_all_users()
        .await
        .map_err(|e| e.with_request(request_description(&uri)))?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Replaces the mutable fields of an existing user.
///
/// # Endpoint
///
/// `PUT /api/users/{id}`
///
/// The path parameter identifies the user. Ids are immutable after
/// creation; an id carried in the request body is silently ignored.
///
/// # Responses
///
/// - **200 OK** with the updated user
/// - **400 Bad Request** if validation fails
/// - **404 Not Found** with code `USER_NOT_FOUND` or `EMAIL_ALREADY_EXIST`
pub async fn update_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<UserDto>,
) -> Result<Json<UserDto>, ErrorResponse> {
    payload
        .validate()
        .map_err(|e| AppError::from(e).with_request(request_description(&uri)))?;

    let user = state
        .user_service
        .update_user(id, payload.into_update())
        .await
        .map_err(|e| e.with_request(request_description(&uri)))?;

    Ok(Json(user.into()))
}

/// Deletes a user by id.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}`
///
/// # Responses
///
/// - **200 OK** with a plain-text confirmation
/// - **404 Not Found** with code `USER_NOT_FOUND` if no user has that id
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<&'static str, ErrorResponse> {
    state
        .user_service
        .delete_user(id)
        .await
        .map_err(|e| e.with_request(request_description(&uri)))?;

    Ok("User successfully deleted!")
}
