use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderValue, Method, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_helpers::ErrorResponse;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};

use crate::codec;
use crate::error::{UserError, UserResult};
use crate::models::{CreateUserPayload, CreatedResponse, UpdateUserPayload, User};
use crate::repository::UserRepository;
use crate::service::UserService;
use crate::validator::parse_id;

/// `Server` header value used when none is configured
pub const DEFAULT_SERVER_NAME: &str = "User Service";

const TAG: &str = "users";

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, get_user, create_user, update_user, delete_user),
    components(schemas(User, CreateUserPayload, UpdateUserPayload, CreatedResponse, ErrorResponse)),
    tags(
        (name = TAG, description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Shared handler state
pub struct UsersState<R: UserRepository> {
    service: Arc<UserService<R>>,
    server_name: HeaderValue,
}

impl<R: UserRepository> Clone for UsersState<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            server_name: self.server_name.clone(),
        }
    }
}

/// Create the users router.
///
/// Each path accepts exactly one method; anything else is answered with 405.
/// `server_name` is sent as the `Server` header on read responses.
pub fn router<R: UserRepository + 'static>(
    service: UserService<R>,
    server_name: HeaderValue,
) -> Router {
    let state = UsersState {
        service: Arc::new(service),
        server_name,
    };

    Router::new()
        .route("/users/show", get(list_users::<R>).fallback(reject_method))
        .route("/users", get(get_user::<R>).fallback(reject_method))
        .route("/users/create", post(create_user::<R>).fallback(reject_method))
        .route("/users/update", post(update_user::<R>).fallback(reject_method))
        .route("/users/delete", get(delete_user::<R>).fallback(reject_method))
        .with_state(state)
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
struct IdParams {
    /// User id
    id: Option<String>,
}

fn query_id(query: Result<Query<IdParams>, QueryRejection>) -> UserResult<i32> {
    match query {
        Ok(Query(params)) => parse_id(params.id.as_deref()),
        Err(rejection) => Err(UserError::InvalidId(rejection.body_text())),
    }
}

/// JSON body with the headers every read endpoint sends.
fn read_response(server_name: &HeaderValue, body: Vec<u8>) -> Response {
    (
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*")),
            (header::SERVER, server_name.clone()),
            (header::CONTENT_TYPE, HeaderValue::from_static("application/json")),
        ],
        body,
    )
        .into_response()
}

async fn reject_method(method: Method) -> UserError {
    UserError::MethodNotAllowed(method)
}

/// List all users
#[utoipa::path(
    get,
    path = "/users/show",
    tag = TAG,
    responses(
        (status = 200, description = "All users ordered by id", body = Vec<User>),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Storage or encoding failure", body = ErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(State(state): State<UsersState<R>>) -> UserResult<Response> {
    let users = state.service.list_users().await?;
    let body = codec::encode(&users)?;
    Ok(read_response(&state.server_name, body))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/users",
    tag = TAG,
    params(IdParams),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Missing or non-integer id", body = ErrorResponse),
        (status = 404, description = "No user with this id", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Storage or encoding failure", body = ErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(state): State<UsersState<R>>,
    query: Result<Query<IdParams>, QueryRejection>,
) -> UserResult<Response> {
    let id = query_id(query)?;
    let user = state.service.get_user(id).await?;
    let body = codec::encode(&user)?;
    Ok(read_response(&state.server_name, body))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users/create",
    tag = TAG,
    request_body = CreateUserPayload,
    responses(
        (status = 200, description = "User created", body = CreatedResponse),
        (status = 400, description = "Malformed body or missing field", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(state): State<UsersState<R>>,
    body: Bytes,
) -> UserResult<Json<CreatedResponse>> {
    let payload: CreateUserPayload = codec::decode(&body)?;
    let id = state.service.create_user(payload).await?;
    Ok(Json(CreatedResponse { id }))
}

/// Replace a user's fields
#[utoipa::path(
    post,
    path = "/users/update",
    tag = TAG,
    request_body = UpdateUserPayload,
    responses(
        (status = 200, description = "User updated"),
        (status = 400, description = "Malformed body, missing field or id", body = ErrorResponse),
        (status = 404, description = "No user with this id", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(state): State<UsersState<R>>,
    body: Bytes,
) -> UserResult<()> {
    let payload: UpdateUserPayload = codec::decode(&body)?;
    state.service.update_user(payload).await
}

/// Delete a user; succeeds whether or not the id existed
#[utoipa::path(
    get,
    path = "/users/delete",
    tag = TAG,
    params(IdParams),
    responses(
        (status = 200, description = "User deleted or already absent"),
        (status = 400, description = "Missing or non-integer id", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(state): State<UsersState<R>>,
    query: Result<Query<IdParams>, QueryRejection>,
) -> UserResult<()> {
    let id = query_id(query)?;
    state.service.delete_user(id).await
}
