//! User and role-administration request handlers.

use axum::Json;
use axum::extract::{Extension, Query, State};

use wicket_core::access::admin;
use wicket_core::models::access::{CreateAccess, UpdateAccess};
use wicket_core::models::user::{UserListPage, UserProfile};
use wicket_core::users::{self, UserListFilter};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{CreateAccessRequest, MutationResponse, UpdateAccessRequest, UserListQuery};

/// `GET /user` — profile of the authenticated user.
pub async fn profile_handler(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(claims)): Extension<AuthenticatedUser>,
) -> AppResult<Json<UserProfile>> {
    let profile = users::get_profile(&state.pool, claims.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    Ok(Json(profile))
}

/// `GET /user/list` — paginated user listing.
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<UserListQuery>,
) -> AppResult<Json<UserListPage>> {
    let filter = UserListFilter {
        page: query.page,
        limit: query.limit,
        search: query.search,
        status: query.status,
    };
    let page = users::list_users(&state.pool, &filter).await?;
    Ok(Json(page))
}

/// `POST /user/access` — create a role with its capability matrix.
pub async fn create_access_handler(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(claims)): Extension<AuthenticatedUser>,
    Json(body): Json<CreateAccessRequest>,
) -> AppResult<Json<MutationResponse>> {
    let input = CreateAccess {
        name: body.name,
        description: body.description,
        access_detail: body.access_detail,
    };
    admin::create_access(&state.pool, &input, claims.id).await?;
    Ok(Json(MutationResponse {
        success: true,
        message: "Successfully created".into(),
    }))
}

/// `PATCH /user/access` — update a role and replace its capability matrix.
pub async fn update_access_handler(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(claims)): Extension<AuthenticatedUser>,
    Json(body): Json<UpdateAccessRequest>,
) -> AppResult<Json<MutationResponse>> {
    let input = UpdateAccess {
        id: body.id,
        name: body.name,
        description: body.description,
        status: body.status,
        access_detail: body.access_detail,
    };
    admin::update_access(&state.pool, &input, claims.id).await?;
    Ok(Json(MutationResponse {
        success: true,
        message: "Successfully updated".into(),
    }))
}
