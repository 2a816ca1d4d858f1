use std::sync::Arc;

use axum::{extract::State, Json};
use roster_core::{NewUser, User};

use crate::{errors::ServerResult, extract::ValidatedJson, AppState};

pub async fn list_users(State(state): State<Arc<AppState>>) -> ServerResult<Json<Vec<User>>> {
    let users = state.db.find_all_users().await?;
    Ok(Json(users))
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    ValidatedJson(new_user): ValidatedJson<NewUser>,
) -> ServerResult<Json<User>> {
    let user = state.db.insert_user(&new_user).await?;
    tracing::debug!(id = user.id, "Created user");
    Ok(Json(user))
}
