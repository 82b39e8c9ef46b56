use crate::api::ErrorResponse;
use crate::get_conn;
use crate::schema::recipes;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Summary projection returned by the list endpoint
#[derive(Debug, Clone, Queryable, Selectable, Serialize, ToSchema)]
#[diesel(table_name = recipes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RecipeSummary {
    pub dish_name: String,
    pub cooking_time: i32,
    pub views: i32,
}

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All recipes, most viewed first", body = [RecipeSummary]),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn list_recipes(State(pool): State<AppState>) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    // Most viewed first; equal view counts order by quickest to cook
    let result: Result<Vec<RecipeSummary>, diesel::result::Error> = recipes::table
        .order((recipes::views.desc(), recipes::cooking_time.asc()))
        .select(RecipeSummary::as_select())
        .load(&mut conn);

    match result {
        Ok(summaries) => (StatusCode::OK, Json(summaries)).into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch recipes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: "Failed to fetch recipes".to_string(),
                }),
            )
                .into_response()
        }
    }
}
