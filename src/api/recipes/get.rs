use crate::api::ErrorResponse;
use crate::get_conn;
use crate::models::Recipe;
use crate::schema::recipes;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Full recipe record. `views` already counts the request that fetched it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: i32,
    pub dish_name: String,
    pub views: i32,
    pub cooking_time: i32,
    pub ingredients: String,
    pub description: String,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        RecipeResponse {
            id: recipe.id,
            dish_name: recipe.dish_name,
            views: recipe.views,
            cooking_time: recipe.cooking_time,
            ingredients: recipe.ingredients,
            description: recipe.description,
        }
    }
}

#[utoipa::path(
    get,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = RecipeResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn get_recipe(State(pool): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    // Count the view and re-read in one transaction. The increment is a
    // single UPDATE so interleaved requests cannot lose counts; the commit
    // happens before the response is serialized.
    let result: Result<Recipe, diesel::result::Error> = conn.transaction(|conn| {
        let updated = diesel::update(recipes::table.find(id))
            .set(recipes::views.eq(recipes::views + 1))
            .execute(conn)?;

        if updated == 0 {
            return Err(diesel::NotFound);
        }

        recipes::table
            .find(id)
            .select(Recipe::as_select())
            .first(conn)
    });

    match result {
        Ok(recipe) => (StatusCode::OK, Json(RecipeResponse::from(recipe))).into_response(),
        Err(diesel::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                detail: "Recipe not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch recipe {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: "Failed to fetch recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
