use axum::{Json, extract::Path, extract::State, http::StatusCode};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::AppState;
use crate::entities::{menus, prelude::*};
use crate::models::menu::{MenuPayload, MessageResponse};
use crate::models::order::ErrorResponse;

/// GET /menu
pub async fn get_all_menus(
    State(state): State<AppState>,
) -> Result<Json<Vec<menus::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let menus = Menus::find()
        .order_by_asc(menus::Column::Id)
        .all(&*state.db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Database error: {}", e),
                }),
            )
        })?;

    Ok(Json(menus))
}

/// GET /menu/{id}
pub async fn get_menu_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<menus::Model>, (StatusCode, Json<ErrorResponse>)> {
    let menu = Menus::find_by_id(id)
        .one(&*state.db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Database error: {}", e),
                }),
            )
        })?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Menu {} not found", id),
                }),
            )
        })?;

    Ok(Json(menu))
}

/// POST /menu
pub async fn create_menu(
    State(state): State<AppState>,
    Json(payload): Json<MenuPayload>,
) -> Result<(StatusCode, Json<menus::Model>), (StatusCode, Json<ErrorResponse>)> {
    let new_menu = menus::ActiveModel {
        image: Set(payload.image),
        name: Set(payload.name),
        category: Set(payload.category),
        price: Set(payload.price),
        description: Set(payload.description),
        ..Default::default()
    };

    let created = new_menu.insert(&*state.db).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to create menu: {}", e),
            }),
        )
    })?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /menu/{id}
pub async fn update_menu(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<MenuPayload>,
) -> Result<Json<menus::Model>, (StatusCode, Json<ErrorResponse>)> {
    let existing = Menus::find_by_id(id)
        .one(&*state.db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Database error: {}", e),
                }),
            )
        })?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Menu {} not found", id),
                }),
            )
        })?;

    let mut updated: menus::ActiveModel = existing.into();
    updated.image = Set(payload.image);
    updated.name = Set(payload.name);
    updated.category = Set(payload.category);
    updated.price = Set(payload.price);
    updated.description = Set(payload.description);

    let saved = updated.update(&*state.db).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to update menu: {}", e),
            }),
        )
    })?;

    Ok(Json(saved))
}

/// DELETE /menu/{id}
pub async fn delete_menu(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    let result = Menus::delete_by_id(id).exec(&*state.db).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to delete menu: {}", e),
            }),
        )
    })?;

    if result.rows_affected == 0 {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Menu {} not found", id),
            }),
        ));
    }

    Ok(Json(MessageResponse {
        message: "Menu deleted successfully".to_string(),
    }))
}
