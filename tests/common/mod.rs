use axum::Router;
use pos_backend::{AppState, app};
use sea_orm::MockDatabase;

/// Build the real router over a mocked database so API tests need no live
/// Postgres. Each test scripts the result sets its handler will consume, in
/// query order.
pub fn test_app(db: MockDatabase) -> Router {
    app(AppState {
        db: std::sync::Arc::new(db.into_connection()),
    })
}
