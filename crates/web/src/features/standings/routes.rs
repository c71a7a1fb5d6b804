use axum::{Router, routing::get};

use super::handlers::{
    get_checklist_marks, get_combined_grand_marks, get_grand_marks, get_individual_toppers,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/grand-marks", get(get_grand_marks))
        .route("/grand-marks/combined", get(get_combined_grand_marks))
        .route("/admin-checklist-marks", get(get_checklist_marks))
        .route("/individual-toppers", get(get_individual_toppers))
}
