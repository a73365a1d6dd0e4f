use axum::{routing::get, Router};

use crate::handlers::{
    create_doctor, delete_doctor, get_doctor, list_doctors, update_doctor, DoctorState,
};

pub fn doctor_routes(state: DoctorState) -> Router {
    Router::new()
        .route("/", get(list_doctors).post(create_doctor).patch(update_doctor))
        .route("/{id}", get(get_doctor).delete(delete_doctor))
        .with_state(state)
}
