use axum::{routing::get, Router};

use crate::handlers::{
    create_patient, delete_patient, get_patient_by_key, list_patients, update_patient, PatientState,
};

pub fn patient_routes(state: PatientState) -> Router {
    Router::new()
        .route("/", get(list_patients).post(create_patient).patch(update_patient))
        .route("/{key}", get(get_patient_by_key).delete(delete_patient))
        .with_state(state)
}
