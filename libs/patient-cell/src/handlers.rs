use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::{AppError, ModelState};
use shared_utils::validation::duplicate_name_error;
use shared_utils::{validate_dto, Created, OptionalJson};

use crate::mapper::patient_from_create;
use crate::models::{Patient, PatientCreateDto, PatientDto, PatientUpdateDto};
use crate::services::PatientRepository;

/// Collaborators handed to every patient handler.
#[derive(Clone)]
pub struct PatientState {
    pub patients: Arc<dyn PatientRepository>,
    pub config: Arc<AppConfig>,
}

impl PatientState {
    pub fn new(patients: Arc<dyn PatientRepository>, config: Arc<AppConfig>) -> Self {
        Self { patients, config }
    }

    fn location(&self, id: Uuid) -> String {
        format!("{}/patients/{}", self.config.api_prefix(), id)
    }
}

fn missing_body() -> AppError {
    AppError::BadRequest(ModelState::with_error("", "A patient is required in the request body."))
}

#[instrument(skip(state))]
pub async fn list_patients(
    State(state): State<PatientState>,
) -> Result<Json<Vec<PatientDto>>, AppError> {
    let patients = state.patients.list().await?;

    Ok(Json(patients.into_iter().map(PatientDto::from).collect()))
}

/// `GET /patients/{key}`: a UUID key fetches one patient, an integer key
/// searches by CPF, anything else matches no route.
#[instrument(skip(state))]
pub async fn get_patient_by_key(
    State(state): State<PatientState>,
    Path(key): Path<String>,
) -> Result<Response, AppError> {
    if let Ok(id) = key.parse::<Uuid>() {
        return get_patient(&state, id).await.map(IntoResponse::into_response);
    }

    if let Ok(cpf) = key.parse::<i64>() {
        return search_cpf(&state, cpf).await.map(IntoResponse::into_response);
    }

    debug!("Patient key {} is neither an id nor a CPF", key);
    Err(AppError::not_found())
}

pub async fn get_patient(state: &PatientState, id: Uuid) -> Result<Json<PatientDto>, AppError> {
    let patient = state
        .patients
        .get(id)
        .await?
        .ok_or_else(AppError::not_found)?;

    Ok(Json(PatientDto::from(patient)))
}

pub async fn search_cpf(state: &PatientState, cpf: i64) -> Result<Json<Vec<PatientDto>>, AppError> {
    if cpf <= 0 {
        return Err(AppError::not_found());
    }

    let matches = state.patients.find_by_cpf(cpf).await?;
    if matches.is_empty() {
        return Err(AppError::not_found());
    }

    Ok(Json(matches.into_iter().map(PatientDto::from).collect()))
}

#[instrument(skip(state, body))]
pub async fn create_patient(
    State(state): State<PatientState>,
    OptionalJson(body): OptionalJson<PatientCreateDto>,
) -> Result<Created<PatientDto>, AppError> {
    let request = body.ok_or_else(missing_body)?;

    if state.patients.exists_by_name(&request.name).await? {
        return Err(duplicate_name_error(&state.config, "The Patient already Exist"));
    }

    validate_dto(&request)?;

    let patient: Patient = patient_from_create(request, Uuid::new_v4(), Utc::now());

    if !state.patients.create(&patient).await {
        error!("Failed to create patient {}", patient.id);
        return Err(AppError::Persistence(ModelState::with_error(
            "",
            format!("Something went wrong when you trying to save {}", patient.name),
        )));
    }

    info!("Patient created with ID: {}", patient.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, state.location(patient.id))],
        Json(PatientDto::from(patient)),
    ))
}

#[instrument(skip(state, body))]
pub async fn update_patient(
    State(state): State<PatientState>,
    OptionalJson(body): OptionalJson<PatientUpdateDto>,
) -> Result<StatusCode, AppError> {
    let request = body.ok_or_else(missing_body)?;

    validate_dto(&request)?;

    let patient = Patient::from(request);

    if !state.patients.update(&patient).await {
        error!("Failed to update patient {}", patient.id);
        return Err(AppError::Persistence(ModelState::with_error(
            "",
            format!("Something went wrong when you trying to updating {}", patient.name),
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub async fn delete_patient(
    State(state): State<PatientState>,
    Path(key): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = key.parse::<Uuid>().map_err(|_| AppError::not_found())?;

    if !state.patients.exists(id).await? {
        return Err(AppError::not_found());
    }

    let patient = state
        .patients
        .get(id)
        .await?
        .ok_or_else(AppError::not_found)?;

    if !state.patients.delete(&patient).await {
        error!("Failed to delete patient {}", patient.id);
        return Err(AppError::Persistence(ModelState::with_error(
            "",
            format!("Something went wrong when you trying to delete {}", patient.name),
        )));
    }

    info!("Patient deleted: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
