use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use chrono::Utc;
use tracing::{error, info, instrument};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::{AppError, ModelState};
use shared_utils::validation::duplicate_name_error;
use shared_utils::{validate_dto, Created, OptionalJson};

use crate::mapper::doctor_from_create;
use crate::models::{Doctor, DoctorCreateDto, DoctorDto, DoctorUpdateDto};
use crate::services::DoctorRepository;

#[derive(Clone)]
pub struct DoctorState {
    pub doctors: Arc<dyn DoctorRepository>,
    pub config: Arc<AppConfig>,
}

impl DoctorState {
    pub fn new(doctors: Arc<dyn DoctorRepository>, config: Arc<AppConfig>) -> Self {
        Self { doctors, config }
    }
}

fn missing_body() -> AppError {
    AppError::BadRequest(ModelState::with_error("", "A doctor is required in the request body."))
}

fn persistence_error(action: &str, name: &str) -> AppError {
    AppError::Persistence(ModelState::with_error(
        "",
        format!("Something went wrong when you trying to {} {}", action, name),
    ))
}

#[instrument(skip(state))]
pub async fn list_doctors(
    State(state): State<DoctorState>,
) -> Result<Json<Vec<DoctorDto>>, AppError> {
    let doctors = state.doctors.list().await?;

    Ok(Json(doctors.into_iter().map(DoctorDto::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_doctor(
    State(state): State<DoctorState>,
    Path(key): Path<String>,
) -> Result<Json<DoctorDto>, AppError> {
    let id = key.parse::<Uuid>().map_err(|_| AppError::not_found())?;

    let doctor = state
        .doctors
        .get(id)
        .await?
        .ok_or_else(AppError::not_found)?;

    Ok(Json(DoctorDto::from(doctor)))
}

#[instrument(skip(state, body))]
pub async fn create_doctor(
    State(state): State<DoctorState>,
    OptionalJson(body): OptionalJson<DoctorCreateDto>,
) -> Result<Created<DoctorDto>, AppError> {
    let request = body.ok_or_else(missing_body)?;

    if state.doctors.exists_by_name(&request.name).await? {
        return Err(duplicate_name_error(&state.config, "The Doctor already Exist"));
    }

    validate_dto(&request)?;

    let doctor = doctor_from_create(request, Uuid::new_v4(), Utc::now());

    if !state.doctors.create(&doctor).await {
        error!("Failed to create doctor {}", doctor.id);
        return Err(persistence_error("save", &doctor.name));
    }

    info!("Doctor created with ID: {}", doctor.id);

    let location = format!("{}/doctors/{}", state.config.api_prefix(), doctor.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(DoctorDto::from(doctor)),
    ))
}

#[instrument(skip(state, body))]
pub async fn update_doctor(
    State(state): State<DoctorState>,
    OptionalJson(body): OptionalJson<DoctorUpdateDto>,
) -> Result<StatusCode, AppError> {
    let request = body.ok_or_else(missing_body)?;

    validate_dto(&request)?;

    let doctor = Doctor::from(request);

    if !state.doctors.update(&doctor).await {
        error!("Failed to update doctor {}", doctor.id);
        return Err(persistence_error("updating", &doctor.name));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub async fn delete_doctor(
    State(state): State<DoctorState>,
    Path(key): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = key.parse::<Uuid>().map_err(|_| AppError::not_found())?;

    if !state.doctors.exists(id).await? {
        return Err(AppError::not_found());
    }

    let doctor = state
        .doctors
        .get(id)
        .await?
        .ok_or_else(AppError::not_found)?;

    if !state.doctors.delete(&doctor).await {
        error!("Failed to delete doctor {}", doctor.id);
        return Err(persistence_error("delete", &doctor.name));
    }

    info!("Doctor deleted: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
