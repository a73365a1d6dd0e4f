use std::borrow::Cow;

use tracing::debug;
use validator::{Validate, ValidationError, ValidationErrors};

use shared_config::{AppConfig, DuplicateNameStatus};
use shared_models::{AppError, ModelState};

/// Runs the `validator` rules on a DTO, turning failures into a `400`.
pub fn validate_dto<T: Validate>(dto: &T) -> Result<(), AppError> {
    dto.validate().map_err(|errors| {
        let state = model_state_from(&errors);
        debug!("Validation failed: {}", state);
        AppError::ValidationError(state)
    })
}

pub fn model_state_from(errors: &ValidationErrors) -> ModelState {
    let mut state = ModelState::new();

    for (field, field_errors) in errors.field_errors() {
        let field = field.to_string();
        for error in field_errors.iter() {
            let message = match &error.message {
                Some(message) => message.to_string(),
                None => format!("The field {} is invalid ({}).", field, error.code),
            };
            state.add_model_error(field.clone(), message);
        }
    }

    state
}

/// Rejects values that are empty or only whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::Borrowed("The field is required and must not be blank."));
        return Err(error);
    }
    Ok(())
}

/// Accepts a two-letter state code such as `SP` or `rj`.
pub fn state_code(value: &str) -> Result<(), ValidationError> {
    if value.len() != 2 || !value.chars().all(|c| c.is_ascii_alphabetic()) {
        let mut error = ValidationError::new("state_code");
        error.message = Some(Cow::Borrowed("The CRMUF field must be a two-letter state code."));
        return Err(error);
    }
    Ok(())
}

/// Rejection for a create request whose name is already taken.
///
/// Answered with `404` unless the deployment opted into `409`.
pub fn duplicate_name_error(config: &AppConfig, message: &str) -> AppError {
    let state = ModelState::with_error("", message);
    match config.duplicate_name_status {
        DuplicateNameStatus::NotFound => AppError::NotFound(state),
        DuplicateNameStatus::Conflict => AppError::Conflict(state),
    }
}
