//! Field-by-field conversions between the `Patient` row and its DTOs.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Patient, PatientCreateDto, PatientDto, PatientUpdateDto};

impl From<Patient> for PatientDto {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id,
            name: patient.name,
            cpf: patient.cpf,
            date_created: patient.date_created,
            doctor_id: patient.doctor_id,
        }
    }
}

/// Builds a new row from a create request; identity and creation time are
/// assigned here and never change afterwards.
pub fn patient_from_create(dto: PatientCreateDto, id: Uuid, date_created: DateTime<Utc>) -> Patient {
    Patient {
        id,
        name: dto.name,
        cpf: dto.cpf,
        date_created,
        doctor_id: dto.doctor_id,
    }
}

impl From<PatientUpdateDto> for Patient {
    // date_created is a placeholder: repositories only write mutable fields on update.
    fn from(dto: PatientUpdateDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            cpf: dto.cpf,
            date_created: DateTime::<Utc>::default(),
            doctor_id: dto.doctor_id,
        }
    }
}
