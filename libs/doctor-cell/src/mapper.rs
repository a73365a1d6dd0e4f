use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Doctor, DoctorCreateDto, DoctorDto, DoctorUpdateDto};

impl From<Doctor> for DoctorDto {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name,
            crm: doctor.crm,
            crm_uf: doctor.crm_uf,
            date_created: doctor.date_created,
            patient_id: doctor.patient_id,
        }
    }
}

pub fn doctor_from_create(dto: DoctorCreateDto, id: Uuid, date_created: DateTime<Utc>) -> Doctor {
    Doctor {
        id,
        name: dto.name,
        crm: dto.crm,
        crm_uf: dto.crm_uf.to_uppercase(),
        date_created,
        patient_id: dto.patient_id,
    }
}

impl From<DoctorUpdateDto> for Doctor {
    // date_created is never persisted on update.
    fn from(dto: DoctorUpdateDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            crm: dto.crm,
            crm_uf: dto.crm_uf.to_uppercase(),
            date_created: DateTime::<Utc>::default(),
            patient_id: dto.patient_id,
        }
    }
}
