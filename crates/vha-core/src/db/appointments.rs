//! Appointment database operations.
//!
//! Symptoms are stored as a JSON text column; the triage verdict is flattened
//! into level/advice columns and round-trips unchanged. It is never
//! recomputed on read.

use rusqlite::{params, Row};

use super::{Database, DbError, DbResult};
use crate::models::Appointment;
use crate::triage::{Triage, TriageLevel};

impl Database {
    /// Upsert an appointment keyed by its id.
    pub fn upsert_appointment(&self, appointment: &Appointment) -> DbResult<()> {
        let symptoms_json = serde_json::to_string(&appointment.symptoms)?;
        let level_str = level_to_string(&appointment.triage.level);

        self.conn.execute(
            r#"
            INSERT INTO appointments (
                id, patient_id, symptoms, triage_level, triage_advice,
                status, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(id) DO UPDATE SET
                status = excluded.status
            "#,
            params![
                appointment.id,
                appointment.patient_id,
                symptoms_json,
                level_str,
                appointment.triage.advice,
                appointment.status,
                appointment.created_at,
            ],
        )?;
        Ok(())
    }

    /// List all appointments.
    pub fn list_appointments(&self) -> DbResult<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, patient_id, symptoms, triage_level, triage_advice,
                   status, created_at
            FROM appointments
            "#,
        )?;
        let rows = stmt.query_map([], row_to_appointment)?;
        let mut appointments = Vec::new();
        for row in rows {
            appointments.push(parse_appointment(row?)?);
        }
        Ok(appointments)
    }

    /// List appointments for one patient.
    pub fn list_appointments_for_patient(&self, patient_id: &str) -> DbResult<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, patient_id, symptoms, triage_level, triage_advice,
                   status, created_at
            FROM appointments
            WHERE patient_id = ?
            "#,
        )?;
        let rows = stmt.query_map([patient_id], row_to_appointment)?;
        let mut appointments = Vec::new();
        for row in rows {
            appointments.push(parse_appointment(row?)?);
        }
        Ok(appointments)
    }
}

/// Raw appointment row before JSON columns are decoded.
struct AppointmentRow {
    id: String,
    patient_id: String,
    symptoms: String,
    triage_level: String,
    triage_advice: String,
    status: String,
    created_at: String,
}

fn row_to_appointment(row: &Row<'_>) -> rusqlite::Result<AppointmentRow> {
    Ok(AppointmentRow {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        symptoms: row.get(2)?,
        triage_level: row.get(3)?,
        triage_advice: row.get(4)?,
        status: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn level_to_string(level: &TriageLevel) -> &'static str {
    match level {
        TriageLevel::Emergency => "EMERGENCY",
        TriageLevel::Urgent => "URGENT",
        TriageLevel::Advice => "ADVICE",
        TriageLevel::Unknown => "UNKNOWN",
    }
}

fn string_to_level(s: &str) -> Result<TriageLevel, DbError> {
    match s {
        "EMERGENCY" => Ok(TriageLevel::Emergency),
        "URGENT" => Ok(TriageLevel::Urgent),
        "ADVICE" => Ok(TriageLevel::Advice),
        "UNKNOWN" => Ok(TriageLevel::Unknown),
        other => Err(DbError::Constraint(format!(
            "unknown triage level: {}",
            other
        ))),
    }
}

fn parse_appointment(raw: AppointmentRow) -> Result<Appointment, DbError> {
    let symptoms: Vec<String> = serde_json::from_str(&raw.symptoms)?;
    let level = string_to_level(&raw.triage_level)?;
    Ok(Appointment {
        id: raw.id,
        patient_id: raw.patient_id,
        symptoms,
        triage: Triage {
            level,
            advice: raw.triage_advice,
        },
        status: raw.status,
        created_at: raw.created_at,
    })
}
