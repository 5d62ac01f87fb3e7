//! Export transform - two-sheet workbook of a user's recorded hours

use std::collections::HashMap;

use thiserror::Error;
use uuid::Uuid;

use crate::entities::{ClinicalLog, SupervisionLog};

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv output is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("csv writer could not be flushed: {0}")]
    Flush(String),

    #[error("unknown sheet: {0}")]
    UnknownSheet(String),
}

/// Sheets of an export workbook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    ClinicalLogs,
    SupervisionLogs,
}

impl SheetKind {
    /// Sheet title shown to users
    pub const fn title(self) -> &'static str {
        match self {
            Self::ClinicalLogs => "Clinical Logs",
            Self::SupervisionLogs => "Supervision Logs",
        }
    }

    /// URL-safe identifier
    pub const fn slug(self) -> &'static str {
        match self {
            Self::ClinicalLogs => "clinical-logs",
            Self::SupervisionLogs => "supervision-logs",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Self, ExportError> {
        match slug {
            "clinical-logs" => Ok(Self::ClinicalLogs),
            "supervision-logs" => Ok(Self::SupervisionLogs),
            other => Err(ExportError::UnknownSheet(other.to_string())),
        }
    }
}

/// One named table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub kind: SheetKind,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// Render the sheet as CSV with a header record
    pub fn to_csv(&self) -> Result<String, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::Flush(e.error().to_string()))?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// The full export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn sheet(&self, kind: SheetKind) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.kind == kind)
    }
}

pub const CLINICAL_HEADERS: [&str; 5] =
    ["directHours", "indirectHours", "site", "supervisor", "status"];
pub const SUPERVISION_HEADERS: [&str; 1] = ["supervisionHours"];

/// Build the workbook for `user_id`.
///
/// Only accepted clinical logs are exported. The supervisor column carries the
/// name found in `supervisor_names`, or the supervisor id when unknown.
pub fn build_workbook(
    user_id: Uuid,
    clinical_logs: &[ClinicalLog],
    supervision_logs: &[SupervisionLog],
    supervisor_names: &HashMap<Uuid, String>,
) -> Workbook {
    let clinical_rows = clinical_logs
        .iter()
        .filter(|log| log.user_id == user_id && log.counts_toward_progress())
        .map(|log| {
            let supervisor = supervisor_names
                .get(&log.supervisor_id)
                .cloned()
                .unwrap_or_else(|| log.supervisor_id.to_string());
            vec![
                log.direct_hours.to_string(),
                log.indirect_hours.to_string(),
                log.site.clone(),
                supervisor,
                log.status.to_string(),
            ]
        })
        .collect();

    let supervision_rows = supervision_logs
        .iter()
        .filter(|log| log.user_id == user_id)
        .map(|log| vec![log.supervision_hours.to_string()])
        .collect();

    Workbook {
        sheets: vec![
            Sheet {
                kind: SheetKind::ClinicalLogs,
                headers: CLINICAL_HEADERS.iter().map(ToString::to_string).collect(),
                rows: clinical_rows,
            },
            Sheet {
                kind: SheetKind::SupervisionLogs,
                headers: SUPERVISION_HEADERS.iter().map(ToString::to_string).collect(),
                rows: supervision_rows,
            },
        ],
    }
}
