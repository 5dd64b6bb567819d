//! Administrators, supervisors, field workers and citizen users.

use serde::{Deserialize, Serialize};

use crate::error::TypesError;
use crate::id::StaffId;

/// Maximum length of a worker's display name.
pub const WORKER_NAME_MAX_LEN: usize = 15;

/// Number of digits in a worker's phone number.
pub const WORKER_PHONE_DIGITS: usize = 11;

/// A populated user reference embedded in other records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    #[serde(rename = "_id", default)]
    pub id: Option<StaffId>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// The signed-in operator, as returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl AdminUser {
    pub const ADMIN_ROLE: &'static str = "admin";

    /// Only administrators may use this client.
    pub fn is_admin(&self) -> bool {
        self.role == Self::ADMIN_ROLE
    }
}

/// A registered citizen.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: StaffId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A supervisor account with its roll-up counters.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supervisor {
    #[serde(rename = "_id")]
    pub id: StaffId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub workers_count: u32,
    #[serde(default)]
    pub permanent_resolved_reports: u32,
    /// Backend rating such as `Excellent` or `Needs Improvement`.
    #[serde(default)]
    pub performance: Option<String>,
}

/// Per-supervisor breakdown from `/supervisors/{id}/performance`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupervisorPerformance {
    #[serde(default)]
    pub resolved: u32,
    #[serde(default)]
    pub in_progress: u32,
    #[serde(default)]
    pub permanent_resolved: u32,
    #[serde(default)]
    pub rejected: u32,
    #[serde(default)]
    pub out_of_scope: u32,
    #[serde(default)]
    pub workers_count: u32,
    #[serde(default)]
    pub success_rate: Option<f64>,
    #[serde(default)]
    pub performance: Option<String>,
}

/// Fields for creating a supervisor account.
#[derive(Clone, Debug, Serialize)]
pub struct SupervisorDraft {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SupervisorDraft {
    pub fn validate(&self) -> Result<(), TypesError> {
        require("username", &self.username)?;
        require("email", &self.email)?;
        if !self.email.contains('@') {
            return Err(TypesError::InvalidField {
                field: "email",
                reason: "must be an email address".into(),
            });
        }
        require("password", &self.password)
    }
}

/// A field worker.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Worker {
    #[serde(rename = "_id")]
    pub id: StaffId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub supervisor: Option<UserRef>,
}

/// Fields for creating or updating a worker.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerDraft {
    pub name: String,
    pub phone: String,
    pub area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor_id: Option<StaffId>,
}

impl WorkerDraft {
    pub fn validate(&self) -> Result<(), TypesError> {
        require("name", &self.name)?;
        if self.name.chars().count() > WORKER_NAME_MAX_LEN {
            return Err(TypesError::InvalidField {
                field: "name",
                reason: format!("must be at most {WORKER_NAME_MAX_LEN} characters"),
            });
        }
        if self.phone.len() != WORKER_PHONE_DIGITS
            || !self.phone.chars().all(|c| c.is_ascii_digit())
        {
            return Err(TypesError::InvalidField {
                field: "phone",
                reason: format!("must be {WORKER_PHONE_DIGITS} digits"),
            });
        }
        require("area", &self.area)
    }
}

/// A single attendance entry for a worker.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tasks_completed: u32,
    #[serde(default)]
    pub supervisor: Option<UserRef>,
}

impl AttendanceRecord {
    pub fn is_present(&self) -> bool {
        self.status == "present"
    }
}

/// Response of `/workers/{id}/attendance`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkerAttendance {
    #[serde(default)]
    pub worker: Option<Worker>,
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

impl WorkerAttendance {
    pub fn days_present(&self) -> usize {
        self.attendance.iter().filter(|a| a.is_present()).count()
    }

    pub fn tasks_completed(&self) -> u32 {
        self.attendance.iter().map(|a| a.tasks_completed).sum()
    }
}

fn require(field: &'static str, value: &str) -> Result<(), TypesError> {
    if value.trim().is_empty() {
        return Err(TypesError::InvalidField {
            field,
            reason: "is required".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, phone: &str, area: &str) -> WorkerDraft {
        WorkerDraft {
            name: name.into(),
            phone: phone.into(),
            area: area.into(),
            supervisor_id: None,
        }
    }

    #[test]
    fn worker_draft_validation() {
        assert!(draft("Ali", "03001234567", "North").validate().is_ok());
        assert!(draft(" ", "03001234567", "North").validate().is_err());
        assert!(draft("Ali", "0300123456", "North").validate().is_err());
        assert!(draft("Ali", "0300123456x", "North").validate().is_err());
        assert!(draft("Ali", "03001234567", "").validate().is_err());
        assert!(draft("A very long worker name", "03001234567", "North")
            .validate()
            .is_err());
    }

    #[test]
    fn worker_draft_wire_names() {
        let mut d = draft("Ali", "03001234567", "North");
        d.supervisor_id = Some(StaffId::new("s1").unwrap());
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["supervisorId"], "s1");
        assert!(json.get("supervisor_id").is_none());
    }

    #[test]
    fn supervisor_draft_validation() {
        let ok = SupervisorDraft {
            username: "sara".into(),
            email: "sara@example.org".into(),
            password: "secret".into(),
        };
        assert!(ok.validate().is_ok());
        let bad_email = SupervisorDraft {
            email: "sara".into(),
            ..ok.clone()
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn attendance_roll_up() {
        let json = r#"{"attendance": [
            {"_id": "a1", "date": "2024-03-01", "status": "present", "tasksCompleted": 3},
            {"_id": "a2", "date": "2024-03-02", "status": "absent", "tasksCompleted": 0},
            {"_id": "a3", "date": "2024-03-03", "status": "present", "tasksCompleted": 2}
        ]}"#;
        let att: WorkerAttendance = serde_json::from_str(json).unwrap();
        assert_eq!(att.days_present(), 2);
        assert_eq!(att.tasks_completed(), 5);
    }

    #[test]
    fn admin_role_check() {
        let json = r#"{"_id": "a1", "username": "root", "email": "r@x.org", "role": "admin"}"#;
        let user: AdminUser = serde_json::from_str(json).unwrap();
        assert!(user.is_admin());
        let sup = AdminUser {
            role: "supervisor".into(),
            ..user
        };
        assert!(!sup.is_admin());
    }
}
