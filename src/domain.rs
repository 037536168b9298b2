//! Domain vocabulary: roles, screens, the session pair, and the shape of
//! the mock clinic records.
//!
//! Everything here is plain data. Records are read-only stand-ins for a
//! backend; nothing validates or mutates them.

use std::fmt;
use std::str::FromStr;

/// The user's view category, chosen on the Login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Doctor,
    Nurse,
    Receptionist,
}

impl Role {
    /// Every role in the order the Login screen lays them out.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Doctor, Role::Nurse, Role::Receptionist];

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Doctor => "Doctor",
            Role::Nurse => "Nurse",
            Role::Receptionist => "Receptionist",
        }
    }

    /// Position within [`Role::ALL`].
    pub fn index(self) -> usize {
        match self {
            Role::Admin => 0,
            Role::Doctor => 1,
            Role::Nurse => 2,
            Role::Receptionist => 3,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Doctor
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a role from CLI or config text. Case-insensitive.
impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "doctor" => Ok(Role::Doctor),
            "nurse" => Ok(Role::Nurse),
            "receptionist" => Ok(Role::Receptionist),
            other => Err(format!(
                "unknown role: '{other}' (expected admin/doctor/nurse/receptionist)"
            )),
        }
    }
}

/// The four top-level views the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Splash,
    Onboarding,
    Login,
    Dashboard,
}

impl Screen {
    pub fn label(self) -> &'static str {
        match self {
            Screen::Splash => "splash",
            Screen::Onboarding => "onboarding",
            Screen::Login => "login",
            Screen::Dashboard => "dashboard",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The only cross-screen state: which screen is up, and as whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub screen: Screen,
    pub role: Role,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            screen: Screen::Splash,
            role: Role::Doctor,
        }
    }
}

/// Where a patient or appointment stands today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitStatus {
    CheckedIn,
    Scheduled,
    InProgress,
    Completed,
}

impl VisitStatus {
    pub fn label(self) -> &'static str {
        match self {
            VisitStatus::CheckedIn => "Checked In",
            VisitStatus::Scheduled => "Scheduled",
            VisitStatus::InProgress => "In Progress",
            VisitStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitKind {
    InClinic,
    Telehealth,
}

impl VisitKind {
    pub fn label(self) -> &'static str {
        match self {
            VisitKind::InClinic => "In-Clinic",
            VisitKind::Telehealth => "Telehealth",
        }
    }
}

/// Last recorded vital signs.
#[derive(Debug, Clone, PartialEq)]
pub struct Vitals {
    /// Blood pressure as charted, e.g. `120/80`.
    pub bp: &'static str,
    pub heart_rate: u16,
    /// Degrees Fahrenheit.
    pub temperature: f32,
    pub spo2: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub id: &'static str,
    pub name: &'static str,
    pub age: u8,
    pub gender: &'static str,
    pub last_visit: &'static str,
    pub status: VisitStatus,
    pub vitals: Option<Vitals>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: &'static str,
    pub patient_name: &'static str,
    pub time: &'static str,
    pub kind: VisitKind,
    pub doctor: &'static str,
    pub status: VisitStatus,
}

impl Appointment {
    /// Initials shown in the queue avatar: "Elena Rodriguez" → "ER".
    pub fn initials(&self) -> String {
        self.patient_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Nurse".parse::<Role>().unwrap(), Role::Nurse);
        assert_eq!(" RECEPTIONIST ".parse::<Role>().unwrap(), Role::Receptionist);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
    }

    #[test]
    fn role_rejects_unknown() {
        let err = "surgeon".parse::<Role>().unwrap_err();
        assert!(err.contains("surgeon"));
    }

    #[test]
    fn role_index_matches_all_order() {
        for (i, role) in Role::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn session_starts_on_splash_as_doctor() {
        let session = Session::default();
        assert_eq!(session.screen, Screen::Splash);
        assert_eq!(session.role, Role::Doctor);
    }

    #[test]
    fn appointment_initials() {
        let appt = Appointment {
            id: "x",
            patient_name: "benjamin thorne",
            time: "01:00 PM",
            kind: VisitKind::InClinic,
            doctor: "Dr. Smith",
            status: VisitStatus::Scheduled,
        };
        assert_eq!(appt.initials(), "BT");
    }
}
