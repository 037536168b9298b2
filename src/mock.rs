//! Static clinic records standing in for a backend.
//!
//! Screens receive a [`ClinicData`] and only ever read from it.

use std::borrow::Cow;

use crate::domain::{Appointment, Patient, VisitKind, VisitStatus, Vitals};

pub const PATIENTS: &[Patient] = &[
    Patient {
        id: "1",
        name: "Alexander Wright",
        age: 42,
        gender: "Male",
        last_visit: "2024-03-15",
        status: VisitStatus::InProgress,
        vitals: Some(Vitals {
            bp: "120/80",
            heart_rate: 72,
            temperature: 98.6,
            spo2: 99,
        }),
    },
    Patient {
        id: "2",
        name: "Elena Rodriguez",
        age: 31,
        gender: "Female",
        last_visit: "2024-03-10",
        status: VisitStatus::CheckedIn,
        vitals: None,
    },
    Patient {
        id: "3",
        name: "Marcus Chen",
        age: 58,
        gender: "Male",
        last_visit: "2024-03-12",
        status: VisitStatus::Scheduled,
        vitals: None,
    },
    Patient {
        id: "4",
        name: "Sarah Jenkins",
        age: 25,
        gender: "Female",
        last_visit: "2024-03-18",
        status: VisitStatus::Completed,
        vitals: None,
    },
];

pub const APPOINTMENTS: &[Appointment] = &[
    Appointment {
        id: "a1",
        patient_name: "Elena Rodriguez",
        time: "10:30 AM",
        kind: VisitKind::InClinic,
        doctor: "Dr. Smith",
        status: VisitStatus::CheckedIn,
    },
    Appointment {
        id: "a2",
        patient_name: "Marcus Chen",
        time: "11:15 AM",
        kind: VisitKind::Telehealth,
        doctor: "Dr. Smith",
        status: VisitStatus::Scheduled,
    },
    Appointment {
        id: "a3",
        patient_name: "Benjamin Thorne",
        time: "01:00 PM",
        kind: VisitKind::InClinic,
        doctor: "Dr. Smith",
        status: VisitStatus::Scheduled,
    },
];

/// Patient visits per weekday, for the clinic traffic chart.
pub const WEEKLY_TRAFFIC: &[(&str, u64)] = &[
    ("Mon", 24),
    ("Tue", 32),
    ("Wed", 28),
    ("Thu", 45),
    ("Fri", 38),
    ("Sat", 15),
];

/// One headline figure on the overview.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    /// Fixed for mock figures, owned for counts computed from the data.
    pub value: Cow<'static, str>,
    pub subtext: &'static str,
}

pub const CLINICAL_STATS: &[StatCard] = &[
    StatCard { label: "Today's Appointments", value: Cow::Borrowed("12"), subtext: "+2 since morning" },
    StatCard { label: "Pending Lab Results", value: Cow::Borrowed("08"), subtext: "3 urgent reviews" },
    StatCard { label: "Completed Visits", value: Cow::Borrowed("04"), subtext: "Average 18min / patient" },
    StatCard { label: "Revenue Today", value: Cow::Borrowed("$2.4k"), subtext: "Ahead of target" },
];

pub const OPERATIONS_STATS: &[StatCard] = &[
    StatCard { label: "Revenue Today", value: Cow::Borrowed("$2.4k"), subtext: "Ahead of target" },
    StatCard { label: "Staff On Shift", value: Cow::Borrowed("14"), subtext: "2 providers remote" },
    StatCard { label: "Weekly Visits", value: Cow::Borrowed("182"), subtext: "+9% week over week" },
    StatCard { label: "Open Tickets", value: Cow::Borrowed("03"), subtext: "None critical" },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Demographic {
    pub label: &'static str,
    pub percent: u16,
}

pub const DEMOGRAPHICS: &[Demographic] = &[
    Demographic { label: "General", percent: 65 },
    Demographic { label: "Pediatric", percent: 15 },
    Demographic { label: "Elderly", percent: 20 },
];

/// Fixed wall-clock string shown in the dashboard header.
pub const CLINIC_CLOCK: &str = "Today, Mar 24 - 10:42 AM";

/// Patients waiting in the virtual lounge.
pub const TELEHEALTH_WAITING: usize = 3;

/// The injected, read-only dataset every screen renders from.
#[derive(Debug, Clone)]
pub struct ClinicData {
    pub patients: Vec<Patient>,
    pub appointments: Vec<Appointment>,
    pub weekly_traffic: Vec<(&'static str, u64)>,
    pub demographics: Vec<Demographic>,
    pub clinical_stats: Vec<StatCard>,
    pub operations_stats: Vec<StatCard>,
    pub clock: &'static str,
    pub telehealth_waiting: usize,
}

impl ClinicData {
    /// The built-in demo dataset.
    pub fn mock() -> Self {
        Self {
            patients: PATIENTS.to_vec(),
            appointments: APPOINTMENTS.to_vec(),
            weekly_traffic: WEEKLY_TRAFFIC.to_vec(),
            demographics: DEMOGRAPHICS.to_vec(),
            clinical_stats: CLINICAL_STATS.to_vec(),
            operations_stats: OPERATIONS_STATS.to_vec(),
            clock: CLINIC_CLOCK,
            telehealth_waiting: TELEHEALTH_WAITING,
        }
    }

    pub fn appointments_with_status(
        &self,
        status: VisitStatus,
    ) -> impl Iterator<Item = &Appointment> {
        self.appointments.iter().filter(move |a| a.status == status)
    }
}
