//! Dashboard screen: sidebar navigation plus role-specific content.
//!
//! The role is fixed for the lifetime of a dashboard (it is handed in at
//! login). The active tab is the only local state. Content is built fresh
//! from [`ClinicData`] each frame, nothing is loaded.

use std::borrow::Cow;

use crate::domain::{Appointment, Patient, Role, VisitKind, VisitStatus, Vitals};
use crate::mock::{ClinicData, Demographic, StatCard};

/// Sidebar navigation items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTab {
    Overview,
    Patients,
    Appointments,
    Notes,
    Telehealth,
    Vitals,
    Reports,
    Settings,
}

impl NavTab {
    pub const ALL: [NavTab; 8] = [
        NavTab::Overview,
        NavTab::Patients,
        NavTab::Appointments,
        NavTab::Notes,
        NavTab::Telehealth,
        NavTab::Vitals,
        NavTab::Reports,
        NavTab::Settings,
    ];

    pub fn id(self) -> &'static str {
        match self {
            NavTab::Overview => "overview",
            NavTab::Patients => "patients",
            NavTab::Appointments => "appointments",
            NavTab::Notes => "notes",
            NavTab::Telehealth => "telehealth",
            NavTab::Vitals => "vitals",
            NavTab::Reports => "reports",
            NavTab::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavTab::Overview => "Dashboard",
            NavTab::Patients => "Patients",
            NavTab::Appointments => "Schedule",
            NavTab::Notes => "Clinical Notes",
            NavTab::Telehealth => "Telehealth",
            NavTab::Vitals => "Vitals",
            NavTab::Reports => "Reports",
            NavTab::Settings => "Settings",
        }
    }

    /// Single-cell sidebar icon.
    pub fn icon(self) -> &'static str {
        match self {
            NavTab::Overview => "\u{25a3}",
            NavTab::Patients => "\u{263a}",
            NavTab::Appointments => "\u{25f7}",
            NavTab::Notes => "\u{270e}",
            NavTab::Telehealth => "\u{25b6}",
            NavTab::Vitals => "\u{2661}",
            NavTab::Reports => "\u{2630}",
            NavTab::Settings => "\u{2699}",
        }
    }

    pub fn index(self) -> usize {
        NavTab::ALL
            .iter()
            .position(|t| *t == self)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct DashboardScreen {
    role: Role,
    active_tab: NavTab,
}

impl DashboardScreen {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            active_tab: NavTab::Overview,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn active_tab(&self) -> NavTab {
        self.active_tab
    }

    /// Returns whether the tab actually changed.
    pub fn select_tab(&mut self, tab: NavTab) -> bool {
        if self.active_tab == tab {
            return false;
        }
        self.active_tab = tab;
        true
    }

    pub fn next_tab(&mut self) {
        let i = (self.active_tab.index() + 1) % NavTab::ALL.len();
        self.active_tab = NavTab::ALL[i];
    }

    pub fn previous_tab(&mut self) {
        let len = NavTab::ALL.len();
        let i = (self.active_tab.index() + len - 1) % len;
        self.active_tab = NavTab::ALL[i];
    }

    /// What the main canvas shows for the active tab.
    pub fn content(&self, data: &ClinicData) -> TabContent {
        match self.active_tab {
            NavTab::Overview => TabContent::Overview(RoleView::build(self.role, data)),
            NavTab::Patients => TabContent::Patients(data.patients.clone()),
            NavTab::Appointments => TabContent::Schedule(data.appointments.clone()),
            NavTab::Vitals => TabContent::Vitals(TriageRow::from_patients(&data.patients)),
            tab @ (NavTab::Notes | NavTab::Telehealth | NavTab::Reports | NavTab::Settings) => {
                TabContent::Placeholder(tab)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum TabContent {
    Overview(RoleView),
    Patients(Vec<Patient>),
    Schedule(Vec<Appointment>),
    Vitals(Vec<TriageRow>),
    Placeholder(NavTab),
}

/// Overview content, one variant per role.
#[derive(Debug, Clone)]
pub enum RoleView {
    Admin(AdminView),
    Doctor(DoctorView),
    Nurse(NurseView),
    Receptionist(ReceptionistView),
}

#[derive(Debug, Clone)]
pub struct DoctorView {
    pub subtitle: String,
    pub stats: Vec<StatCard>,
    pub queue: Vec<Appointment>,
    pub weekly_traffic: Vec<(&'static str, u64)>,
    pub demographics: Vec<Demographic>,
    pub telehealth_waiting: usize,
}

#[derive(Debug, Clone)]
pub struct NurseView {
    pub subtitle: String,
    pub triage: Vec<TriageRow>,
    pub queue: Vec<Appointment>,
}

#[derive(Debug, Clone)]
pub struct ReceptionistView {
    pub subtitle: String,
    pub stats: Vec<StatCard>,
    pub schedule: Vec<Appointment>,
    pub checked_in: usize,
    pub awaiting: usize,
    pub telehealth: usize,
}

#[derive(Debug, Clone)]
pub struct AdminView {
    pub subtitle: String,
    pub stats: Vec<StatCard>,
    pub weekly_traffic: Vec<(&'static str, u64)>,
    pub demographics: Vec<Demographic>,
}

/// A patient line on the nursing triage board.
#[derive(Debug, Clone, PartialEq)]
pub struct TriageRow {
    pub name: &'static str,
    pub age: u8,
    pub status: VisitStatus,
    pub vitals: Option<Vitals>,
}

impl TriageRow {
    /// Patients still in clinic today, those with vitals first.
    pub fn from_patients(patients: &[Patient]) -> Vec<TriageRow> {
        let mut rows: Vec<TriageRow> = patients
            .iter()
            .filter(|p| p.status != VisitStatus::Completed)
            .map(|p| TriageRow {
                name: p.name,
                age: p.age,
                status: p.status,
                vitals: p.vitals.clone(),
            })
            .collect();
        rows.sort_by_key(|r| r.vitals.is_none());
        rows
    }
}

impl RoleView {
    pub fn build(role: Role, data: &ClinicData) -> Self {
        let scheduled_today = data.appointments.len();
        match role {
            Role::Doctor => RoleView::Doctor(DoctorView {
                subtitle: format!("You have {scheduled_today} patients scheduled for today"),
                stats: data.clinical_stats.clone(),
                queue: data.appointments.clone(),
                weekly_traffic: data.weekly_traffic.clone(),
                demographics: data.demographics.clone(),
                telehealth_waiting: data.telehealth_waiting,
            }),
            Role::Nurse => {
                let triage = TriageRow::from_patients(&data.patients);
                RoleView::Nurse(NurseView {
                    subtitle: format!("{} patients on the triage board", triage.len()),
                    triage,
                    queue: data.appointments.clone(),
                })
            }
            Role::Receptionist => {
                let checked_in = data.appointments_with_status(VisitStatus::CheckedIn).count();
                let awaiting = data.appointments_with_status(VisitStatus::Scheduled).count();
                let telehealth = data
                    .appointments
                    .iter()
                    .filter(|a| a.kind == VisitKind::Telehealth)
                    .count();
                RoleView::Receptionist(ReceptionistView {
                    subtitle: format!("{scheduled_today} appointments on today's schedule"),
                    stats: vec![
                        StatCard {
                            label: "Checked In",
                            value: Cow::Owned(checked_in.to_string()),
                            subtext: "At the front desk",
                        },
                        StatCard {
                            label: "Awaiting Arrival",
                            value: Cow::Owned(awaiting.to_string()),
                            subtext: "Scheduled today",
                        },
                        StatCard {
                            label: "Telehealth",
                            value: Cow::Owned(telehealth.to_string()),
                            subtext: "Virtual lounge",
                        },
                    ],
                    schedule: data.appointments.clone(),
                    checked_in,
                    awaiting,
                    telehealth,
                })
            }
            Role::Admin => RoleView::Admin(AdminView {
                subtitle: format!(
                    "{} visits across the week",
                    data.weekly_traffic.iter().map(|(_, n)| n).sum::<u64>()
                ),
                stats: data.operations_stats.clone(),
                weekly_traffic: data.weekly_traffic.clone(),
                demographics: data.demographics.clone(),
            }),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            RoleView::Admin(_) => Role::Admin,
            RoleView::Doctor(_) => Role::Doctor,
            RoleView::Nurse(_) => Role::Nurse,
            RoleView::Receptionist(_) => Role::Receptionist,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RoleView::Admin(_) => "Clinic Operations",
            RoleView::Doctor(_) => "Clinical Overview",
            RoleView::Nurse(_) => "Nursing Station",
            RoleView::Receptionist(_) => "Front Desk",
        }
    }

    pub fn subtitle(&self) -> &str {
        match self {
            RoleView::Admin(v) => &v.subtitle,
            RoleView::Doctor(v) => &v.subtitle,
            RoleView::Nurse(v) => &v.subtitle,
            RoleView::Receptionist(v) => &v.subtitle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_overview() {
        let dash = DashboardScreen::new(Role::Nurse);
        assert_eq!(dash.active_tab(), NavTab::Overview);
        assert_eq!(dash.role(), Role::Nurse);
    }

    #[test]
    fn select_tab_is_idempotent() {
        let mut dash = DashboardScreen::new(Role::Admin);
        assert!(dash.select_tab(NavTab::Vitals));
        assert!(!dash.select_tab(NavTab::Vitals));
        assert_eq!(dash.active_tab(), NavTab::Vitals);
        assert_eq!(dash.role(), Role::Admin);
    }

    #[test]
    fn tab_cycling_wraps() {
        let mut dash = DashboardScreen::new(Role::Doctor);
        dash.previous_tab();
        assert_eq!(dash.active_tab(), NavTab::Settings);
        dash.next_tab();
        assert_eq!(dash.active_tab(), NavTab::Overview);
    }

    #[test]
    fn nav_ids_match_sidebar_order() {
        let ids: Vec<_> = NavTab::ALL.iter().map(|t| t.id()).collect();
        assert_eq!(
            ids,
            vec![
                "overview",
                "patients",
                "appointments",
                "notes",
                "telehealth",
                "vitals",
                "reports",
                "settings"
            ]
        );
    }

    #[test]
    fn every_role_gets_its_own_view() {
        let data = ClinicData::mock();
        for role in Role::ALL {
            let view = RoleView::build(role, &data);
            assert_eq!(view.role(), role);
        }
    }

    #[test]
    fn doctor_view_carries_queue_and_chart() {
        let data = ClinicData::mock();
        let RoleView::Doctor(view) = RoleView::build(Role::Doctor, &data) else {
            panic!("expected doctor view");
        };
        assert_eq!(view.queue.len(), 3);
        assert_eq!(view.weekly_traffic.len(), 6);
        assert_eq!(view.subtitle, "You have 3 patients scheduled for today");
    }

    #[test]
    fn receptionist_counts() {
        let data = ClinicData::mock();
        let RoleView::Receptionist(view) = RoleView::build(Role::Receptionist, &data) else {
            panic!("expected receptionist view");
        };
        assert_eq!(view.checked_in, 1);
        assert_eq!(view.awaiting, 2);
        assert_eq!(view.telehealth, 1);
    }

    #[test]
    fn triage_excludes_completed_and_lists_vitals_first() {
        let rows = TriageRow::from_patients(&ClinicData::mock().patients);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, "Alexander Wright");
        assert!(rows.iter().all(|r| r.status != VisitStatus::Completed));
    }

    #[test]
    fn unimplemented_tabs_are_placeholders() {
        let data = ClinicData::mock();
        let mut dash = DashboardScreen::new(Role::Doctor);
        dash.select_tab(NavTab::Reports);
        assert!(matches!(
            dash.content(&data),
            TabContent::Placeholder(NavTab::Reports)
        ));
        dash.select_tab(NavTab::Patients);
        assert!(matches!(dash.content(&data), TabContent::Patients(p) if p.len() == 4));
    }
}
