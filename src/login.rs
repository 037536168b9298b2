//! Login role selector. Choosing a role is a preview; nothing happens
//! until submit. No credentials are checked.

use crate::domain::Role;

#[derive(Debug, Clone)]
pub struct RoleSelector {
    selected: Role,
}

impl RoleSelector {
    pub fn new(initial: Role) -> Self {
        Self { selected: initial }
    }

    pub fn selected_role(&self) -> Role {
        self.selected
    }

    pub fn select_role(&mut self, role: Role) {
        self.selected = role;
    }

    /// Move to the next role, wrapping around.
    pub fn next(&mut self) {
        let i = (self.selected.index() + 1) % Role::ALL.len();
        self.selected = Role::ALL[i];
    }

    pub fn previous(&mut self) {
        let len = Role::ALL.len();
        let i = (self.selected.index() + len - 1) % len;
        self.selected = Role::ALL[i];
    }

    /// The role to authenticate as.
    pub fn submit(&self) -> Role {
        self.selected
    }
}

impl Default for RoleSelector {
    fn default() -> Self {
        Self::new(Role::Doctor)
    }
}
