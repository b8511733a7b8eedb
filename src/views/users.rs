use std::collections::BTreeSet;

use crate::auth::Role;
use crate::filter::{any_field_contains, Choice, Criteria, FilterView};
use crate::input::{FocusOrder, TextInput};
use crate::notify::Notice;
use crate::records::users::{AccountStatus, ManagedUser, MANAGED_USERS};

const ROLES: &[(&str, Role)] = &[
    ("Candidate", Role::Candidate),
    ("HR Manager", Role::HrManager),
    ("Administrator", Role::Administrator),
];

const STATUSES: &[(&str, AccountStatus)] = &[
    ("Active", AccountStatus::Active),
    ("Inactive", AccountStatus::Inactive),
    ("Pending", AccountStatus::Pending),
];

pub struct UserCriteria {
    pub search: TextInput,
    pub role: Choice<Role>,
    pub status: Choice<AccountStatus>,
}

impl Default for UserCriteria {
    fn default() -> Self {
        Self {
            search: TextInput::new(),
            role: Choice::new(ROLES),
            status: Choice::new(STATUSES),
        }
    }
}

impl Criteria<ManagedUser> for UserCriteria {
    fn matches(&self, item: &ManagedUser) -> bool {
        any_field_contains([item.name, item.email], self.search.value())
            && self.role.admits(|role| item.role == role)
            && self.status.admits(|status| item.status == status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Activate,
    Deactivate,
    Delete,
}

impl BulkAction {
    pub fn label(self) -> &'static str {
        match self {
            BulkAction::Activate => "Activate",
            BulkAction::Deactivate => "Deactivate",
            BulkAction::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserFocus {
    Search,
    Role,
    Status,
    Results,
}

impl FocusOrder for UserFocus {
    const ORDER: &'static [Self] = &[
        UserFocus::Search,
        UserFocus::Role,
        UserFocus::Status,
        UserFocus::Results,
    ];
}

pub struct UserManagement {
    pub list: FilterView<ManagedUser, UserCriteria>,
    pub focus: UserFocus,
    selected: BTreeSet<&'static str>,
}

impl Default for UserManagement {
    fn default() -> Self {
        Self::new()
    }
}

impl UserManagement {
    pub fn new() -> Self {
        Self {
            list: FilterView::new(MANAGED_USERS),
            focus: UserFocus::Search,
            selected: BTreeSet::new(),
        }
    }

    pub fn is_selected(&self, user: &ManagedUser) -> bool {
        self.selected.contains(user.id)
    }

    pub fn selection_len(&self) -> usize {
        self.selected.len()
    }

    pub fn toggle_highlighted(&mut self) {
        if let Some(user) = self.list.selected() {
            if !self.selected.remove(user.id) {
                self.selected.insert(user.id);
            }
        }
    }

    /// Select every visible row, or clear the selection when they are all
    /// selected already.
    pub fn toggle_all(&mut self) {
        let visible: BTreeSet<_> = self.list.results().iter().map(|u| u.id).collect();
        if !visible.is_empty() && visible.is_subset(&self.selected) {
            self.selected.clear();
        } else {
            self.selected = visible;
        }
    }

    pub fn all_visible_selected(&self) -> bool {
        let results = self.list.results();
        !results.is_empty() && results.iter().all(|u| self.selected.contains(u.id))
    }

    /// Nothing is mutated: the records are static. The selection is cleared.
    pub fn apply_bulk(&mut self, action: BulkAction) -> Option<Notice> {
        if self.selected.is_empty() {
            return None;
        }
        let count = self.selected.len();
        tracing::info!(action = action.label(), count, "bulk user action");
        self.selected.clear();
        Some(Notice::success(format!(
            "{} applied to {} user(s)",
            action.label(),
            count
        )))
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} users",
            self.list.count(),
            self.list.total()
        )
    }
}
