use crate::auth::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountStatus {
    Active,
    Inactive,
    Pending,
}

impl AccountStatus {
    pub fn label(self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
            AccountStatus::Pending => "Pending",
        }
    }
}

/// A platform account listed in the admin user table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedUser {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub role: Role,
    pub status: AccountStatus,
    pub last_login: &'static str,
    pub created_on: &'static str,
}

pub const MANAGED_USERS: &[ManagedUser] = &[
    ManagedUser {
        id: "1",
        name: "John Doe",
        email: "john.doe@email.com",
        role: Role::Candidate,
        status: AccountStatus::Active,
        last_login: "2024-10-30",
        created_on: "2024-01-15",
    },
    ManagedUser {
        id: "2",
        name: "Sarah Smith",
        email: "sarah.smith@company.com",
        role: Role::HrManager,
        status: AccountStatus::Active,
        last_login: "2024-10-31",
        created_on: "2024-02-20",
    },
    ManagedUser {
        id: "3",
        name: "Mike Johnson",
        email: "mike.j@email.com",
        role: Role::Candidate,
        status: AccountStatus::Active,
        last_login: "2024-10-29",
        created_on: "2024-03-10",
    },
    ManagedUser {
        id: "4",
        name: "Emily Davis",
        email: "emily.davis@company.com",
        role: Role::Administrator,
        status: AccountStatus::Active,
        last_login: "2024-10-31",
        created_on: "2024-01-05",
    },
    ManagedUser {
        id: "5",
        name: "Robert Wilson",
        email: "robert.w@email.com",
        role: Role::Candidate,
        status: AccountStatus::Pending,
        last_login: "Never",
        created_on: "2024-10-28",
    },
    ManagedUser {
        id: "6",
        name: "Lisa Anderson",
        email: "lisa.a@company.com",
        role: Role::HrManager,
        status: AccountStatus::Active,
        last_login: "2024-10-30",
        created_on: "2024-04-12",
    },
    ManagedUser {
        id: "7",
        name: "David Brown",
        email: "david.b@email.com",
        role: Role::Candidate,
        status: AccountStatus::Inactive,
        last_login: "2024-09-15",
        created_on: "2024-05-20",
    },
];
