//! Fixed figures behind the administrator overview.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Good,
    Warning,
    Critical,
}

impl Health {
    pub fn label(self) -> &'static str {
        match self {
            Health::Good => "good",
            Health::Warning => "warning",
            Health::Critical => "critical",
        }
    }
}

pub struct SystemMetric {
    pub name: &'static str,
    /// Utilisation in percent.
    pub value: u16,
    pub health: Health,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Success,
    Warning,
    Info,
}

pub struct Activity {
    pub action: &'static str,
    pub actor: &'static str,
    pub when: &'static str,
    pub kind: ActivityKind,
}

pub struct QuickStat {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

pub const SYSTEM_METRICS: &[SystemMetric] = &[
    SystemMetric {
        name: "CPU Usage",
        value: 45,
        health: Health::Good,
    },
    SystemMetric {
        name: "Memory",
        value: 68,
        health: Health::Warning,
    },
    SystemMetric {
        name: "Database",
        value: 82,
        health: Health::Critical,
    },
    SystemMetric {
        name: "Server Load",
        value: 35,
        health: Health::Good,
    },
];

pub const QUICK_STATS: &[QuickStat] = &[
    QuickStat {
        label: "Total Users",
        value: "2,847",
        note: "+12% from last month",
    },
    QuickStat {
        label: "Active Sessions",
        value: "342",
        note: "Currently online",
    },
    QuickStat {
        label: "System Alerts",
        value: "3",
        note: "Requires attention",
    },
];

pub const RECENT_ACTIVITY: &[Activity] = &[
    Activity {
        action: "New user registered",
        actor: "john.doe@email.com",
        when: "2 minutes ago",
        kind: ActivityKind::Success,
    },
    Activity {
        action: "Failed login attempt",
        actor: "admin@company.com",
        when: "15 minutes ago",
        kind: ActivityKind::Warning,
    },
    Activity {
        action: "New vacancy created",
        actor: "hr.manager@company.com",
        when: "1 hour ago",
        kind: ActivityKind::Info,
    },
    Activity {
        action: "System backup completed",
        actor: "System",
        when: "2 hours ago",
        kind: ActivityKind::Success,
    },
    Activity {
        action: "Database maintenance",
        actor: "System",
        when: "3 hours ago",
        kind: ActivityKind::Info,
    },
];

/// (service, operational)
pub const SERVICES: &[(&str, bool)] = &[
    ("API Server", true),
    ("Database", true),
    ("Email Service", true),
    ("File Storage", false),
    ("Search Engine", true),
];
