//! Embedded SQL migrations
//!
//! Migrations are embedded at compile time using include_str!

/// Migration metadata
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// All embedded migrations, in application order
pub fn get_migrations() -> Vec<Migration> {
    vec![
        Migration {
            id: "001_roster_schema",
            sql: include_str!("../../migrations/001_roster_schema.sql"),
        },
        Migration {
            id: "002_log_entries",
            sql: include_str!("../../migrations/002_log_entries.sql"),
        },
    ]
}
