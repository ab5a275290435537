use chrono::{DateTime, Utc};
use dalkit_core::errors::DalError;
use dalkit_core::{LogEntryRecord, PlayerRecord, Position, Record, TeamRecord};
use dalkit_logging::Severity;
use rusqlite::types::Value;
use rusqlite::Row;

use crate::errors::invalid_column;

/// Mapping between a record type and its table
///
/// Every table has an `id` column followed by [`SqlRecord::COLUMNS`];
/// [`SqlRecord::values`] and [`SqlRecord::from_row`] use that same order.
pub trait SqlRecord: Record {
    const TABLE: &'static str;

    /// Data columns after `id`
    const COLUMNS: &'static [&'static str];

    /// Values for `id` followed by each column in [`SqlRecord::COLUMNS`]
    fn values(&self) -> Vec<Value>;

    /// Decode a row selected as `id, COLUMNS...`
    ///
    /// # Errors
    ///
    /// Returns a conversion error if a column holds a value the record type
    /// cannot represent.
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

fn opt<T: Into<Value>>(value: Option<T>) -> Value {
    value.map_or(Value::Null, Into::into)
}

impl SqlRecord for TeamRecord {
    const TABLE: &'static str = "teams";
    const COLUMNS: &'static [&'static str] = &["city", "nickname", "abbreviation"];

    fn values(&self) -> Vec<Value> {
        vec![
            opt(self.id),
            opt(self.city.clone()),
            opt(self.nickname.clone()),
            opt(self.abbreviation.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(TeamRecord {
            id: row.get(0)?,
            city: row.get(1)?,
            nickname: row.get(2)?,
            abbreviation: row.get(3)?,
        })
    }
}

impl SqlRecord for PlayerRecord {
    const TABLE: &'static str = "players";
    const COLUMNS: &'static [&'static str] =
        &["first_name", "last_name", "number", "team_id", "position"];

    fn values(&self) -> Vec<Value> {
        vec![
            opt(self.id),
            opt(self.first_name.clone()),
            opt(self.last_name.clone()),
            opt(self.number),
            opt(self.team_id),
            opt(self.position.map(|p| p.as_str().to_string())),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let position = row
            .get::<_, Option<String>>(5)?
            .map(|text| text.parse::<Position>())
            .transpose()
            .map_err(|err| invalid_column(5, err))?;

        Ok(PlayerRecord {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            number: row.get(3)?,
            team_id: row.get(4)?,
            position,
        })
    }
}

impl SqlRecord for LogEntryRecord {
    const TABLE: &'static str = "log_entries";
    const COLUMNS: &'static [&'static str] = &["severity", "message", "logged_at"];

    fn values(&self) -> Vec<Value> {
        vec![
            opt(self.id),
            opt(self.severity.map(|s| s.as_str().to_string())),
            opt(self.message.clone()),
            opt(self.logged_at.map(|at| at.to_rfc3339())),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let severity = row
            .get::<_, Option<String>>(1)?
            .map(|text| {
                text.parse::<Severity>().map_err(|_| DalError::InvalidValue {
                    field: "severity",
                    value: text,
                })
            })
            .transpose()
            .map_err(|err| invalid_column(1, err))?;

        let logged_at = row
            .get::<_, Option<String>>(3)?
            .map(|text| {
                DateTime::parse_from_rfc3339(&text)
                    .map(|at| at.with_timezone(&Utc))
                    .map_err(|_| DalError::InvalidValue {
                        field: "logged_at",
                        value: text,
                    })
            })
            .transpose()
            .map_err(|err| invalid_column(3, err))?;

        Ok(LogEntryRecord {
            id: row.get(0)?,
            severity,
            message: row.get(2)?,
            logged_at,
        })
    }
}
