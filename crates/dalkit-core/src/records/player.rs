use serde::{Deserialize, Serialize};

use crate::model::Position;
use crate::repo::{Record, RecordId};

/// Storage row for a player; `team_id` references a [`super::TeamRecord`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: Option<RecordId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub number: Option<u32>,
    pub team_id: Option<RecordId>,
    pub position: Option<Position>,
}

impl Record for PlayerRecord {
    const KIND: &'static str = "player";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        super::absent(&[
            ("id", self.id.is_some()),
            ("first_name", self.first_name.is_some()),
            ("last_name", self.last_name.is_some()),
            ("number", self.number.is_some()),
            ("team_id", self.team_id.is_some()),
            ("position", self.position.is_some()),
        ])
    }
}
