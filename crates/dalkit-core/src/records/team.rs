use serde::{Deserialize, Serialize};

use crate::repo::{Record, RecordId};

/// Storage row for a team
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: Option<RecordId>,
    pub city: Option<String>,
    pub nickname: Option<String>,
    pub abbreviation: Option<String>,
}

impl Record for TeamRecord {
    const KIND: &'static str = "team";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        super::absent(&[
            ("id", self.id.is_some()),
            ("city", self.city.is_some()),
            ("nickname", self.nickname.is_some()),
            ("abbreviation", self.abbreviation.is_some()),
        ])
    }
}
