use serde::{Deserialize, Serialize};

use crate::repo::RecordId;

/// A team as business code sees it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: Option<RecordId>,
    pub city: Option<String>,
    pub nickname: Option<String>,
    pub abbreviation: Option<String>,
}

impl Team {
    pub fn new(
        id: Option<RecordId>,
        city: impl Into<String>,
        nickname: impl Into<String>,
        abbreviation: impl Into<String>,
    ) -> Self {
        Self {
            id,
            city: Some(city.into()),
            nickname: Some(nickname.into()),
            abbreviation: Some(abbreviation.into()),
        }
    }
}
