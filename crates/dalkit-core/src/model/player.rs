use serde::{Deserialize, Serialize};

use crate::bridge::{DomainBridge, TeamBridge};
use crate::errors::Result;
use crate::model::{Position, Team};
use crate::repo::RecordId;

/// A player with its team resolved
///
/// The team reference is derived from `team_id`. Changing the foreign key
/// through [`Player::set_team_id`] drops the embedded team; call
/// [`Player::relink`] to look it up again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: Option<RecordId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub number: Option<u32>,
    pub position: Option<Position>,
    pub(crate) team_id: Option<RecordId>,
    pub(crate) team: Option<Team>,
}

impl Player {
    /// Create a player whose team is not resolved yet
    ///
    /// Saving through a [`PlayerBridge`](crate::PlayerBridge) or calling
    /// [`Player::relink`] fills in the embedded team.
    pub fn new(
        id: Option<RecordId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        number: u32,
        team_id: Option<RecordId>,
        position: Position,
    ) -> Self {
        Self {
            id,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            number: Some(number),
            position: Some(position),
            team_id,
            team: None,
        }
    }

    pub fn team_id(&self) -> Option<RecordId> {
        self.team_id
    }

    /// The embedded team, if resolved
    pub fn team(&self) -> Option<&Team> {
        self.team.as_ref()
    }

    /// Point the player at another team
    ///
    /// The embedded team is cleared when the id changes, so it is never
    /// stale; follow with [`Player::relink`].
    pub fn set_team_id(&mut self, team_id: Option<RecordId>) {
        if self.team_id != team_id {
            self.team_id = team_id;
            self.team = None;
        }
    }

    /// Resolve the embedded team from `team_id`
    ///
    /// # Errors
    ///
    /// Propagates repository failures from the team lookup. An unknown team
    /// id is not an error; the embedded team is left empty.
    pub fn relink(&mut self, teams: &TeamBridge) -> Result<()> {
        self.team = match self.team_id {
            Some(id) => teams.retrieve(id)?,
            None => None,
        };
        Ok(())
    }

    /// "First Last", skipping absent parts
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
