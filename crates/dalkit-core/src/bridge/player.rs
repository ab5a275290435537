use std::sync::Arc;

use crate::bridge::{DomainBridge, TeamBridge};
use crate::errors::Result;
use crate::model::Player;
use crate::records::PlayerRecord;
use crate::repo::{MemoryRepository, RecordId, Repository};

/// Bridge between [`Player`] and [`PlayerRecord`]
///
/// Converting a record resolves its team through the wrapped
/// [`TeamBridge`].
#[derive(Clone)]
pub struct PlayerBridge {
    repo: Arc<dyn Repository<PlayerRecord>>,
    teams: TeamBridge,
}

impl PlayerBridge {
    pub fn new(repo: Arc<dyn Repository<PlayerRecord>>, teams: TeamBridge) -> Self {
        Self { repo, teams }
    }

    /// Bridge over a fresh [`MemoryRepository`], resolving teams via `teams`
    pub fn in_memory(teams: TeamBridge) -> Self {
        Self::new(Arc::new(MemoryRepository::new()), teams)
    }

    /// Team bridge used for foreign-key resolution
    pub fn teams(&self) -> &TeamBridge {
        &self.teams
    }

    /// Re-resolve `player`'s embedded team after its team id changed
    ///
    /// # Errors
    ///
    /// Propagates repository failures from the team lookup.
    pub fn relink(&self, player: &mut Player) -> Result<()> {
        player.relink(&self.teams)
    }
}

impl DomainBridge for PlayerBridge {
    type Domain = Player;
    type Record = PlayerRecord;

    fn repository(&self) -> &dyn Repository<PlayerRecord> {
        self.repo.as_ref()
    }

    fn to_record(&self, player: &Player) -> PlayerRecord {
        PlayerRecord {
            id: player.id,
            first_name: player.first_name.clone(),
            last_name: player.last_name.clone(),
            number: player.number,
            team_id: player.team_id,
            position: player.position,
        }
    }

    fn to_domain(&self, record: PlayerRecord) -> Result<Player> {
        let mut player = Player {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            number: record.number,
            position: record.position,
            team_id: record.team_id,
            team: None,
        };
        self.resolve_related(&mut player)?;
        Ok(player)
    }

    fn assign_id(player: &mut Player, id: RecordId) {
        player.id = Some(id);
    }

    fn resolve_related(&self, player: &mut Player) -> Result<()> {
        player.relink(&self.teams)
    }
}
