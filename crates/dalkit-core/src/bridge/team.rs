use std::sync::Arc;

use crate::bridge::DomainBridge;
use crate::errors::Result;
use crate::model::Team;
use crate::records::TeamRecord;
use crate::repo::{MemoryRepository, RecordId, Repository};

/// Bridge between [`Team`] and [`TeamRecord`]
#[derive(Clone)]
pub struct TeamBridge {
    repo: Arc<dyn Repository<TeamRecord>>,
}

impl TeamBridge {
    pub fn new(repo: Arc<dyn Repository<TeamRecord>>) -> Self {
        Self { repo }
    }

    /// Bridge over a fresh [`MemoryRepository`]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryRepository::new()))
    }
}

impl DomainBridge for TeamBridge {
    type Domain = Team;
    type Record = TeamRecord;

    fn repository(&self) -> &dyn Repository<TeamRecord> {
        self.repo.as_ref()
    }

    fn to_record(&self, team: &Team) -> TeamRecord {
        TeamRecord {
            id: team.id,
            city: team.city.clone(),
            nickname: team.nickname.clone(),
            abbreviation: team.abbreviation.clone(),
        }
    }

    fn to_domain(&self, record: TeamRecord) -> Result<Team> {
        Ok(Team {
            id: record.id,
            city: record.city,
            nickname: record.nickname,
            abbreviation: record.abbreviation,
        })
    }

    fn assign_id(team: &mut Team, id: RecordId) {
        team.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_retrieve() {
        let bridge = TeamBridge::in_memory();
        let mut bos = Team::new(Some(0), "Boston", "Red Sox", "BOS");

        bridge.save(&mut bos).unwrap();

        assert_eq!(bos.id, Some(0));
        assert_eq!(bridge.retrieve(0).unwrap(), Some(bos));
    }

    #[test]
    fn test_retrieve_absent() {
        let bridge = TeamBridge::in_memory();
        assert_eq!(bridge.retrieve(42).unwrap(), None);
    }

    #[test]
    fn test_failed_save_leaves_team_untouched() {
        let bridge = TeamBridge::in_memory();
        let mut incomplete = Team {
            id: Some(3),
            city: None,
            ..Team::default()
        };
        let before = incomplete.clone();

        let err = bridge.save(&mut incomplete).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(incomplete, before);
        assert!(bridge.retrieve_all().unwrap().is_empty());
    }
}
