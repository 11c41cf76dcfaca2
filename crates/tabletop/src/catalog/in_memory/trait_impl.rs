//! CatalogStore trait implementation for the in-memory catalog.

use super::InMemoryCatalog;
use crate::catalog::{CatalogCounts, CatalogStore, FamilySnapshot};
use crate::domain::{Family, FamilyId, Game, GameId, Relation};
use crate::error::{Error, Result};
use async_trait::async_trait;

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn families(&self) -> Result<Vec<Family>> {
        Ok(self.lock().await.families.clone())
    }

    async fn family(&self, id: &FamilyId) -> Result<Option<Family>> {
        Ok(self.lock().await.family(id).cloned())
    }

    async fn game(&self, id: &GameId) -> Result<Option<Game>> {
        let inner = self.lock().await;
        Ok(inner.game_index.get(id).map(|&idx| inner.games[idx].clone()))
    }

    async fn games_in_family(&self, id: &FamilyId) -> Result<Vec<Game>> {
        let inner = self.lock().await;
        if inner.family(id).is_none() {
            return Err(Error::FamilyNotFound(id.clone()));
        }
        Ok(inner.games_in_family(id))
    }

    async fn unassigned_games(&self) -> Result<Vec<Game>> {
        let inner = self.lock().await;
        Ok(inner
            .games
            .iter()
            .filter(|g| !inner.is_assigned(g))
            .cloned()
            .collect())
    }

    async fn relations(&self) -> Result<Vec<Relation>> {
        Ok(self.lock().await.relations.clone())
    }

    async fn counts(&self) -> Result<CatalogCounts> {
        let inner = self.lock().await;
        Ok(CatalogCounts {
            families: inner.families.len(),
            games: inner.games.len(),
            relations: inner.relations.len(),
            unassigned_games: inner.games.iter().filter(|g| !inner.is_assigned(g)).count(),
        })
    }

    async fn snapshot(&self, id: &FamilyId) -> Result<FamilySnapshot> {
        let inner = self.lock().await;
        let family = inner
            .family(id)
            .cloned()
            .ok_or_else(|| Error::FamilyNotFound(id.clone()))?;
        let games = inner.games_in_family(id);
        let relations = inner.relations_touching(&games);

        Ok(FamilySnapshot {
            family,
            games,
            relations,
        })
    }
}
