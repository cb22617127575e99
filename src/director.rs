//! Ownership of AI state for every live enemy outside an ECS.
//!
//! Hosts without their own entity storage register enemies here by id and
//! drive them through [`EnemyDirector::update`]. Each update touches only the
//! state belonging to that id.

use std::fmt;

use hashbrown::HashMap;
use log::{debug, warn};
use thiserror::Error;

use crate::archetype::{Archetype, UnknownArchetype};
use crate::controller::{update_enemy, AiOutput, AiWorld, EnemyFrame};
use crate::state::EnemyAiState;

/// Opaque identifier chosen by the host for one enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(pub u64);

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enemy#{}", self.0)
    }
}

/// Reasons a spawn request is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error(transparent)]
    UnknownArchetype(#[from] UnknownArchetype),
    #[error("{0} is already registered")]
    DuplicateEnemy(EnemyId),
}

/// Registry of per-enemy AI state.
#[derive(Debug, Default)]
pub struct EnemyDirector {
    enemies: HashMap<EnemyId, EnemyAiState>,
}

impl EnemyDirector {
    /// Director with no enemies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new enemy with fresh state.
    ///
    /// # Errors
    /// Returns [`SpawnError::DuplicateEnemy`] if `id` is already live.
    pub fn spawn(&mut self, id: EnemyId, archetype: Archetype) -> Result<(), SpawnError> {
        self.insert(id, EnemyAiState::new(archetype))
    }

    /// Registers a new enemy from a textual archetype tag.
    ///
    /// # Errors
    /// Returns [`SpawnError::UnknownArchetype`] for unrecognised tags and
    /// [`SpawnError::DuplicateEnemy`] if `id` is already live.
    pub fn spawn_tagged(&mut self, id: EnemyId, tag: &str) -> Result<Archetype, SpawnError> {
        let archetype = tag.parse::<Archetype>().map_err(|err| {
            warn!("refusing to spawn {id}: {err}");
            SpawnError::from(err)
        })?;
        self.spawn(id, archetype)?;
        Ok(archetype)
    }

    /// Registers an enemy with caller-built state.
    ///
    /// # Errors
    /// Returns [`SpawnError::DuplicateEnemy`] if `id` is already live.
    pub fn insert(&mut self, id: EnemyId, state: EnemyAiState) -> Result<(), SpawnError> {
        if self.enemies.contains_key(&id) {
            warn!("refusing to spawn {id}: already registered");
            return Err(SpawnError::DuplicateEnemy(id));
        }
        debug!("spawned {id} as {}", state.archetype());
        self.enemies.insert(id, state);
        Ok(())
    }

    /// Drops an enemy's state, returning it if it was live.
    pub fn despawn(&mut self, id: EnemyId) -> Option<EnemyAiState> {
        let removed = self.enemies.remove(&id);
        if removed.is_some() {
            debug!("despawned {id}");
        }
        removed
    }

    /// Runs one frame for `id`. Unknown ids yield `None`.
    pub fn update(
        &mut self,
        id: EnemyId,
        frame: &EnemyFrame,
        world: &AiWorld<'_>,
    ) -> Option<AiOutput> {
        self.enemies
            .get_mut(&id)
            .map(|state| update_enemy(state, frame, world))
    }

    /// State of a live enemy.
    #[must_use]
    pub fn get(&self, id: EnemyId) -> Option<&EnemyAiState> {
        self.enemies.get(&id)
    }

    /// Number of live enemies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    /// Whether no enemies are alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Ids of live enemies in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = EnemyId> + '_ {
        self.enemies.keys().copied()
    }
}
