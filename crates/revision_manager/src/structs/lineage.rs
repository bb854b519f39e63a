use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, RevisionError};
use crate::structs::generation::{Generation, GenerationParams, GenerationSummary};
use crate::structs::state::ReviewStatus;

/// The tree-structured history of generations.
///
/// The node pool is the single source of truth for all generation data,
/// keyed by id for O(1) lookup. The structure is append-only: nodes are
/// added, never re-parented or removed, and a node's generated text never
/// changes after creation.
///
/// Acceptance is branch-exclusive: among the nodes sharing a root ancestor,
/// at most one holds `Accepted` at a time. `accept` performs the whole
/// demote-and-promote transition behind one `&mut self` borrow, so no reader
/// can observe two accepted nodes on a branch. Callers sharing a lineage
/// across threads must route accepts through that exclusive borrow rather
/// than flipping node states individually.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RevisionLineage {
    node_pool: HashMap<Uuid, Generation>,
}

impl RevisionLineage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.node_pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pool.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Generation> {
        self.node_pool.get(&id)
    }

    /// Create a parentless generation.
    ///
    /// Fails with `Validation` if the seed synopsis is absent.
    pub fn create_root(&mut self, params: GenerationParams) -> Result<Uuid> {
        if params.synopsis.trim().is_empty() {
            return Err(RevisionError::Validation(
                "a root generation requires seed synopsis content".to_string(),
            ));
        }

        let node = Generation::new(None, params);
        let id = node.id;

        tracing::info!(
            generation_id = %id,
            pool_size = self.node_pool.len() + 1,
            "lineage: created root generation"
        );

        self.node_pool.insert(id, node);
        Ok(id)
    }

    /// Create a generation derived from `parent_id`.
    ///
    /// The new node starts out `Proposed`. Fails with `NotFound` if the
    /// parent does not exist.
    pub fn create_child(&mut self, parent_id: Uuid, params: GenerationParams) -> Result<Uuid> {
        if !self.node_pool.contains_key(&parent_id) {
            return Err(RevisionError::NotFound(parent_id));
        }

        let node = Generation::new(Some(parent_id), params);
        let id = node.id;

        tracing::info!(
            generation_id = %id,
            parent_id = %parent_id,
            has_feedback = node.iteration_feedback.is_some(),
            pool_size = self.node_pool.len() + 1,
            "lineage: created child generation"
        );

        self.node_pool.insert(id, node);
        Ok(id)
    }

    /// Make `generation_id` the live text for its branch.
    ///
    /// Every other node sharing the target's root ancestor that was accepted
    /// is demoted to `Superseded` in the same transition; validation happens
    /// before any state is touched, so failure leaves the lineage unchanged.
    /// Accepting an already-accepted node is a no-op. A rejected node cannot
    /// be accepted.
    pub fn accept(&mut self, generation_id: Uuid) -> Result<()> {
        let target = self
            .node_pool
            .get(&generation_id)
            .ok_or(RevisionError::NotFound(generation_id))?;

        match target.status {
            ReviewStatus::Accepted => {
                tracing::debug!(generation_id = %generation_id, "lineage: already accepted");
                return Ok(());
            }
            ReviewStatus::Rejected => {
                return Err(RevisionError::Validation(format!(
                    "generation {generation_id} was rejected and cannot be accepted"
                )));
            }
            ReviewStatus::Proposed | ReviewStatus::Superseded => {}
        }

        let root = self.root_of(generation_id);
        let demoted: Vec<Uuid> = self
            .node_pool
            .values()
            .filter(|node| node.id != generation_id && node.is_accepted())
            .filter(|node| self.root_of(node.id) == root)
            .map(|node| node.id)
            .collect();

        for id in &demoted {
            if let Some(node) = self.node_pool.get_mut(id) {
                node.status = ReviewStatus::Superseded;
            }
        }
        if let Some(node) = self.node_pool.get_mut(&generation_id) {
            node.status = ReviewStatus::Accepted;
        }

        tracing::info!(
            generation_id = %generation_id,
            root_id = %root,
            superseded = demoted.len(),
            "lineage: accepted generation"
        );

        Ok(())
    }

    /// Record that `generation_id` was declined.
    ///
    /// The node is kept: history is append-only and a rejected node may still
    /// parent a new attempt. Rejecting an already-rejected node is a no-op;
    /// a node that was accepted at some point cannot be rejected.
    pub fn reject(&mut self, generation_id: Uuid) -> Result<()> {
        let node = self
            .node_pool
            .get_mut(&generation_id)
            .ok_or(RevisionError::NotFound(generation_id))?;

        match node.status {
            ReviewStatus::Rejected => {
                tracing::debug!(generation_id = %generation_id, "lineage: already rejected");
                Ok(())
            }
            ReviewStatus::Proposed => {
                node.status = ReviewStatus::Rejected;
                tracing::info!(generation_id = %generation_id, "lineage: rejected generation");
                Ok(())
            }
            ReviewStatus::Accepted | ReviewStatus::Superseded => {
                Err(RevisionError::Validation(format!(
                    "generation {generation_id} was already accepted and cannot be rejected"
                )))
            }
        }
    }

    /// The root ancestor of `generation_id`.
    ///
    /// Walks the parent chain; the append-only structure guarantees the walk
    /// terminates. A dangling parent link (possible only in a corrupted
    /// deserialized pool) is treated as a root boundary.
    fn root_of(&self, generation_id: Uuid) -> Uuid {
        let mut current = generation_id;
        while let Some(parent_id) = self.node_pool.get(&current).and_then(|n| n.parent_id) {
            if !self.node_pool.contains_key(&parent_id) {
                break;
            }
            current = parent_id;
        }
        current
    }

    /// All nodes sharing the root ancestor of `generation_id`, the target
    /// included. Fails with `NotFound` if the id is unknown.
    pub fn branch_of(&self, generation_id: Uuid) -> Result<Vec<&Generation>> {
        if !self.node_pool.contains_key(&generation_id) {
            return Err(RevisionError::NotFound(generation_id));
        }

        let root = self.root_of(generation_id);
        let mut members: Vec<&Generation> = self
            .node_pool
            .values()
            .filter(|node| self.root_of(node.id) == root)
            .collect();
        members.sort_by_key(|node| (node.created_at, node.id));
        Ok(members)
    }

    /// The accepted node on the branch of `generation_id`, if any.
    pub fn accepted_on_branch(&self, generation_id: Uuid) -> Result<Option<&Generation>> {
        Ok(self
            .branch_of(generation_id)?
            .into_iter()
            .find(|node| node.is_accepted()))
    }

    /// The path from the root ancestor down to `generation_id`, in order.
    ///
    /// Used to reconstruct full prompt/feedback context for display or for
    /// assembling a new request.
    pub fn history(&self, generation_id: Uuid) -> Result<Vec<&Generation>> {
        if !self.node_pool.contains_key(&generation_id) {
            return Err(RevisionError::NotFound(generation_id));
        }

        let mut path = Vec::new();
        let mut current = Some(generation_id);
        while let Some(id) = current {
            match self.node_pool.get(&id) {
                Some(node) => {
                    path.push(node);
                    current = node.parent_id;
                }
                None => break,
            }
        }
        path.reverse();
        Ok(path)
    }

    /// Recent generations, newest first, capped at `limit`.
    pub fn recent(&self, limit: usize) -> Vec<GenerationSummary> {
        let mut nodes: Vec<&Generation> = self.node_pool.values().collect();
        nodes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        nodes.into_iter().take(limit).map(|n| n.summary()).collect()
    }
}
