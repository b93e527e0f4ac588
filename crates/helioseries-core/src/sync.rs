//! Synchronization-group membership.
//!
//! A synchronization group names the set of variables whose time ranges move
//! together: when the user pans one member, the orchestration layer
//! propagates the range change to every other member. This module is the
//! membership registry only; propagation itself lives outside the core.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a variable, unique across the application session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariableId(Uuid);

impl VariableId {
    /// A fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing identifier (for catalogue restore).
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// The underlying uuid.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for VariableId {
    fn default() -> Self {
        Self::new()
    }
}

/// A named set of variables whose range changes are propagated together.
///
/// Pure set bookkeeping: membership is unordered, adds are idempotent, and
/// no business logic lives here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncGroup {
    id: Uuid,
    members: HashSet<VariableId>,
}

impl SyncGroup {
    /// A new empty group with a fresh identifier.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// A new empty group with a caller-chosen identifier.
    pub fn with_id(id: Uuid) -> Self {
        Self {
            id,
            members: HashSet::new(),
        }
    }

    /// The group identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Add a variable to the group (no-op if already a member).
    pub fn add(&mut self, variable: VariableId) {
        self.members.insert(variable);
    }

    /// Remove a variable from the group; true when it was a member.
    pub fn remove(&mut self, variable: &VariableId) -> bool {
        self.members.remove(variable)
    }

    /// True when `variable` belongs to the group.
    pub fn contains(&self, variable: &VariableId) -> bool {
        self.members.contains(variable)
    }

    /// Read-only snapshot of the membership.
    pub fn members(&self) -> &HashSet<VariableId> {
        &self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Default for SyncGroup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_idempotent() {
        let mut group = SyncGroup::new();
        let a = VariableId::new();
        let b = VariableId::new();

        group.add(a);
        group.add(a);
        group.add(b);
        assert_eq!(group.len(), 2);
        assert!(group.contains(&a));

        assert!(group.remove(&a));
        assert!(!group.remove(&a));
        assert_eq!(group.members().iter().copied().collect::<Vec<_>>(), vec![b]);
    }

    #[test]
    fn groups_keep_their_identity() {
        let id = Uuid::new_v4();
        let group = SyncGroup::with_id(id);
        assert_eq!(group.id(), id);
        assert!(group.is_empty());
        assert_ne!(SyncGroup::new().id(), SyncGroup::new().id());
    }
}
