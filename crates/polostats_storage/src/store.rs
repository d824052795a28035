//! The entity store: record arena, reverse reference index, and the
//! integrity engine.
//!
//! Records live in an id-keyed arena; every present to-one reference is
//! mirrored in a reverse index (target → field → sources), which is the
//! to-many side of each relation. Every mutation validates first and
//! commits only when nothing can fail, so operations are all-or-nothing.

use polostats_foundation::{EntityKind, Error, IdMap, RecordId, RecordSet, Result};

use crate::model::{Game, GameEvent, GameRoster, Player, Record, Season, Team};
use crate::patch::Patch;
use crate::schema::{self, OnDelete, RefField, Relation, RelationKind, StorePolicy};

/// Per-target slice of the reverse index: field → source ids.
type FieldIndex = im::OrdMap<RefField, RecordSet>;

/// Holds every record and keeps both directions of every relation
/// consistent across inserts, updates, and deletes.
///
/// Cloning is O(1) due to structural sharing, so a clone serves as a
/// consistent point-in-time snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityStore {
    /// Arena of records keyed by id.
    records: IdMap<Record>,
    /// Reverse index: target id → reference field → source ids.
    reverse: IdMap<FieldIndex>,
    /// Integrity policy for behaviors the schema leaves open.
    policy: StorePolicy,
}

impl EntityStore {
    /// Creates an empty store with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with an explicit policy.
    #[must_use]
    pub fn with_policy(policy: StorePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// The store's integrity policy.
    #[must_use]
    pub fn policy(&self) -> StorePolicy {
        self.policy
    }

    /// Number of records of all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records of one kind.
    #[must_use]
    pub fn count(&self, kind: EntityKind) -> usize {
        self.records.values().filter(|r| r.kind() == kind).count()
    }

    /// True when a record with this id exists.
    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.records.contains_key(&id)
    }

    // --- Mutation ---

    /// Inserts a record, registering it on every inverse index it
    /// references.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateId`] when the id is already present.
    /// - [`Error::DanglingReference`] when a carried reference names a
    ///   record that does not exist.
    /// - [`Error::KindMismatch`] when a carried reference names a record of
    ///   the wrong kind.
    /// - [`Error::DuplicateRoster`] when the policy rejects a second roster
    ///   for the same (game, player) pair.
    ///
    /// On error the store is unchanged.
    pub fn insert(&mut self, record: impl Into<Record>) -> Result<RecordId> {
        let record = record.into();
        let id = record.id();
        if self.records.contains_key(&id) {
            return Err(Error::duplicate_id(id));
        }
        self.validate_references(&record)?;
        if let Record::GameRoster(roster) = &record {
            self.check_roster_policy(roster, id)?;
        }

        Self::register(&mut self.reverse, &record);
        self.records.insert(id, record);
        Ok(id)
    }

    /// Applies a patch to the record with this id.
    ///
    /// Reassigning a reference removes the record from the old inverse
    /// collection and adds it to the new one; both sides change together or
    /// not at all.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] when the id is absent.
    /// - [`Error::KindMismatch`] when the patch targets a different kind,
    ///   or a new reference names a record of the wrong kind.
    /// - [`Error::DanglingReference`] when a new reference names a record
    ///   that does not exist.
    /// - [`Error::DuplicateRoster`] when the policy rejects the resulting
    ///   (game, player) pair.
    ///
    /// On error the store is unchanged.
    pub fn update(&mut self, id: RecordId, patch: impl Into<Patch>) -> Result<()> {
        let Some(current) = self.records.get(&id).cloned() else {
            return Err(Error::not_found(id));
        };
        let mut updated = current.clone();
        patch.into().apply_to(&mut updated)?;
        self.validate_references(&updated)?;
        if let Record::GameRoster(roster) = &updated {
            self.check_roster_policy(roster, id)?;
        }

        Self::unregister(&mut self.reverse, &current);
        Self::register(&mut self.reverse, &updated);
        self.records.insert(id, updated);
        Ok(())
    }

    /// Deletes the record with this id, applying its kind's deletion rules:
    /// cascade relations delete related records recursively, nullify
    /// relations clear the back-reference on survivors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when the id is absent; the store is
    /// unchanged in that case.
    pub fn delete(&mut self, id: RecordId) -> Result<()> {
        if !self.records.contains_key(&id) {
            return Err(Error::not_found(id));
        }
        let mut visited = RecordSet::new();
        self.delete_walk(id, &mut visited);
        Ok(())
    }

    /// Depth-first cascade walk in relation declaration order. `visited`
    /// guards against double deletion when two cascade paths reach the
    /// same record.
    fn delete_walk(&mut self, id: RecordId, visited: &mut RecordSet) {
        if visited.contains(&id) {
            return;
        }
        visited.insert(id);
        let Some(record) = self.records.get(&id).cloned() else {
            return;
        };
        let kind = record.kind();

        // Remove the record and its outgoing edges first; a to-one nullify
        // is thereby already done (the record vanishes from the target's
        // inverse collection).
        Self::unregister(&mut self.reverse, &record);
        self.records.remove(&id);

        for relation in schema::relations(kind) {
            let rule = self.effective_rule(kind, relation);
            match relation.kind {
                RelationKind::ToOne => {
                    if rule == OnDelete::Cascade {
                        if let Some(target) = record.reference(relation.via) {
                            self.delete_walk(target, visited);
                        }
                    }
                }
                RelationKind::ToMany => {
                    let sources: Vec<RecordId> = self.sources(id, relation.via).collect();
                    match rule {
                        OnDelete::Cascade => {
                            for source in sources {
                                self.delete_walk(source, visited);
                            }
                        }
                        OnDelete::Nullify => {
                            for source in sources {
                                self.nullify_reference(source, relation.via);
                            }
                        }
                    }
                }
            }
        }
    }

    /// Resolves the deletion rule for one relation, honoring policy
    /// overrides.
    fn effective_rule(&self, kind: EntityKind, relation: &Relation) -> OnDelete {
        if kind == EntityKind::Team && relation.via == RefField::PlayerTeam {
            self.policy.team_player_rule
        } else {
            relation.on_delete
        }
    }

    /// Clears one reference field on a surviving record and drops its
    /// index edge.
    fn nullify_reference(&mut self, source: RecordId, field: RefField) {
        let Some(mut record) = self.records.get(&source).cloned() else {
            return;
        };
        if let Some(target) = record.reference(field) {
            Self::unregister_edge(&mut self.reverse, source, field, target);
            record.clear_reference(field);
            self.records.insert(source, record);
        }
    }

    // --- Reads ---

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(&id)
    }

    /// Looks up a team by id.
    #[must_use]
    pub fn team(&self, id: RecordId) -> Option<&Team> {
        self.get(id).and_then(Record::as_team)
    }

    /// Looks up a season by id.
    #[must_use]
    pub fn season(&self, id: RecordId) -> Option<&Season> {
        self.get(id).and_then(Record::as_season)
    }

    /// Looks up a player by id.
    #[must_use]
    pub fn player(&self, id: RecordId) -> Option<&Player> {
        self.get(id).and_then(Record::as_player)
    }

    /// Looks up a game by id.
    #[must_use]
    pub fn game(&self, id: RecordId) -> Option<&Game> {
        self.get(id).and_then(Record::as_game)
    }

    /// Looks up a roster entry by id.
    #[must_use]
    pub fn roster(&self, id: RecordId) -> Option<&GameRoster> {
        self.get(id).and_then(Record::as_roster)
    }

    /// Looks up an event by id.
    #[must_use]
    pub fn event(&self, id: RecordId) -> Option<&GameEvent> {
        self.get(id).and_then(Record::as_event)
    }

    /// Iterates all records in id order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Lazily iterates records of one kind matching a predicate, in id
    /// order.
    ///
    /// The iterator is finite and restartable: calling `query` again
    /// re-evaluates the predicate fresh against the store's current state.
    pub fn query<'a, P>(&'a self, kind: EntityKind, predicate: P) -> impl Iterator<Item = &'a Record>
    where
        P: Fn(&Record) -> bool + 'a,
    {
        self.records
            .values()
            .filter(move |r| r.kind() == kind && predicate(r))
    }

    /// Iterates ids of records whose `field` points at `target`, in id
    /// order. This is the to-many side of the relation realized by `field`.
    pub fn sources(&self, target: RecordId, field: RefField) -> impl Iterator<Item = RecordId> + '_ {
        self.reverse
            .get(&target)
            .and_then(|by_field| by_field.get(&field))
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    // --- Integrity internals ---

    /// Checks that every present reference names an existing record of the
    /// declared kind.
    fn validate_references(&self, record: &Record) -> Result<()> {
        for &field in RefField::for_kind(record.kind()) {
            if let Some(target) = record.reference(field) {
                match self.records.get(&target) {
                    None => return Err(Error::dangling(field.name(), target)),
                    Some(found) if found.kind() != field.target() => {
                        return Err(Error::kind_mismatch(field.target(), found.kind()));
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }

    /// Enforces the duplicate-roster policy, ignoring the record itself on
    /// update.
    fn check_roster_policy(&self, roster: &GameRoster, exclude: RecordId) -> Result<()> {
        if !self.policy.reject_duplicate_rosters {
            return Ok(());
        }
        let (Some(game), Some(player)) = (roster.game, roster.player) else {
            return Ok(());
        };
        let clash = self
            .sources(game, RefField::RosterGame)
            .filter(|id| *id != exclude)
            .any(|id| self.roster(id).is_some_and(|r| r.player == Some(player)));
        if clash {
            return Err(Error::DuplicateRoster { game, player });
        }
        Ok(())
    }

    /// Adds index edges for every present reference of `record`.
    fn register(reverse: &mut IdMap<FieldIndex>, record: &Record) {
        for &field in RefField::for_kind(record.kind()) {
            if let Some(target) = record.reference(field) {
                Self::register_edge(reverse, record.id(), field, target);
            }
        }
    }

    /// Drops index edges for every present reference of `record`.
    fn unregister(reverse: &mut IdMap<FieldIndex>, record: &Record) {
        for &field in RefField::for_kind(record.kind()) {
            if let Some(target) = record.reference(field) {
                Self::unregister_edge(reverse, record.id(), field, target);
            }
        }
    }

    fn register_edge(
        reverse: &mut IdMap<FieldIndex>,
        source: RecordId,
        field: RefField,
        target: RecordId,
    ) {
        if let Some(by_field) = reverse.get_mut(&target) {
            if let Some(set) = by_field.get_mut(&field) {
                set.insert(source);
            } else {
                by_field.insert(field, RecordSet::unit(source));
            }
        } else {
            let mut by_field = FieldIndex::new();
            by_field.insert(field, RecordSet::unit(source));
            reverse.insert(target, by_field);
        }
    }

    /// Empty sets and field maps are pruned so the index never holds
    /// entries for ids with no incoming references.
    fn unregister_edge(
        reverse: &mut IdMap<FieldIndex>,
        source: RecordId,
        field: RefField,
        target: RecordId,
    ) {
        let mut drop_target = false;
        if let Some(by_field) = reverse.get_mut(&target) {
            let mut drop_field = false;
            if let Some(set) = by_field.get_mut(&field) {
                set.remove(&source);
                drop_field = set.is_empty();
            }
            if drop_field {
                by_field.remove(&field);
            }
            drop_target = by_field.is_empty();
        }
        if drop_target {
            reverse.remove(&target);
        }
    }
}
