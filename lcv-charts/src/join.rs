//! Keyed reconciliation of visual marks against data.
//!
//! Marks are matched to data by key, not by position: data whose key already
//! has a mark updates that mark in place, unseen keys create marks, and marks
//! whose key vanished are dropped. A surviving mark keeps its [`MarkId`], which
//! is what lets it animate instead of being torn down and rebuilt.

use std::collections::HashMap;
use std::hash::Hash;

/// Identity of one drawn mark. Never reused within a [`MarkSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(u64);

impl MarkId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A mark bound to a data key.
#[derive(Debug, Clone)]
pub struct Mark<K, M> {
    id: MarkId,
    key: K,
    pub state: M,
}

impl<K, M> Mark<K, M> {
    pub fn id(&self) -> MarkId {
        self.id
    }

    pub fn key(&self) -> &K {
        &self.key
    }
}

/// How many marks one join created, kept and removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinSummary {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

/// The marks of one chart layer, in the order of the last joined data.
#[derive(Debug, Clone)]
pub struct MarkSet<K, M> {
    marks: Vec<Mark<K, M>>,
    next_id: u64,
}

impl<K, M> Default for MarkSet<K, M> {
    fn default() -> Self {
        Self {
            marks: Vec::new(),
            next_id: 1,
        }
    }
}

impl<K: Eq + Hash + Clone, M> MarkSet<K, M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile the marks with `data`.
    ///
    /// `enter` builds the initial state of a new mark; `update` then runs for
    /// every mark bound to the data, new ones included. A key repeated in
    /// `data` gets an extra mark, and which one survives the next join is
    /// unspecified.
    pub fn join<D, I>(
        &mut self,
        data: I,
        key: impl Fn(&D) -> K,
        mut enter: impl FnMut(&D) -> M,
        mut update: impl FnMut(&D, &mut M),
    ) -> JoinSummary
    where
        I: IntoIterator<Item = D>,
    {
        let previous = self.marks.len();
        let mut existing: HashMap<K, Mark<K, M>> = self
            .marks
            .drain(..)
            .map(|m| (m.key.clone(), m))
            .collect();

        let mut summary = JoinSummary::default();
        for datum in data {
            let k = key(&datum);
            let mut mark = match existing.remove(&k) {
                Some(mark) => {
                    summary.updated += 1;
                    mark
                }
                None => {
                    summary.entered += 1;
                    let id = MarkId(self.next_id);
                    self.next_id += 1;
                    Mark {
                        id,
                        key: k,
                        state: enter(&datum),
                    }
                }
            };
            update(&datum, &mut mark.state);
            self.marks.push(mark);
        }
        summary.exited = previous - summary.updated;
        summary
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mark<K, M>> {
        self.marks.iter()
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn get(&self, id: MarkId) -> Option<&Mark<K, M>> {
        self.marks.iter().find(|m| m.id == id)
    }

    pub fn find(&self, key: &K) -> Option<&Mark<K, M>> {
        self.marks.iter().find(|m| &m.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join_words(set: &mut MarkSet<String, String>, words: &[&str]) -> JoinSummary {
        set.join(
            words.iter().copied(),
            |w| w.to_string(),
            |_| String::new(),
            |w, state| *state = w.to_uppercase(),
        )
    }

    #[test]
    fn first_join_enters_everything() {
        let mut set = MarkSet::new();
        let s = join_words(&mut set, &["a", "b", "c"]);
        assert_eq!(s, JoinSummary { entered: 3, updated: 0, exited: 0 });
        assert_eq!(set.len(), 3);
        assert_eq!(set.find(&"b".to_string()).map(|m| m.state.as_str()), Some("B"));
    }

    #[test]
    fn surviving_marks_keep_their_ids() {
        let mut set = MarkSet::new();
        join_words(&mut set, &["a", "b", "c"]);
        let ids: Vec<MarkId> = set.iter().map(|m| m.id()).collect();

        let s = join_words(&mut set, &["c", "a", "b"]);
        assert_eq!(s, JoinSummary { entered: 0, updated: 3, exited: 0 });
        let order: Vec<&str> = set.iter().map(|m| m.key().as_str()).collect();
        assert_eq!(order, ["c", "a", "b"]);
        assert_eq!(set.find(&"a".to_string()).map(|m| m.id()), Some(ids[0]));
        assert_eq!(set.find(&"c".to_string()).map(|m| m.id()), Some(ids[2]));
    }

    #[test]
    fn exit_then_enter_allocates_a_new_id() {
        let mut set = MarkSet::new();
        join_words(&mut set, &["a", "b"]);
        let old_b = set.find(&"b".to_string()).map(|m| m.id());

        let s = join_words(&mut set, &["a"]);
        assert_eq!(s, JoinSummary { entered: 0, updated: 1, exited: 1 });

        let s = join_words(&mut set, &["a", "b"]);
        assert_eq!(s, JoinSummary { entered: 1, updated: 1, exited: 0 });
        assert_ne!(set.find(&"b".to_string()).map(|m| m.id()), old_b);
    }

    #[test]
    fn update_runs_for_entered_marks_too() {
        let mut set: MarkSet<u32, Vec<&str>> = MarkSet::new();
        set.join(
            [1u32],
            |d| *d,
            |_| vec!["enter"],
            |_, state| state.push("update"),
        );
        assert_eq!(set.iter().next().map(|m| m.state.clone()), Some(vec!["enter", "update"]));
    }

    #[test]
    fn duplicate_keys_do_not_panic() {
        let mut set = MarkSet::new();
        let s = join_words(&mut set, &["a", "a"]);
        assert_eq!(s.entered, 2);
        let s = join_words(&mut set, &["a"]);
        assert_eq!(s.updated + s.entered, 1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn empty_data_removes_all_marks() {
        let mut set = MarkSet::new();
        join_words(&mut set, &["a", "b"]);
        let s = join_words(&mut set, &[]);
        assert_eq!(s.exited, 2);
        assert!(set.is_empty());
    }
}
