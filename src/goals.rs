use std::collections::BTreeMap;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::WeekIndex;

/// Free-text goals attached to grid cells.
///
/// Created empty, changed only through [`GoalStore::set`] and
/// [`GoalStore::delete`]. A stored goal is never blank: setting blank text
/// removes the entry instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<WeekIndex, String>",
    into = "BTreeMap<WeekIndex, String>"
)]
pub struct GoalStore {
    goals: BTreeMap<WeekIndex, String>,
}

impl GoalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the trimmed `text` for `week`, or deletes the goal when the
    /// trimmed text is empty.
    pub fn set(&mut self, week: WeekIndex, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            self.delete(week);
            return;
        }
        trace!("goal set for week {week} ({} chars)", text.chars().count());
        self.goals.insert(week, text.to_owned());
    }

    /// Removes the goal for `week`, returning it if there was one.
    pub fn delete(&mut self, week: WeekIndex) -> Option<String> {
        let removed = self.goals.remove(&week);
        if removed.is_some() {
            trace!("goal deleted for week {week}");
        }
        removed
    }

    pub fn get(&self, week: WeekIndex) -> Option<&str> {
        self.goals.get(&week).map(String::as_str)
    }

    pub fn contains(&self, week: WeekIndex) -> bool {
        self.goals.contains_key(&week)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Goals in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (WeekIndex, &str)> {
        self.goals.iter().map(|(week, text)| (*week, text.as_str()))
    }

    pub fn clear(&mut self) {
        self.goals.clear();
    }
}

impl From<BTreeMap<WeekIndex, String>> for GoalStore {
    fn from(goals: BTreeMap<WeekIndex, String>) -> Self {
        let mut store = Self::new();
        for (week, text) in goals {
            store.set(week, &text);
        }
        store
    }
}

impl From<GoalStore> for BTreeMap<WeekIndex, String> {
    fn from(store: GoalStore) -> Self {
        store.goals
    }
}
