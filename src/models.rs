use crate::types::GitHubRepo;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A repository as shown in the dropdown and the pinned list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub owner: String,
    pub stars: u64,
}

impl RepositoryRecord {
    pub fn new(name: impl Into<String>, owner: impl Into<String>, stars: u64) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            stars,
        }
    }
}

impl From<GitHubRepo> for RepositoryRecord {
    fn from(repo: GitHubRepo) -> Self {
        Self {
            name: repo.name,
            owner: repo.owner.login,
            stars: repo.stargazers_count,
        }
    }
}

/// Identifier of a pinned entry, unique for the lifetime of a [`PinnedList`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PinId(pub u64);

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pin-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedEntry {
    pub id: PinId,
    pub record: RepositoryRecord,
}

/// Ordered list of pinned repositories.
///
/// Entries are independent copies of the selected record. Ids are handed out
/// in increasing order and never reused, so removing one entry can't hit
/// another that was pinned later with the same record.
#[derive(Debug, Default, Clone)]
pub struct PinnedList {
    entries: Vec<PinnedEntry>,
    next_id: u64,
}

impl PinnedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: RepositoryRecord) -> &PinnedEntry {
        let id = PinId(self.next_id);
        self.next_id += 1;
        self.entries.push(PinnedEntry { id, record });
        &self.entries[self.entries.len() - 1]
    }

    pub fn remove(&mut self, id: PinId) -> Option<PinnedEntry> {
        let position = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(position))
    }

    pub fn get(&self, id: PinId) -> Option<&PinnedEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PinnedEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[PinnedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropdownVisibility {
    #[default]
    Hidden,
    Visible,
}

impl DropdownVisibility {
    pub fn is_visible(self) -> bool {
        self == DropdownVisibility::Visible
    }
}

/// Point-in-time copy of the search controller state
#[derive(Debug, Clone, Serialize)]
pub struct SearchSnapshot {
    pub input: String,
    pub results: Vec<RepositoryRecord>,
    pub dropdown: DropdownVisibility,
    pub pinned: Vec<PinnedEntry>,
    pub last_dispatched: u64,
}

/// Formats a star count with thousands separators, e.g. `1234567` -> `1,234,567`
pub fn format_stars(stars: u64) -> String {
    let digits = stars.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
