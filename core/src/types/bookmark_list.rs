use serde::{Deserialize, Serialize};

/// Ordered list of bookmarked paths.
///
/// Positions are 1-based. Insertion through [`BookmarkList::push_unique`] never creates
/// duplicates, but a list decoded from disk is taken as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkList(Vec<String>);

impl BookmarkList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.iter().any(|p| p == path)
    }

    /// Returns `true` if `position` is within `[1, len]`.
    pub fn is_valid_position(&self, position: usize) -> bool {
        (1..=self.0.len()).contains(&position)
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        if !self.is_valid_position(position) {
            return None;
        }
        self.0.get(position - 1).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Appends `path` unless already present. Returns whether it was appended.
    pub fn push_unique(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if self.contains(&path) {
            return false;
        }
        self.0.push(path);
        true
    }

    pub fn remove(&mut self, position: usize) -> Option<String> {
        if !self.is_valid_position(position) {
            return None;
        }
        Some(self.0.remove(position - 1))
    }

    /// Moves the entry at `from` so that it ends up at `to`.
    ///
    /// Entries between the two positions shift by one. Returns `false` without
    /// touching the list if either position is invalid or they are equal.
    pub fn move_entry(&mut self, from: usize, to: usize) -> bool {
        if from == to || !self.is_valid_position(from) || !self.is_valid_position(to) {
            return false;
        }
        let entry = self.0.remove(from - 1);
        self.0.insert(to - 1, entry);
        true
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }

    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

impl From<Vec<String>> for BookmarkList {
    fn from(paths: Vec<String>) -> Self {
        Self(paths)
    }
}

impl<'a> FromIterator<&'a str> for BookmarkList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_owned).collect())
    }
}
