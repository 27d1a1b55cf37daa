//! Named preset tables
//!
//! Every category keeps its presets in a [`PresetTable`]: an ordered, closed
//! set of names built once and read-only afterwards.

use indexmap::IndexMap;

use crate::value::StyleMap;

/// A read-only table of named presets, in declaration order
#[derive(Debug, Clone)]
pub struct PresetTable<T = StyleMap> {
    entries: IndexMap<&'static str, T>,
}

impl<T> PresetTable<T> {
    /// Build a table from `(name, preset)` pairs
    pub fn from_entries(entries: impl IntoIterator<Item = (&'static str, T)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Look up a preset by name
    ///
    /// Returns a reference into the table; callers that hand the preset out
    /// clone it first so the table is never shared mutably.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Preset names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &T)> {
        self.entries.iter().map(|(name, preset)| (*name, preset))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style_map;

    #[test]
    fn test_names_in_declaration_order() {
        let table = PresetTable::from_entries([
            ("zeta", style_map! { "a" => "1" }),
            ("alpha", style_map! { "b" => "2" }),
        ]);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_get_missing() {
        let table: PresetTable = PresetTable::from_entries([]);
        assert!(table.get("nope").is_none());
        assert!(table.is_empty());
    }
}
