use crate::hex::AxialHex;

/// Set of selected hexes with toggle semantics.
///
/// Membership uses structural `(q, r)` equality. Insertion order is kept but
/// carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    hexes: Vec<AxialHex>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `hex` if absent, removes it if present.
    ///
    /// Returns `true` when `hex` is selected after the call.
    pub fn toggle(&mut self, hex: AxialHex) -> bool {
        match self.hexes.iter().position(|member| *member == hex) {
            Some(index) => {
                self.hexes.remove(index);
                false
            }
            None => {
                self.hexes.push(hex);
                true
            }
        }
    }

    pub fn contains(&self, hex: AxialHex) -> bool {
        self.hexes.contains(&hex)
    }

    pub fn list(&self) -> &[AxialHex] {
        &self.hexes
    }

    pub fn iter(&self) -> impl Iterator<Item = &AxialHex> {
        self.hexes.iter()
    }

    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    /// Deselects everything. Returns `false` if nothing was selected.
    pub fn clear(&mut self) -> bool {
        if self.hexes.is_empty() {
            return false;
        }
        self.hexes.clear();
        true
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a AxialHex;
    type IntoIter = std::slice::Iter<'a, AxialHex>;

    fn into_iter(self) -> Self::IntoIter {
        self.hexes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_set() {
        let mut selection = SelectionSet::new();
        selection.toggle(AxialHex::new(4, 4));
        let before = selection.clone();

        assert!(selection.toggle(AxialHex::new(-1, 2)));
        assert!(!selection.toggle(AxialHex::new(-1, 2)));
        assert_eq!(selection, before);
    }

    #[test]
    fn membership_is_structural() {
        let mut selection = SelectionSet::new();
        selection.toggle(AxialHex::new(3, -2));
        assert!(selection.contains(AxialHex { q: 3, r: -2 }));
        assert!(!selection.contains(AxialHex::new(-2, 3)));
    }

    #[test]
    fn removes_the_matching_member_only() {
        let mut selection = SelectionSet::new();
        for hex in [AxialHex::new(0, 0), AxialHex::new(1, 0), AxialHex::new(2, 0)] {
            selection.toggle(hex);
        }
        selection.toggle(AxialHex::new(1, 0));
        assert_eq!(selection.list(), &[AxialHex::new(0, 0), AxialHex::new(2, 0)]);
    }

    #[test]
    fn never_holds_duplicates() {
        let mut selection = SelectionSet::new();
        let hex = AxialHex::new(7, 7);
        for _ in 0..5 {
            selection.toggle(hex);
        }
        assert_eq!(selection.len(), 1);
        assert!(selection.contains(hex));
    }

    #[test]
    fn clear_reports_change() {
        let mut selection = SelectionSet::new();
        assert!(!selection.clear());
        selection.toggle(AxialHex::ORIGIN);
        assert!(selection.clear());
        assert!(selection.is_empty());
    }
}
