use crate::models::{Movie, SelectedMovie, MAX_SELECTION};

/// Result of a toggle action on the selection set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The movie was not selected and has been appended
    Added,
    /// The movie was selected and has been removed
    Removed,
    /// The set is at its bound; nothing changed
    LimitReached,
}

/// The bounded, order-preserving set of user-chosen movies
///
/// Insertion order determines render order. Membership is by `Movie.id`, the
/// size never exceeds `MAX_SELECTION`, and no two entries share an id. The
/// set is page-scoped, ephemeral state: it starts empty and is never
/// persisted.
#[derive(Debug, Default)]
pub struct SelectionSet {
    entries: Vec<SelectedMovie>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects or deselects a movie
    ///
    /// A second toggle of the same id removes the entry. An insert while at
    /// the bound is rejected with `LimitReached` and leaves the set unchanged,
    /// never silently truncated.
    pub fn toggle(&mut self, movie: &Movie) -> ToggleOutcome {
        if let Some(index) = self.position(movie.id) {
            self.entries.remove(index);
            return ToggleOutcome::Removed;
        }

        if self.entries.len() >= MAX_SELECTION {
            tracing::debug!(id = movie.id, "Selection limit reached");
            return ToggleOutcome::LimitReached;
        }

        self.entries.push(SelectedMovie::new(movie.clone()));
        ToggleOutcome::Added
    }

    /// Overwrites the rating of a selected entry
    ///
    /// The value is clamped into the 1-10 scale. An absent id is silently
    /// ignored so a rating control firing after its entry was removed cannot
    /// fault.
    pub fn set_rating(&mut self, id: u64, rating: u8) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id() == id) {
            entry.rating = rating.clamp(1, 10);
        }
    }

    /// Removes an entry if present; returns whether anything changed
    pub fn remove(&mut self, id: u64) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: u64) -> bool {
        self.position(id).is_some()
    }

    /// Point-in-time copy of the ordered entries, for submission
    pub fn snapshot(&self) -> Vec<SelectedMovie> {
        self.entries.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedMovie> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_RATING;

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            genres: String::new(),
            vote_average: 7.0,
            poster_url: String::new(),
        }
    }

    #[test]
    fn test_toggle_adds_with_default_rating() {
        let mut set = SelectionSet::new();
        assert_eq!(set.toggle(&movie(1, "Dune")), ToggleOutcome::Added);
        assert_eq!(set.len(), 1);
        assert_eq!(set.snapshot()[0].rating, DEFAULT_RATING);
    }

    #[test]
    fn test_toggle_twice_restores_prior_state() {
        let mut set = SelectionSet::new();
        set.toggle(&movie(1, "Dune"));
        set.toggle(&movie(2, "Heat"));

        assert_eq!(set.toggle(&movie(2, "Heat")), ToggleOutcome::Removed);
        assert_eq!(set.len(), 1);
        assert!(set.contains(1));
        assert!(!set.contains(2));
    }

    #[test]
    fn test_bound_rejects_sixth_distinct_toggle() {
        let mut set = SelectionSet::new();
        for id in 1..=5 {
            assert_eq!(set.toggle(&movie(id, "m")), ToggleOutcome::Added);
        }

        let before = set.snapshot();
        assert_eq!(set.toggle(&movie(6, "m")), ToggleOutcome::LimitReached);
        assert_eq!(set.len(), MAX_SELECTION);
        assert_eq!(set.snapshot(), before);
    }

    #[test]
    fn test_toggle_at_bound_still_removes() {
        let mut set = SelectionSet::new();
        for id in 1..=5 {
            set.toggle(&movie(id, "m"));
        }

        // Removal is always allowed, even at the bound
        assert_eq!(set.toggle(&movie(3, "m")), ToggleOutcome::Removed);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_bound_holds_under_arbitrary_toggle_sequences() {
        let mut set = SelectionSet::new();
        let ids = [1u64, 2, 3, 1, 4, 5, 6, 7, 2, 8, 9, 10, 3, 11];
        for id in ids {
            set.toggle(&movie(id, "m"));
            assert!(set.len() <= MAX_SELECTION);
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut set = SelectionSet::new();
        set.toggle(&movie(3, "c"));
        set.toggle(&movie(1, "a"));
        set.toggle(&movie(2, "b"));

        let ids: Vec<u64> = set.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_set_rating_overwrites() {
        let mut set = SelectionSet::new();
        set.toggle(&movie(1, "Dune"));
        set.set_rating(1, 8);

        let snapshot = set.snapshot();
        assert_eq!(snapshot[0].id(), 1);
        assert_eq!(snapshot[0].rating, 8);
    }

    #[test]
    fn test_set_rating_clamps_out_of_range() {
        let mut set = SelectionSet::new();
        set.toggle(&movie(1, "Dune"));

        set.set_rating(1, 0);
        assert_eq!(set.snapshot()[0].rating, 1);

        set.set_rating(1, 200);
        assert_eq!(set.snapshot()[0].rating, 10);
    }

    #[test]
    fn test_set_rating_absent_id_is_noop() {
        let mut set = SelectionSet::new();
        set.toggle(&movie(1, "Dune"));
        set.set_rating(42, 9);

        assert_eq!(set.len(), 1);
        assert_eq!(set.snapshot()[0].rating, DEFAULT_RATING);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut set = SelectionSet::new();
        set.toggle(&movie(1, "Dune"));

        assert!(!set.remove(42));
        assert_eq!(set.len(), 1);
        assert!(set.remove(1));
        assert!(set.is_empty());
    }

    #[test]
    fn test_snapshot_is_a_copy_not_a_live_view() {
        let mut set = SelectionSet::new();
        set.toggle(&movie(1, "Dune"));
        let snapshot = set.snapshot();

        set.set_rating(1, 9);
        set.toggle(&movie(2, "Heat"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].rating, DEFAULT_RATING);
    }
}
