//! A player's hand: disjoint ascending runs of card values.

use super::errors::DomainError;
use super::{MAX_CARD, MIN_CARD};

/// Cards held by one player, kept as sorted, disjoint, maximal ascending
/// runs ("groups"). `{5,6,9}` is two groups: `[5,6]` and `[9]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    groups: Vec<Vec<u8>>,
}

impl Hand {
    /// An empty hand.
    pub fn empty() -> Self {
        Self { groups: vec![] }
    }

    /// Build a hand from wire-format groups, validating every invariant:
    /// groups are non-empty contiguous ascending runs, sorted across the
    /// hand, disjoint, maximal (no two adjacent runs), all values in range.
    pub fn from_groups(groups: Vec<Vec<u8>>) -> Result<Self, DomainError> {
        for group in &groups {
            let first = *group.first().ok_or(DomainError::EmptyGroup)?;
            for (i, &v) in group.iter().enumerate() {
                if !(MIN_CARD..=MAX_CARD).contains(&v) {
                    return Err(DomainError::CardOutOfRange(v));
                }
                if v != first + i as u8 {
                    return Err(DomainError::NonContiguousGroup(group.clone()));
                }
            }
        }
        for pair in groups.windows(2) {
            let prev_last = *pair[0].last().unwrap_or(&0);
            let next_first = *pair[1].first().unwrap_or(&0);
            if next_first < prev_last {
                return Err(DomainError::UnorderedGroups);
            }
            if next_first == prev_last {
                return Err(DomainError::DuplicateCard(next_first));
            }
            // Adjacent runs would be a single maximal run.
            if next_first == prev_last + 1 {
                return Err(DomainError::UnorderedGroups);
            }
        }
        Ok(Self { groups })
    }

    /// The runs, sorted ascending.
    pub fn groups(&self) -> &[Vec<u8>] {
        &self.groups
    }

    /// Total number of cards across all runs.
    pub fn card_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Iterate over every card value in the hand, ascending.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.groups.iter().flatten().copied()
    }

    pub fn contains(&self, value: u8) -> bool {
        self.values().any(|v| v == value)
    }

    /// Add a card, merging adjacent runs to keep runs maximal.
    pub fn insert(&mut self, value: u8) -> Result<(), DomainError> {
        if !(MIN_CARD..=MAX_CARD).contains(&value) {
            return Err(DomainError::CardOutOfRange(value));
        }
        if self.contains(value) {
            return Err(DomainError::DuplicateCard(value));
        }
        // First group starting above the new value.
        let pos = self.groups.partition_point(|g| g[0] < value);
        let extends_prev = pos > 0 && self.groups[pos - 1].last().copied() == Some(value - 1);
        let extends_next = pos < self.groups.len() && self.groups[pos][0] == value + 1;
        match (extends_prev, extends_next) {
            (true, true) => {
                // The new card bridges two runs into one.
                let next = self.groups.remove(pos);
                let prev = &mut self.groups[pos - 1];
                prev.push(value);
                prev.extend(next);
            }
            (true, false) => self.groups[pos - 1].push(value),
            (false, true) => self.groups[pos].insert(0, value),
            (false, false) => self.groups.insert(pos, vec![value]),
        }
        Ok(())
    }

    /// Card penalty: only the first (lowest) value of each run counts.
    pub fn score(&self) -> u32 {
        self.groups.iter().map(|g| g[0] as u32).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_groups_accepts_valid_hand() {
        let hand = Hand::from_groups(vec![vec![5, 6], vec![9]]).unwrap();
        assert_eq!(hand.card_count(), 3);
        assert_eq!(hand.values().collect::<Vec<_>>(), vec![5, 6, 9]);
        assert!(hand.contains(6));
        assert!(!hand.contains(7));
    }

    #[test]
    fn from_groups_rejects_malformed_hands() {
        assert_eq!(
            Hand::from_groups(vec![vec![]]),
            Err(DomainError::EmptyGroup)
        );
        assert_eq!(
            Hand::from_groups(vec![vec![5, 7]]),
            Err(DomainError::NonContiguousGroup(vec![5, 7]))
        );
        assert_eq!(
            Hand::from_groups(vec![vec![9], vec![5]]),
            Err(DomainError::UnorderedGroups)
        );
        assert_eq!(
            Hand::from_groups(vec![vec![5], vec![5]]),
            Err(DomainError::DuplicateCard(5))
        );
        // Adjacent runs must have been merged upstream.
        assert_eq!(
            Hand::from_groups(vec![vec![5, 6], vec![7]]),
            Err(DomainError::UnorderedGroups)
        );
        assert_eq!(
            Hand::from_groups(vec![vec![36]]),
            Err(DomainError::CardOutOfRange(36))
        );
    }

    #[test]
    fn insert_extends_and_merges_runs() {
        let mut hand = Hand::from_groups(vec![vec![5, 6], vec![9]]).unwrap();

        hand.insert(10).unwrap();
        assert_eq!(hand.groups(), &[vec![5, 6], vec![9, 10]]);

        hand.insert(4).unwrap();
        assert_eq!(hand.groups(), &[vec![4, 5, 6], vec![9, 10]]);

        // 7 then 8 bridges the two runs.
        hand.insert(7).unwrap();
        hand.insert(8).unwrap();
        assert_eq!(hand.groups(), &[vec![4, 5, 6, 7, 8, 9, 10]]);

        hand.insert(20).unwrap();
        assert_eq!(hand.groups(), &[vec![4, 5, 6, 7, 8, 9, 10], vec![20]]);

        assert_eq!(hand.insert(20), Err(DomainError::DuplicateCard(20)));
        assert_eq!(hand.insert(2), Err(DomainError::CardOutOfRange(2)));
    }

    #[test]
    fn score_counts_run_heads_only() {
        assert_eq!(Hand::empty().score(), 0);
        let hand = Hand::from_groups(vec![vec![5, 6], vec![9], vec![30, 31, 32]]).unwrap();
        assert_eq!(hand.score(), 5 + 9 + 30);
    }
}
