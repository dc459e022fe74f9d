//! Property tests for the round structure calculator.

use proptest::prelude::*;

use crate::domain::rules::{compute_structure, default_max_cards, RoundPattern};
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Down-up: max → 1 strictly decreasing, then 1 → max strictly increasing,
    /// with a single 1.
    #[test]
    fn prop_down_up_shape(players in 3usize..=7) {
        let m = default_max_cards(players);
        let s = compute_structure(players, None, RoundPattern::DownUp);
        let seq = &s.rounds_structure;

        prop_assert_eq!(seq.len(), 2 * usize::from(m) - 1);
        prop_assert_eq!(usize::from(s.total_rounds), seq.len());
        prop_assert_eq!(seq.iter().filter(|&&c| c == 1).count(), 1);

        let bottom = usize::from(m) - 1;
        prop_assert_eq!(seq[0], m);
        prop_assert_eq!(seq[bottom], 1);
        prop_assert_eq!(*seq.last().unwrap(), m);
        prop_assert!(seq[..=bottom].windows(2).all(|w| w[0] == w[1] + 1));
        prop_assert!(seq[bottom..].windows(2).all(|w| w[0] + 1 == w[1]));
    }

    /// Up-down: max dealt twice in a row, 1 at each end.
    #[test]
    fn prop_up_down_shape(players in 3usize..=7, custom in proptest::option::of(1u8..=20)) {
        let s = compute_structure(players, custom, RoundPattern::UpDown);
        let m = custom.unwrap_or_else(|| default_max_cards(players));
        let seq = &s.rounds_structure;

        prop_assert_eq!(s.max_cards_per_player, m);
        prop_assert_eq!(seq.len(), 2 * usize::from(m));
        prop_assert_eq!(seq.iter().filter(|&&c| c == m).count(), 2);
        prop_assert_eq!(seq[usize::from(m) - 1], m);
        prop_assert_eq!(seq[usize::from(m)], m);
        prop_assert_eq!(seq[0], 1);
        prop_assert_eq!(*seq.last().unwrap(), 1);
        if m > 1 {
            prop_assert_eq!(seq.iter().filter(|&&c| c == 1).count(), 2);
        }
    }

    /// Recomputing from the same inputs is deterministic.
    #[test]
    fn prop_structure_is_reproducible(
        players in 3usize..=7,
        custom in proptest::option::of(1u8..=20),
        up_down in any::<bool>(),
    ) {
        let pattern = if up_down { RoundPattern::UpDown } else { RoundPattern::DownUp };
        prop_assert_eq!(
            compute_structure(players, custom, pattern),
            compute_structure(players, custom, pattern)
        );
    }
}
