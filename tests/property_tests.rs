mod common;

use common::requirements;
use lineforge::api::optimize;
use lineforge::config::SearchParams;
use lineforge::core_types::{Player, PositionRequirements};
use lineforge::formula::evaluate;
use proptest::prelude::*;
use std::collections::HashSet;

const STATS: [&str; 4] = ["Speed", "Hands", "Power", "Vision"];

// --- STRATEGIES ---

prop_compose! {
    fn arb_player(idx: usize)(
        values in proptest::collection::vec(-5i64..20, STATS.len())
    ) -> Player {
        Player::new(
            format!("P{}", idx),
            STATS.iter().map(|s| s.to_string()).zip(values).collect(),
        )
    }
}

fn arb_roster(min: usize, max: usize) -> impl Strategy<Value = Vec<Player>> {
    (min..=max).prop_flat_map(|len| (0..len).map(arb_player).collect::<Vec<_>>())
}

prop_compose! {
    fn arb_requirements()(
        n in 1usize..5
    )(
        attacking in proptest::collection::vec(0..STATS.len(), n),
        defensive in proptest::collection::vec(0..STATS.len(), n)
    ) -> PositionRequirements {
        let names = |ids: Vec<usize>| ids.into_iter().map(|i| STATS[i]).collect::<Vec<_>>();
        requirements(&names(attacking), &names(defensive))
    }
}

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_lineup_invariants(
        reqs in arb_requirements(),
        roster in arb_roster(4, 10),
        prune in any::<bool>()
    ) {
        let params = SearchParams { prune_by_ceiling: prune, ..SearchParams::default() };
        let result = optimize(&roster, &reqs, params).unwrap();
        let n = reqs.slot_count();

        prop_assert_eq!(result.picks.len(), n);
        let names: HashSet<_> = result.picks.iter().map(|p| &p.player_name).collect();
        prop_assert_eq!(names.len(), n);

        let offence = sorted(result.picks.iter().map(|p| p.offence_position.clone()).collect());
        let defence = sorted(result.picks.iter().map(|p| p.defence_position.clone()).collect());
        prop_assert_eq!(offence, sorted(reqs.attacking.clone()));
        prop_assert_eq!(defence, sorted(reqs.defensive.clone()));

        let mut previous = result.initial_total;
        for swap in &result.swaps {
            prop_assert!(swap.total > previous);
            previous = swap.total;
        }
        prop_assert!(result.total >= result.initial_total);

        let summed: f64 = result.picks.iter().map(|p| p.total_score).sum();
        prop_assert!((summed - result.total).abs() < 1e-9);
    }

    #[test]
    fn test_short_roster_is_rejected(reqs in arb_requirements()) {
        let roster: Vec<Player> = Vec::new();
        prop_assert!(optimize(&roster, &reqs, SearchParams::default()).is_err());
    }

    #[test]
    fn test_literals_evaluate_to_themselves(x in -1.0e9..1.0e9f64) {
        let nobody = Player::new("Nobody", Vec::new());
        prop_assert_eq!(evaluate(&nobody, &x.to_string()).unwrap(), x);
    }

    #[test]
    fn test_stat_lookup_ignores_case(value in -1000i64..1000, upper in any::<bool>()) {
        let player = Player::new("P", vec![("Speed".to_string(), value)]);
        let name = if upper { "SPEED" } else { "speed" };
        prop_assert_eq!(evaluate(&player, name).unwrap(), value as f64);
    }
}
