#![allow(dead_code)]

use lineforge::core_types::{Player, PositionRequirements};

pub fn player(name: &str, stats: &[(&str, i64)]) -> Player {
    Player::new(
        name,
        stats
            .iter()
            .map(|(stat, value)| (stat.to_string(), *value))
            .collect(),
    )
}

pub fn requirements(attacking: &[&str], defensive: &[&str]) -> PositionRequirements {
    PositionRequirements::new(
        attacking.iter().map(|s| s.to_string()).collect(),
        defensive.iter().map(|s| s.to_string()).collect(),
    )
}

/// Two starters, three players. Ceiling pruning hides the only improving
/// swap: C (ceiling 12) replacing B (total 20) gains 2 once A moves to D1.
pub fn pruning_fixture() -> (Vec<Player>, PositionRequirements) {
    let roster = vec![
        player("A", &[("O1", 10), ("O2", 0), ("D1", 10), ("D2", 0)]),
        player("B", &[("O1", 0), ("O2", 0), ("D1", 20), ("D2", 0)]),
        player("C", &[("O1", 0), ("O2", 6), ("D1", 0), ("D2", 6)]),
    ];
    (roster, requirements(&["O1", "O2"], &["D1", "D2"]))
}

/// Eight players with distinct strengths over a 3-slot lineup.
pub fn squad() -> (Vec<Player>, PositionRequirements) {
    let roster = vec![
        player("Ames", &[("Speed", 9), ("Hands", 4), ("Power", 3), ("Vision", 6)]),
        player("Brook", &[("Speed", 5), ("Hands", 9), ("Power", 4), ("Vision", 7)]),
        player("Cruz", &[("Speed", 3), ("Hands", 2), ("Power", 9), ("Vision", 4)]),
        player("Dane", &[("Speed", 7), ("Hands", 7), ("Power", 6), ("Vision", 3)]),
        player("Ezra", &[("Speed", 4), ("Hands", 5), ("Power", 8), ("Vision", 8)]),
        player("Fay", &[("Speed", 8), ("Hands", 3), ("Power", 2), ("Vision", 9)]),
        player("Gus", &[("Speed", 2), ("Hands", 6), ("Power", 7), ("Vision", 2)]),
        player("Hale", &[("Speed", 6), ("Hands", 8), ("Power", 5), ("Vision", 5)]),
    ];
    let reqs = requirements(&["QB", "WR", "RB"], &["LB", "CB", "S"])
        .with_formula("QB", "Vision * 2 + Hands")
        .with_formula("WR", "Speed + Hands")
        .with_formula("RB", "MAX(Speed, Power) + Power / 2")
        .with_formula("LB", "Power * 2")
        .with_formula("CB", "IF(Speed > 6, Speed * 2, Speed)")
        .with_formula("S", "AVG(Speed, Vision, Hands)");
    (roster, reqs)
}
