use lineforge::core_types::Side;
use lineforge::scorer::loader::{
    load_requirements, load_roster, parse_requirements, parse_roster, parse_roster_csv,
};
use lineforge::LineupError;
use rstest::rstest;
use std::io::{Cursor, Write};
use tempfile::{Builder, NamedTempFile};

const ROSTER: &str = "\
Name Speed Catching Tackling
7 Ada Lovelace
WR 9 6 2

12 Grace Hopper
8 7 5
";

#[test]
fn test_parse_line_roster() {
    let roster = parse_roster(Cursor::new(ROSTER)).unwrap();
    assert_eq!(roster.len(), 2);

    let ada = &roster[0];
    assert_eq!(ada.name, "Ada Lovelace");
    assert_eq!(ada.stat("Speed"), Some(9));
    assert_eq!(ada.stat("tackling"), Some(2));
    assert_eq!(ada.stat("Blocking"), None);

    let grace = &roster[1];
    assert_eq!(grace.name, "Grace Hopper");
    assert_eq!(
        grace.stats,
        vec![
            ("Speed".to_string(), 8),
            ("Catching".to_string(), 7),
            ("Tackling".to_string(), 5)
        ]
    );
}

#[rstest]
#[case("Player Speed\n1 Ada\n5\n", 1)]
#[case("Name Speed\n1 Ada\n", 2)]
#[case("Name Speed Catching\n1 Ada\n5\n", 3)]
#[case("Name Speed\n1 Ada\n5 x\n2 Ada\n6\n", 4)]
#[case("Name Speed\nAda\n5\n", 2)]
fn test_line_roster_errors(#[case] input: &str, #[case] expected_line: usize) {
    match parse_roster(Cursor::new(input)) {
        Err(LineupError::Roster { line, .. }) => assert_eq!(line, expected_line),
        other => panic!("expected roster error, got {:?}", other),
    }
}

#[test]
fn test_parse_csv_roster() {
    let csv = "Name, Speed, Catching\nAda, 9, 6\nGrace, 8, 7\n";
    let roster = parse_roster_csv(Cursor::new(csv)).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[1].name, "Grace");
    assert_eq!(roster[1].stat("catching"), Some(7));
}

#[test]
fn test_csv_roster_rejects_bad_values() {
    let csv = "Name,Speed\nAda,fast\n";
    let err = parse_roster_csv(Cursor::new(csv)).unwrap_err();
    assert!(matches!(err, LineupError::Roster { line: 2, .. }), "{:?}", err);

    let csv = "Name,Speed\nAda,1\nAda,2\n";
    let err = parse_roster_csv(Cursor::new(csv)).unwrap_err();
    assert!(matches!(err, LineupError::Roster { line: 3, .. }), "{:?}", err);
}

#[test]
fn test_load_roster_by_extension() {
    let mut csv_file = Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(csv_file, "Name,Speed").unwrap();
    writeln!(csv_file, "Ada,9").unwrap();
    let roster = load_roster(csv_file.path()).unwrap();
    assert_eq!(roster[0].stat("Speed"), Some(9));

    let mut txt_file = NamedTempFile::new().unwrap();
    write!(txt_file, "{}", ROSTER).unwrap();
    let roster = load_roster(txt_file.path()).unwrap();
    assert_eq!(roster.len(), 2);
}

#[test]
fn test_missing_roster_file() {
    let err = load_roster("/definitely/not/here.txt").unwrap_err();
    assert!(matches!(err, LineupError::Io(_)));
}

#[test]
fn test_parse_requirements() {
    let input = "\
# lineup for the weekend
offence: QB WR WR
Defence: LB CB S

WR = Speed * 2 + Catching
FAST = Speed == 9
";
    let req = parse_requirements(Cursor::new(input)).unwrap();
    assert_eq!(req.attacking, vec!["QB", "WR", "WR"]);
    assert_eq!(req.positions(Side::Defence), ["LB", "CB", "S"]);
    assert_eq!(req.slot_count(), 3);
    assert_eq!(req.formula_for("WR"), "Speed * 2 + Catching");
    assert_eq!(req.formula_for("FAST"), "Speed == 9");
    assert_eq!(req.formula_for("QB"), "QB");
}

#[test]
fn test_requirements_prefixes_match_first_letter() {
    let req = parse_requirements(Cursor::new("o: A B\nd: C D\nbench: X Y\n")).unwrap();
    assert_eq!(req.attacking, vec!["A", "B"]);
    assert_eq!(req.defensive, vec!["C", "D"]);
}

#[test]
fn test_duplicate_section() {
    let input = "offence: A\noffense: B\ndefence: C\n";
    let err = parse_requirements(Cursor::new(input)).unwrap_err();
    assert!(matches!(err, LineupError::DuplicateSection(ref side) if side == "offence"));
}

#[rstest]
#[case("offence: A B\ndefence: C\n")]
#[case("offence: A B\n")]
#[case("defence: A\noffence:\n")]
#[case("# nothing here\n")]
fn test_invalid_requirements(#[case] input: &str) {
    let err = parse_requirements(Cursor::new(input)).unwrap_err();
    assert!(matches!(err, LineupError::InvalidRequirements(_)), "{:?}", err);
}

#[test]
fn test_empty_override_is_rejected() {
    let input = "offence: A\ndefence: B\nA =\n";
    let err = parse_requirements(Cursor::new(input)).unwrap_err();
    assert!(matches!(err, LineupError::Requirements { line: 3, .. }), "{:?}", err);
}

#[test]
fn test_load_requirements_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "offence: QB").unwrap();
    writeln!(file, "defence: LB").unwrap();
    writeln!(file, "QB = Arm").unwrap();
    let req = load_requirements(file.path()).unwrap();
    assert_eq!(req.formula_for("QB"), "Arm");
}
