use crate::core_types::{Player, PositionRequirements, Side};
use crate::error::{LfResult, LineupError};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Loads a roster, picking the CSV reader for `.csv` paths and the
/// line-oriented format otherwise.
pub fn load_roster<P: AsRef<Path>>(path: P) -> LfResult<Vec<Player>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let roster = if is_csv {
        parse_roster_csv(file)?
    } else {
        parse_roster(BufReader::new(file))?
    };
    info!("📂 Loaded {} players from {}", roster.len(), path.display());
    Ok(roster)
}

pub fn load_requirements<P: AsRef<Path>>(path: P) -> LfResult<PositionRequirements> {
    let file = File::open(path)?;
    parse_requirements(BufReader::new(file))
}

/// Line-oriented roster:
///
/// ```text
/// Name Speed Catching Tackling
/// 7 Ada Lovelace
/// WR 9 6 2
/// 12 Grace Hopper
/// 8 7 5
/// ```
///
/// Each player is an id line (leading token ignored, rest is the name)
/// followed by a stats line; leading non-numeric tokens on the stats line
/// are skipped.
pub fn parse_roster<R: BufRead>(reader: R) -> LfResult<Vec<Player>> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(idx, line)| line.map(|l| (idx + 1, l)))
        .filter(|res| res.as_ref().map_or(true, |(_, l)| !l.trim().is_empty()));

    let (header_line, header) = lines.next().transpose()?.ok_or(LineupError::Roster {
        line: 1,
        message: "missing header row".to_string(),
    })?;
    let mut columns = header.split_whitespace();
    if !columns
        .next()
        .is_some_and(|first| first.eq_ignore_ascii_case("name"))
    {
        return Err(LineupError::Roster {
            line: header_line,
            message: "header must start with 'Name'".to_string(),
        });
    }
    let stat_names: Vec<String> = columns.map(str::to_string).collect();

    let mut roster = Vec::new();
    let mut seen = HashSet::new();

    while let Some(entry) = lines.next() {
        let (id_line, id_text) = entry?;
        let name = id_text
            .trim()
            .split_once(char::is_whitespace)
            .map(|(_, rest)| rest.trim())
            .unwrap_or_default();
        if name.is_empty() {
            return Err(LineupError::Roster {
                line: id_line,
                message: format!("expected '<id> <name>', found '{}'", id_text.trim()),
            });
        }

        let (stats_line, stats_text) = lines.next().transpose()?.ok_or(LineupError::Roster {
            line: id_line,
            message: format!("player '{}' has no stats line", name),
        })?;
        let stats = parse_stats_line(&stats_text, &stat_names).map_err(|message| {
            LineupError::Roster {
                line: stats_line,
                message,
            }
        })?;

        if !seen.insert(name.to_string()) {
            return Err(LineupError::Roster {
                line: id_line,
                message: format!("duplicate player '{}'", name),
            });
        }
        roster.push(Player::new(name, stats));
    }

    debug!(
        "Parsed {} players with {} stat columns",
        roster.len(),
        stat_names.len()
    );
    Ok(roster)
}

fn parse_stats_line(text: &str, stat_names: &[String]) -> Result<Vec<(String, i64)>, String> {
    let values: Vec<&str> = text
        .split_whitespace()
        .skip_while(|token| token.parse::<i64>().is_err())
        .collect();

    if values.len() < stat_names.len() {
        return Err(format!(
            "expected {} stats, found {}",
            stat_names.len(),
            values.len()
        ));
    }

    stat_names
        .iter()
        .zip(values)
        .map(|(stat, raw)| {
            raw.parse::<i64>()
                .map(|value| (stat.clone(), value))
                .map_err(|_| format!("stat '{}' has non-integer value '{}'", stat, raw))
        })
        .collect()
}

/// CSV roster: `Name,<stat>,…` header, one row per player.
pub fn parse_roster_csv<R: Read>(reader: R) -> LfResult<Vec<Player>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if !headers
        .get(0)
        .is_some_and(|first| first.eq_ignore_ascii_case("name"))
    {
        return Err(LineupError::Roster {
            line: 1,
            message: "header must start with 'Name'".to_string(),
        });
    }

    let mut roster = Vec::new();
    let mut seen = HashSet::new();

    for (idx, record) in rdr.records().enumerate() {
        let record = record?;
        let line = idx + 2;
        let name = record.get(0).unwrap_or_default().to_string();
        if name.is_empty() {
            return Err(LineupError::Roster {
                line,
                message: "missing player name".to_string(),
            });
        }

        let mut stats = Vec::with_capacity(headers.len() - 1);
        for (stat, raw) in headers.iter().zip(record.iter()).skip(1) {
            let value = raw.parse::<i64>().map_err(|_| LineupError::Roster {
                line,
                message: format!("stat '{}' has non-integer value '{}'", stat, raw),
            })?;
            stats.push((stat.to_string(), value));
        }

        if !seen.insert(name.clone()) {
            return Err(LineupError::Roster {
                line,
                message: format!("duplicate player '{}'", name),
            });
        }
        roster.push(Player::new(name, stats));
    }
    Ok(roster)
}

/// Requirements file:
///
/// ```text
/// # comment
/// offence: QB WR WR
/// defence: LB CB S
/// WR = Speed * 2 + Catching
/// ```
pub fn parse_requirements<R: BufRead>(reader: R) -> LfResult<PositionRequirements> {
    let mut attacking: Option<Vec<String>> = None;
    let mut defensive: Option<Vec<String>> = None;
    let mut requirements = PositionRequirements::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((name, formula)) = line.split_once('=') {
            let (name, formula) = (name.trim(), formula.trim());
            if name.is_empty() || formula.is_empty() {
                return Err(LineupError::Requirements {
                    line: line_no,
                    message: format!("expected 'name = formula', found '{}'", line),
                });
            }
            requirements
                .formulas
                .insert(name.to_string(), formula.to_string());
            continue;
        }

        let Some((prefix, positions)) = line.split_once(':') else {
            warn!("Ignoring requirements line {}: '{}'", line_no, line);
            continue;
        };

        let side = match Side::from_prefix(prefix) {
            Some(side) => side,
            None => {
                warn!(
                    "Ignoring position list '{}' on line {}",
                    prefix.trim(),
                    line_no
                );
                continue;
            }
        };

        let target = match side {
            Side::Offence => &mut attacking,
            Side::Defence => &mut defensive,
        };
        if target.is_some() {
            return Err(LineupError::DuplicateSection(side.to_string()));
        }
        *target = Some(positions.split_whitespace().map(str::to_string).collect());
    }

    requirements.attacking = attacking.unwrap_or_default();
    requirements.defensive = defensive.unwrap_or_default();
    validate_requirements(&requirements)?;

    debug!(
        "Parsed requirements: {} slots, {} formula overrides",
        requirements.slot_count(),
        requirements.formulas.len()
    );
    Ok(requirements)
}

/// Structural checks shared by parsed and hand-built requirements.
pub fn validate_requirements(requirements: &PositionRequirements) -> LfResult<()> {
    for side in [Side::Offence, Side::Defence] {
        if requirements.positions(side).is_empty() {
            return Err(LineupError::InvalidRequirements(format!(
                "no {} positions defined",
                side
            )));
        }
    }
    if requirements.attacking.len() != requirements.defensive.len() {
        return Err(LineupError::InvalidRequirements(format!(
            "{} offence positions but {} defence positions",
            requirements.attacking.len(),
            requirements.defensive.len()
        )));
    }
    Ok(())
}
