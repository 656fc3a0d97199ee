use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use lineforge::core_types::Player;
use lineforge::optimizer::{PickedPosition, SwapRecord};
use lineforge::scorer::{PositionTable, ScoredPlayer};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right_from(table: &mut Table, first: usize, count: usize) {
    for i in first..first + count {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

/// `stats` is either empty or holds one entry per pick.
pub fn print_lineup(picks: &[PickedPosition], stats: &[Option<&Player>]) {
    let mut table = new_table();

    let stat_names: Vec<&str> = stats
        .iter()
        .flatten()
        .next()
        .map(|p| p.stats.iter().map(|(name, _)| name.as_str()).collect())
        .unwrap_or_default();

    let mut header = vec![
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Offence"),
        Cell::new("Defence"),
        Cell::new("Off").fg(Color::Green),
        Cell::new("Def").fg(Color::Blue),
        Cell::new("Total").fg(Color::Cyan),
    ];
    header.extend(stat_names.iter().map(|name| Cell::new(*name)));
    table.set_header(header);

    for (i, pick) in picks.iter().enumerate() {
        let mut row = vec![
            Cell::new(&pick.player_name),
            Cell::new(&pick.offence_position),
            Cell::new(&pick.defence_position),
            Cell::new(format!("{:.2}", pick.offensive_score)),
            Cell::new(format!("{:.2}", pick.defensive_score)),
            Cell::new(format!("{:.2}", pick.total_score)).add_attribute(Attribute::Bold),
        ];
        if let Some(Some(player)) = stats.get(i) {
            row.extend(player.stats.iter().map(|(_, value)| Cell::new(value)));
        }
        table.add_row(row);
    }

    align_right_from(&mut table, 3, 3 + stat_names.len());
    println!("\n🏈 === STARTING LINEUP === 🏈");
    println!("{}", table);
}

pub fn print_swaps(swaps: &[SwapRecord]) {
    if swaps.is_empty() {
        println!("\nNo swaps improved on the seeded lineup.");
        return;
    }

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#"),
        Cell::new("In").fg(Color::Green),
        Cell::new("Out").fg(Color::Red),
        Cell::new("Slot"),
        Cell::new("Gain"),
        Cell::new("Total").fg(Color::Cyan),
    ]);

    for (i, swap) in swaps.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&swap.incoming),
            Cell::new(&swap.outgoing),
            Cell::new(swap.slot),
            Cell::new(format!("+{:.2}", swap.delta)),
            Cell::new(format!("{:.2}", swap.total)),
        ]);
    }

    align_right_from(&mut table, 3, 3);
    println!("\n🔁 Swaps applied:");
    println!("{}", table);
}

pub fn print_score_matrix(table: &PositionTable, scored: &[ScoredPlayer<'_>]) {
    let mut grid = new_table();

    let mut header = vec![Cell::new("Player").add_attribute(Attribute::Bold)];
    header.extend(table.names.iter().map(|name| Cell::new(name)));
    header.push(Cell::new("Ceiling").fg(Color::Cyan));
    grid.set_header(header);

    for player in scored {
        let mut row = vec![Cell::new(player.name())];
        row.extend(
            player
                .scores
                .iter()
                .map(|score| Cell::new(format!("{:.2}", score))),
        );
        row.push(Cell::new(format!("{:.2}", player.ceiling)).add_attribute(Attribute::Bold));
        grid.add_row(row);
    }

    align_right_from(&mut grid, 1, table.len() + 1);
    println!("\n🔎 === POSITION SCORES === 🔎");
    println!("{}", grid);
}
