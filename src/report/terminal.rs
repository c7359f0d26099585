use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::license::Snapshot;
use crate::models::{AssignmentPath, LicenseSku, RemovalOutcome, RemovalStatus, ReportRow};

const PATHS: [AssignmentPath; 3] = [
    AssignmentPath::Directly,
    AssignmentPath::DirectlyAndGroup,
    AssignmentPath::FromGroup,
];

/// Render the classification of `snapshot`, limited to `paths`.
pub fn render_classification(snapshot: &Snapshot, paths: &[AssignmentPath], quiet: bool) -> Result<()> {
    let count = |path: &AssignmentPath| {
        snapshot
            .classification
            .get(path)
            .map(Vec::len)
            .unwrap_or(0)
    };

    if quiet {
        let parts: Vec<String> = paths
            .iter()
            .map(|p| format!("{}: {}", p, count(p)))
            .collect();
        println!("Licenses: {}  {}", snapshot.skus.len(), parts.join("  "));
        return Ok(());
    }

    print_banner();

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(
        " │  {:<48} │",
        format!("Licenses checked    : {}", snapshot.skus.len())
    );
    for path in PATHS.iter().filter(|p| paths.contains(p)) {
        println!(
            " │  {:<48} │",
            format!("{:<20}: {:>4}", path.to_string(), count(path))
        );
    }
    println!(" └────────────────────────────────────────────────────┘\n");

    for path in PATHS.iter().filter(|p| paths.contains(p)) {
        let rows = match snapshot.classification.get(path) {
            Some(rows) if !rows.is_empty() => rows,
            _ => continue,
        };
        println!(" {} {}:\n", path_tag(path), path_heading(path));
        render_rows(rows);
        println!();
    }

    Ok(())
}

/// Render the subscribed license inventory.
pub fn render_skus(skus: &[LicenseSku]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Part number").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Consumed").add_attribute(Attribute::Bold),
            Cell::new("Total").add_attribute(Attribute::Bold),
        ]);

    for sku in skus {
        let name = if sku.friendly_name.is_empty() {
            Cell::new("(unknown)").fg(Color::DarkGrey)
        } else {
            Cell::new(&sku.friendly_name)
        };
        let consumed_color = if sku.consumed_units > sku.total_units {
            Color::Red
        } else {
            Color::Reset
        };

        table.add_row(vec![
            Cell::new(&sku.part_number),
            name,
            Cell::new(sku.consumed_units)
                .fg(consumed_color)
                .set_alignment(CellAlignment::Right),
            Cell::new(sku.total_units).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}", table);
}

/// Render the result of a removal run. Successful rows are listed only with `verbose`.
pub fn render_outcomes(outcomes: &[RemovalOutcome], verbose: bool, quiet: bool) {
    let removed = outcomes
        .iter()
        .filter(|o| o.status == RemovalStatus::Removed)
        .count();
    let skipped = outcomes
        .iter()
        .filter(|o| o.status == RemovalStatus::Skipped)
        .count();
    let failed = outcomes.len() - removed - skipped;

    println!(
        "Removed: {}  Skipped: {}  Failed: {}",
        removed.to_string().green(),
        skipped.to_string().yellow(),
        failed.to_string().red(),
    );
    if quiet {
        return;
    }

    let shown: Vec<&RemovalOutcome> = outcomes
        .iter()
        .filter(|o| verbose || matches!(o.status, RemovalStatus::Failed(_)))
        .collect();
    if shown.is_empty() {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("User").add_attribute(Attribute::Bold),
            Cell::new("Result").add_attribute(Attribute::Bold),
        ]);

    for outcome in shown {
        let color = match outcome.status {
            RemovalStatus::Removed => Color::Green,
            RemovalStatus::Skipped => Color::Yellow,
            RemovalStatus::Failed(_) => Color::Red,
        };
        table.add_row(vec![
            Cell::new(license_label(&outcome.row)),
            Cell::new(&outcome.row.user_principal_name),
            Cell::new(outcome.status.to_string()).fg(color),
        ]);
    }

    println!("\n{}", table);
}

fn print_banner() {
    println!(
        "\n {} v{}\n",
        "license-assignr".bold(),
        env!("CARGO_PKG_VERSION")
    );
}

fn render_rows(rows: &[ReportRow]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Display name").add_attribute(Attribute::Bold),
            Cell::new("User principal name").add_attribute(Attribute::Bold),
            Cell::new("Created").add_attribute(Attribute::Bold),
            Cell::new("Synced").add_attribute(Attribute::Bold),
            Cell::new("Enabled").add_attribute(Attribute::Bold),
            Cell::new("Groups").add_attribute(Attribute::Bold),
            Cell::new("Last updated").add_attribute(Attribute::Bold),
        ]);

    for row in rows {
        let enabled = if row.account_enabled {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("no").fg(Color::Red)
        };

        table.add_row(vec![
            Cell::new(license_label(row)),
            Cell::new(&row.display_name),
            Cell::new(&row.user_principal_name),
            Cell::new(date(row.created_at)),
            Cell::new(if row.sync_enabled { "yes" } else { "no" }),
            enabled.set_alignment(CellAlignment::Center),
            Cell::new(row.groups.join(", ")),
            Cell::new(date(row.last_updated)),
        ]);
    }

    println!("{}", table);
}

fn license_label(row: &ReportRow) -> &str {
    if row.license_name.is_empty() {
        &row.sku_part_number
    } else {
        &row.license_name
    }
}

fn date(value: Option<chrono::DateTime<chrono::Utc>>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn path_tag(path: &AssignmentPath) -> ColoredString {
    match path {
        AssignmentPath::Directly => "[DIRECT]".cyan().bold(),
        AssignmentPath::DirectlyAndGroup => "[BOTH]".yellow().bold(),
        AssignmentPath::FromGroup => "[GROUP]".green().bold(),
    }
}

fn path_heading(path: &AssignmentPath) -> &'static str {
    match path {
        AssignmentPath::Directly => "Licenses assigned directly",
        AssignmentPath::DirectlyAndGroup => "Licenses assigned directly and through a group",
        AssignmentPath::FromGroup => "Licenses inherited from a group",
    }
}
