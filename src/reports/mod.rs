// ===== timeforge/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use timeforge::config::PenaltyWeights;
use timeforge::fitness::ScoreBreakdown;
use timeforge::report::SearchReport;
use timeforge::timetable::Timetable;

pub fn print_timetable(timetable: &Timetable) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Student").add_attribute(Attribute::Bold),
        Cell::new("Course").add_attribute(Attribute::Bold),
        Cell::new("Day"),
        Cell::new("Slot"),
    ]);

    let mut rows: Vec<_> = timetable.iter().collect();
    rows.sort_by(|a, b| {
        (a.day, a.slot, &a.student, &a.course).cmp(&(b.day, b.slot, &b.student, &b.course))
    });

    for session in rows {
        let day = session
            .day
            .map_or_else(|| "—".to_string(), |d| d.to_string());
        let slot = session
            .slot
            .map_or_else(|| "—".to_string(), |s| s.label());

        table.add_row(vec![
            Cell::new(&session.student),
            Cell::new(session.course.as_deref().unwrap_or("—")),
            Cell::new(day),
            Cell::new(slot),
        ]);
    }
    println!("{}", table);
}

pub fn print_breakdown(breakdown: &ScoreBreakdown, weights: &PenaltyWeights) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Penalty").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("Weight"),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.add_row(vec![
        Cell::new("Clashes").fg(Color::Red),
        Cell::new(breakdown.clashes.to_string()),
        Cell::new(format!("{:.1}", weights.weight_clash)),
    ]);
    table.add_row(vec![
        Cell::new(format!("Starts before {:02}:00", weights.early_hour)),
        Cell::new(breakdown.early_starts.to_string()),
        Cell::new(format!("{:.1}", weights.weight_early)),
    ]);
    table.add_row(vec![
        Cell::new(format!("Starts after {:02}:00", weights.late_hour)),
        Cell::new(breakdown.late_starts.to_string()),
        Cell::new(format!("{:.1}", weights.weight_late)),
    ]);
    table.add_row(vec![
        Cell::new(format!("Gaps over {}h", weights.max_gap_hours)),
        Cell::new(breakdown.long_gaps.to_string()),
        Cell::new(format!("{:.1}", weights.weight_gap)),
    ]);
    table.add_row(vec![
        Cell::new("Weighted total").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", breakdown.penalty_total)),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.4}", breakdown.score)).fg(Color::Cyan),
        Cell::new(""),
    ]);

    println!("\n{}", table);
}

pub fn print_summary(report: &SearchReport) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let clashes = report
        .clashes
        .map_or_else(|| "n/a".to_string(), |c| c.to_string());
    let start = report.history.first().copied().unwrap_or(0.0);

    table.add_row(vec![
        Cell::new("Strategy").add_attribute(Attribute::Bold),
        Cell::new(&report.strategy),
    ]);
    table.add_row(vec![
        Cell::new("Iterations run"),
        Cell::new(report.iterations.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Seed best"),
        Cell::new(format!("{:.4}", start)),
    ]);
    table.add_row(vec![
        Cell::new("Final score").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.4}", report.score)).fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Clashes").add_attribute(Attribute::Bold),
        Cell::new(clashes).fg(if report.clashes == Some(0) {
            Color::Green
        } else {
            Color::Red
        }),
    ]);

    println!("\n{}", table);
}
