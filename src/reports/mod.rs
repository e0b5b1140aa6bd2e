use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use matchforge::dataset::FeatureTable;
use matchforge::features::FeatureRow;
use matchforge::model::training::CrossValidation;
use matchforge::model::MatchResult;
use matchforge::ranking::positive_confidence;
use serde_json::Value;

/// Short label for a raw record: its `id` or `name` if it has one, otherwise
/// the compact JSON.
fn describe(record: &Value) -> String {
    for key in ["id", "name", "title"] {
        match record.get(key) {
            Some(Value::String(s)) => return s.clone(),
            Some(v @ Value::Number(_)) => return v.to_string(),
            _ => {}
        }
    }
    let text = record.to_string();
    if text.chars().count() > 40 {
        let head: String = text.chars().take(37).collect();
        format!("{}...", head)
    } else {
        text
    }
}

fn label_cell(label: bool) -> Cell {
    if label {
        Cell::new("match").fg(Color::Green)
    } else {
        Cell::new("no match").fg(Color::Red)
    }
}

/// `ranked_by_positive`: `Some(_)` adds a column with the positive-class
/// confidence and marks which column drives the order.
pub fn print_match_results(results: &[MatchResult], ranked_by_positive: Option<bool>) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Talent"),
        Cell::new("Job"),
        Cell::new("Label"),
        Cell::new("Score").fg(Color::Cyan),
    ];
    if let Some(by_positive) = ranked_by_positive {
        let cell = Cell::new("P(match)");
        header.push(if by_positive {
            cell.fg(Color::Cyan).add_attribute(Attribute::Bold)
        } else {
            cell
        });
    }
    table.add_row(header);

    for (rank, result) in results.iter().enumerate() {
        let mut row = vec![
            Cell::new(rank + 1),
            Cell::new(describe(&result.talent)),
            Cell::new(describe(&result.job)),
            label_cell(result.label),
            Cell::new(format!("{:.4}", result.score)),
        ];
        if ranked_by_positive.is_some() {
            row.push(Cell::new(format!("{:.4}", positive_confidence(result))));
        }
        table.add_row(row);
    }

    for i in [0, 4, 5] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{}", table);
}

pub fn print_feature_row(row: &FeatureRow) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Feature").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    for (name, value) in row.iter() {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{:.4}", value)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}

/// First `limit` rows of a feature table, one column per feature.
pub fn print_feature_preview(features: &FeatureTable, limit: usize) {
    if features.is_empty() || limit == 0 {
        return;
    }
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header: Vec<Cell> = features.names.iter().map(Cell::new).collect();
    header.push(Cell::new("label").add_attribute(Attribute::Bold));
    table.add_row(header);

    for (row, &label) in features.rows.iter().zip(&features.labels).take(limit) {
        let mut cells: Vec<Cell> = features
            .names
            .iter()
            .map(|name| {
                let text = row.get(name).map(|v| format!("{:.3}", v)).unwrap_or_default();
                Cell::new(text).set_alignment(CellAlignment::Right)
            })
            .collect();
        cells.push(label_cell(label));
        table.add_row(cells);
    }
    println!("{}", table);
    if features.len() > limit {
        println!("... {} more rows", features.len() - limit);
    }
}

pub fn print_training_summary(features: &FeatureTable, cv: Option<&CrossValidation>) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Pairs").add_attribute(Attribute::Bold),
        Cell::new(features.len()),
    ]);
    table.add_row(vec![
        Cell::new("Positive"),
        Cell::new(features.positive_count()).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Negative"),
        Cell::new(features.len() - features.positive_count()).fg(Color::Red),
    ]);
    table.add_row(vec![Cell::new("Features"), Cell::new(features.names.join(", "))]);

    if let Some(cv) = cv {
        let folds: Vec<String> = cv
            .fold_accuracy
            .iter()
            .map(|a| format!("{:.1}", a * 100.0))
            .collect();
        table.add_row(vec![Cell::new("Fold accuracy %"), Cell::new(folds.join(" "))]);
        table.add_row(vec![
            Cell::new("CV accuracy").add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}% ± {:.2}%", cv.mean * 100.0, cv.std_dev * 100.0))
                .fg(Color::Cyan),
        ]);
    }
    println!("{}", table);
    if let Some(cv) = cv {
        println!("Accuracy: {:.4}", cv.mean);
    }
}
