//! Output for external consumers: the pairwise playability matrix as CSV and
//! a plain-text summary of strategy results.

use crate::index::MatchIndex;
use crate::pack::Playability;
use crate::simulation::SimulationSummary;
use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::io::Write;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Pack-by-pack verdict table.
///
/// The first row holds the column labels. Each later row starts with the
/// pack's label; cells on and below the diagonal are blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayabilityMatrix {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl PlayabilityMatrix {
    pub fn from_index(index: &MatchIndex) -> Self {
        let labels = index.labels();

        let mut header = Vec::with_capacity(labels.len() + 1);
        header.push(String::new());
        header.extend(labels.iter().cloned());

        let rows = labels
            .iter()
            .enumerate()
            .map(|(row, label)| {
                let mut cells = Vec::with_capacity(labels.len() + 1);
                cells.push(label.clone());
                for column in 0..labels.len() {
                    let cell = match index.verdict_at(row, column) {
                        Some(verdict) if column > row => verdict.label().to_string(),
                        _ => String::new(),
                    };
                    cells.push(cell);
                }
                cells
            })
            .collect();

        PlayabilityMatrix { header, rows }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(&self.header)?;
        for row in &self.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ReportError> {
        let file = std::fs::File::create(path)?;
        self.write_csv(std::io::BufWriter::new(file))?;
        info!(path, rows = self.rows.len(), "wrote playability matrix");
        Ok(())
    }
}

/// Per-verdict pair counts for the matrix
pub fn format_index_overview(index: &MatchIndex) -> String {
    let mut out = String::new();
    let total = index.len().max(1) as f64;
    for verdict in Playability::ALL.iter().rev() {
        let count = index.count(*verdict);
        let _ = writeln!(
            out,
            "  {:12} {:4} ({:5.1}%)",
            verdict.label(),
            count,
            count as f64 / total * 100.0
        );
    }
    out
}

/// Render strategy results as a text table
pub fn format_summary(summary: &SimulationSummary, generated_at: DateTime<Local>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Draft Strategy Results ===");
    let _ = writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "Seed: {}", summary.seed);
    let _ = writeln!(out, "Trials per strategy: {}", summary.trials);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:20} {:>10} {:>10} {:>10} {:>12}",
        "Strategy", "Strong+", "Medium+", "Weak+", "Unplayable+"
    );
    let _ = writeln!(out, "{:-<66}", "");
    for outcome in &summary.outcomes {
        let results = &outcome.results;
        let _ = writeln!(
            out,
            "{:20} {:>9.1}% {:>9.1}% {:>9.1}% {:>11.1}%",
            outcome.strategy,
            results.strong_or_better_chance() * 100.0,
            results.medium_or_better_chance() * 100.0,
            results.weak_or_better_chance() * 100.0,
            results.unplayable_or_better_chance() * 100.0,
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Raw counts (total / strong+ / medium+ / weak+ / unplayable+):");
    for outcome in &summary.outcomes {
        let r = &outcome.results;
        let _ = writeln!(
            out,
            "  {:20} {} / {} / {} / {} / {}",
            outcome.strategy,
            r.total_runs,
            r.strong_or_better,
            r.medium_or_better,
            r.weak_or_better,
            r.unplayable_or_better
        );
    }
    out
}

pub fn save_summary(path: &str, text: &str) -> Result<(), ReportError> {
    std::fs::write(path, text)?;
    info!(path, "wrote summary report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::{Colour, CreatureType, Pack};
    use crate::simulation::{StrategyOutcome, TotalResults};
    use chrono::TimeZone;

    fn small_index() -> MatchIndex {
        let packs = vec![
            Pack::new("Alpha", [Colour::White], [CreatureType::Bird]).unwrap(),
            Pack::new("Beta", [Colour::White], [CreatureType::Bird]).unwrap(),
            Pack::new("Frogs", [Colour::Blue, Colour::Green], [CreatureType::Frog]).unwrap(),
        ];
        MatchIndex::build(&packs).unwrap()
    }

    #[test]
    fn test_matrix_upper_triangle() {
        let matrix = PlayabilityMatrix::from_index(&small_index());

        assert_eq!(matrix.header(), &["", "W Alpha", "W Beta", "UG Frogs"]);
        assert_eq!(matrix.rows()[0], vec!["W Alpha", "", "Strong", "Unplayable"]);
        assert_eq!(matrix.rows()[1], vec!["W Beta", "", "", "Unplayable"]);
        assert_eq!(matrix.rows()[2], vec!["UG Frogs", "", "", ""]);
    }

    #[test]
    fn test_matrix_csv_output() {
        let matrix = PlayabilityMatrix::from_index(&small_index());
        let mut buffer = Vec::new();
        matrix.write_csv(&mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], ",W Alpha,W Beta,UG Frogs");
        assert_eq!(lines[1], "W Alpha,,Strong,Unplayable");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_matrix_csv_quotes_awkward_labels() {
        let packs = vec![
            Pack::new("Birds, Inc", [Colour::White], [CreatureType::Bird]).unwrap(),
            Pack::new("Say \"hi\"", [Colour::Blue], [CreatureType::Bird]).unwrap(),
            Pack::new("Plain", [Colour::Red], [CreatureType::Lizard]).unwrap(),
        ];
        let matrix = PlayabilityMatrix::from_index(&MatchIndex::build(&packs).unwrap());
        let mut buffer = Vec::new();
        matrix.write_csv(&mut buffer).unwrap();

        let text = String::from_utf8(buffer.clone()).unwrap();
        assert_eq!(
            text.lines().next().unwrap(),
            ",\"W Birds, Inc\",\"U Say \"\"hi\"\"\",R Plain"
        );

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(buffer.as_slice());
        let records: Vec<Vec<String>> = reader
            .records()
            .map(|record| record.unwrap().iter().map(str::to_string).collect())
            .collect();
        assert_eq!(records[0], matrix.header());
        assert_eq!(&records[1..], matrix.rows());
    }

    #[test]
    fn test_index_overview_lists_every_verdict() {
        let overview = format_index_overview(&small_index());
        assert!(overview.contains("Strong"));
        assert!(overview.contains("Unplayable"));
        assert_eq!(overview.lines().count(), 4);
    }

    #[test]
    fn test_summary_formatting() {
        let summary = SimulationSummary {
            seed: 7,
            trials: 4,
            outcomes: vec![StrategyOutcome {
                strategy: "Draw Three",
                results: TotalResults {
                    total_runs: 4,
                    strong_or_better: 1,
                    medium_or_better: 2,
                    weak_or_better: 3,
                    unplayable_or_better: 4,
                },
            }],
        };
        let generated_at = Local.with_ymd_and_hms(2024, 8, 2, 12, 0, 0).unwrap();
        let text = format_summary(&summary, generated_at);

        assert!(text.contains("Seed: 7"));
        assert!(text.contains("Generated: 2024-08-02 12:00:00"));
        assert!(text.contains("25.0%"));
        assert!(text.contains("Draw Three           4 / 1 / 2 / 3 / 4"));
    }
}
