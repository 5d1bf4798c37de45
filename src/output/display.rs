//! Display functions for boards and command results

use super::formatters::{create_progress_bar, pad_cell};
use crate::commands::{AssociationResult, BenchmarkResult, GenerateResult};
use crate::core::Matrix;
use crate::game::{GameSession, Highlight, HighlightKind};
use colored::Colorize;

/// Width of each column in characters
fn column_widths(grid: &Matrix) -> Vec<usize> {
    (0..grid.cols())
        .map(|col| {
            grid.column(col)
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(1)
        })
        .collect()
}

/// Render a grid as plain text
///
/// A word is written only on the first row of its block; continuation rows
/// are left blank, mirroring the merged cells of the HTML table.
///
/// # Examples
/// ```
/// use olympiika::core::{AssociationTree, Orientation, layout};
/// use olympiika::output::display::render_text;
///
/// let tree = AssociationTree::from_words(1, vec!["море".into(), "волна".into(), "пляж".into()]).unwrap();
/// let text = render_text(&layout(&tree, Orientation::RootFirst));
///
/// assert_eq!(text, "| море | волна |\n|      | пляж  |\n");
/// ```
#[must_use]
pub fn render_text(grid: &Matrix) -> String {
    let widths = column_widths(grid);
    let mut text = String::new();

    for row in 0..grid.rows() {
        text.push('|');
        for (col, &width) in widths.iter().enumerate() {
            let cell = if grid.is_block_start(row, col) {
                grid.get(row, col)
            } else {
                ""
            };
            text.push(' ');
            text.push_str(&pad_cell(cell, width));
            text.push_str(" |");
        }
        text.push('\n');
    }

    text
}

fn paint(cell: &str, width: usize, highlight: Option<&Highlight>) -> String {
    let padded = pad_cell(cell, width);
    match highlight {
        Some(h) if !cell.is_empty() && h.word == cell => match h.kind {
            HighlightKind::New => padded.black().on_bright_green().bold().to_string(),
            HighlightKind::Existing => padded.black().on_yellow().bold().to_string(),
        },
        _ if cell.contains(crate::game::MASK_CHAR) => padded.bright_black().to_string(),
        _ => padded,
    }
}

/// Print the player's board with the last highlighted word coloured
pub fn print_board(session: &GameSession) {
    let grid = session.display();
    let widths = column_widths(grid);
    let separator = widths
        .iter()
        .map(|w| "─".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("┼");

    let divider = "│".cyan().to_string();

    println!("\n{}", separator.cyan());
    for row in 0..grid.rows() {
        let line = widths
            .iter()
            .enumerate()
            .map(|(col, &width)| {
                let cell = if grid.is_block_start(row, col) {
                    grid.get(row, col)
                } else {
                    ""
                };
                format!(" {} ", paint(cell, width, session.highlight()))
            })
            .collect::<Vec<_>>()
            .join(divider.as_str());
        println!("{line}");
    }
    println!("{}", separator.cyan());
}

/// Print a generated puzzle
pub fn print_generate_result(result: &GenerateResult, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "OLYMPIIKA:".bright_cyan().bold(),
        result.tree.root().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", render_text(&result.solution));

    if verbose {
        for level in 1..=result.tree.steps() {
            println!(
                "  Level {level}: {}",
                result.tree.level(level).join(", ")
            );
        }
        println!();
    }

    println!(
        "Generated in {} after {} {}",
        format!("{:.3} s", result.duration.as_secs_f64()).bright_yellow(),
        result.attempts.to_string().bright_cyan().bold(),
        if result.attempts == 1 {
            "attempt"
        } else {
            "attempts"
        }
    );
}

/// Print the associations found for a word
pub fn print_association_result(result: &AssociationResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Associations: {}",
        result.word.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  Forward:  {}    Backward: {}",
        result.forward, result.backward
    );
    println!("  Eligible: {}", result.pool.len().to_string().green());
    if !result.pool.is_empty() {
        println!("    {}", result.pool.join(", ").bright_black());
    }
    println!(
        "\n  Sample:   {}",
        result.sample.join(", ").bright_white().bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Generation:".bright_cyan().bold());
    println!("   Depth:            {} steps", result.steps);
    println!("   Puzzles:          {}", result.total_runs);
    println!(
        "   Succeeded:        {}",
        result.succeeded.to_string().green()
    );
    if result.failed > 0 {
        println!("   Failed:           {}", result.failed.to_string().red());
    }
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_attempts.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_attempts.to_string().yellow()
    );
    println!(
        "   Slowest puzzle:   {:.3}s",
        result.slowest.as_secs_f64()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    if result.succeeded == 0 {
        return;
    }

    println!("\n📈 {}", "Attempts:".bright_cyan().bold());
    let mut buckets: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&attempts, &count)| (attempts, count))
        .collect();
    buckets.sort_unstable();

    for (attempts, count) in buckets.into_iter().take(15) {
        let pct = (count as f64 / result.succeeded as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempts:4}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
