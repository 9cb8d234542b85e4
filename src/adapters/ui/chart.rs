//! ASCII line chart for the projected weight series.

use crate::domain::ProgressPoint;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{Write, stdout};

pub const CHART_TITLE: &str = "Expected Weight Progress";
pub const X_LABEL: &str = "Week";
pub const Y_LABEL: &str = "Weight (kg)";

const PLOT_ROWS: usize = 9;
const COLUMN_SPACING: usize = 12;
/// Width of the y-axis tick labels, e.g. " 64.5 ".
const Y_TICK_WIDTH: usize = 7;

/// Render the plot area, x-axis and week labels. One string per terminal line.
pub fn render_lines(points: &[ProgressPoint]) -> Vec<String> {
    if points.is_empty() {
        return vec!["(no data)".to_string()];
    }

    let mut min = points.iter().map(|p| p.weight_kg).fold(f64::INFINITY, f64::min);
    let mut max = points
        .iter()
        .map(|p| p.weight_kg)
        .fold(f64::NEG_INFINITY, f64::max);
    if max - min < 1e-9 {
        min -= 0.5;
        max += 0.5;
    }
    let row_of = |v: f64| -> usize {
        let r = ((max - v) / (max - min) * (PLOT_ROWS - 1) as f64).round();
        (r.max(0.0) as usize).min(PLOT_ROWS - 1)
    };

    let width = (points.len() - 1) * COLUMN_SPACING + 1;
    let mut grid = vec![vec![' '; width]; PLOT_ROWS];

    for (i, pair) in points.windows(2).enumerate() {
        let x0 = i * COLUMN_SPACING;
        for dx in 0..=COLUMN_SPACING {
            let t = dx as f64 / COLUMN_SPACING as f64;
            let v = pair[0].weight_kg + (pair[1].weight_kg - pair[0].weight_kg) * t;
            grid[row_of(v)][x0 + dx] = '.';
        }
    }
    for (i, p) in points.iter().enumerate() {
        grid[row_of(p.weight_kg)][i * COLUMN_SPACING] = 'o';
    }

    let mid = (max + min) / 2.0;
    let mut lines = Vec::with_capacity(PLOT_ROWS + 3);
    for (r, row) in grid.iter().enumerate() {
        let tick = match r {
            0 => format!("{:>6.1} ", max),
            r if r == PLOT_ROWS - 1 => format!("{:>6.1} ", min),
            r if r == PLOT_ROWS / 2 => format!("{:>6.1} ", mid),
            _ => " ".repeat(Y_TICK_WIDTH),
        };
        let body: String = row.iter().collect();
        lines.push(format!("{}|{}", tick, body.trim_end()));
    }
    lines.push(format!("{}+{}", " ".repeat(Y_TICK_WIDTH), "-".repeat(width + 2)));

    let mut labels = " ".repeat(Y_TICK_WIDTH + 1);
    for (i, p) in points.iter().enumerate() {
        let target = Y_TICK_WIDTH + 1 + i * COLUMN_SPACING;
        let start = target.saturating_sub(p.label.chars().count() / 2);
        let len = labels.chars().count();
        if start > len {
            labels.push_str(&" ".repeat(start - len));
        } else if len > start {
            labels.push(' ');
        }
        labels.push_str(&p.label);
    }
    lines.push(labels);
    lines
}

/// Print the chart with title and axis labels.
pub fn print_chart(points: &[ProgressPoint]) {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(Color::Green));
    let _ = out.execute(Print(format!("{}\r\n", CHART_TITLE)));
    let _ = out.execute(SetForegroundColor(Color::Blue));
    let _ = out.execute(Print(format!("{}\r\n", Y_LABEL)));
    let _ = out.execute(ResetColor);
    for line in render_lines(points) {
        let _ = out.execute(Print(format!("{}\r\n", line)));
    }
    let _ = out.execute(SetForegroundColor(Color::Blue));
    let _ = out.execute(Print(format!(
        "{}{}\r\n",
        " ".repeat(Y_TICK_WIDTH + 1 + COLUMN_SPACING * points.len().saturating_sub(1) / 2),
        X_LABEL
    )));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::progress::project_progress;

    fn plot_rows(lines: &[String]) -> Vec<&String> {
        lines.iter().filter(|l| l.contains('|')).collect()
    }

    #[test]
    fn test_four_markers_descending() {
        let lines = render_lines(&project_progress(65.0, None));
        let rows = plot_rows(&lines);
        assert_eq!(rows.len(), PLOT_ROWS);
        let markers: usize = rows.iter().map(|l| l.matches('o').count()).sum();
        assert_eq!(markers, 4);
        // First point on the top row, last on the bottom row.
        assert!(rows[0].contains("65.0"));
        assert!(rows[0].contains('o'));
        assert!(rows[PLOT_ROWS - 1].contains("63.5"));
        assert!(rows[PLOT_ROWS - 1].ends_with('o'));
    }

    #[test]
    fn test_week_labels_present() {
        let lines = render_lines(&project_progress(80.0, None));
        let labels = lines.last().unwrap();
        for w in 1..=4 {
            assert!(labels.contains(&format!("Week {}", w)));
        }
    }

    #[test]
    fn test_flat_series() {
        let lines = render_lines(&project_progress(0.0, Some(0.0)));
        let rows = plot_rows(&lines);
        let markers: usize = rows.iter().map(|l| l.matches('o').count()).sum();
        assert!(markers >= 1);
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(render_lines(&[]), vec!["(no data)".to_string()]);
    }
}
