//! Output formatting module for SiteTrack
//!
//! Renders a [`TimelineLayout`] as an aligned table or as a text Gantt chart.

use sitetrack_timeline::{ItemLayout, ItemStatus, TimelineLayout};

/// Maximum width for the label column before truncation
const MAX_LABEL_WIDTH: usize = 30;

/// Width of the row label area in the chart
const CHART_LABEL_WIDTH: usize = 30;

/// Character for the elapsed part of a bar
const BAR_DONE: char = '\u{2588}';

/// Character for the remaining part of a bar
const BAR_REMAINING: char = '\u{2592}';

/// Character for the today marker line
const TODAY_MARKER: char = '\u{2502}';

/// Truncate a string to the specified maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        let head: String = s.chars().take(max_width - 3).collect();
        format!("{}...", head)
    }
}

/// Short status marker shown next to row labels.
fn status_indicator(status: ItemStatus) -> &'static str {
    match status {
        ItemStatus::Closed => "[x]",
        ItemStatus::InProgress => "[>]",
        ItemStatus::Pending => "[?]",
        ItemStatus::OnHold => "[=]",
        ItemStatus::Open => "[ ]",
    }
}

fn format_progress(progress: f64) -> String {
    format!("{:.0}%", progress)
}

fn format_overdue(overdue: bool) -> &'static str {
    if overdue { "yes" } else { "" }
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}

/// Format rows into an aligned table string.
///
/// Produces output in the format:
/// ```text
/// ID       Category  Status       Start       End         Progress  Overdue  Label
/// -------  --------  -----------  ----------  ----------  --------  -------  -------------
/// RFI-101  RFI       In Progress  2025-01-01  2025-01-31  50%                Curtain wall
/// ```
pub fn format_rows_table<'a>(rows: impl IntoIterator<Item = &'a ItemLayout>) -> String {
    let rows: Vec<&ItemLayout> = rows.into_iter().collect();
    if rows.is_empty() {
        return "No items found.".to_string();
    }

    let headers = [
        "ID", "Category", "Status", "Start", "End", "Progress", "Overdue", "Label",
    ];

    let id_width = rows
        .iter()
        .map(|r| r.id.chars().count())
        .max()
        .unwrap_or(0)
        .max(headers[0].len());

    let category_width = rows
        .iter()
        .map(|r| or_dash(&r.category).chars().count())
        .max()
        .unwrap_or(0)
        .max(headers[1].len());

    let status_width = rows
        .iter()
        .map(|r| r.status.as_str().len())
        .max()
        .unwrap_or(0)
        .max(headers[2].len());

    // dates are always YYYY-MM-DD
    let date_width = 10;
    let progress_width = headers[5].len();
    let overdue_width = headers[6].len();

    let label_width = rows
        .iter()
        .map(|r| r.label.chars().count().min(MAX_LABEL_WIDTH))
        .max()
        .unwrap_or(0)
        .max(headers[7].len());

    let mut lines = Vec::with_capacity(rows.len() + 2);

    lines.push(format!(
        "{:<id_w$}  {:<cat_w$}  {:<status_w$}  {:<date_w$}  {:<date_w$}  {:<prog_w$}  {:<over_w$}  {}",
        headers[0],
        headers[1],
        headers[2],
        headers[3],
        headers[4],
        headers[5],
        headers[6],
        headers[7],
        id_w = id_width,
        cat_w = category_width,
        status_w = status_width,
        date_w = date_width,
        prog_w = progress_width,
        over_w = overdue_width,
    ));

    lines.push(format!(
        "{:->id_w$}  {:->cat_w$}  {:->status_w$}  {:->date_w$}  {:->date_w$}  {:->prog_w$}  {:->over_w$}  {:->label_w$}",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        id_w = id_width,
        cat_w = category_width,
        status_w = status_width,
        date_w = date_width,
        prog_w = progress_width,
        over_w = overdue_width,
        label_w = label_width,
    ));

    for row in rows {
        lines.push(format!(
            "{:<id_w$}  {:<cat_w$}  {:<status_w$}  {:<date_w$}  {:<date_w$}  {:<prog_w$}  {:<over_w$}  {}",
            row.id,
            or_dash(&row.category),
            row.status.as_str(),
            row.start_date.to_string(),
            row.end_date.to_string(),
            format_progress(row.progress),
            format_overdue(row.overdue),
            truncate(&row.label, MAX_LABEL_WIDTH),
            id_w = id_width,
            cat_w = category_width,
            status_w = status_width,
            date_w = date_width,
            prog_w = progress_width,
            over_w = overdue_width,
        ));
    }

    lines
        .into_iter()
        .map(|line| line.trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the whole layout as a table followed by a summary line.
pub fn format_layout_table(layout: &TimelineLayout) -> String {
    let mut output = format_rows_table(&layout.rows);
    output.push_str("\n\n");
    output.push_str(&format_summary(layout));
    output
}

/// One-line summary of the layout.
pub fn format_summary(layout: &TimelineLayout) -> String {
    let summary = &layout.summary;
    format!(
        "Range {} .. {} ({} days, {} scale) | {} items: {} open, {} closed, {} overdue",
        layout.range.start,
        layout.range.end,
        layout.range.total_days(),
        layout.scale,
        summary.total,
        summary.open,
        summary.closed,
        summary.overdue,
    )
}

/// Convert a percentage to a character column within `width`.
fn percent_to_col(percent: f64, width: usize) -> usize {
    ((percent / 100.0) * width as f64).round() as usize
}

/// Render the layout as a text Gantt chart `width` columns wide (bar area only).
///
/// Each row shows `ID [status] label` followed by its bar: the elapsed part
/// in solid blocks, the remainder shaded. Overdue rows end with `!`. Today
/// is drawn as a vertical line through empty cells.
pub fn render_chart(layout: &TimelineLayout, width: usize) -> String {
    let width = width.max(10);
    let today_col = layout
        .today_marker
        .map(|marker| percent_to_col(marker, width).min(width - 1));

    let mut lines = vec![
        build_header(layout, width),
        build_separator(layout, width, today_col),
    ];

    if layout.rows.is_empty() {
        lines.push("No items found.".to_string());
    }

    for row in &layout.rows {
        lines.push(build_row(row, width, today_col));
    }

    lines.push(String::new());
    lines.push(format_summary(layout));

    lines
        .into_iter()
        .map(|line| line.trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Axis labels centered in their columns when they fit.
fn build_header(layout: &TimelineLayout, width: usize) -> String {
    let mut header = vec![' '; width];

    for column in &layout.axis {
        let start_col = percent_to_col(column.left, width);
        let end_col = percent_to_col(column.left + column.width, width).min(width);
        let col_width = end_col.saturating_sub(start_col);
        let label_len = column.label.chars().count();

        if col_width >= label_len {
            let padding = (col_width - label_len) / 2;
            for (i, c) in column.label.chars().enumerate() {
                header[start_col + padding + i] = c;
            }
        } else {
            for (i, c) in column.label.chars().take(col_width).enumerate() {
                header[start_col + i] = c;
            }
        }
    }

    format!(
        "{}{}",
        " ".repeat(CHART_LABEL_WIDTH),
        header.iter().collect::<String>()
    )
}

/// Horizontal rule with grid markers at column boundaries.
fn build_separator(layout: &TimelineLayout, width: usize, today_col: Option<usize>) -> String {
    let mut sep = vec!['\u{2500}'; width];

    for column in &layout.axis {
        let pos = percent_to_col(column.left, width);
        if pos > 0 && pos < width {
            sep[pos] = '\u{253C}';
        }
    }

    sep[0] = '\u{251C}';
    sep[width - 1] = '\u{2524}';

    if let Some(col) = today_col {
        sep[col] = '\u{25BC}';
    }

    format!(
        "{}{}",
        " ".repeat(CHART_LABEL_WIDTH),
        sep.iter().collect::<String>()
    )
}

fn build_row(row: &ItemLayout, width: usize, today_col: Option<usize>) -> String {
    let label = format!(
        "{} {} {}",
        row.id,
        status_indicator(row.status),
        row.label
    );
    let label = format!(
        "{:<label_w$}",
        truncate(&label, CHART_LABEL_WIDTH - 1),
        label_w = CHART_LABEL_WIDTH
    );

    let mut bar = vec![' '; width];

    if let Some(col) = today_col {
        bar[col] = TODAY_MARKER;
    }

    let start_col = percent_to_col(row.bar.left, width).min(width - 1);
    // Ensure at least one character is drawn
    let end_col = percent_to_col(row.bar.right(), width)
        .max(start_col + 1)
        .min(width);
    let done_cols = ((end_col - start_col) as f64 * row.progress / 100.0).round() as usize;

    for (offset, cell) in bar[start_col..end_col].iter_mut().enumerate() {
        *cell = if offset < done_cols {
            BAR_DONE
        } else {
            BAR_REMAINING
        };
    }

    let mut line = format!("{}{}", label, bar.iter().collect::<String>());
    if row.overdue {
        line.push_str(" !");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sitetrack_timeline::{RangeOptions, TimelineItem};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_layout() -> TimelineLayout {
        let items = vec![
            TimelineItem::new(
                "RFI-101",
                "Curtain wall anchor detail",
                date(2025, 1, 1),
                date(2025, 1, 31),
                ItemStatus::InProgress,
            )
            .with_category("RFI"),
            TimelineItem::new(
                "SUB-014",
                "Rebar shop drawings",
                date(2025, 1, 1),
                date(2025, 1, 10),
                ItemStatus::Closed,
            ),
            TimelineItem::new(
                "RFI-102",
                "Slab edge embed conflict",
                date(2025, 1, 1),
                date(2025, 1, 5),
                ItemStatus::Pending,
            )
            .with_category("RFI"),
        ];
        TimelineLayout::build(&items, &RangeOptions::default(), date(2025, 1, 16))
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("Short", 10), "Short");
    }

    #[test]
    fn test_truncate_long_string_adds_ellipsis() {
        assert_eq!(truncate("Concrete pour sequence", 10), "Concret...");
    }

    #[test]
    fn test_truncate_multibyte_does_not_split_chars() {
        assert_eq!(truncate("Façade élévation", 8), "Façad...");
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate("Abcdef", 2), "Ab");
    }

    #[test]
    fn test_format_empty_rows() {
        let rows: Vec<ItemLayout> = vec![];
        assert_eq!(format_rows_table(&rows), "No items found.");
    }

    #[test]
    fn test_format_rows_table_has_headers_and_rows() {
        let layout = sample_layout();
        let table = format_rows_table(&layout.rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[0].contains("Progress"));
        assert!(lines[1].starts_with("-------"));
        assert!(lines[2].starts_with("RFI-101"));
        assert!(lines[2].contains("In Progress"));
        assert!(lines[2].contains("50%"));
        assert!(lines[3].contains("100%"));
        assert!(lines[4].contains("yes"));
    }

    #[test]
    fn test_format_rows_table_uses_dash_for_missing_category() {
        let layout = sample_layout();
        let table = format_rows_table(&layout.rows);
        let sub_line = table.lines().find(|l| l.starts_with("SUB-014")).unwrap();
        assert!(sub_line.contains(" -  "), "{sub_line}");
    }

    #[test]
    fn test_format_summary() {
        let layout = sample_layout();
        assert_eq!(
            format_summary(&layout),
            "Range 2024-12-22 .. 2025-02-08 (48 days, weeks scale) | 3 items: 2 open, 1 closed, 1 overdue"
        );
    }

    #[test]
    fn test_format_layout_table_ends_with_summary() {
        let layout = sample_layout();
        let output = format_layout_table(&layout);
        assert!(output.ends_with(&format_summary(&layout)));
    }

    #[test]
    fn test_render_chart_line_count() {
        let layout = sample_layout();
        let chart = render_chart(&layout, 48);
        // header, separator, 3 rows, blank, summary
        assert_eq!(chart.lines().count(), 7);
    }

    #[test]
    fn test_render_chart_closed_bar_is_solid() {
        let layout = sample_layout();
        let chart = render_chart(&layout, 48);
        let row = chart.lines().find(|l| l.starts_with("SUB-014")).unwrap();

        assert!(row.contains(BAR_DONE));
        assert!(!row.contains(BAR_REMAINING));
    }

    #[test]
    fn test_render_chart_in_progress_bar_is_partly_shaded() {
        let layout = sample_layout();
        let chart = render_chart(&layout, 48);
        let row = chart.lines().find(|l| l.starts_with("RFI-101")).unwrap();

        assert!(row.contains(BAR_DONE));
        assert!(row.contains(BAR_REMAINING));
    }

    #[test]
    fn test_render_chart_marks_overdue_rows() {
        let layout = sample_layout();
        let chart = render_chart(&layout, 48);
        let row = chart.lines().find(|l| l.starts_with("RFI-102")).unwrap();
        assert!(row.ends_with(" !"));

        let on_time = chart.lines().find(|l| l.starts_with("RFI-101")).unwrap();
        assert!(!on_time.ends_with(" !"));
    }

    #[test]
    fn test_render_chart_bar_starts_at_item_position() {
        let layout = sample_layout();
        let width = 48;
        let chart = render_chart(&layout, width);
        let row = chart.lines().find(|l| l.starts_with("SUB-014")).unwrap();

        let expected_col = percent_to_col(layout.rows[1].bar.left, width);
        let bar_start = row
            .chars()
            .skip(CHART_LABEL_WIDTH)
            .position(|c| c == BAR_DONE)
            .unwrap();
        assert_eq!(bar_start, expected_col);
    }

    #[test]
    fn test_render_chart_separator_has_today_marker() {
        let layout = sample_layout();
        let chart = render_chart(&layout, 48);
        let separator = chart.lines().nth(1).unwrap();
        assert!(separator.contains('\u{25BC}'));
        assert!(separator.contains('\u{251C}'));
    }

    #[test]
    fn test_render_chart_empty_layout() {
        let layout = TimelineLayout::build(&[], &RangeOptions::default(), date(2025, 3, 5));
        let chart = render_chart(&layout, 40);
        assert!(chart.contains("No items found."));
    }
}
