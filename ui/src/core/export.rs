//! Export payloads built from the current dashboard view.
//!
//! Three shapes are produced from one [`ExportSnapshot`]:
//! - delimited text (`to_csv`)
//! - a pretty JSON copy (`to_json`)
//! - a paginated report (`ReportDocument`) whose pages render to SVG
//!
//! Every shape refuses to build when validation fails, so an empty section
//! never reaches a file.

use serde::Serialize;

use super::dataset::{ChartPoint, Metric, PlatformRow};
use super::derive::DerivedView;
use super::format::{format_count, format_currency};
use super::period::Period;

/// Simulated preparation delay before a CSV download starts.
pub const CSV_LATENCY_MS: u64 = 1_500;
/// Simulated preparation delay before the report is rendered.
pub const REPORT_LATENCY_MS: u64 = 2_000;

/// Report page geometry (A4 at 96 dpi).
pub const PAGE_WIDTH: u32 = 794;
pub const PAGE_HEIGHT: u32 = 1_123;
pub const LINES_PER_PAGE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("No metrics data available for export")]
    NoMetrics,
    #[error("No chart data available for export")]
    NoChartData,
    #[error("No platform data available for export")]
    NoPlatformData,
    #[error("{0}")]
    Delivery(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSnapshot {
    pub period: Period,
    pub metrics: Vec<Metric>,
    pub chart: Vec<ChartPoint>,
    pub platforms: Vec<PlatformRow>,
}

impl ExportSnapshot {
    pub fn from_view(view: &DerivedView) -> Self {
        Self {
            period: view.period,
            metrics: view.metrics.clone(),
            chart: view.chart.clone(),
            platforms: view.platforms.clone(),
        }
    }

    /// Checks metrics, chart, then platforms; the first empty section wins.
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.metrics.is_empty() {
            return Err(ExportError::NoMetrics);
        }
        if self.chart.is_empty() {
            return Err(ExportError::NoChartData);
        }
        if self.platforms.is_empty() {
            return Err(ExportError::NoPlatformData);
        }
        Ok(())
    }

    pub fn csv_filename(&self) -> String {
        format!("dashboard-export-{}.csv", self.period.slug())
    }

    pub fn report_filename(&self, page: usize) -> String {
        format!("dashboard-report-{}-p{page}.png", self.period.slug())
    }

    /// Single image holding every page stacked top to bottom.
    pub fn report_bundle_filename(&self) -> String {
        format!("dashboard-report-{}.png", self.period.slug())
    }

    pub fn to_csv(&self) -> Result<String, ExportError> {
        self.validate()?;

        let mut rows: Vec<Vec<String>> = Vec::new();
        rows.push(vec![format!("Dashboard Export - {}", self.period)]);
        rows.push(Vec::new());

        rows.push(vec!["Metrics".into()]);
        rows.push(header(&["Title", "Value", "Change", "Change Type"]));
        for metric in &self.metrics {
            rows.push(vec![
                metric.title.to_string(),
                metric.value.to_string(),
                metric.change.to_string(),
                metric.change_type.as_str().to_string(),
            ]);
        }
        rows.push(Vec::new());

        rows.push(vec!["Chart Data".into()]);
        rows.push(header(&["Month", "Revenue", "Users"]));
        for point in &self.chart {
            rows.push(vec![
                point.label.to_string(),
                point.revenue.to_string(),
                point.users.to_string(),
            ]);
        }
        rows.push(Vec::new());

        rows.push(vec!["Platform Performance".into()]);
        rows.push(header(&["Platform", "Clicks", "Sales"]));
        for row in &self.platforms {
            rows.push(vec![
                row.platform.to_string(),
                row.clicks.to_string(),
                row.sales.to_string(),
            ]);
        }

        let mut csv = String::new();
        for row in rows {
            let line = row
                .iter()
                .map(|field| escape_csv(field))
                .collect::<Vec<_>>()
                .join(",");
            csv.push_str(&line);
            csv.push('\n');
        }
        Ok(csv)
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        self.validate()?;
        serde_json::to_string_pretty(self).map_err(|err| ExportError::Delivery(err.to_string()))
    }
}

fn header(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| c.to_string()).collect()
}

fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(&[',', '"', '\n', '\r'][..]);
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Subtitle,
    Heading,
    Body,
}

impl LineKind {
    fn font_size(self) -> u32 {
        match self {
            LineKind::Title => 30,
            LineKind::Subtitle => 16,
            LineKind::Heading => 22,
            LineKind::Body => 14,
        }
    }

    fn advance(self) -> u32 {
        match self {
            LineKind::Title => 48,
            LineKind::Subtitle => 30,
            LineKind::Heading => 46,
            LineKind::Body => 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub kind: LineKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPage {
    pub number: usize,
    pub lines: Vec<ReportLine>,
}

/// The printable report, already split into pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub period: Period,
    pub pages: Vec<ReportPage>,
}

impl ReportDocument {
    pub fn from_snapshot(snapshot: &ExportSnapshot) -> Result<Self, ExportError> {
        snapshot.validate()?;

        let line = |kind, text: String| ReportLine { kind, text };
        let mut lines = vec![
            line(LineKind::Title, "Dashboard Report".into()),
            line(LineKind::Subtitle, format!("Period: {}", snapshot.period)),
            line(LineKind::Heading, "Key Metrics".into()),
        ];
        lines.extend(snapshot.metrics.iter().map(|m| {
            line(
                LineKind::Body,
                format!("{}: {} ({})", m.title, m.value, m.change),
            )
        }));
        lines.push(line(LineKind::Heading, "Revenue & Users Data".into()));
        lines.extend(snapshot.chart.iter().map(|p| {
            line(
                LineKind::Body,
                format!(
                    "{}: Revenue {}, Users {}",
                    p.label,
                    format_currency(p.revenue),
                    p.users
                ),
            )
        }));
        lines.push(line(LineKind::Heading, "Platform Performance".into()));
        lines.extend(snapshot.platforms.iter().map(|r| {
            line(
                LineKind::Body,
                format!(
                    "{}: {} clicks, {} sales",
                    r.platform,
                    format_count(u64::from(r.clicks)),
                    r.sales
                ),
            )
        }));

        Ok(Self {
            period: snapshot.period,
            pages: paginate(lines),
        })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Height of the canvas that holds every page stacked vertically.
    pub fn stacked_height(&self) -> u32 {
        PAGE_HEIGHT * self.pages.len() as u32
    }
}

/// Flows lines into pages of at most [`LINES_PER_PAGE`]; a heading never ends a page.
fn paginate(lines: Vec<ReportLine>) -> Vec<ReportPage> {
    let mut pages = Vec::new();
    let mut current: Vec<ReportLine> = Vec::new();

    for line in lines {
        let is_last_slot = current.len() + 1 == LINES_PER_PAGE;
        let full = current.len() >= LINES_PER_PAGE;
        if full || (is_last_slot && line.kind == LineKind::Heading) {
            pages.push(ReportPage {
                number: pages.len() + 1,
                lines: std::mem::take(&mut current),
            });
        }
        current.push(line);
    }

    if !current.is_empty() {
        pages.push(ReportPage {
            number: pages.len() + 1,
            lines: current,
        });
    }
    pages
}

impl ReportPage {
    /// Top edge of this page inside the stacked image.
    pub fn stacked_offset(&self) -> u32 {
        PAGE_HEIGHT * self.number.saturating_sub(1) as u32
    }

    /// Standalone SVG for one page; `total` feeds the footer.
    pub fn to_svg(&self, total: usize) -> String {
        let mut body = String::new();
        let mut y = 96u32;
        for line in &self.lines {
            let (weight, fill) = match line.kind {
                LineKind::Title => ("700", "#0f172a"),
                LineKind::Heading => ("600", "#1e293b"),
                LineKind::Subtitle => ("400", "#475569"),
                LineKind::Body => ("400", "#334155"),
            };
            body.push_str(&format!(
                "  <text x='72' y='{y}' fill='{fill}' font-family='Inter, sans-serif' font-size='{}' font-weight='{weight}'>{}</text>\n",
                line.kind.font_size(),
                escape_xml(&line.text)
            ));
            y += line.kind.advance();
        }

        let footer_y = PAGE_HEIGHT - 48;
        format!(
            "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}'>\n  <rect width='{w}' height='{h}' fill='#ffffff'/>\n{body}  <text x='72' y='{footer_y}' fill='#94a3b8' font-family='Inter, sans-serif' font-size='12'>Page {n} of {total}</text>\n</svg>",
            w = PAGE_WIDTH,
            h = PAGE_HEIGHT,
            n = self.number,
        )
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::DatasetStore;
    use crate::core::derive::derive;
    use crate::core::filters::FilterState;

    fn snapshot_for(period: Period) -> ExportSnapshot {
        let mut filters = FilterState::default();
        filters.set_period(period);
        ExportSnapshot::from_view(&derive(&filters, DatasetStore::builtin()))
    }

    #[test]
    fn empty_chart_is_rejected_with_descriptive_message() {
        let mut snapshot = snapshot_for(Period::ThisYear);
        snapshot.chart.clear();
        let err = snapshot.to_csv().unwrap_err();
        assert_eq!(err.to_string(), "No chart data available for export");
        assert!(ReportDocument::from_snapshot(&snapshot).is_err());
    }

    #[test]
    fn metrics_are_validated_first() {
        let mut snapshot = snapshot_for(Period::ThisYear);
        snapshot.metrics.clear();
        snapshot.platforms.clear();
        assert_eq!(snapshot.validate(), Err(ExportError::NoMetrics));
    }

    #[test]
    fn empty_platform_selection_blocks_export() {
        let mut filters = FilterState::default();
        filters.set_platform_filter(Vec::<String>::new());
        let snapshot = ExportSnapshot::from_view(&derive(&filters, DatasetStore::builtin()));
        assert_eq!(snapshot.validate(), Err(ExportError::NoPlatformData));
    }

    #[test]
    fn csv_has_three_sections_with_escaped_values() {
        let csv = snapshot_for(Period::ThisMonth).to_csv().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Dashboard Export - This month");
        assert_eq!(lines[2], "Metrics");
        assert_eq!(lines[3], "Title,Value,Change,Change Type");
        assert_eq!(lines[4], "Revenue,\"$1,529,320\",+22%,positive");
        assert!(lines.contains(&"Month,Revenue,Users"));
        assert!(lines.contains(&"Dec,1529320,352"));
        assert!(lines.contains(&"Platform,Clicks,Sales"));
        assert!(lines.contains(&"YouTube,6700,89"));
    }

    #[test]
    fn filenames_use_period_slug() {
        let snapshot = snapshot_for(Period::LastQuarter);
        assert_eq!(snapshot.csv_filename(), "dashboard-export-last-quarter.csv");
        assert_eq!(snapshot.report_filename(2), "dashboard-report-last-quarter-p2.png");
        assert_eq!(snapshot.report_bundle_filename(), "dashboard-report-last-quarter.png");
    }

    #[test]
    fn csv_fields_with_separators_or_line_breaks_are_quoted() {
        assert_eq!(escape_csv("$1,529,320"), "\"$1,529,320\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv("two\nlines"), "\"two\nlines\"");
        assert_eq!(escape_csv("carriage\rreturn"), "\"carriage\rreturn\"");
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv(""), "");
    }

    #[test]
    fn stacked_pages_tile_without_gaps() {
        let doc = ReportDocument::from_snapshot(&snapshot_for(Period::ThisYear)).unwrap();
        assert_eq!(doc.stacked_height(), PAGE_HEIGHT * 2);
        let offsets: Vec<u32> = doc.pages.iter().map(ReportPage::stacked_offset).collect();
        assert_eq!(offsets, [0, PAGE_HEIGHT]);
    }

    #[test]
    fn yearly_report_spans_two_pages() {
        let doc = ReportDocument::from_snapshot(&snapshot_for(Period::ThisYear)).unwrap();
        assert_eq!(doc.page_count(), 2);
        assert!(doc.pages.iter().all(|p| p.lines.len() <= LINES_PER_PAGE));
        assert_eq!(doc.pages[0].lines[0].text, "Dashboard Report");
        assert!(doc
            .pages
            .iter()
            .all(|p| p.lines.last().map(|l| l.kind) != Some(LineKind::Heading)));
    }

    #[test]
    fn monthly_report_fits_one_page() {
        let doc = ReportDocument::from_snapshot(&snapshot_for(Period::ThisMonth)).unwrap();
        assert_eq!(doc.page_count(), 1);
        let svg = doc.pages[0].to_svg(doc.page_count());
        assert!(svg.contains("Revenue: $1,529,320 (+22%)"));
        assert!(svg.contains("Revenue &amp; Users Data"));
        assert!(svg.contains("Page 1 of 1"));
    }

    #[test]
    fn json_copy_carries_period_label() {
        let json = snapshot_for(Period::LastYear).to_json().unwrap();
        assert!(json.contains("\"period\": \"Last year\""));
        assert!(json.contains("\"change_type\": \"positive\""));
    }
}
