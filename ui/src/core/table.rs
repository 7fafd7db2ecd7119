//! Per-user performance table: search filtering and column sorting.

use std::cmp::Ordering;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserPerformanceRow {
    pub id: &'static str,
    pub name: &'static str,
    /// Initials shown in the avatar bubble.
    pub avatar: &'static str,
    pub platform: &'static str,
    pub clicks: u32,
    pub sales: u32,
    /// Conversion rate in percent.
    pub conversion: f64,
}

pub const USER_ROWS: [UserPerformanceRow; 6] = [
    user("1", "Sarah Johnson", "SJ", "Instagram", 12_500, 234, 1.87),
    user("2", "Mike Chen", "MC", "TikTok", 15_600, 298, 1.91),
    user("3", "Emma Davis", "ED", "Facebook", 8_900, 167, 1.88),
    user("4", "Alex Rodriguez", "AR", "YouTube", 6_700, 89, 1.33),
    user("5", "Lisa Wang", "LW", "Instagram", 9_800, 156, 1.59),
    user("6", "David Kim", "DK", "TikTok", 11_200, 201, 1.79),
];

const fn user(
    id: &'static str,
    name: &'static str,
    avatar: &'static str,
    platform: &'static str,
    clicks: u32,
    sales: u32,
    conversion: f64,
) -> UserPerformanceRow {
    UserPerformanceRow {
        id,
        name,
        avatar,
        platform,
        clicks,
        sales,
        conversion,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Platform,
    Clicks,
    Sales,
    Conversion,
}

impl SortField {
    pub fn label(self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Platform => "Platform",
            SortField::Clicks => "Clicks",
            SortField::Sales => "Sales",
            SortField::Conversion => "%",
        }
    }

    fn compare(self, a: &UserPerformanceRow, b: &UserPerformanceRow) -> Ordering {
        match self {
            SortField::Name => collate(a.name, b.name),
            SortField::Platform => collate(a.platform, b.platform),
            SortField::Clicks => a.clicks.cmp(&b.clicks),
            SortField::Sales => a.sales.cmp(&b.sales),
            SortField::Conversion => a.conversion.total_cmp(&b.conversion),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::Sales,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    /// Header click: the active column flips, any other column becomes
    /// active sorted descending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Descending;
        }
    }

    /// Direction for a column header's indicator, `None` when inactive.
    pub fn indicator(&self, field: SortField) -> Option<SortDirection> {
        (self.field == field).then_some(self.direction)
    }
}

/// Rows matching both search terms, sorted stably by `sort`.
pub fn view(
    rows: &[UserPerformanceRow],
    local_search: &str,
    global_search: &str,
    sort: SortState,
) -> Vec<UserPerformanceRow> {
    let local = local_search.to_lowercase();
    let global = global_search.to_lowercase();

    let mut filtered: Vec<UserPerformanceRow> = rows
        .iter()
        .filter(|row| matches_term(row, &local) && (global.is_empty() || matches_term(row, &global)))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| {
        let ordering = sort.field.compare(a, b);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    filtered
}

/// `needle` must already be lowercased.
fn matches_term(row: &UserPerformanceRow, needle: &str) -> bool {
    row.name.to_lowercase().contains(needle) || row.platform.to_lowercase().contains(needle)
}

/// Case-insensitive ordering first, code points as the tie-break.
///
/// This is not locale collation: among case variants uppercase sorts first
/// (`"A" < "a"`), and accented letters sort after `z`.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}
