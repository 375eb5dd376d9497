//! Sorting and pagination for data tables
//!
//! Sorting compares raw values rather than their display strings, so
//! timestamps order chronologically and numbers numerically.

use std::cmp::Ordering;

use crate::api::{AggregatePoint, Hub, Sensor, TimeSeriesPoint};
use crate::format::parse_timestamp;

/// Rows per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Comparable cell value; missing values sort first
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Missing,
    Number(f64),
    Text(String),
}

impl SortValue {
    fn text(value: &str) -> Self {
        SortValue::Text(value.to_lowercase())
    }

    fn timestamp(value: Option<&str>) -> Self {
        value
            .and_then(parse_timestamp)
            .map(|dt| SortValue::Number(dt.timestamp_millis() as f64))
            .unwrap_or(SortValue::Missing)
    }

    fn number(value: Option<f64>) -> Self {
        value.map(SortValue::Number).unwrap_or(SortValue::Missing)
    }

    fn compare(&self, other: &Self) -> Ordering {
        use SortValue::*;
        match (self, other) {
            (Missing, Missing) => Ordering::Equal,
            (Missing, _) => Ordering::Less,
            (_, Missing) => Ordering::Greater,
            (Number(a), Number(b)) => a.total_cmp(b),
            (Number(_), Text(_)) => Ordering::Less,
            (Text(_), Number(_)) => Ordering::Greater,
            (Text(a), Text(b)) => a.cmp(b),
        }
    }
}

/// A row type whose columns can be sorted
pub trait Sortable {
    type Column: Copy + PartialEq;

    fn sort_value(&self, column: Self::Column) -> SortValue;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sort<C> {
    pub column: C,
    pub direction: SortDirection,
}

impl<C: Copy + PartialEq> Sort<C> {
    /// Clicking a header: same column flips direction, another starts ascending
    pub fn toggle(current: Option<Sort<C>>, column: C) -> Sort<C> {
        match current {
            Some(sort) if sort.column == column => Sort {
                column,
                direction: match sort.direction {
                    SortDirection::Ascending => SortDirection::Descending,
                    SortDirection::Descending => SortDirection::Ascending,
                },
            },
            _ => Sort {
                column,
                direction: SortDirection::Ascending,
            },
        }
    }

    /// Header marker for `column` under this sort
    pub fn marker(current: Option<Sort<C>>, column: C) -> &'static str {
        match current {
            Some(sort) if sort.column == column => match sort.direction {
                SortDirection::Ascending => " \u{25B2}",
                SortDirection::Descending => " \u{25BC}",
            },
            _ => "",
        }
    }
}

/// Stable sort of `rows`; `None` keeps the backend order
pub fn sort_rows<T: Sortable>(rows: &mut [T], sort: Option<Sort<T::Column>>) {
    let Some(sort) = sort else {
        return;
    };
    rows.sort_by(|a, b| {
        let ordering = a
            .sort_value(sort.column)
            .compare(&b.sort_value(sort.column));
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Number of pages for `total` rows, at least one
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Rows of the 1-based `page`, clamped to the last page
pub fn paginate<T: Clone>(rows: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page_size == 0 {
        return rows.to_vec();
    }
    let page = page.clamp(1, page_count(rows.len(), page_size));
    rows.iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect()
}

/// Range indicator such as `11–20 di 25`
pub fn range_label(page: usize, page_size: usize, total: usize) -> String {
    if total == 0 {
        return "0 di 0".to_string();
    }
    let page_size = page_size.max(1);
    let page = page.clamp(1, page_count(total, page_size));
    let first = (page - 1) * page_size + 1;
    let last = (page * page_size).min(total);
    format!("{first}\u{2013}{last} di {total}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubColumn {
    Id,
    Service,
    Registration,
    LastSeen,
}

impl Sortable for Hub {
    type Column = HubColumn;

    fn sort_value(&self, column: HubColumn) -> SortValue {
        match column {
            HubColumn::Id => SortValue::text(&self.id),
            HubColumn::Service => SortValue::text(&self.service),
            HubColumn::Registration => SortValue::timestamp(self.registration_time.as_deref()),
            HubColumn::LastSeen => SortValue::timestamp(self.last_seen.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorColumn {
    Id,
    Kind,
    Reference,
    Registration,
    LastSeen,
}

impl Sortable for Sensor {
    type Column = SensorColumn;

    fn sort_value(&self, column: SensorColumn) -> SortValue {
        match column {
            SensorColumn::Id => SortValue::text(&self.id),
            SensorColumn::Kind => SortValue::text(&self.kind),
            SensorColumn::Reference => SortValue::text(&self.reference),
            SensorColumn::Registration => {
                SortValue::timestamp(self.registration_time.as_deref())
            }
            SensorColumn::LastSeen => SortValue::timestamp(self.last_seen.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingColumn {
    Timestamp,
    Kind,
    Value,
}

impl Sortable for TimeSeriesPoint {
    type Column = ReadingColumn;

    fn sort_value(&self, column: ReadingColumn) -> SortValue {
        match column {
            ReadingColumn::Timestamp => SortValue::number(self.timestamp.map(|t| t as f64)),
            ReadingColumn::Kind => SortValue::text(&self.kind),
            ReadingColumn::Value => SortValue::number(self.data),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateColumn {
    Timestamp,
    Kind,
    Min,
    Max,
    Avg,
}

impl Sortable for AggregatePoint {
    type Column = AggregateColumn;

    fn sort_value(&self, column: AggregateColumn) -> SortValue {
        match column {
            AggregateColumn::Timestamp => SortValue::number(self.timestamp.map(|t| t as f64)),
            AggregateColumn::Kind => SortValue::text(&self.kind),
            AggregateColumn::Min => SortValue::number(self.min),
            AggregateColumn::Max => SortValue::number(self.max),
            AggregateColumn::Avg => SortValue::number(self.avg),
        }
    }
}
