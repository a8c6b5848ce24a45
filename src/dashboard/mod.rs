mod aggregate;
pub mod commands;

pub use aggregate::{group_counts, CountMap, GroupBy};

use std::path::PathBuf;
use std::sync::RwLock;

use anyhow::Result;
use serde::Serialize;

use crate::data;
use crate::models::Record;

/// Sentinel selection meaning "no department filter".
pub const ALL_DEPARTMENTS: &str = "ALL";

/// Fixed positional palettes, one color per category slot. Alignment to
/// labels is positional, not keyed, so colors can drift between categories
/// when a filtered subset drops a label.
const STATUS_PALETTE: &[&str] = &["#28a745", "#ffc107", "#dc3545", "#007bff"];
const SHIFT_PALETTE: &[&str] = &["#6c757d", "#17a2b8"];

/// Ordered labels with their parallel counts, ready for a chart dataset.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl From<CountMap> for ChartSeries {
    fn from(counts: CountMap) -> Self {
        Self {
            labels: counts.labels(),
            values: counts.values(),
        }
    }
}

/// Both aggregate series for the current filter selection.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub status: ChartSeries,
    pub shift: ChartSeries,
    pub record_count: usize,
}

/// Construction contract for one chart: the frontend creates the chart once
/// from this, with empty labels/data, and only swaps labels/values afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub chart_type: &'static str,
    pub title: &'static str,
    pub palette: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpecs {
    pub status: ChartSpec,
    pub shift: ChartSpec,
}

pub fn chart_specs() -> ChartSpecs {
    ChartSpecs {
        status: ChartSpec {
            chart_type: "doughnut",
            title: "TAT Status",
            palette: STATUS_PALETTE,
        },
        shift: ChartSpec {
            chart_type: "bar",
            title: "Shifts",
            palette: SHIFT_PALETTE,
        },
    }
}

/// Owns the cached record set and answers every aggregation request from it.
///
/// Records are parsed once per load and never mutated; `reload` swaps the
/// whole set atomically behind the lock.
pub struct DashboardStore {
    source: PathBuf,
    records: RwLock<Vec<Record>>,
}

impl DashboardStore {
    pub fn load(source: PathBuf) -> Result<Self> {
        let records = data::load_records(&source)?;
        Ok(Self {
            source,
            records: RwLock::new(records),
        })
    }

    /// Re-derive both aggregate mappings for the given selection. `None`
    /// and the literal `"ALL"` both mean the unfiltered set.
    pub fn snapshot(&self, department: Option<&str>) -> DashboardSnapshot {
        let records = self.records.read().unwrap();
        let selection = department.filter(|dept| *dept != ALL_DEPARTMENTS);

        let subset: Vec<&Record> = records
            .iter()
            .filter(|record| selection.map_or(true, |dept| record.department == dept))
            .collect();

        DashboardSnapshot {
            status: group_counts(subset.iter().copied(), GroupBy::Status).into(),
            shift: group_counts(subset.iter().copied(), GroupBy::Shift).into(),
            record_count: subset.len(),
        }
    }

    /// Distinct departments, sorted and deduplicated, for the filter
    /// dropdown. The implicit "ALL" option is the frontend's.
    pub fn departments(&self) -> Vec<String> {
        let records = self.records.read().unwrap();
        let mut departments: Vec<String> = records
            .iter()
            .map(|record| record.department.clone())
            .collect();
        departments.sort();
        departments.dedup();
        departments
    }

    /// Re-read the source file and replace the cached set. Returns the new
    /// record count.
    pub fn reload(&self) -> Result<usize> {
        let records = data::load_records(&self.source)?;
        let count = records.len();
        *self.records.write().unwrap() = records;
        Ok(count)
    }
}
