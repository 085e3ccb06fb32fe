use chrono::NaiveDateTime;
use contracts::dashboards::d400_sales_overview::{
    ColumnStats, CrossAggregateRow, ExportKind, FilterSpec,
};
use contracts::domain::a001_order::Order;
use thiserror::Error;

use super::aggregation;
use super::filter;
use super::stats::{self, NumericColumn};
use crate::shared::data::OrderDataset;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer error: {0}")]
    Buffer(String),

    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Types that can be written as CSV rows
pub trait CsvExportable {
    /// Column headers
    fn headers() -> Vec<&'static str>;

    /// Cell values, same order as `headers`
    fn to_csv_row(&self) -> Vec<String>;
}

/// Generated CSV file
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub file_name: String,
    pub content: String,
}

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const STAT_ROWS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

fn money(value: f64) -> String {
    format!("{:.2}", value)
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl CsvExportable for Order {
    fn headers() -> Vec<&'static str> {
        vec![
            "order_id",
            "customer_id",
            "order_date",
            "category",
            "product_name",
            "quantity",
            "unit_price",
            "total_amount",
            "discount_percent",
            "discount_amount",
            "final_amount",
            "shipping_cost",
            "customer_segment",
            "payment_method",
            "rating",
            "month",
            "year",
            "month_name",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.order_id.clone(),
            self.customer_id.clone(),
            self.order_date.format(DATE_TIME_FORMAT).to_string(),
            self.category.to_string(),
            self.product_name.to_string(),
            self.quantity.to_string(),
            money(self.unit_price),
            money(self.total_amount),
            self.discount_percent.to_string(),
            money(self.discount_amount),
            money(self.final_amount),
            money(self.shipping_cost),
            self.customer_segment.to_string(),
            self.payment_method.to_string(),
            self.rating.to_string(),
            self.month.clone(),
            self.year.to_string(),
            self.month_name.clone(),
        ]
    }
}

impl CsvExportable for CrossAggregateRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "category",
            "customer_segment",
            "final_amount_sum",
            "final_amount_mean",
            "final_amount_count",
            "rating_mean",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.category.to_string(),
            self.customer_segment.to_string(),
            money(self.final_amount_sum),
            money(self.final_amount_mean),
            self.final_amount_count.to_string(),
            money(self.rating_mean),
        ]
    }
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes a header row followed by one row per item
pub fn to_csv<'a, T, I>(rows: I) -> Result<String, ExportError>
where
    T: CsvExportable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(T::headers())?;
    for row in rows {
        writer.write_record(row.to_csv_row())?;
    }
    finish(writer)
}

/// Statistics as rows, columns as columns; undefined cells stay empty
pub fn summary_stats_csv(stats: &[ColumnStats]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec![String::new()];
    header.extend(stats.iter().map(|s| s.column.clone()));
    writer.write_record(&header)?;

    for label in STAT_ROWS {
        let mut record = vec![label.to_string()];
        record.extend(stats.iter().map(|s| match label {
            "count" => s.count.to_string(),
            "mean" => optional(s.mean),
            "std" => optional(s.std),
            "min" => optional(s.min),
            "25%" => optional(s.q25),
            "50%" => optional(s.q50),
            "75%" => optional(s.q75),
            _ => optional(s.max),
        }));
        writer.write_record(&record)?;
    }

    finish(writer)
}

/// `{prefix}_{YYYYmmdd_HHMMSS}.csv`
pub fn export_file_name(kind: ExportKind, at: NaiveDateTime) -> String {
    format!("{}_{}.csv", kind.file_prefix(), at.format("%Y%m%d_%H%M%S"))
}

/// Serializes one downloadable artifact for the filtered view
pub fn export(
    dataset: &OrderDataset,
    spec: &FilterSpec,
    kind: ExportKind,
    at: NaiveDateTime,
) -> Result<CsvExport, ExportError> {
    let view = filter::apply(dataset.orders(), spec);

    let content = match kind {
        ExportKind::Orders => to_csv(view.iter().copied())?,
        ExportKind::SummaryStats => {
            summary_stats_csv(&stats::describe(&view, &NumericColumn::ALL))?
        }
        ExportKind::Aggregated => to_csv(&aggregation::cross_aggregate(&view))?,
    };

    Ok(CsvExport {
        file_name: export_file_name(kind, at),
        content,
    })
}
