use contracts::dashboards::d400_sales_overview::ColumnStats;
use contracts::domain::a001_order::Order;

/// Numeric order columns available for descriptive statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericColumn {
    Quantity,
    UnitPrice,
    TotalAmount,
    DiscountPercent,
    DiscountAmount,
    FinalAmount,
    ShippingCost,
    Rating,
    Year,
}

impl NumericColumn {
    /// Every numeric column in record order
    pub const ALL: [NumericColumn; 9] = [
        NumericColumn::Quantity,
        NumericColumn::UnitPrice,
        NumericColumn::TotalAmount,
        NumericColumn::DiscountPercent,
        NumericColumn::DiscountAmount,
        NumericColumn::FinalAmount,
        NumericColumn::ShippingCost,
        NumericColumn::Rating,
        NumericColumn::Year,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NumericColumn::Quantity => "quantity",
            NumericColumn::UnitPrice => "unit_price",
            NumericColumn::TotalAmount => "total_amount",
            NumericColumn::DiscountPercent => "discount_percent",
            NumericColumn::DiscountAmount => "discount_amount",
            NumericColumn::FinalAmount => "final_amount",
            NumericColumn::ShippingCost => "shipping_cost",
            NumericColumn::Rating => "rating",
            NumericColumn::Year => "year",
        }
    }

    pub fn value(&self, order: &Order) -> f64 {
        match self {
            NumericColumn::Quantity => order.quantity as f64,
            NumericColumn::UnitPrice => order.unit_price,
            NumericColumn::TotalAmount => order.total_amount,
            NumericColumn::DiscountPercent => order.discount_percent as f64,
            NumericColumn::DiscountAmount => order.discount_amount,
            NumericColumn::FinalAmount => order.final_amount,
            NumericColumn::ShippingCost => order.shipping_cost,
            NumericColumn::Rating => order.rating as f64,
            NumericColumn::Year => order.year as f64,
        }
    }
}

/// Columns shown in the dashboard's statistical summary
pub const SUMMARY_COLUMNS: [NumericColumn; 4] = [
    NumericColumn::FinalAmount,
    NumericColumn::Quantity,
    NumericColumn::Rating,
    NumericColumn::DiscountPercent,
];

pub fn describe(view: &[&Order], columns: &[NumericColumn]) -> Vec<ColumnStats> {
    columns
        .iter()
        .map(|column| {
            let values: Vec<f64> = view.iter().map(|o| column.value(o)).collect();
            describe_values(column.name(), values)
        })
        .collect()
}

/// count, mean, sample std, min, quartiles and max of `values`
pub fn describe_values(column: &str, mut values: Vec<f64>) -> ColumnStats {
    values.sort_by(|a, b| a.total_cmp(b));
    let count = values.len();

    if count == 0 {
        return ColumnStats {
            column: column.to_string(),
            count,
            mean: None,
            std: None,
            min: None,
            q25: None,
            q50: None,
            q75: None,
            max: None,
        };
    }

    let n = count as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = if count > 1 {
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        Some(variance.sqrt())
    } else {
        None
    };

    ColumnStats {
        column: column.to_string(),
        count,
        mean: Some(mean),
        std,
        min: values.first().copied(),
        q25: Some(quantile(&values, 0.25)),
        q50: Some(quantile(&values, 0.50)),
        q75: Some(quantile(&values, 0.75)),
        max: values.last().copied(),
    }
}

/// Linear interpolation between closest ranks; `sorted` must be non-empty
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let fraction = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}
