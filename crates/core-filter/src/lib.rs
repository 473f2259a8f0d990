use core_table::Table;

pub const PRODUCT_LINE_COLUMN: &str = "Product line";
pub const CITY_COLUMN: &str = "City";
pub const GENDER_COLUMN: &str = "Gender";
pub const PAYMENT_COLUMN: &str = "Payment";

/// The equality filters plus offset/limit requested by a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub product_line: Option<String>,
    pub city: Option<String>,
    pub gender: Option<String>,
    pub payment: Option<String>,
    pub offset: usize,
    pub limit: Option<usize>,
}

impl FilterSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_product_line(mut self, product_line: impl Into<String>) -> Self {
        self.product_line = Some(product_line.into());
        self
    }

    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    #[must_use]
    pub fn with_payment(mut self, payment: impl Into<String>) -> Self {
        self.payment = Some(payment.into());
        self
    }

    #[must_use]
    pub const fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn predicates(&self) -> Vec<(&'static str, &str)> {
        [
            (PRODUCT_LINE_COLUMN, self.product_line.as_deref()),
            (CITY_COLUMN, self.city.as_deref()),
            (GENDER_COLUMN, self.gender.as_deref()),
            (PAYMENT_COLUMN, self.payment.as_deref()),
        ]
        .into_iter()
        .filter_map(|(column, wanted)| wanted.map(|w| (column, w)))
        .collect()
    }
}

/// Single-pass filter and slice. Equality filters AND together; the
/// contiguous slice `[offset, offset + limit)` of the filtered sequence is
/// taken in source order, no sorting. Zero matches is an empty table, never
/// an error. A filter on a column the table does not carry matches no rows.
#[must_use]
pub fn apply(table: Table, spec: &FilterSpec) -> Table {
    let predicates = spec.predicates();
    let mut rows = table.rows;
    if !predicates.is_empty() {
        rows.retain(|row| {
            predicates
                .iter()
                .all(|(column, wanted)| row.get(*column).is_some_and(|v| v.matches(wanted)))
        });
    }
    if spec.offset > 0 || spec.limit.is_some() {
        rows = rows
            .into_iter()
            .skip(spec.offset)
            .take(spec.limit.unwrap_or(usize::MAX))
            .collect();
    }
    Table::new(rows)
}
