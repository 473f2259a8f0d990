use crate::error::{MalformedIntegerSnafu, SalesResult};
use core_filter::FilterSpec;
use serde::{Deserialize, Serialize};
use snafu::OptionExt;
use utoipa::{IntoParams, ToSchema};

/// Query parameters of `/api/sales`. `limit`/`offset` arrive as raw strings
/// so a non-numeric value becomes our own 400 instead of an axum rejection.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SalesParams {
    /// Backing source, `xlsx` or `sql`. Defaults to `xlsx`; unrecognized
    /// values fall back to `sql`.
    pub source: Option<String>,
    /// Exact match on the "Product line" column.
    pub product: Option<String>,
    /// Exact match on the "City" column.
    pub city: Option<String>,
    /// Exact match on the "Gender" column.
    pub gender: Option<String>,
    /// Exact match on the "Payment" column.
    pub payment: Option<String>,
    /// Maximum number of rows to return.
    pub limit: Option<String>,
    /// Number of filtered rows to skip, defaults to 0.
    pub offset: Option<String>,
}

impl SalesParams {
    pub(crate) fn filter_spec(&self) -> SalesResult<FilterSpec> {
        Ok(FilterSpec {
            product_line: self.product.clone(),
            city: self.city.clone(),
            gender: self.gender.clone(),
            payment: self.payment.clone(),
            offset: parse_integer("offset", self.offset.as_deref())?.unwrap_or(0),
            limit: parse_integer("limit", self.limit.as_deref())?,
        })
    }
}

fn parse_integer(param: &'static str, raw: Option<&str>) -> SalesResult<Option<usize>> {
    raw.map(|value| {
        value
            .trim()
            .parse::<usize>()
            .ok()
            .context(MalformedIntegerSnafu { param, value })
    })
    .transpose()
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HomeResponse {
    pub message: String,
    pub endpoints: Vec<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::error::SalesAPIError;

    #[test]
    fn missing_integers_default() {
        let spec = SalesParams::default().filter_spec().unwrap();
        assert_eq!(spec.offset, 0);
        assert_eq!(spec.limit, None);
    }

    #[test]
    fn non_numeric_limit_is_rejected() {
        let params = SalesParams {
            limit: Some("five".to_string()),
            ..SalesParams::default()
        };
        let err = params.filter_spec().unwrap_err();
        assert!(matches!(
            err,
            SalesAPIError::MalformedInteger { param: "limit", .. }
        ));
    }
}
