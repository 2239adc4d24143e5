use livehub_domain::{AllowedColumn, DomainError, SortOrder, TimeRange};
use serde::Deserialize;

/// Query string of every visitor analysis endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisQuery {
    pub rang_time_start: Option<String>,
    pub rang_time_end: Option<String>,
    pub order_name: Option<String>,
    pub order_by: Option<String>,
}

impl AnalysisQuery {
    pub fn range(&self) -> Result<TimeRange, DomainError> {
        TimeRange::parse(
            self.rang_time_start.as_deref(),
            self.rang_time_end.as_deref(),
        )
    }

    pub fn order<C: AllowedColumn>(&self) -> Result<Option<SortOrder<C>>, DomainError> {
        SortOrder::from_params(self.order_name.as_deref(), self.order_by.as_deref())
    }
}
