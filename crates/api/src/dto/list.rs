use livehub_domain::{AllowedColumn, DomainError, ListQuery, PageRequest, SortOrder, TimeFilter};
use serde::Deserialize;

/// Paging, keyword, ordering and time window parameters shared by the list
/// endpoints. Entity filters are extracted separately from the same query
/// string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub now_page: Option<u32>,
    pub page_size: Option<u32>,
    #[serde(alias = "keyword")]
    pub key_word: Option<String>,
    pub order_name: Option<String>,
    pub order_by: Option<String>,
    pub rang_time_type: Option<String>,
    pub rang_time_start: Option<String>,
    pub rang_time_end: Option<String>,
}

impl ListParams {
    pub fn into_query<C: AllowedColumn, F>(self, filter: F) -> Result<ListQuery<C, F>, DomainError> {
        let mut query = ListQuery::new(filter);
        query.page = PageRequest::new(self.now_page, self.page_size)?;
        query.order = SortOrder::from_params(self.order_name.as_deref(), self.order_by.as_deref())?;
        query.time_filter = TimeFilter::from_params(
            self.rang_time_type.as_deref(),
            self.rang_time_start.as_deref(),
            self.rang_time_end.as_deref(),
        )?;
        query.keyword = self.key_word.filter(|k| !k.trim().is_empty());
        Ok(query)
    }
}
