use livehub_domain::{
    AllowedColumn, DomainError, LiveRoomColumn, ReportColumn, SortDirection, SortOrder,
    UserVisitColumn,
};

#[test]
fn test_order_absent_when_either_part_missing() {
    let none = SortOrder::<ReportColumn>::from_params(None, Some("desc")).unwrap();
    assert!(none.is_none());

    let none = SortOrder::<ReportColumn>::from_params(Some("sum_duration"), None).unwrap();
    assert!(none.is_none());

    let none = SortOrder::<ReportColumn>::from_params(Some(""), Some("asc")).unwrap();
    assert!(none.is_none());
}

#[test]
fn test_order_parses_allowed_column() {
    let order = SortOrder::<ReportColumn>::from_params(Some("sum_duration"), Some("DESC"))
        .unwrap()
        .unwrap();
    assert_eq!(order.column, ReportColumn::SumDuration);
    assert_eq!(order.direction, SortDirection::Desc);
    assert_eq!(order.to_sql(), "sum_duration DESC");
}

#[test]
fn test_order_rejects_injected_column() {
    let result = SortOrder::<ReportColumn>::from_params(
        Some("sum_duration; DROP TABLE visitor_log"),
        Some("asc"),
    );
    assert!(matches!(result, Err(DomainError::InvalidSortField(_))));
}

#[test]
fn test_order_rejects_unknown_direction() {
    let result = SortOrder::<ReportColumn>::from_params(Some("format_date"), Some("sideways"));
    assert!(matches!(result, Err(DomainError::InvalidSortDirection(_))));
}

#[test]
fn test_allow_lists_are_scoped_per_report() {
    assert!(UserVisitColumn::from_name("user_id_nums").is_some());
    assert!(ReportColumn::from_name("user_id_nums").is_none());
    assert!(LiveRoomColumn::from_name("push_obs_stream_key").is_none());
}

#[test]
fn test_every_allowed_column_round_trips_by_name() {
    for column in ReportColumn::ALL {
        assert_eq!(ReportColumn::from_name(column.column_name()), Some(*column));
    }
}
