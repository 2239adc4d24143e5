//! LiveHub Domain Layer
pub mod analytics;
pub mod calendar;
pub mod config;
pub mod errors;
pub mod listing;
pub mod live_room;
pub mod order;
pub mod sorting;
pub mod time_range;
pub mod visitor_log;
pub mod wallet_record;

pub use analytics::{
    split_list, Granularity, IpVisitColumn, IpVisitRecord, ReportColumn, ReportRow,
    UserVisitColumn, UserVisitRecord, LIST_SEPARATOR,
};
pub use calendar::{CalendarCoverage, CalendarSeedReport, CalendarSpan};
pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use listing::{ListQuery, Page, PageRequest, TimeColumn, TimeFilter};
pub use live_room::{
    ForwardUrls, LiveRoom, LiveRoomColumn, LiveRoomFilter, LiveRoomInput, PullUrls, PushUrls,
};
pub use order::{NewOrder, Order, OrderColumn, OrderFilter, PayStatus, TradeDetails};
pub use sorting::{AllowedColumn, SortDirection, SortOrder};
pub use time_range::{parse_timestamp, TimeRange, TIMESTAMP_FORMAT};
pub use visitor_log::{validate_ip, NewVisitorLog, VisitorLog};
pub use wallet_record::{WalletRecord, WalletRecordColumn, WalletRecordFilter, WalletRecordInput};
