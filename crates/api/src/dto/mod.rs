pub mod analytics;
pub mod list;
pub mod live_room;
pub mod order;
pub mod visitor_log;
pub mod wallet_record;

pub use analytics::AnalysisQuery;
pub use list::ListParams;
pub use live_room::{LiveRoomFilterParams, LiveRoomRequest};
pub use order::{CreateOrderRequest, OrderFilterParams, PayStatusQuery, PayStatusResponse};
pub use visitor_log::RecordVisitRequest;
pub use wallet_record::{WalletRecordFilterParams, WalletRecordRequest, WalletRecordResponse};
