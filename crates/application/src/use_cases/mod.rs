pub mod analytics;
pub mod calendar;
pub mod live_rooms;
pub mod orders;
pub mod visitor_logs;
pub mod wallet_records;

pub use analytics::{GetIpVisitRecordUseCase, GetUserVisitRecordUseCase, GetVisitorReportUseCase};
pub use calendar::SeedCalendarUseCase;
pub use live_rooms::{
    CreateLiveRoomUseCase, DeleteLiveRoomUseCase, GetLiveRoomsUseCase, UpdateLiveRoomUseCase,
};
pub use orders::{CreateOrderUseCase, CreatedOrder, GetOrdersUseCase, GetPayStatusUseCase};
pub use visitor_logs::{DeleteVisitorLogUseCase, RecordVisitUseCase};
pub use wallet_records::{
    CreateWalletRecordUseCase, DeleteWalletRecordUseCase, GetWalletRecordsUseCase,
    UpdateWalletRecordUseCase,
};
