use livehub_application::use_cases::{
    CreateLiveRoomUseCase, CreateOrderUseCase, CreateWalletRecordUseCase, DeleteLiveRoomUseCase,
    DeleteVisitorLogUseCase, DeleteWalletRecordUseCase, GetIpVisitRecordUseCase,
    GetLiveRoomsUseCase, GetOrdersUseCase, GetPayStatusUseCase, GetUserVisitRecordUseCase,
    GetVisitorReportUseCase, GetWalletRecordsUseCase, RecordVisitUseCase, UpdateLiveRoomUseCase,
    UpdateWalletRecordUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AnalyticsUseCases {
    pub get_report: Arc<GetVisitorReportUseCase>,
    pub get_user_visit_record: Arc<GetUserVisitRecordUseCase>,
    pub get_ip_visit_record: Arc<GetIpVisitRecordUseCase>,
}

#[derive(Clone)]
pub struct VisitorLogUseCases {
    pub record_visit: Arc<RecordVisitUseCase>,
    pub delete_visitor_log: Arc<DeleteVisitorLogUseCase>,
}

#[derive(Clone)]
pub struct LiveRoomUseCases {
    pub get_live_rooms: Arc<GetLiveRoomsUseCase>,
    pub create_live_room: Arc<CreateLiveRoomUseCase>,
    pub update_live_room: Arc<UpdateLiveRoomUseCase>,
    pub delete_live_room: Arc<DeleteLiveRoomUseCase>,
}

#[derive(Clone)]
pub struct OrderUseCases {
    pub get_orders: Arc<GetOrdersUseCase>,
    pub create_order: Arc<CreateOrderUseCase>,
    pub get_pay_status: Arc<GetPayStatusUseCase>,
}

#[derive(Clone)]
pub struct WalletRecordUseCases {
    pub get_wallet_records: Arc<GetWalletRecordsUseCase>,
    pub create_wallet_record: Arc<CreateWalletRecordUseCase>,
    pub update_wallet_record: Arc<UpdateWalletRecordUseCase>,
    pub delete_wallet_record: Arc<DeleteWalletRecordUseCase>,
}

#[derive(Clone)]
pub struct AppState {
    pub analytics: AnalyticsUseCases,
    pub visitor_logs: VisitorLogUseCases,
    pub live_rooms: LiveRoomUseCases,
    pub orders: OrderUseCases,
    pub wallet_records: WalletRecordUseCases,
}
