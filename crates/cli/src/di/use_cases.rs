use super::Repositories;
use livehub_api::state::{
    AnalyticsUseCases, LiveRoomUseCases, OrderUseCases, VisitorLogUseCases, WalletRecordUseCases,
};
use livehub_api::AppState;
use livehub_application::use_cases::{
    CreateLiveRoomUseCase, CreateOrderUseCase, CreateWalletRecordUseCase, DeleteLiveRoomUseCase,
    DeleteVisitorLogUseCase, DeleteWalletRecordUseCase, GetIpVisitRecordUseCase,
    GetLiveRoomsUseCase, GetOrdersUseCase, GetPayStatusUseCase, GetUserVisitRecordUseCase,
    GetVisitorReportUseCase, GetWalletRecordsUseCase, RecordVisitUseCase, SeedCalendarUseCase,
    UpdateLiveRoomUseCase, UpdateWalletRecordUseCase,
};
use livehub_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub seed_calendar: Arc<SeedCalendarUseCase>,
    pub analytics: AnalyticsUseCases,
    pub visitor_logs: VisitorLogUseCases,
    pub live_rooms: LiveRoomUseCases,
    pub orders: OrderUseCases,
    pub wallet_records: WalletRecordUseCases,
}

impl UseCases {
    pub fn new(repos: &Repositories, config: &Config) -> Self {
        Self {
            seed_calendar: Arc::new(SeedCalendarUseCase::new(repos.calendar.clone())),
            analytics: AnalyticsUseCases {
                get_report: Arc::new(GetVisitorReportUseCase::new(
                    repos.visitor_analytics.clone(),
                )),
                get_user_visit_record: Arc::new(GetUserVisitRecordUseCase::new(
                    repos.visitor_analytics.clone(),
                )),
                get_ip_visit_record: Arc::new(GetIpVisitRecordUseCase::new(
                    repos.visitor_analytics.clone(),
                )),
            },
            visitor_logs: VisitorLogUseCases {
                record_visit: Arc::new(RecordVisitUseCase::new(
                    repos.visitor_log.clone(),
                    repos.live_room.clone(),
                )),
                delete_visitor_log: Arc::new(DeleteVisitorLogUseCase::new(
                    repos.visitor_log.clone(),
                )),
            },
            live_rooms: LiveRoomUseCases {
                get_live_rooms: Arc::new(GetLiveRoomsUseCase::new(repos.live_room.clone())),
                create_live_room: Arc::new(CreateLiveRoomUseCase::new(repos.live_room.clone())),
                update_live_room: Arc::new(UpdateLiveRoomUseCase::new(repos.live_room.clone())),
                delete_live_room: Arc::new(DeleteLiveRoomUseCase::new(repos.live_room.clone())),
            },
            orders: OrderUseCases {
                get_orders: Arc::new(GetOrdersUseCase::new(repos.order.clone())),
                create_order: Arc::new(CreateOrderUseCase::new(
                    repos.order.clone(),
                    repos.payment_gateway.clone(),
                    config.orders.product_code.clone(),
                )),
                get_pay_status: Arc::new(GetPayStatusUseCase::new(
                    repos.order.clone(),
                    repos.payment_gateway.clone(),
                )),
            },
            wallet_records: WalletRecordUseCases {
                get_wallet_records: Arc::new(GetWalletRecordsUseCase::new(
                    repos.wallet_record.clone(),
                )),
                create_wallet_record: Arc::new(CreateWalletRecordUseCase::new(
                    repos.wallet_record.clone(),
                )),
                update_wallet_record: Arc::new(UpdateWalletRecordUseCase::new(
                    repos.wallet_record.clone(),
                )),
                delete_wallet_record: Arc::new(DeleteWalletRecordUseCase::new(
                    repos.wallet_record.clone(),
                )),
            },
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            analytics: self.analytics.clone(),
            visitor_logs: self.visitor_logs.clone(),
            live_rooms: self.live_rooms.clone(),
            orders: self.orders.clone(),
            wallet_records: self.wallet_records.clone(),
        }
    }
}
