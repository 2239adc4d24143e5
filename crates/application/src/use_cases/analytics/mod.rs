mod get_ip_visit_record;
mod get_user_visit_record;
mod get_visitor_report;

pub use get_ip_visit_record::GetIpVisitRecordUseCase;
pub use get_user_visit_record::GetUserVisitRecordUseCase;
pub use get_visitor_report::GetVisitorReportUseCase;
