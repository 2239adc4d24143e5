mod delete_visitor_log;
mod record_visit;

pub use delete_visitor_log::DeleteVisitorLogUseCase;
pub use record_visit::RecordVisitUseCase;
