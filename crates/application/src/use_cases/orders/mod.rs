mod create_order;
mod get_orders;
mod get_pay_status;

pub use create_order::{generate_out_trade_no, CreateOrderUseCase, CreatedOrder};
pub use get_orders::GetOrdersUseCase;
pub use get_pay_status::GetPayStatusUseCase;
