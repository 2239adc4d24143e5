mod create_wallet_record;
mod delete_wallet_record;
mod get_wallet_records;
mod update_wallet_record;

pub use create_wallet_record::CreateWalletRecordUseCase;
pub use delete_wallet_record::DeleteWalletRecordUseCase;
pub use get_wallet_records::GetWalletRecordsUseCase;
pub use update_wallet_record::UpdateWalletRecordUseCase;
