mod create_live_room;
mod delete_live_room;
mod get_live_rooms;
mod update_live_room;

pub use create_live_room::{generate_stream_key, CreateLiveRoomUseCase};
pub use delete_live_room::DeleteLiveRoomUseCase;
pub use get_live_rooms::GetLiveRoomsUseCase;
pub use update_live_room::UpdateLiveRoomUseCase;
