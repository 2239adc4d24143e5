mod mock_repositories;

#[allow(unused_imports)]
pub use mock_repositories::*;
