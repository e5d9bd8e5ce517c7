pub mod move_params;
pub mod start_params;

pub use move_params::MoveParams;
pub use start_params::StartParams;
