pub mod games;

pub use games::{GameService, GameView};
