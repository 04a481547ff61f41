pub mod predict;
pub mod serve;

pub use predict::{predict, PredictOptions};
pub use serve::serve;
