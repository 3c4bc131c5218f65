pub mod amount;
pub mod misc;
