pub mod classifier;
pub mod discovery;
pub mod labels;
pub mod patterns;
