pub mod commit;
pub mod engine;
pub mod fill_model;
