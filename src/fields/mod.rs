pub mod field_model;
