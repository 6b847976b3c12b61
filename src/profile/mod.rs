pub mod dropdown;
pub mod mapper;
pub mod profile_model;
