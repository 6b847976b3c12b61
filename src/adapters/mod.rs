pub mod adapter;
pub mod generic;
pub mod greenhouse;
pub mod job_details;
pub mod lever;
pub mod linkedin;
pub mod registry;
pub mod workday;
