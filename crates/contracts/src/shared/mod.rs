pub mod json_patch;
pub mod problem;
pub mod validation;
