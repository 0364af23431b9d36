pub mod aggregate;
pub mod dto;
pub mod patch;
pub mod validation;
