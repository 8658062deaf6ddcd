pub mod consumption;
pub mod data;
