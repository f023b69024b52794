pub mod enforcement;
pub mod persistence;
