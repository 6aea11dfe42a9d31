pub mod catalog;
pub mod generator;
