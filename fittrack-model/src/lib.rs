pub mod calculator;
pub mod catalog;
