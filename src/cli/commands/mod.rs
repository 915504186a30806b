pub mod pairs;
pub mod quote;
