pub mod limit;
pub mod owner;
