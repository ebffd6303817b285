pub mod oklab;
pub mod rgba;
