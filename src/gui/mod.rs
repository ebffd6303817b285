pub mod controller;
pub mod field;
pub mod registry;
pub mod theme;
pub mod value;
