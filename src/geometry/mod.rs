pub mod fillet;
pub mod fit;
