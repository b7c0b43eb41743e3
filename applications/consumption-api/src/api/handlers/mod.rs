pub mod consumption;
pub mod format;
pub mod health;
pub mod water;
