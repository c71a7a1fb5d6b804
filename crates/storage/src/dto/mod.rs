pub mod result;
pub mod standings;
