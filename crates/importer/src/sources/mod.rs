pub mod file;
pub mod legacy;
