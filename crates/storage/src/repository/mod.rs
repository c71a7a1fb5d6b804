pub mod candidate;
pub mod festival_result;
pub mod programme;
pub mod snapshot;
pub mod team;
