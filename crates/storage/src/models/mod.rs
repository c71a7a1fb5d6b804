mod candidate;
mod festival_result;
mod programme;
mod snapshot;
mod team;

pub use candidate::{Candidate, Section};
pub use festival_result::{FestivalResult, Placement, Position, ResultStatus, TeamPlacement};
pub use programme::{Category, PositionType, Programme, Subcategory};
pub use snapshot::FestivalSnapshot;
pub use team::Team;
