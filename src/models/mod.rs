pub mod activities;
pub mod campers;

pub use activities::ActivityRow;
pub use campers::CamperRow;
