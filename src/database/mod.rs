pub mod activities_repo;
pub mod campers_repo;
pub mod schema;
pub mod signups_repo;
