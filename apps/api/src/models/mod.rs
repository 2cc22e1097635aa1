pub mod assessment;
pub mod profile;
