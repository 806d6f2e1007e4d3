pub mod courses;
pub mod login;
