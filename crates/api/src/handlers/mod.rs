pub mod register;
pub mod users;
