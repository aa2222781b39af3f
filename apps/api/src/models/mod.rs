pub mod business;
pub mod question;
