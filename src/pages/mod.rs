//! Page components, one per entry in the route table.

pub mod cart;
pub mod lessons;
pub mod login;
pub mod register;
