pub mod extract;
pub mod message;
pub mod password;
pub mod validate;
