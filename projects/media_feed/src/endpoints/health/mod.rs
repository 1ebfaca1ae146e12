pub mod greeting;
pub mod ping;
