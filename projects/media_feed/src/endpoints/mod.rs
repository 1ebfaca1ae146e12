pub mod favicon;
pub mod health;
pub mod media;
