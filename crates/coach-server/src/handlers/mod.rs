pub mod coach;
pub mod health;
