pub mod chat;
pub mod health;
pub mod price;
pub mod purchase;
