pub mod chat;
pub mod ping;
pub mod recommend;
pub mod trailer;
