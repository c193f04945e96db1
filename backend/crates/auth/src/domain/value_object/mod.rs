//! Value Object Module

pub mod activation;
pub mod email;
pub mod nickname;
pub mod user_id;
pub mod user_name;
pub mod user_password;
