pub mod capabilities;
pub mod chat;
pub mod import;
pub mod projects;
pub mod uploads;
