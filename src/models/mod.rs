pub mod about;
pub mod admin;
pub mod artist;
pub mod course;
pub mod event;
pub mod registration;
pub mod teacher;
