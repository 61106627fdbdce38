pub mod about;
pub mod admin;
pub mod artists;
pub mod courses;
pub mod events;
pub mod registrations;
pub mod teachers;
