pub mod helpers;
pub mod home;
pub mod about;
pub mod shop;
pub mod contact;
pub mod system;
