pub mod education;
pub mod home;
pub mod system;
pub mod works;
