pub mod home;
pub mod alive;

pub use home::home_handler;
pub use alive::alive_handler;
