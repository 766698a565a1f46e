pub mod home;
pub mod miniature;
pub mod recommendations;
pub mod watch;
