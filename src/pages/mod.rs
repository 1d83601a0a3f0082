mod about;
mod account;
mod gallery;
mod home;
mod reviews;
mod schedule;

pub use about::About;
pub use account::Account;
pub use gallery::Gallery;
pub use home::Home;
pub use reviews::Reviews;
pub use schedule::Schedule;
