mod about;
mod contact;
mod footer;
mod hero;
mod menu;
mod navbar;

pub use about::About;
pub use contact::{BookingForm, Contact};
pub use footer::Footer;
pub use hero::Hero;
pub use menu::{DishCard, Menu};
pub use navbar::Navbar;
