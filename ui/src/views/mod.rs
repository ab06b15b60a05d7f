mod home;
pub use home::HomePage;

mod not_found;
pub use not_found::NotFound;

mod route;
pub use route::{HomeRoute, KeyedByQuery};
