pub mod history;
pub mod nav;
pub mod pages;

pub use history::NavHistory;
pub use nav::{NavLink, NavMenu};
pub use pages::{Page, PageRegistry};
