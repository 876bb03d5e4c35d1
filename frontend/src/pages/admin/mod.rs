mod layout;

pub use layout::{AdminShell, NAV_ITEMS};
