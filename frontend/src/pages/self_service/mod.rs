pub mod panel;
mod repository;
pub(crate) mod utils;
mod view_model;

pub use panel::SelfServicePage;
