//! Add/edit/list engine shared by the employee, holiday and leave screens.
//!
//! One form serves both creating and editing: while no record is being
//! edited it holds the new-record draft, otherwise the edited copy. Every
//! successful mutation refetches the whole collection.

pub mod components;
pub mod repository;
pub mod state;
pub mod view_model;

pub use components::{CrudTable, FormActions, RowActions};
pub use state::{CrudResource, FormMode};
pub use view_model::{use_crud_view_model, CrudViewModel};
