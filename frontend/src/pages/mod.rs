pub mod admin;
pub mod attendance_grid;
pub mod crud;
pub mod employees;
pub mod holidays;
pub mod home;
pub mod leaves;
pub mod login;
pub mod report;
pub mod self_service;
pub mod terms;
