pub mod dashboard;
pub mod editor;
