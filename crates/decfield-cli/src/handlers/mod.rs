pub mod check;
pub mod form;
pub mod format;
