pub mod confirm;
pub mod modals;
pub mod panel;
