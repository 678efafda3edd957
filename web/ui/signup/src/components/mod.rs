pub mod events;
pub mod form;
