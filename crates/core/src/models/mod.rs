pub mod index;
pub mod portfolio;
pub mod settings;
pub mod state;
pub mod view;
