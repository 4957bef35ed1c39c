pub mod app;
pub mod components;
pub mod logging;
pub mod models;
pub mod presenter;

pub use models::IconForgeGui;
pub use presenter::ChannelPresenter;
