mod presenter;
pub mod transport;

pub use presenter::KittyPresenter;
