pub mod display;
pub mod error;
pub mod host;
pub mod selector;
pub mod session;
pub mod storage;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod fakes;

pub use display::{DisplayController, Geometry, Surface, SurfaceFactory, Viewport};
pub use error::ValidationError;
pub use host::{Host, Level};
pub use selector::{Selection, select_and_load};
pub use session::Session;
pub use store::ListStore;
