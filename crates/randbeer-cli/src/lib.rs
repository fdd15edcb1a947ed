//! Random beer viewer: view state controller, presentation mapping and the
//! terminal sessions that drive them.

pub mod controller;
pub mod loader;
pub mod session;
pub mod view;

pub use controller::{Controller, FetchOutcome, ViewState, FETCH_FAILED_ALERT};
pub use view::{render, View};
