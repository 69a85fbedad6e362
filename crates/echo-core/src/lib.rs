//! Platform-agnostic core of the echo simulator.
//!
//! Nothing in this crate touches the DOM. Drawing goes through [`Painter`],
//! frame callbacks through [`FrameScheduler`], so every frame can be rendered
//! and inspected on the host.

pub mod constants;
pub mod driver;
pub mod error;
pub mod measure;
pub mod motion;
pub mod overlay;
pub mod paint;
pub mod params;
pub mod scene;
pub mod session;
pub mod speckle;
pub mod viewport;

pub use driver::*;
pub use error::*;
pub use measure::*;
pub use motion::*;
pub use overlay::*;
pub use paint::*;
pub use params::*;
pub use session::*;
pub use speckle::*;
pub use viewport::*;
