pub mod driver;
pub mod overrides;

pub use driver::{FrameDriver, FrameStats};
pub use overrides::Overrides;
