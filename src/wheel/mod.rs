pub mod discover;
pub mod name;

pub use discover::{discover_wheels, WheelFile};
pub use name::WheelName;
