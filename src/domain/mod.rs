pub mod announcement;
pub mod upload;

pub use announcement::*;
pub use upload::*;
