pub mod detect;
pub mod response;

pub use detect::detect;
pub use response::{apply_impulse, apply_penalty};
