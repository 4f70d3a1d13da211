mod errors;
mod fetch;
mod request;
mod target;

pub use errors::*;
pub use fetch::*;
pub use request::*;
pub use target::*;
