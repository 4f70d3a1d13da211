mod diagnostics;
mod errors;
mod frame;
mod headers;
mod lines;
mod response;
mod status;

pub use diagnostics::*;
pub use errors::*;
pub use frame::*;
pub use headers::*;
pub use lines::*;
pub use response::*;
pub use status::*;
