pub mod content;
pub mod proxy;

pub use content::*;
pub use proxy::*;
