pub mod document;
pub mod memory;
pub mod traits;

pub use document::*;
pub use memory::*;
pub use traits::*;
