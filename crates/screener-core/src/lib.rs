pub mod document;
pub mod error;
pub mod format;
pub mod normalize;
pub mod types;

pub use document::*;
pub use error::*;
pub use format::*;
pub use normalize::*;
pub use types::*;
