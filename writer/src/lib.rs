pub mod encoding;
pub mod error;
pub mod filename;
pub mod source;
pub mod split;
pub mod stats;
pub mod toc;

pub use error::SplitError;
pub use source::Input;
pub use split::Splitter;
pub use stats::Stats;
