mod cd_mode;
mod session;
mod tree_render;

pub use cd_mode::CdMode;
pub use session::{CdError, MkdirError, Session};
pub use tree_render::{RenderedLine, TreeRender};
