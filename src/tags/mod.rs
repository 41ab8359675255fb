//! Tag tokens and the label attach protocol used when adding cards.

mod attach;
mod resolver;


pub use attach::*;
pub use resolver::{TagSpec, resolve_tag, resolve_tags};
