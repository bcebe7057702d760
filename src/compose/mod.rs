//! Page composition.
//!
//! Assembles standalone page documents out of the template fragments the
//! scanner pulled from a source document: shared head, a navigation bar
//! rebuilt per page, the page's own section, its modals and the shared
//! script block.

mod nav;
mod page;

pub use nav::build_nav;
pub use page::compose_page;
