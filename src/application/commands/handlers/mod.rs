//! Command Handlers

mod scan_handlers;
mod split_all_handler;
mod split_handlers;

#[cfg(test)]
pub(crate) mod test_support;

pub use scan_handlers::ScanFolderHandler;
pub use split_all_handler::{BatchOrchestrator, SplitAllHandler};
pub use split_handlers::SplitFileHandler;
