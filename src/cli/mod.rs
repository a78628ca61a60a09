//! CLI operation mode handlers.
//!
//! - [`report`]: Render one dashboard view and exit
//! - [`serve`]: Serve the bundled collections over HTTP
//!
//! Output formatting utilities are in [`output`].

pub mod output;
pub mod report;
pub mod serve;
