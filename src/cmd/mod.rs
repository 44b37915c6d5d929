/// Artwork fetch command.
pub mod fetch;
/// Placeholder generation command.
pub mod placeholders;
/// Media extension reconciliation command.
pub mod reconcile;
/// Track extraction command.
pub mod tracks;

mod util;
