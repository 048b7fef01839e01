// Job suggestion engine: per-job skill matching, ranking, catalog filtering
// and the display helpers that go with them. Only `suggestions` and
// `handlers` touch repositories; the rest is pure and synchronous.

pub mod catalog;
pub mod format;
pub mod handlers;
pub mod matcher;
pub mod ranker;
pub mod suggestions;
