//! search-view: a single search form that posts a query to a backend and
//! shows the best match plus the runner-up matches with their scores.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod shell;
pub mod state;
pub mod view;
pub mod web;

pub use config::ViewConfig;
pub use error::{ConfigError, SearchError};
pub use model::{Match, SearchResult};
pub use view::{Key, SearchView};
