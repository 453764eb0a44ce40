//! # Vault Router
//!
//! Client-side route resolution for the vault/notebook desktop shell.
//!
//! The shell is a statically exported bundle running inside a web view, so
//! every route resolves in the client. This crate provides:
//! - Pure page loaders for the vault routes (`/open-vault/[vault]`,
//!   `/open-vault/[vault]/[notebook]`, `/vault/[vaultPath]`)
//! - An explicit routing table binding URL patterns to those loaders
//! - A navigator that falls back to the entry document for unmatched URLs
//! - The static export configuration and build-time export plan
//!
//! ## Path Normalization
//!
//! Navigation URLs are cleaned up before matching:
//! - Query strings and fragments are dropped
//! - Trailing slashes: `/path/` → `/path`
//! - Double slashes: `/path//to` → `/path/to`
//! - Backslashes: `\path\to` → `/path/to`
//!
//! ## Example
//!
//! ```
//! use vault_router::{Navigator, Router};
//! use serde_json::json;
//!
//! let navigator = Navigator::new(Router::vault_routes(), "index.html");
//!
//! let nav = navigator.navigate("/open-vault/MyVault/Notes1").unwrap();
//! let data = serde_json::to_value(nav.page_data().unwrap()).unwrap();
//! assert_eq!(data, json!({ "name": "Notes1", "path": "MyVault" }));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
mod error;
pub mod export;
pub mod loader;
pub mod navigation;
pub mod path;
pub mod route;
mod router;

pub use config::ExportConfig;
pub use error::RoutingError;
pub use export::ExportPlan;
pub use loader::{
    resolve_notebook, resolve_vault, resolve_vault_path, LoaderFn, NotebookPage, PageData,
    RouteParams, VaultPage,
};
pub use navigation::{Navigation, Navigator};
pub use path::{is_valid_path, normalize_path, strip_query};
pub use router::{Route, RouteMatch, Router};
