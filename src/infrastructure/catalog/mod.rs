//! Static content provider.

mod home_content;
mod static_catalog;

pub use static_catalog::StaticCatalog;
