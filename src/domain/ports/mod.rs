mod catalog_port;

pub use catalog_port::CatalogPort;

#[cfg(test)]
pub mod mocks {
    pub use super::catalog_port::mock::MockCatalog;
}
