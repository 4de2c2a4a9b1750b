pub mod assembler;
pub mod catalog;
pub mod enricher;
pub mod server;

#[cfg(test)]
pub(crate) mod testing;

pub use assembler::PageAssembler;
pub use catalog::CatalogService;
pub use enricher::BatchEnricher;
