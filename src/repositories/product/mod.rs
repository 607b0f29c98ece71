mod product_repository;
mod product_repository_interface;

pub use product_repository::ProductRepository;
pub use product_repository_interface::ProductRepositoryInterface;
