mod car_repository;
mod car_repository_interface;

pub use car_repository::CarRepository;
pub use car_repository_interface::CarRepositoryInterface;
