//! Concrete repository implementations.

pub mod commodity;
pub mod order;
pub mod token;
pub mod user;

pub use commodity::CommodityRepository;
pub use order::OrderRepository;
pub use token::TokenRepository;
pub use user::UserRepository;
