pub mod controller;
pub mod router;

pub use router::init_health_router;
