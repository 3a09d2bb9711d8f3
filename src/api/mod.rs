pub mod branch_handlers;
pub mod employee_handlers;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use branch_handlers::*;
pub use employee_handlers::*;
pub use handlers::*;
pub use routes::*;
