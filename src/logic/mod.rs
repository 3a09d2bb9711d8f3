pub mod branch_ops;
pub mod employee_ops;
pub mod validate;

pub use branch_ops::*;
pub use employee_ops::*;
