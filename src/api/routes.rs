use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::api::middleware::log_request;
use crate::api::{branch_handlers, employee_handlers, handlers};
use crate::store::traits::Store;

pub fn create_router<S: Store + 'static>() -> Router<Arc<S>> {
    Lazy::force(&handlers::STARTED);

    Router::new()
        // Health check
        .route("/api/v1/health", get(handlers::health_check))
        // Branch management
        .route("/api/v1/branches", get(branch_handlers::get_all_branches::<S>))
        .route("/api/v1/branches", post(branch_handlers::create_branch::<S>))
        .route(
            "/api/v1/branches/:id",
            get(branch_handlers::get_branch_by_id::<S>),
        )
        .route(
            "/api/v1/branches/:id",
            put(branch_handlers::update_branch::<S>),
        )
        .route(
            "/api/v1/branches/:id",
            delete(branch_handlers::delete_branch::<S>),
        )
        .route(
            "/api/v1/branches/:id/employees",
            get(branch_handlers::get_branch_employees::<S>),
        )
        // Employee management
        .route(
            "/api/v1/employees",
            get(employee_handlers::get_all_employees::<S>),
        )
        .route(
            "/api/v1/employees",
            post(employee_handlers::create_employee::<S>),
        )
        .route(
            "/api/v1/employees/branch/:branch_id",
            get(employee_handlers::get_employees_by_branch::<S>),
        )
        .route(
            "/api/v1/employees/department/:department",
            get(employee_handlers::get_employees_by_department::<S>),
        )
        .route(
            "/api/v1/employees/:id",
            get(employee_handlers::get_employee_by_id::<S>),
        )
        .route(
            "/api/v1/employees/:id",
            put(employee_handlers::update_employee::<S>),
        )
        .route(
            "/api/v1/employees/:id",
            delete(employee_handlers::delete_employee::<S>),
        )
        .layer(middleware::from_fn(log_request))
}
