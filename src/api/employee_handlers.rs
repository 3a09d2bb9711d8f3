use crate::api::handlers::{error_reply, ApiResponse, AppState, ErrorResponse};
use crate::logic::{validate, EmployeeOperations};
use crate::model::{Employee, EmployeePayload, Id};
use crate::store::traits::Store;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Json as RequestJson,
};

/// GET /api/v1/employees
pub async fn get_all_employees<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Json<ApiResponse<Vec<Employee>>>, (StatusCode, Json<ErrorResponse>)> {
    let employees = EmployeeOperations::get_all(&*store)
        .await
        .map_err(error_reply)?;
    Ok(Json(ApiResponse::new(
        "Employees retrieved successfully",
        employees,
    )))
}

/// GET /api/v1/employees/:id
pub async fn get_employee_by_id<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Json<ApiResponse<Employee>>, (StatusCode, Json<ErrorResponse>)> {
    match EmployeeOperations::get_by_id(&*store, id)
        .await
        .map_err(error_reply)?
    {
        Some(employee) => Ok(Json(ApiResponse::new("Employee fetched", employee))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Employee not found")),
        )),
    }
}

/// GET /api/v1/employees/branch/:branch_id
pub async fn get_employees_by_branch<S: Store>(
    State(store): State<AppState<S>>,
    Path(branch_id): Path<Id>,
) -> Result<Json<ApiResponse<Vec<Employee>>>, (StatusCode, Json<ErrorResponse>)> {
    let employees = EmployeeOperations::for_branch(&*store, branch_id)
        .await
        .map_err(error_reply)?;
    Ok(Json(ApiResponse::new(
        "Employees retrieved successfully",
        employees,
    )))
}

/// GET /api/v1/employees/department/:department
pub async fn get_employees_by_department<S: Store>(
    State(store): State<AppState<S>>,
    Path(department): Path<String>,
) -> Result<Json<ApiResponse<Vec<Employee>>>, (StatusCode, Json<ErrorResponse>)> {
    let employees = EmployeeOperations::for_department(&*store, &department)
        .await
        .map_err(error_reply)?;
    Ok(Json(ApiResponse::new(
        "Employees retrieved successfully",
        employees,
    )))
}

/// POST /api/v1/employees
pub async fn create_employee<S: Store>(
    State(store): State<AppState<S>>,
    RequestJson(payload): RequestJson<EmployeePayload>,
) -> Result<(StatusCode, Json<ApiResponse<Employee>>), (StatusCode, Json<ErrorResponse>)> {
    let new_employee = validate::employee_create(payload).map_err(error_reply)?;
    let employee = EmployeeOperations::create(&*store, new_employee)
        .await
        .map_err(error_reply)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Employee created successfully", employee)),
    ))
}

/// PUT /api/v1/employees/:id
pub async fn update_employee<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
    RequestJson(payload): RequestJson<EmployeePayload>,
) -> Result<Json<ApiResponse<Employee>>, (StatusCode, Json<ErrorResponse>)> {
    let update = validate::employee_update(payload).map_err(error_reply)?;
    let employee = EmployeeOperations::update(&*store, id, update)
        .await
        .map_err(error_reply)?;
    Ok(Json(ApiResponse::new(
        "Employee updated successfully",
        employee,
    )))
}

/// DELETE /api/v1/employees/:id
///
/// Responds with the record as it was just before removal.
pub async fn delete_employee<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Json<ApiResponse<Employee>>, (StatusCode, Json<ErrorResponse>)> {
    let employee = EmployeeOperations::delete(&*store, id)
        .await
        .map_err(error_reply)?;
    Ok(Json(ApiResponse::new(
        "Employee deleted successfully",
        employee,
    )))
}
