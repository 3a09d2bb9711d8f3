use crate::api::handlers::{error_reply, ApiResponse, AppState, ErrorResponse};
use crate::logic::{validate, BranchOperations, EmployeeOperations};
use crate::model::{Branch, BranchPayload, Employee, Id};
use crate::store::traits::Store;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Json as RequestJson,
};

/// GET /api/v1/branches
pub async fn get_all_branches<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Json<ApiResponse<Vec<Branch>>>, (StatusCode, Json<ErrorResponse>)> {
    let branches = BranchOperations::get_all(&*store).await.map_err(error_reply)?;
    Ok(Json(ApiResponse::new(
        "Branches retrieved successfully",
        branches,
    )))
}

/// GET /api/v1/branches/:id
pub async fn get_branch_by_id<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Json<ApiResponse<Branch>>, (StatusCode, Json<ErrorResponse>)> {
    match BranchOperations::get_by_id(&*store, id)
        .await
        .map_err(error_reply)?
    {
        Some(branch) => Ok(Json(ApiResponse::new("Branch fetched", branch))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Branch not found")),
        )),
    }
}

/// POST /api/v1/branches
pub async fn create_branch<S: Store>(
    State(store): State<AppState<S>>,
    RequestJson(payload): RequestJson<BranchPayload>,
) -> Result<(StatusCode, Json<ApiResponse<Branch>>), (StatusCode, Json<ErrorResponse>)> {
    let new_branch = validate::branch_create(payload).map_err(error_reply)?;
    let branch = BranchOperations::create(&*store, new_branch)
        .await
        .map_err(error_reply)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Branch created successfully", branch)),
    ))
}

/// PUT /api/v1/branches/:id
pub async fn update_branch<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
    RequestJson(payload): RequestJson<BranchPayload>,
) -> Result<Json<ApiResponse<Branch>>, (StatusCode, Json<ErrorResponse>)> {
    let update = validate::branch_update(payload).map_err(error_reply)?;
    let branch = BranchOperations::update(&*store, id, update)
        .await
        .map_err(error_reply)?;
    Ok(Json(ApiResponse::new("Branch updated successfully", branch)))
}

/// DELETE /api/v1/branches/:id
///
/// Responds with the record as it was just before removal.
pub async fn delete_branch<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Json<ApiResponse<Branch>>, (StatusCode, Json<ErrorResponse>)> {
    let branch = BranchOperations::delete(&*store, id)
        .await
        .map_err(error_reply)?;
    Ok(Json(ApiResponse::new("Branch deleted successfully", branch)))
}

/// GET /api/v1/branches/:id/employees
///
/// No existence check on the branch itself: an unknown id simply yields an
/// empty list, matching the filter semantics of the employee endpoints.
pub async fn get_branch_employees<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Json<ApiResponse<Vec<Employee>>>, (StatusCode, Json<ErrorResponse>)> {
    let employees = EmployeeOperations::for_branch(&*store, id)
        .await
        .map_err(error_reply)?;
    Ok(Json(ApiResponse::new(
        "Employees retrieved successfully",
        employees,
    )))
}
