use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::PackageResult;
use crate::models::{Category, CreatePackage, Package, PackageFilter, UpdatePackage};
use crate::repository::PackageRepository;
use crate::service::PackageService;

/// OpenAPI documentation for the Packages API
#[derive(OpenApi)]
#[openapi(
    paths(list_packages, create_package, get_package, update_package, delete_package),
    components(
        schemas(Package, Category, CreatePackage, UpdatePackage, PackageFilter),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Packages", description = "Service packages offered per event category")
    )
)]
pub struct ApiDoc;

/// Package routes, relative to wherever the caller nests them
pub fn router<R: PackageRepository + 'static>(service: PackageService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_packages).post(create_package))
        .route(
            "/{id}",
            get(get_package).put(update_package).delete(delete_package),
        )
        .with_state(shared_service)
}

/// List packages, optionally for one category
#[utoipa::path(
    get,
    path = "",
    tag = "Packages",
    params(PackageFilter),
    responses(
        (status = 200, description = "Packages ordered by name", body = Vec<Package>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_packages<R: PackageRepository>(
    State(service): State<Arc<PackageService<R>>>,
    Query(filter): Query<PackageFilter>,
) -> PackageResult<Json<Vec<Package>>> {
    let packages = service.list_packages(filter).await?;
    Ok(Json(packages))
}

/// Create a package
#[utoipa::path(
    post,
    path = "",
    tag = "Packages",
    request_body = CreatePackage,
    responses(
        (status = 201, description = "Package created", body = Package),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_package<R: PackageRepository>(
    State(service): State<Arc<PackageService<R>>>,
    ValidatedJson(input): ValidatedJson<CreatePackage>,
) -> PackageResult<impl IntoResponse> {
    let package = service.create_package(input).await?;
    Ok((StatusCode::CREATED, Json(package)))
}

/// Get a package by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Packages",
    params(
        ("id" = Uuid, Path, description = "Package ID")
    ),
    responses(
        (status = 200, description = "Package found", body = Package),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_package<R: PackageRepository>(
    State(service): State<Arc<PackageService<R>>>,
    UuidPath(id): UuidPath,
) -> PackageResult<Json<Package>> {
    let package = service.get_package(id).await?;
    Ok(Json(package))
}

/// Partially update a package
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Packages",
    params(
        ("id" = Uuid, Path, description = "Package ID")
    ),
    request_body = UpdatePackage,
    responses(
        (status = 200, description = "Package updated", body = Package),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_package<R: PackageRepository>(
    State(service): State<Arc<PackageService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdatePackage>,
) -> PackageResult<Json<Package>> {
    let package = service.update_package(id, input).await?;
    Ok(Json(package))
}

/// Delete a package
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Packages",
    params(
        ("id" = Uuid, Path, description = "Package ID")
    ),
    responses(
        (status = 204, description = "Package deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_package<R: PackageRepository>(
    State(service): State<Arc<PackageService<R>>>,
    UuidPath(id): UuidPath,
) -> PackageResult<impl IntoResponse> {
    service.delete_package(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
