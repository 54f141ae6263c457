use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Persisted book as returned by the API.
#[derive(ToSchema)]
pub struct BookDoc {
    pub id: i32,
    /// 1 to 200 characters
    pub name: String,
}

/// Create/update body. `id` is ignored on create and must match the path on update.
#[derive(ToSchema)]
pub struct BookInputDoc {
    pub id: Option<i32>,
    pub name: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::books::list,
        crate::routes::books::get,
        crate::routes::books::create,
        crate::routes::books::update,
        crate::routes::books::delete,
    ),
    components(
        schemas(
            HealthResponse,
            BookDoc,
            BookInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "books")
    )
)]
pub struct ApiDoc;
