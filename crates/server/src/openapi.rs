use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct UserDoc { pub id: i32, pub name: String, pub email: String }

#[derive(utoipa::ToSchema)]
pub struct BookDoc { pub id: i32, pub title: String, pub author: String }

#[derive(utoipa::ToSchema)]
pub struct CreateUserRequest { pub name: String, pub email: String }

#[derive(utoipa::ToSchema)]
pub struct CreateBookRequest { pub title: String, pub author: String }

#[derive(utoipa::ToSchema)]
pub struct UpdateBookRequest { pub title: Option<String>, pub author: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::list,
        crate::routes::users::create,
        crate::routes::books::list,
        crate::routes::books::get,
        crate::routes::books::create,
        crate::routes::books::update,
        crate::routes::books::delete,
    ),
    components(
        schemas(
            HealthResponse,
            UserDoc,
            BookDoc,
            CreateUserRequest,
            CreateBookRequest,
            UpdateBookRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "books")
    )
)]
pub struct ApiDoc;
