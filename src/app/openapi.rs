use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::core::http::handlers::health,
        crate::core::http::handlers::db_health,
        crate::blogs::http::handlers::list_blogs,
        crate::blogs::http::handlers::get_blog,
        crate::blogs::http::handlers::create_blog,
        crate::blogs::http::handlers::update_blog,
        crate::blogs::http::handlers::delete_blog,
        crate::users::http::handlers::list_users,
        crate::users::http::handlers::create_user,
        crate::notes::http::handlers::list_notes,
        crate::notes::http::handlers::get_note,
        crate::notes::http::handlers::create_note,
        crate::notes::http::handlers::update_note,
        crate::notes::http::handlers::delete_note,
        crate::auth::http::handlers::login
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::blogs::http::BlogDto,
        crate::blogs::http::CreateBlogRequest,
        crate::blogs::http::UpdateBlogRequest,
        crate::users::http::UserDto,
        crate::users::http::CreateUserRequest,
        crate::notes::http::NoteDto,
        crate::notes::http::CreateNoteRequest,
        crate::notes::http::UpdateNoteRequest,
        crate::auth::http::LoginRequest,
        crate::auth::http::LoginResponse
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Core", description = "Service health endpoints"),
        (name = "Blogs", description = "Blog list endpoints"),
        (name = "Users", description = "User registration and listing"),
        (name = "Notes", description = "Notes endpoints"),
        (name = "Auth", description = "Token login")
    )
)]
pub struct ApiDoc;
