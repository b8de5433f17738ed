use super::handlers::{health, users};
use utoipa::openapi::{Contact, ContactBuilder, InfoBuilder, LicenseBuilder, OpenApiBuilder, Tag};
use utoipa_axum::{router::OpenApiRouter, routes};

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Reuse the same router wiring and only return the generated OpenAPI document.
    let (_router, openapi) = api_router().split_for_parts();
    openapi
}

/// Build the router that also drives the `OpenAPI` document.
///
/// Add new endpoints here via `.routes(routes!(...))` so they are both served
/// and included in the generated `OpenAPI` document.
pub(crate) fn api_router() -> OpenApiRouter {
    let mut router = OpenApiRouter::with_openapi(cargo_openapi())
        .routes(routes!(health::health))
        .routes(routes!(users::list_users));

    let mut users_tag = Tag::new("users");
    users_tag.description = Some("Users fetched from the upstream directory".to_string());

    let mut health_tag = Tag::new("health");
    health_tag.description = Some("Service liveness and build information".to_string());

    router.get_openapi_mut().tags = Some(vec![users_tag, health_tag]);

    router
}

fn cargo_openapi() -> utoipa::openapi::OpenApi {
    let description = env!("CARGO_PKG_DESCRIPTION");
    let license = env!("CARGO_PKG_LICENSE");

    let info = InfoBuilder::new()
        .title(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .description((!description.is_empty()).then_some(description))
        .contact(contact_from_authors(env!("CARGO_PKG_AUTHORS")))
        .license((!license.is_empty()).then(|| {
            LicenseBuilder::new()
                .name(license)
                .identifier(Some(license))
                .build()
        }))
        .build();

    OpenApiBuilder::new().info(info).build()
}

/// Contact for the first Cargo author, written either `Name` or `Name <email>`.
fn contact_from_authors(authors: &str) -> Option<Contact> {
    let first = authors.split(':').next()?.trim();

    let (name, email) = match first.strip_suffix('>').and_then(|s| s.rsplit_once('<')) {
        Some((name, email)) => (name.trim(), email.trim()),
        None => (first, ""),
    };

    if name.is_empty() && email.is_empty() {
        return None;
    }

    Some(
        ContactBuilder::new()
            .name((!name.is_empty()).then_some(name))
            .email((!email.is_empty()).then_some(email))
            .build(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_info_from_cargo() {
        let doc = openapi();
        assert_eq!(doc.info.title, env!("CARGO_PKG_NAME"));
        assert_eq!(doc.info.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(
            doc.info.description.as_deref(),
            Some(env!("CARGO_PKG_DESCRIPTION"))
        );

        let contact = doc.info.contact;
        assert!(contact.is_some());
        if let Some(contact) = contact {
            assert_eq!(contact.name.as_deref(), Some("Team Customers"));
            assert_eq!(contact.email.as_deref(), Some("team@customers.dev"));
        }

        let license = doc.info.license;
        assert!(license.is_some());
        if let Some(license) = license {
            assert_eq!(license.name, "BSD-3-Clause");
            assert_eq!(license.identifier.as_deref(), Some("BSD-3-Clause"));
        }
    }

    #[test]
    fn openapi_tags_and_paths() {
        let doc = openapi();
        let tags = doc.tags.clone().unwrap_or_default();
        assert!(tags.iter().any(|tag| tag.name == "users"));
        assert!(tags.iter().any(|tag| tag.name == "health"));
        assert!(doc.paths.paths.contains_key("/users"));
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[test]
    fn contact_from_authors_variants() {
        let contact = contact_from_authors("Team Customers <team@customers.dev>:Other <o@x.dev>");
        assert_eq!(
            contact.map(|c| (c.name, c.email)),
            Some((
                Some("Team Customers".to_string()),
                Some("team@customers.dev".to_string())
            ))
        );

        let solo = contact_from_authors("Solo");
        assert_eq!(
            solo.map(|c| (c.name, c.email)),
            Some((Some("Solo".to_string()), None))
        );

        let email_only = contact_from_authors("<only@mail.dev>");
        assert_eq!(
            email_only.map(|c| (c.name, c.email)),
            Some((None, Some("only@mail.dev".to_string())))
        );

        assert!(contact_from_authors("").is_none());
        assert!(contact_from_authors("<>").is_none());
    }

    #[test]
    fn health_response_is_a_single_object() {
        let doc = serde_json::to_value(openapi()).unwrap_or_default();
        let schema = &doc["paths"]["/health"]["get"]["responses"]["200"]["content"]
            ["application/json"]["schema"];
        assert_eq!(schema["$ref"], "#/components/schemas/Health");
        assert!(schema.get("items").is_none());
    }
}
