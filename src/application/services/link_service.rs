//! Link creation and retrieval service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::id_generator::generate_id;

/// Service for creating and retrieving shortened links.
///
/// Owns the identifier-collision policy shared by single shortening and
/// bulk import: any collision is resolved internally by regenerating the
/// identifier, never surfaced to the caller.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Shortens a URL, optionally under a requested alias.
    ///
    /// # Behavior
    ///
    /// - An empty URL is rejected; no other URL validation happens here.
    ///   Arbitrary strings are accepted as targets by policy.
    /// - A blank (empty after trimming) alias counts as no alias.
    /// - Without an alias, an existing mapping for the exact same URL is
    ///   returned instead of creating a duplicate (idempotent shortening).
    /// - Identifier collisions are resolved by silently regenerating, even
    ///   when the collided identifier was an explicitly requested alias.
    /// - When the insert loses a duplicate-URL race, the surviving mapping
    ///   is read back and returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `long_url` is empty.
    /// Returns [`AppError::Internal`] on database errors or when collision
    /// resolution exhausts its attempts.
    pub async fn shorten(
        &self,
        long_url: String,
        alias: Option<String>,
    ) -> Result<Link, AppError> {
        if long_url.is_empty() {
            return Err(AppError::bad_request("URL must not be empty", json!({})));
        }

        let alias = alias
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        if alias.is_none()
            && let Some(existing) = self.link_repository.find_by_long_url(&long_url).await?
        {
            return Ok(existing);
        }

        let candidate = match alias {
            Some(alias) => alias,
            None => generate_id(),
        };

        self.insert_resolving_collisions(candidate, long_url).await
    }

    /// Retrieves a link by its short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the identifier.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_link(&self, id: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))
    }

    /// Composes the externally visible short URL for an identifier.
    pub fn get_short_url(&self, base_url: &str, id: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), id)
    }

    /// Inserts a link, resolving identifier collisions by regeneration.
    ///
    /// A taken identifier is detected either by the pre-insert lookup or,
    /// under concurrency, by the insert conflicting. A conflict caused by
    /// the URL instead of the identifier means the mapping already exists,
    /// so the surviving row is read back and returned. Bounded attempts;
    /// exhaustion is an internal error, never a duplicate-identifier error.
    async fn insert_resolving_collisions(
        &self,
        mut id: String,
        long_url: String,
    ) -> Result<Link, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            if self.link_repository.find_by_id(&id).await?.is_some() {
                id = generate_id();
                continue;
            }

            let new_link = NewLink {
                id: id.clone(),
                long_url: long_url.clone(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => {
                    if let Some(existing) =
                        self.link_repository.find_by_long_url(&long_url).await?
                    {
                        return Ok(existing);
                    }

                    // Identifier lost a race; try a fresh one.
                    id = generate_id();
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique identifier",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
