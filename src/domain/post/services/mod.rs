// src/domain/post/services/mod.rs
use std::sync::Arc;

use crate::application::ports::digest::ContentDigest;
use crate::application::ports::time::Clock;
use crate::domain::errors::DomainResult;
use crate::domain::post::repository::PostReadRepository;
use crate::domain::post::value_objects::{PostId, PostSlug, PostTitle};

const DIGEST_SUFFIX_LEN: usize = 8;

/// Domain service responsible for producing unique slugs for posts.
///
/// The candidate slug carries a short digest over the title and the current
/// wall-clock millis, so two posts with the same title almost never collide.
/// A collision is resolved by appending the millis once more; that fallback
/// is deliberately not re-checked against the store, the unique index on
/// `posts.slug` is the backstop.
pub struct SlugService {
    read_repo: Arc<dyn PostReadRepository>,
    digest: Arc<dyn ContentDigest>,
    clock: Arc<dyn Clock>,
}

impl SlugService {
    pub fn new(
        read_repo: Arc<dyn PostReadRepository>,
        digest: Arc<dyn ContentDigest>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            digest,
            clock,
        }
    }

    pub async fn generate(
        &self,
        title: &PostTitle,
        ignore_id: Option<PostId>,
    ) -> DomainResult<PostSlug> {
        let millis = self.clock.now().timestamp_millis();
        let seed = format!("{}{millis}", title.as_str());
        let digest = self.digest.hex_digest(seed.as_bytes());
        let short = &digest[..DIGEST_SUFFIX_LEN];

        let base = base_slug(title.as_str());
        let candidate = if base.is_empty() {
            short.to_string()
        } else {
            format!("{base}-{short}")
        };

        let slug = PostSlug::new(candidate.clone())?;
        match self.read_repo.find_by_slug(&slug).await? {
            Some(existing) if ignore_id.is_some_and(|id| id == existing.id) => Ok(slug),
            Some(_) => PostSlug::new(format!("{candidate}-{millis}")),
            None => Ok(slug),
        }
    }
}

/// Lower-cases the title, keeps ASCII alphanumerics, collapses runs of
/// whitespace, underscores and hyphens into a single hyphen and drops
/// everything else (no transliteration). May return an empty string.
pub fn base_slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_separator = false;
    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.push(ch);
        } else if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending_separator = true;
        }
    }
    out
}
