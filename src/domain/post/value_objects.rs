use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub i64);

impl PostId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("post id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PostId> for i64 {
    fn from(value: PostId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostTitle> for String {
    fn from(value: PostTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSlug(String);

impl PostSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostSlug> for String {
    fn from(value: PostSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostBody(String);

impl PostBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("body cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PostBody> for String {
    fn from(value: PostBody) -> Self {
        value.0
    }
}

/// Section of the public site a post belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostCategory {
    News,
    Vacancy,
    Announcement,
}

impl PostCategory {
    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "news" => Ok(Self::News),
            "vacancy" => Ok(Self::Vacancy),
            "announcement" => Ok(Self::Announcement),
            other => Err(DomainError::Validation(format!(
                "unknown category: {other}"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Vacancy => "vacancy",
            Self::Announcement => "announcement",
        }
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque keyset cursor over `(created_at, id)` for post listings.
#[derive(Debug, Clone)]
pub struct PostListCursor {
    pub created_at: DateTime<Utc>,
    pub post_id: PostId,
}

impl PostListCursor {
    pub fn from_parts(created_at: DateTime<Utc>, post_id: PostId) -> Self {
        Self {
            created_at,
            post_id,
        }
    }

    pub fn encode(&self) -> String {
        let raw = format!("{}|{}", self.created_at.to_rfc3339(), i64::from(self.post_id));
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let invalid = || DomainError::Validation("invalid cursor token".into());
        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
        let mut parts = raw.splitn(2, '|');
        let created_at_s = parts.next().ok_or_else(invalid)?;
        let id_s = parts.next().ok_or_else(invalid)?;
        let created_at = DateTime::parse_from_rfc3339(created_at_s)
            .map_err(|_| invalid())?
            .with_timezone(&Utc);
        let id = id_s.parse::<i64>().map_err(|_| invalid())?;
        Ok(Self::from_parts(created_at, PostId::new(id)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_id_rejects_non_positive() {
        assert!(PostId::new(0).is_err());
        assert!(PostId::new(-3).is_err());
        assert!(PostId::new(1).is_ok());
    }

    #[test]
    fn category_round_trips_through_parse() {
        for raw in ["news", "vacancy", "announcement"] {
            assert_eq!(PostCategory::parse(raw).unwrap().as_str(), raw);
        }
        assert!(PostCategory::parse("slider").is_err());
    }

    #[test]
    fn cursor_encode_decode_round_trip() {
        let cursor = PostListCursor::from_parts(Utc::now(), PostId::new(42).unwrap());
        let decoded = PostListCursor::decode(&cursor.encode()).unwrap();
        assert_eq!(decoded.post_id, cursor.post_id);
        assert_eq!(decoded.created_at, cursor.created_at);
    }

    #[test]
    fn cursor_rejects_garbage_tokens() {
        assert!(PostListCursor::decode("???").is_err());
        let raw = URL_SAFE_NO_PAD.encode("not-a-cursor");
        assert!(PostListCursor::decode(&raw).is_err());
    }
}
