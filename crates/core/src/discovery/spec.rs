//! Raw parameter parsing and the validated [`QuerySpec`].
//!
//! Validation policy:
//! - `page`/`limit` are strictly validated (reject non-numeric or < 1).
//! - `sortBy`/`sortType` are permissive: unrecognized values coerce to
//!   the documented defaults. Sort is advisory, not security-sensitive,
//!   and the allow-list guarantees no arbitrary field ever reaches the
//!   query.
//! - `userId` must be a syntactically valid owner identifier; existence
//!   is checked at execution time, keeping validation side-effect-free.

use serde::Deserialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Default page when the caller omits `page`.
pub const DEFAULT_PAGE: i64 = 1;

/// Default number of videos per page.
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// Maximum number of videos per page. Larger requested limits are
/// clamped, not rejected, to prevent unbounded result materialization.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Raw query parameters for `GET /videos`, exactly as the caller sent
/// them. All fields are optional and untyped; [`QuerySpec::from_params`]
/// is the only way to turn them into something usable.
#[derive(Debug, Default, Deserialize)]
pub struct ListVideosParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub query: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortType")]
    pub sort_type: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Allow-listed sort keys for the discovery engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    Views,
}

impl SortField {
    /// Resolve a caller-supplied token, falling back to the default for
    /// anything not on the allow-list.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some("createdAt") => SortField::CreatedAt,
            Some("views") => SortField::Views,
            _ => SortField::CreatedAt,
        }
    }

    /// The wire token echoed back to the caller.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "createdAt",
            SortField::Views => "views",
        }
    }

    /// The catalog column this key sorts on.
    pub fn column(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::Views => "view_count",
        }
    }
}

/// Sort direction, defaulting to ascending for unrecognized tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// The validated, typed discovery request. Constructed once per request
/// and immutable thereafter.
#[derive(Debug, Clone)]
pub struct QuerySpec {
    pub page: i64,
    pub limit: i64,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub free_text: Option<String>,
    pub owner_scope: Option<DbId>,
}

impl QuerySpec {
    /// Validate raw caller parameters into a `QuerySpec`.
    pub fn from_params(params: &ListVideosParams) -> Result<Self, CoreError> {
        let page = parse_positive(params.page.as_deref(), DEFAULT_PAGE)?;
        let limit = parse_positive(params.limit.as_deref(), DEFAULT_PAGE_SIZE)?.min(MAX_PAGE_SIZE);

        let sort_field = SortField::resolve(params.sort_by.as_deref());
        let sort_direction = SortDirection::resolve(params.sort_type.as_deref());

        let owner_scope = match params.user_id.as_deref() {
            None => None,
            Some(raw) => Some(parse_owner_id(raw)?),
        };

        let free_text = params
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string);

        Ok(QuerySpec {
            page,
            limit,
            sort_field,
            sort_direction,
            free_text,
            owner_scope,
        })
    }

    /// Number of records to skip for the requested page. Saturates
    /// rather than overflowing for absurdly large pages; the resulting
    /// window is empty either way.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Parse an optional page/limit value: absent means the default, present
/// means a strictly positive integer.
fn parse_positive(raw: Option<&str>, default: i64) -> Result<i64, CoreError> {
    match raw {
        None => Ok(default),
        Some(s) => match s.parse::<i64>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(CoreError::Validation(
                "page and limit must be positive integers".to_string(),
            )),
        },
    }
}

/// Parse an owner identifier. Ids are BIGSERIAL, so anything that is not
/// a positive integer is syntactically invalid.
fn parse_owner_id(raw: &str) -> Result<DbId, CoreError> {
    match raw.parse::<DbId>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(CoreError::Validation("invalid owner identifier".to_string())),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
