//! Repository for the `videos` table and the discovery pipeline executor.
//!
//! [`VideoRepo::discover`] renders an ordered [`Stage`] list into a
//! single parameterized SELECT and materializes the joined rows. The
//! stage list is the contract: the renderer translates each stage into
//! its SQL counterpart without reordering filters relative to sort or
//! pagination.

use sqlx::PgPool;
use vidtube_core::discovery::{SearchPattern, Stage};
use vidtube_core::types::DbId;

use crate::models::video::VideoWithOwner;

/// Column list for discovery queries: the full video row plus the
/// owner projection from the join.
const DISCOVER_COLUMNS: &str = "\
    v.id, v.title, v.description, v.video_url, v.thumbnail_url, \
    v.duration_secs, v.view_count, v.is_published, v.owner_id, v.created_at, \
    u.username AS owner_username, u.full_name AS owner_full_name, \
    u.avatar_url AS owner_avatar_url";

/// A value bound to a rendered query, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
enum Bind {
    Id(DbId),
    Int(i64),
    Text(String),
}

/// Provides read operations for the video catalog.
pub struct VideoRepo;

impl VideoRepo {
    /// Execute a discovery pipeline and return the joined rows.
    ///
    /// Zero rows is a valid, successful outcome; only transport-level
    /// failures surface as errors.
    pub async fn discover(
        pool: &PgPool,
        stages: &[Stage],
    ) -> Result<Vec<VideoWithOwner>, sqlx::Error> {
        let (sql, binds) = render_pipeline(stages);

        let mut query = sqlx::query_as::<_, VideoWithOwner>(&sql);
        for bind in binds {
            query = match bind {
                Bind::Id(v) => query.bind(v),
                Bind::Int(v) => query.bind(v),
                Bind::Text(s) => query.bind(s),
            };
        }
        query.fetch_all(pool).await
    }

    /// Find a single published video with its owner projection.
    pub async fn find_published_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<VideoWithOwner>, sqlx::Error> {
        let query = format!(
            "SELECT {DISCOVER_COLUMNS} \
             FROM videos v \
             JOIN users u ON u.id = v.owner_id \
             WHERE v.id = $1 AND v.is_published = TRUE"
        );
        sqlx::query_as::<_, VideoWithOwner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

/// Render a stage list into SQL text plus its bind values.
///
/// Stage order determines placeholder numbering; clause placement in the
/// final text follows SQL syntax (WHERE, ORDER BY, LIMIT, OFFSET).
fn render_pipeline(stages: &[Stage]) -> (String, Vec<Bind>) {
    let mut joined = false;
    let mut wheres: Vec<String> = Vec::new();
    let mut order_clause: Option<String> = None;
    let mut limit_clause: Option<String> = None;
    let mut offset_clause: Option<String> = None;
    let mut binds: Vec<Bind> = Vec::new();

    for stage in stages {
        match stage {
            Stage::VisibilityFilter => {
                wheres.push("v.is_published = TRUE".to_string());
            }
            Stage::OwnerJoin => {
                joined = true;
            }
            Stage::OwnerScopeFilter(owner_id) => {
                binds.push(Bind::Id(*owner_id));
                wheres.push(format!("v.owner_id = ${}", binds.len()));
            }
            Stage::TextSearchFilter(pattern) => match pattern {
                SearchPattern::Literal(escaped) => {
                    binds.push(Bind::Text(format!("%{escaped}%")));
                    let n = binds.len();
                    wheres.push(format!(
                        "(v.title ILIKE ${n} ESCAPE '\\' OR v.description ILIKE ${n} ESCAPE '\\')"
                    ));
                }
                SearchPattern::MatchNothing => {
                    wheres.push("FALSE".to_string());
                }
            },
            Stage::Sort { field, direction } => {
                // Secondary id tie-break keeps pages deterministic when
                // the sort key has duplicate values.
                order_clause = Some(format!(
                    "ORDER BY v.{} {}, v.id ASC",
                    field.column(),
                    direction.sql()
                ));
            }
            Stage::Skip(n) => {
                binds.push(Bind::Int(*n));
                offset_clause = Some(format!("OFFSET ${}", binds.len()));
            }
            Stage::Limit(n) => {
                binds.push(Bind::Int(*n));
                limit_clause = Some(format!("LIMIT ${}", binds.len()));
            }
        }
    }

    let mut sql = format!("SELECT {DISCOVER_COLUMNS} FROM videos v");
    if joined {
        sql.push_str(" JOIN users u ON u.id = v.owner_id");
    }
    if !wheres.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&wheres.join(" AND "));
    }
    for clause in [order_clause, limit_clause, offset_clause]
        .into_iter()
        .flatten()
    {
        sql.push(' ');
        sql.push_str(&clause);
    }

    (sql, binds)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
