//! Pipeline composition.
//!
//! One fixed stage template replaces the three per-mode code paths the
//! original handler grew (owner-scoped, free-text, unscoped), each of
//! which re-derived its own sort and pagination. The ordering here is
//! the engine's central correctness contract: every filter precedes the
//! sort, and the sort precedes skip/limit, so page windows stay stable
//! across requests regardless of which optional stages are present.

use crate::discovery::pattern::{build_search_pattern, SearchPattern};
use crate::discovery::spec::{QuerySpec, SortDirection, SortField};
use crate::types::DbId;

/// One declarative step of the discovery pipeline. Stages carry no side
/// effects; the executor in `vidtube-db` renders them against the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    /// Restrict to published records. Always present, never
    /// caller-configurable.
    VisibilityFilter,
    /// Attach the owner projection via a lookup on the owner identifier.
    /// Always present; results are always denormalized.
    OwnerJoin,
    /// Restrict to records owned by the given owner. Applied after the
    /// join so scope filtering may reference joined fields.
    OwnerScopeFilter(DbId),
    /// Case-insensitive substring match over title or description.
    TextSearchFilter(SearchPattern),
    /// Order by the resolved sort key and direction.
    Sort {
        field: SortField,
        direction: SortDirection,
    },
    /// Skip `(page - 1) * limit` records.
    Skip(i64),
    /// Return at most `limit` records.
    Limit(i64),
}

/// Compose the ordered stage list for a validated [`QuerySpec`].
pub fn build_pipeline(spec: &QuerySpec) -> Vec<Stage> {
    let mut stages = vec![Stage::VisibilityFilter, Stage::OwnerJoin];

    if let Some(owner_id) = spec.owner_scope {
        stages.push(Stage::OwnerScopeFilter(owner_id));
    }

    if let Some(query) = spec.free_text.as_deref() {
        stages.push(Stage::TextSearchFilter(build_search_pattern(query)));
    }

    stages.push(Stage::Sort {
        field: spec.sort_field,
        direction: spec.sort_direction,
    });
    stages.push(Stage::Skip(spec.offset()));
    stages.push(Stage::Limit(spec.limit));

    stages
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> QuerySpec {
        QuerySpec {
            page: 1,
            limit: 5,
            sort_field: SortField::CreatedAt,
            sort_direction: SortDirection::Asc,
            free_text: None,
            owner_scope: None,
        }
    }

    #[test]
    fn minimal_spec_yields_five_stages_in_order() {
        let stages = build_pipeline(&spec());
        assert_eq!(
            stages,
            vec![
                Stage::VisibilityFilter,
                Stage::OwnerJoin,
                Stage::Sort {
                    field: SortField::CreatedAt,
                    direction: SortDirection::Asc,
                },
                Stage::Skip(0),
                Stage::Limit(5),
            ]
        );
    }

    #[test]
    fn full_spec_yields_all_seven_stages_in_order() {
        let mut s = spec();
        s.page = 3;
        s.limit = 10;
        s.sort_field = SortField::Views;
        s.sort_direction = SortDirection::Desc;
        s.free_text = Some("rust".to_string());
        s.owner_scope = Some(7);

        let stages = build_pipeline(&s);
        assert_eq!(
            stages,
            vec![
                Stage::VisibilityFilter,
                Stage::OwnerJoin,
                Stage::OwnerScopeFilter(7),
                Stage::TextSearchFilter(SearchPattern::Literal("rust".to_string())),
                Stage::Sort {
                    field: SortField::Views,
                    direction: SortDirection::Desc,
                },
                Stage::Skip(20),
                Stage::Limit(10),
            ]
        );
    }

    #[test]
    fn search_pattern_is_sanitized_during_composition() {
        let mut s = spec();
        s.free_text = Some("50%_off".to_string());
        let stages = build_pipeline(&s);
        assert!(stages.contains(&Stage::TextSearchFilter(SearchPattern::Literal(
            "50\\%\\_off".to_string()
        ))));
    }

    #[test]
    fn pagination_stages_always_follow_sort() {
        for owner in [None, Some(1)] {
            for text in [None, Some("q".to_string())] {
                let mut s = spec();
                s.owner_scope = owner;
                s.free_text = text;
                let stages = build_pipeline(&s);

                let sort_idx = stages
                    .iter()
                    .position(|st| matches!(st, Stage::Sort { .. }))
                    .unwrap();
                let skip_idx = stages
                    .iter()
                    .position(|st| matches!(st, Stage::Skip(_)))
                    .unwrap();
                let limit_idx = stages
                    .iter()
                    .position(|st| matches!(st, Stage::Limit(_)))
                    .unwrap();

                // No filter may appear after the sort stage.
                assert!(stages[..sort_idx].iter().all(|st| matches!(
                    st,
                    Stage::VisibilityFilter
                        | Stage::OwnerJoin
                        | Stage::OwnerScopeFilter(_)
                        | Stage::TextSearchFilter(_)
                )));
                assert!(sort_idx < skip_idx);
                assert!(skip_idx < limit_idx);
            }
        }
    }
}
