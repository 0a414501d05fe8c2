//! Repository for the `projects` table.

use folio_core::media::MediaItem;
use folio_core::project::{ProjectSort, DEFAULT_PROJECT_STATUS};
use folio_core::slug;
use folio_core::types::DbId;
use sqlx::types::Json;
use sqlx::{PgConnection, PgExecutor, PgPool};

use crate::models::project::{CreateProject, Project, ProjectFilters, ProjectSummary, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, title, slug, short_description, full_description, media, tags, \
    technologies, links, featured, status, sort_order, views, created_at, updated_at";

/// Column list for [`ProjectSummary`].
const SUMMARY_COLUMNS: &str = "\
    id, title, slug, short_description, media, tags, technologies, \
    featured, status, views, created_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project under an already-resolved `slug`.
    ///
    /// Omitted fields take their column defaults (status `completed`,
    /// empty media/tags/links, order 0).
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateProject,
        slug: &str,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (
                title, slug, short_description, full_description, media, tags,
                technologies, links, featured, status, sort_order
             ) VALUES (
                $1, $2, COALESCE($3, ''), COALESCE($4, ''), COALESCE($5, '[]'::jsonb),
                COALESCE($6, '{{}}'::text[]), COALESCE($7, '{{}}'::text[]),
                COALESCE($8, '{{}}'::jsonb), COALESCE($9, FALSE), COALESCE($10, $12),
                COALESCE($11, 0)
             )
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.title.trim())
            .bind(slug)
            .bind(&input.short_description)
            .bind(&input.full_description)
            .bind(input.media.as_ref().map(Json))
            .bind(&input.tags)
            .bind(&input.technologies)
            .bind(input.links.as_ref().map(Json))
            .bind(input.featured)
            .bind(&input.status)
            .bind(input.sort_order)
            .bind(DEFAULT_PROJECT_STATUS)
            .fetch_one(executor)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a project by ID and lock the row until the surrounding
    /// transaction ends.
    pub async fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Find a project by slug without touching its view counter.
    pub async fn find_by_slug<'e>(
        executor: impl PgExecutor<'e>,
        slug: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(executor)
            .await
    }

    /// Whether `slug` is held by a project other than `exclude_id`.
    pub async fn slug_taken<'e>(
        executor: impl PgExecutor<'e>,
        slug: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let (taken,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM projects WHERE slug = $1 AND ($2::bigint IS NULL OR id <> $2)
             )",
        )
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(executor)
        .await?;
        Ok(taken)
    }

    /// Probe `base`, `base-1`, `base-2`, ... and return the first slug not
    /// held by another project. `None` once every candidate is exhausted.
    pub async fn resolve_unique_slug(
        conn: &mut PgConnection,
        base: &str,
        exclude_id: Option<DbId>,
    ) -> Result<Option<String>, sqlx::Error> {
        for candidate in slug::candidates(base) {
            if !Self::slug_taken(&mut *conn, &candidate, exclude_id).await? {
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }

    /// List project summaries matching `filters`.
    ///
    /// Filters combine with AND; a value that matches nothing yields an
    /// empty list.
    pub async fn list(
        pool: &PgPool,
        filters: &ProjectFilters,
    ) -> Result<Vec<ProjectSummary>, sqlx::Error> {
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filters.featured.is_some() {
            conditions.push(format!("featured = ${bind_idx}"));
            bind_idx += 1;
        }
        if filters.status.is_some() {
            conditions.push(format!("status = ${bind_idx}"));
            bind_idx += 1;
        }
        if filters.tag.is_some() {
            conditions.push(format!("${bind_idx} = ANY(tags)"));
            bind_idx += 1;
        }
        if filters.technology.is_some() {
            conditions.push(format!("${bind_idx} = ANY(technologies)"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let order_by = ProjectSort::parse(filters.sort_by.as_deref()).order_by();

        let query =
            format!("SELECT {SUMMARY_COLUMNS} FROM projects {where_clause} ORDER BY {order_by}");

        let mut q = sqlx::query_as::<_, ProjectSummary>(&query);
        if let Some(featured) = filters.featured {
            q = q.bind(featured);
        }
        if let Some(ref status) = filters.status {
            q = q.bind(status);
        }
        if let Some(ref tag) = filters.tag {
            q = q.bind(tag);
        }
        if let Some(ref technology) = filters.technology {
            q = q.bind(technology);
        }
        q.fetch_all(pool).await
    }

    /// Every project, in insertion order. Feeds the related-content ranker.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id ASC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Increment the view counter of the project at `slug` and return the
    /// updated row. Returns `None` if no such project exists.
    pub async fn increment_views<'e>(
        executor: impl PgExecutor<'e>,
        slug: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET views = views + 1, updated_at = NOW()
             WHERE slug = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(executor)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied; the
    /// slug is taken from `slug` (already resolved by the caller), not from
    /// `input.slug`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        input: &UpdateProject,
        slug: Option<&str>,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                short_description = COALESCE($4, short_description),
                full_description = COALESCE($5, full_description),
                media = COALESCE($6, media),
                tags = COALESCE($7, tags),
                technologies = COALESCE($8, technologies),
                links = COALESCE($9, links),
                featured = COALESCE($10, featured),
                status = COALESCE($11, status),
                sort_order = COALESCE($12, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(input.title.as_deref().map(str::trim))
            .bind(slug)
            .bind(&input.short_description)
            .bind(&input.full_description)
            .bind(input.media.as_ref().map(Json))
            .bind(&input.tags)
            .bind(&input.technologies)
            .bind(input.links.as_ref().map(Json))
            .bind(input.featured)
            .bind(&input.status)
            .bind(input.sort_order)
            .fetch_optional(executor)
            .await
    }

    /// Append one item to the end of a project's media list.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn append_media<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        item: &MediaItem,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET media = media || $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(Json([item]))
            .fetch_optional(executor)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search over titles, descriptions, tags and
    /// technologies. `pattern` is an `ILIKE` pattern (see
    /// [`folio_core::search::contains_pattern`]).
    pub async fn search(pool: &PgPool, pattern: &str) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE title ILIKE $1
                OR short_description ILIKE $1
                OR full_description ILIKE $1
                OR EXISTS (SELECT 1 FROM unnest(tags) AS t(label) WHERE t.label ILIKE $1)
                OR EXISTS (SELECT 1 FROM unnest(technologies) AS t(label) WHERE t.label ILIKE $1)
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }
}
