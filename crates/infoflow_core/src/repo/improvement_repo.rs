//! Improvement repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `improvements` table.
//!
//! # Invariants
//! - One row per improvement, keyed by title slug.
//! - `tool` carries a foreign key to `tools.slug`; the domain constructor
//!   validates the reference before a row can exist.

use crate::model::improvement::Improvement;
use crate::model::phase::Phase;
use crate::model::ValidationError;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const IMPROVEMENT_SELECT_SQL: &str = "SELECT
    slug,
    title,
    what,
    why,
    how,
    prio,
    tool,
    phase
FROM improvements";

/// Repository interface for improvement CRUD operations.
pub trait ImprovementRepository {
    fn create_improvement(&self, improvement: &Improvement) -> RepoResult<String>;
    fn get_improvement(&self, slug: &str) -> RepoResult<Option<Improvement>>;
    fn list_improvements(&self) -> RepoResult<Vec<Improvement>>;
    fn delete_improvement(&self, slug: &str) -> RepoResult<()>;
}

/// SQLite-backed improvement repository.
pub struct SqliteImprovementRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteImprovementRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ImprovementRepository for SqliteImprovementRepository<'_> {
    fn create_improvement(&self, improvement: &Improvement) -> RepoResult<String> {
        let slug = improvement.slug();

        let existing_title = self
            .conn
            .query_row(
                "SELECT title FROM improvements WHERE slug = ?1;",
                [slug.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        if let Some(existing_name) = existing_title {
            return Err(RepoError::Validation(ValidationError::DuplicateSlug {
                slug,
                existing_name,
                new_name: improvement.title.clone(),
            }));
        }

        self.conn.execute(
            "INSERT INTO improvements (slug, title, what, why, how, prio, tool, phase)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                slug,
                improvement.title.as_str(),
                improvement.what.as_str(),
                improvement.why.as_str(),
                improvement.how.as_str(),
                improvement.priority,
                improvement.tool.as_str(),
                improvement.phase.as_str(),
            ],
        )?;

        Ok(slug)
    }

    fn get_improvement(&self, slug: &str) -> RepoResult<Option<Improvement>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{IMPROVEMENT_SELECT_SQL} WHERE slug = ?1;"))?;
        let mut rows = stmt.query([slug])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_improvement_row(row)?));
        }

        Ok(None)
    }

    fn list_improvements(&self) -> RepoResult<Vec<Improvement>> {
        let mut stmt = self.conn.prepare(&format!(
            "{IMPROVEMENT_SELECT_SQL} ORDER BY prio ASC, slug ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut improvements = Vec::new();

        while let Some(row) = rows.next()? {
            improvements.push(parse_improvement_row(row)?);
        }

        Ok(improvements)
    }

    fn delete_improvement(&self, slug: &str) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM improvements WHERE slug = ?1;", [slug])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "improvement",
                slug: slug.to_string(),
            });
        }

        Ok(())
    }
}

fn parse_improvement_row(row: &Row<'_>) -> RepoResult<Improvement> {
    let phase_text: String = row.get("phase")?;
    let phase = Phase::parse(&phase_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid phase `{phase_text}` in improvements.phase"
        ))
    })?;

    Ok(Improvement {
        title: row.get("title")?,
        what: row.get("what")?,
        why: row.get("why")?,
        how: row.get("how")?,
        priority: row.get("prio")?,
        tool: row.get("tool")?,
        phase,
    })
}
