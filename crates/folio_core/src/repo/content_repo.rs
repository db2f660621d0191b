//! Portfolio content repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Translate project/skill/experience list parameters into SQL.
//! - Shape rows into read models, including tags and the owner view.
//!
//! # Invariants
//! - Projects are ordered by `created_at DESC, id ASC`.
//! - Skills are ordered by `level DESC, id ASC`.
//! - Experiences are ordered ongoing-first, then by
//!   `COALESCE(end_date, start_date) DESC, start_date DESC, id ASC`.
//! - Owner rows expose only `name` and `image`.

use crate::model::experience::Experience;
use crate::model::project::{Project, Tag, UserSummary};
use crate::model::skill::Skill;
use crate::repo::{bool_to_int, ensure_tables, parse_flag, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row};

const PROJECT_SELECT_SQL: &str = "SELECT
    p.id AS id,
    p.title AS title,
    p.description AS description,
    p.image AS image,
    p.demo_url AS demo_url,
    p.repo_url AS repo_url,
    p.featured AS featured,
    p.created_at AS created_at,
    u.name AS owner_name,
    u.image AS owner_image
FROM projects p
INNER JOIN users u ON u.id = p.user_id";

const REQUIRED_TABLES: &[&str] = &[
    "users",
    "projects",
    "tags",
    "project_tags",
    "skills",
    "experiences",
];

/// Query options for listing projects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListQuery {
    /// Exact match on the featured flag when set.
    pub featured: Option<bool>,
    /// Maximum rows to return; `Some(0)` yields no rows.
    pub limit: Option<u32>,
}

/// Query options for listing skills.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillListQuery {
    /// Exact, case-sensitive category match when set.
    pub category: Option<String>,
}

/// Read-only repository interface for portfolio content.
pub trait ContentRepository {
    fn list_projects(&self, query: &ProjectListQuery) -> RepoResult<Vec<Project>>;
    fn get_project(&self, id: &str) -> RepoResult<Option<Project>>;
    fn list_skills(&self, query: &SkillListQuery) -> RepoResult<Vec<Skill>>;
    fn list_experiences(&self) -> RepoResult<Vec<Experience>>;
}

impl<T: ContentRepository + ?Sized> ContentRepository for &T {
    fn list_projects(&self, query: &ProjectListQuery) -> RepoResult<Vec<Project>> {
        (**self).list_projects(query)
    }

    fn get_project(&self, id: &str) -> RepoResult<Option<Project>> {
        (**self).get_project(id)
    }

    fn list_skills(&self, query: &SkillListQuery) -> RepoResult<Vec<Skill>> {
        (**self).list_skills(query)
    }

    fn list_experiences(&self) -> RepoResult<Vec<Experience>> {
        (**self).list_experiences()
    }
}

/// SQLite-backed content repository.
pub struct SqliteContentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContentRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_tables(conn, REQUIRED_TABLES)?;
        Ok(Self { conn })
    }
}

impl ContentRepository for SqliteContentRepository<'_> {
    fn list_projects(&self, query: &ProjectListQuery) -> RepoResult<Vec<Project>> {
        let mut sql = format!("{PROJECT_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(featured) = query.featured {
            sql.push_str(" AND p.featured = ?");
            bind_values.push(Value::Integer(bool_to_int(featured)));
        }

        sql.push_str(" ORDER BY p.created_at DESC, p.id ASC");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(self.conn, row)?);
        }

        Ok(projects)
    }

    fn get_project(&self, id: &str) -> RepoResult<Option<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} WHERE p.id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_project_row(self.conn, row)?));
        }

        Ok(None)
    }

    fn list_skills(&self, query: &SkillListQuery) -> RepoResult<Vec<Skill>> {
        let mut sql = String::from(
            "SELECT
                id,
                name,
                category,
                level
             FROM skills
             WHERE 1 = 1",
        );
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(category) = query.category.as_ref() {
            sql.push_str(" AND category = ?");
            bind_values.push(Value::Text(category.clone()));
        }

        sql.push_str(" ORDER BY level DESC, id ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut skills = Vec::new();
        while let Some(row) = rows.next()? {
            skills.push(parse_skill_row(row)?);
        }

        Ok(skills)
    }

    fn list_experiences(&self) -> RepoResult<Vec<Experience>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                id,
                title,
                company,
                location,
                description,
                start_date,
                end_date,
                is_current
             FROM experiences
             ORDER BY
                is_current DESC,
                COALESCE(end_date, start_date) DESC,
                start_date DESC,
                id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut experiences = Vec::new();
        while let Some(row) = rows.next()? {
            experiences.push(Experience {
                id: row.get("id")?,
                title: row.get("title")?,
                company: row.get("company")?,
                location: row.get("location")?,
                description: row.get("description")?,
                start_date: row.get("start_date")?,
                end_date: row.get("end_date")?,
                current: parse_flag(row.get("is_current")?, "experiences.is_current")?,
            });
        }

        Ok(experiences)
    }
}

fn parse_project_row(conn: &Connection, row: &Row<'_>) -> RepoResult<Project> {
    let id: String = row.get("id")?;
    let tags = load_tags_for_project(conn, &id)?;
    Ok(Project {
        title: row.get("title")?,
        description: row.get("description")?,
        image: row.get("image")?,
        demo_url: row.get("demo_url")?,
        repo_url: row.get("repo_url")?,
        featured: parse_flag(row.get("featured")?, "projects.featured")?,
        created_at: row.get("created_at")?,
        owner: UserSummary {
            name: row.get("owner_name")?,
            image: row.get("owner_image")?,
        },
        tags,
        id,
    })
}

fn parse_skill_row(row: &Row<'_>) -> RepoResult<Skill> {
    let level: i64 = row.get("level")?;
    let level = u32::try_from(level).map_err(|_| {
        RepoError::InvalidData(format!("invalid skill level `{level}` in skills.level"))
    })?;

    Ok(Skill {
        id: row.get("id")?,
        name: row.get("name")?,
        category: row.get("category")?,
        level,
    })
}

fn load_tags_for_project(conn: &Connection, project_id: &str) -> RepoResult<Vec<Tag>> {
    let mut stmt = conn.prepare_cached(
        "SELECT t.id, t.name
         FROM project_tags pt
         INNER JOIN tags t ON t.id = pt.tag_id
         WHERE pt.project_id = ?1
         ORDER BY t.name COLLATE NOCASE ASC, t.id ASC;",
    )?;
    let mut rows = stmt.query([project_id])?;
    let mut tags = Vec::new();
    while let Some(row) = rows.next()? {
        tags.push(Tag {
            id: row.get(0)?,
            name: row.get(1)?,
        });
    }
    Ok(tags)
}
