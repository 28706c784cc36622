use async_trait::async_trait;
use deadpool_postgres::{Config, Pool, Runtime};
use healthai_core::{Gender, Profile};
use tokio_postgres::{NoTls, Row};

use super::ProfileStore;
use crate::error::AppError;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS healthai_profile (
    session_id TEXT PRIMARY KEY,
    name       TEXT NOT NULL DEFAULT '',
    age        BIGINT NOT NULL DEFAULT 0,
    gender     TEXT NOT NULL DEFAULT '',
    allergies  TEXT NOT NULL DEFAULT '',
    contact    TEXT NOT NULL DEFAULT ''
);
ALTER TABLE healthai_profile ALTER COLUMN age TYPE BIGINT;
"#;

const SELECT_PROFILE: &str =
    "SELECT name, age, gender, allergies, contact FROM healthai_profile WHERE session_id = $1";

/// Create a connection pool from a database URL
pub fn create_pool(database_url: &str) -> Result<Pool, deadpool_postgres::CreatePoolError> {
    let mut cfg = Config::new();
    cfg.url = Some(database_url.to_string());
    cfg.create_pool(Some(Runtime::Tokio1), NoTls)
}

/// Profiles in a PostgreSQL table, one row per session
#[derive(Clone)]
pub struct PgProfileStore {
    pool: Pool,
}

impl PgProfileStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Create the profile table if it does not exist yet
    pub async fn migrate(&self) -> Result<(), AppError> {
        let client = self.pool.get().await?;
        client.batch_execute(SCHEMA).await?;
        Ok(())
    }
}

fn profile_from_row(row: &Row) -> Profile {
    let age: i64 = row.get("age");
    let gender: String = row.get("gender");
    Profile {
        name: row.get("name"),
        age: u32::try_from(age).unwrap_or(0),
        gender: Gender::from_stored(&gender),
        allergies: row.get("allergies"),
        contact: row.get("contact"),
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn initialize(&self, session: &str) -> Result<Profile, AppError> {
        let client = self.pool.get().await?;
        client
            .execute(
                "INSERT INTO healthai_profile (session_id) VALUES ($1) ON CONFLICT (session_id) DO NOTHING",
                &[&session],
            )
            .await?;
        let row = client.query_one(SELECT_PROFILE, &[&session]).await?;
        Ok(profile_from_row(&row))
    }

    async fn get(&self, session: &str) -> Result<Profile, AppError> {
        let client = self.pool.get().await?;
        let row = client.query_opt(SELECT_PROFILE, &[&session]).await?;
        Ok(row.as_ref().map(profile_from_row).unwrap_or_default())
    }

    async fn update(&self, session: &str, profile: Profile) -> Result<Profile, AppError> {
        // BIGINT holds every u32
        let age = i64::from(profile.age);
        let client = self.pool.get().await?;
        client
            .execute(
                "INSERT INTO healthai_profile (session_id, name, age, gender, allergies, contact) \
                 VALUES ($1, $2, $3, $4, $5, $6) \
                 ON CONFLICT (session_id) DO UPDATE SET \
                 name = EXCLUDED.name, age = EXCLUDED.age, gender = EXCLUDED.gender, \
                 allergies = EXCLUDED.allergies, contact = EXCLUDED.contact",
                &[
                    &session,
                    &profile.name,
                    &age,
                    &profile.gender.as_str(),
                    &profile.allergies,
                    &profile.contact,
                ],
            )
            .await?;
        Ok(profile)
    }

    async fn ping(&self) -> Result<(), AppError> {
        let client = self.pool.get().await?;
        client.query_one("SELECT 1", &[]).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
