use roster_core::{NewUser, User};
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::queries::{self, INSERT_USER, SELECT_ALL_USERS};

/// The persistence client: one pool handle, opened at startup and closed at shutdown.
pub struct UserDatabase {
    pub pool: PgPool,
}

impl UserDatabase {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Builds the pool without opening a connection; the first query connects.
    pub fn connect_lazy(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new().connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    pub async fn find_all_users(&self) -> Result<Vec<User>, sqlx::Error> {
        let rows = sqlx::query(SELECT_ALL_USERS).fetch_all(&self.pool).await?;
        rows.iter().map(queries::parse_user).collect()
    }

    pub async fn insert_user(&self, new_user: &NewUser) -> Result<User, sqlx::Error> {
        let row = sqlx::query(INSERT_USER)
            .bind(&new_user.name)
            .bind(&new_user.email)
            .fetch_one(&self.pool)
            .await?;

        queries::parse_user(&row)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
