use roster_core::User;
use sqlx::{postgres::PgRow, Row};

/// No ORDER BY: rows come back in whatever order the store returns them.
pub const SELECT_ALL_USERS: &str = "SELECT id, name, email FROM users";

pub const INSERT_USER: &str = r#"
    INSERT INTO users (name, email)
    VALUES ($1, $2)
    RETURNING id, name, email
"#;

/// Parse a user from a database row
pub fn parse_user(row: &PgRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
    })
}
