use super::{PostStore, StoreError};
use crate::models::{NewPost, Post};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::{Map, Value};
use sqlx::mysql::MySqlRow;
use sqlx::{Column, FromRow, MySqlPool, Row, TypeInfo, ValueRef};

const CORE_COLUMNS: [&str; 3] = ["id", "title", "body"];

/// `PostStore` over a MySQL connection pool
#[derive(Clone)]
pub struct MySqlPostStore {
    pool: MySqlPool,
}

impl MySqlPostStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Create the `posts` table if it does not exist yet
    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations completed successfully");
        Ok(())
    }
}

#[async_trait]
impl PostStore for MySqlPostStore {
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT *
            FROM posts
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn create_post(&self, new_post: &NewPost) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO posts (title, body)
            VALUES (?, ?)
            "#,
        )
        .bind(new_post.title.as_deref())
        .bind(new_post.body.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

impl<'r> FromRow<'r, MySqlRow> for Post {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        let mut extra = Map::new();
        for column in row.columns() {
            if CORE_COLUMNS.contains(&column.name()) {
                continue;
            }
            extra.insert(
                column.name().to_string(),
                column_to_json(row, column.ordinal())?,
            );
        }

        Ok(Post {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            body: row.try_get("body")?,
            extra,
        })
    }
}

/// Decode one column of an arbitrary type into JSON
fn column_to_json(row: &MySqlRow, index: usize) -> Result<Value, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let type_name = raw.type_info().name().to_string();

    let value = match type_name.as_str() {
        "BOOLEAN" => Value::from(row.try_get_unchecked::<i64, _>(index)? != 0),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => {
            Value::from(row.try_get_unchecked::<i64, _>(index)?)
        }
        "YEAR" => Value::from(row.try_get_unchecked::<u64, _>(index)?),
        name if name.ends_with(" UNSIGNED") => {
            Value::from(row.try_get_unchecked::<u64, _>(index)?)
        }
        "FLOAT" => Value::from(f64::from(row.try_get_unchecked::<f32, _>(index)?)),
        "DOUBLE" => Value::from(row.try_get_unchecked::<f64, _>(index)?),
        "TIMESTAMP" => {
            Value::String(row.try_get_unchecked::<DateTime<Utc>, _>(index)?.to_rfc3339())
        }
        "DATETIME" => Value::String(
            row.try_get_unchecked::<NaiveDateTime, _>(index)?
                .format("%Y-%m-%dT%H:%M:%S%.f")
                .to_string(),
        ),
        "DATE" => Value::String(row.try_get_unchecked::<NaiveDate, _>(index)?.to_string()),
        "TIME" => Value::String(row.try_get_unchecked::<NaiveTime, _>(index)?.to_string()),
        "JSON" => {
            let text = text_lossy(row, index)?;
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        }
        _ => Value::String(text_lossy(row, index)?),
    };

    Ok(value)
}

fn text_lossy(row: &MySqlRow, index: usize) -> Result<String, sqlx::Error> {
    let bytes = row.try_get_unchecked::<Vec<u8>, _>(index)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
