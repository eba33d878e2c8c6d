use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

#[derive(Debug, Clone)]
pub struct PoolOptions {
    pub max_size: u32,
    pub busy_timeout: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_size: 8,
            busy_timeout: Duration::from_secs(5),
        }
    }
}

/// Applied to every connection the pool hands out. SQLite keeps
/// `foreign_keys` off unless each connection opts in.
#[derive(Debug, Clone, Copy)]
struct ConnectionPragmas {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        configure_connection(conn, self.busy_timeout).map_err(diesel::r2d2::Error::QueryError)
    }
}

pub fn configure_connection(
    conn: &mut SqliteConnection,
    busy_timeout: Duration,
) -> diesel::QueryResult<()> {
    conn.batch_execute(&format!(
        "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
        busy_timeout.as_millis()
    ))
}

pub fn create_pool(database_url: &str, options: &PoolOptions) -> Result<DbPool, diesel::r2d2::PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(options.max_size)
        .test_on_check_out(true)
        .connection_customizer(Box::new(ConnectionPragmas {
            busy_timeout: options.busy_timeout,
        }))
        .build(manager)?;

    tracing::info!(database_url, max_size = options.max_size, "database connection pool created");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::prelude::*;
    use diesel::sql_types::Integer;

    #[derive(QueryableByName)]
    struct Pragma {
        #[diesel(sql_type = Integer)]
        foreign_keys: i32,
    }

    #[test]
    fn pooled_connections_enforce_foreign_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.db");
        let pool = create_pool(path.to_str().unwrap(), &PoolOptions::default()).unwrap();

        let mut conn = pool.get().unwrap();
        let pragma = diesel::sql_query("PRAGMA foreign_keys")
            .get_result::<Pragma>(&mut conn)
            .unwrap();
        assert_eq!(pragma.foreign_keys, 1);
    }
}
