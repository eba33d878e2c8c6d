use folio_shared::clients::db::create_pool;
use folio_store::config::AppConfig;
use folio_store::sql;

fn main() -> anyhow::Result<()> {
    folio_shared::observability::init_tracing("folio-store");
    let metrics = folio_shared::observability::init_metrics()?;

    let config = AppConfig::load()?;
    let pool = create_pool(&config.database_url, &config.pool_options())?;

    let mut conn = pool.get()?;
    sql::apply_schema(&mut conn)?;

    for (table, rows) in sql::table_counts(&mut conn)? {
        tracing::info!(table, rows, "table ready");
    }

    tracing::info!(database_url = %config.database_url, "folio store initialised");
    tracing::debug!(metrics = %metrics.render(), "metrics snapshot");

    Ok(())
}
