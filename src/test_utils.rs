//! Test utilities with lazy testcontainers support
//!
//! The PostgreSQL container is started on first use and shared across tests.
//! Each test gets its own freshly migrated database inside that container.

pub mod containers {
    use testcontainers::{runners::AsyncRunner, ContainerAsync};
    use testcontainers_modules::postgres::Postgres;
    use tokio::sync::OnceCell;

    /// Running container and the server URL (without a database name)
    static POSTGRES: OnceCell<(ContainerAsync<Postgres>, String)> = OnceCell::const_new();

    /// Get or start a PostgreSQL container (lazy initialization)
    pub async fn postgres_server_url() -> &'static str {
        let (_, url) = POSTGRES
            .get_or_init(|| async {
                let container = Postgres::default()
                    .with_user("userhub")
                    .with_password("userhub_test")
                    .with_db_name("userhub")
                    .start()
                    .await
                    .expect("Failed to start PostgreSQL container");

                let host = container.get_host().await.unwrap();
                let port = container.get_host_port_ipv4(5432).await.unwrap();
                let url = format!("postgres://userhub:userhub_test@{}:{}", host, port);

                (container, url)
            })
            .await;

        url
    }
}

pub mod database {
    use sqlx::{postgres::PgPoolOptions, PgPool};

    use super::containers;
    use crate::{db, utils::crypto::generate_secure_token};

    /// Create an isolated, migrated database and return a pool for it
    pub async fn test_pool() -> PgPool {
        let server = containers::postgres_server_url().await;
        let name = format!("userhub_{}", generate_secure_token(16).to_lowercase());

        let admin = PgPoolOptions::new()
            .max_connections(1)
            .connect(&format!("{}/userhub", server))
            .await
            .expect("Failed to connect to test server");
        sqlx::query(&format!("CREATE DATABASE {}", name))
            .execute(&admin)
            .await
            .expect("Failed to create test database");
        admin.close().await;

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&format!("{}/{}", server, name))
            .await
            .expect("Failed to connect to test database");

        db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        pool
    }
}
