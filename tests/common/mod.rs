#![allow(dead_code)]

use inversiones::configuration::{get_configuration, DatabaseSettings, Settings};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::time::Duration;

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub settings: Settings,
    pub client: reqwest::Client,
}

async fn spawn_with_pool(pool: PgPool, settings: Settings) -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = inversiones::startup::run(listener, pool.clone(), settings.clone())
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    TestApp {
        address,
        db_pool: pool,
        settings,
        client: reqwest::Client::new(),
    }
}

/// Server backed by a fresh database. `None` when Postgres is unreachable.
pub async fn spawn_app() -> Option<TestApp> {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    Some(spawn_with_pool(connection_pool, configuration).await)
}

/// Server whose pool never connects. Covers everything that stays off
/// the store: admin login, token checks, role gates on the admin account.
pub async fn spawn_app_without_database() -> TestApp {
    let configuration = get_configuration().expect("Failed to get configuration");
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(1))
        .connect_lazy(&configuration.database.connection_string())
        .expect("Failed to parse connection string");

    spawn_with_pool(pool, configuration).await
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/token"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn token_for(&self, username: &str, password: &str) -> String {
        let response = self.login(username, password).await;
        assert_eq!(200, response.status().as_u16(), "login failed for {username}");

        let body: Value = response.json().await.expect("token body");
        body["access_token"]
            .as_str()
            .expect("access_token present")
            .to_string()
    }

    pub async fn admin_token(&self) -> String {
        let auth = self.settings.auth.clone();
        self.token_for(&auth.admin_username, &auth.admin_password)
            .await
    }

    /// Registers a user and returns its id.
    pub async fn register(&self, name: &str, password: &str) -> i32 {
        let response = self
            .client
            .post(self.url("/items"))
            .json(&json!({
                "nombre": name,
                "correo": format!("{name}@example.com"),
                "contraseña": password
            }))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(201, response.status().as_u16(), "registration failed for {name}");

        let body: Value = response.json().await.expect("item body");
        body["item"]["id"].as_i64().expect("item id") as i32
    }

    /// Registers a user and logs them in.
    pub async fn user(&self, name: &str) -> (i32, String) {
        let id = self.register(name, "secret").await;
        let token = self.token_for(name, "secret").await;
        (id, token)
    }

    pub async fn get(&self, path: &str, token: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn put(&self, path: &str, token: &str, body: Value) -> reqwest::Response {
        self.client
            .put(self.url(path))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete(&self, path: &str, token: &str) -> reqwest::Response {
        self.client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn create_inversion(&self, token: &str, body: Value) -> reqwest::Response {
        self.client
            .post(self.url("/inversiones"))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}
