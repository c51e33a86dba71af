//! In-memory store seeded with a small, known data set

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};

use super::sqlite::open;
use crate::infrastructure::user::{Argon2Hasher, PasswordHasher};

const SCHEMA: &str = r#"
CREATE TABLE state (
    state_id INTEGER PRIMARY KEY,
    state_name TEXT NOT NULL,
    population INTEGER NOT NULL
);

CREATE TABLE district (
    district_id INTEGER PRIMARY KEY AUTOINCREMENT,
    district_name TEXT NOT NULL,
    state_id INTEGER NOT NULL REFERENCES state (state_id),
    cases INTEGER NOT NULL,
    cured INTEGER NOT NULL,
    active INTEGER NOT NULL,
    deaths INTEGER NOT NULL
);

CREATE TABLE user (
    username TEXT PRIMARY KEY,
    password TEXT NOT NULL
);

INSERT INTO state (state_id, state_name, population) VALUES
    (1, 'Andaman and Nicobar Islands', 380581),
    (2, 'Andhra Pradesh', 49386799),
    (3, 'Arunachal Pradesh', 1383727);

INSERT INTO district (district_name, state_id, cases, cured, active, deaths) VALUES
    ('Nicobars', 1, 34, 32, 2, 0),
    ('North and Middle Andaman', 1, 37, 37, 0, 0),
    ('Anantapur', 2, 53405, 52965, 0, 440);
"#;

pub const TEST_USERNAME: &str = "christopher_phillips";
pub const TEST_PASSWORD: &str = "christy@123";

/// Schema plus three states (state 3 has no districts) and one user
pub async fn seeded_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
    let pool = open(options).await.unwrap();

    sqlx::raw_sql(SCHEMA).execute(&pool).await.unwrap();

    let hash = Argon2Hasher::new().hash(TEST_PASSWORD).unwrap();
    sqlx::query("INSERT INTO user (username, password) VALUES (?, ?)")
        .bind(TEST_USERNAME)
        .bind(hash)
        .execute(&pool)
        .await
        .unwrap();

    pool
}
