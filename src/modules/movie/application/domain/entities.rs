use chrono::{DateTime, Utc};
use serde::Serialize;

use super::runtime::Runtime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub runtime: Runtime,
    pub genres: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub version: i32,
}

/// A validated movie that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub runtime: Runtime,
    pub genres: Vec<String>,
}
