use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Set};
use std::sync::Arc;

use crate::modules::movie::adapter::outgoing::sea_orm_entity::movies::{
    self, ActiveModel, Entity,
};
use crate::modules::movie::application::domain::entities::{Movie, NewMovie};
use crate::modules::movie::application::domain::runtime::Runtime;
use crate::modules::movie::application::ports::outgoing::{MovieRepository, MovieRepositoryError};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct MovieRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MovieRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieRepository for MovieRepositoryPostgres {
    async fn insert(&self, movie: NewMovie) -> Result<Movie, MovieRepositoryError> {
        let genres = serde_json::to_value(&movie.genres)
            .map_err(|e| MovieRepositoryError::SerializationError(e.to_string()))?;

        let model = ActiveModel {
            id: NotSet,
            title: Set(movie.title),
            year: Set(movie.year),
            runtime: Set(movie.runtime.minutes()),
            genres: Set(genres),
            created_at: Set(Utc::now().fixed_offset()),
            version: Set(1),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_movie(inserted)
    }

    async fn delete(&self, id: i64) -> Result<(), MovieRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(MovieRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn model_to_movie(model: movies::Model) -> Result<Movie, MovieRepositoryError> {
    let runtime = Runtime::from_minutes(model.runtime)
        .map_err(|e| MovieRepositoryError::SerializationError(e.to_string()))?;
    let genres: Vec<String> = serde_json::from_value(model.genres)
        .map_err(|e| MovieRepositoryError::SerializationError(e.to_string()))?;

    Ok(Movie {
        id: model.id,
        title: model.title,
        year: model.year,
        runtime,
        genres,
        created_at: model.created_at.with_timezone(&Utc),
        version: model.version,
    })
}

fn map_db_err(e: DbErr) -> MovieRepositoryError {
    MovieRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
