// src/modules/movie/adapter/outgoing/movie_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    Select,
};
use std::sync::Arc;

use super::movie_repository_postgres::model_to_movie;
use crate::modules::movie::adapter::outgoing::sea_orm_entity::movies::{self, Column, Entity};
use crate::modules::movie::application::domain::entities::Movie;
use crate::modules::movie::application::domain::filters::{Filters, SortField};
use crate::modules::movie::application::ports::outgoing::{
    MovieListFilter, MoviePage, MovieQuery, MovieQueryError,
};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct MovieQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MovieQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieQuery for MovieQueryPostgres {
    async fn get_by_id(&self, id: i64) -> Result<Option<Movie>, MovieQueryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_movie)
            .transpose()
    }

    async fn list(
        &self,
        filter: MovieListFilter,
        filters: Filters,
    ) -> Result<MoviePage, MovieQueryError> {
        let mut query = Entity::find();

        // Case-insensitive substring match. LOWER + LIKE keeps this portable.
        if let Some(ref title) = filter.title {
            let pattern = format!("%{}%", escape_like(&title.to_lowercase()));
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(Column::Title)))
                    .like(LikeExpr::new(pattern).escape('\\')),
            );
        }

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let rows = apply_sort(query, &filters)
            .offset(filters.offset())
            .limit(filters.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = rows
            .into_iter()
            .map(to_movie)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MoviePage { items, total })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Orders by the requested column, then by id ascending so pages are stable.
fn apply_sort(query: Select<Entity>, filters: &Filters) -> Select<Entity> {
    let column = match filters.sort {
        SortField::Id => Column::Id,
        SortField::Title => Column::Title,
        SortField::Year => Column::Year,
        SortField::Runtime => Column::Runtime,
    };

    let query = if filters.descending {
        query.order_by_desc(column)
    } else {
        query.order_by_asc(column)
    };

    if filters.sort == SortField::Id {
        query
    } else {
        query.order_by_asc(Column::Id)
    }
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn to_movie(model: movies::Model) -> Result<Movie, MovieQueryError> {
    model_to_movie(model).map_err(|e| MovieQueryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> MovieQueryError {
    MovieQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
