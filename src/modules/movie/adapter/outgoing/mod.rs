pub mod movie_query_postgres;
pub mod movie_repository_postgres;
pub mod sea_orm_entity;

pub use movie_query_postgres::MovieQueryPostgres;
pub use movie_repository_postgres::MovieRepositoryPostgres;
