use super::entities::NewMovie;
use super::filters::{Filters, SortField, PAGE_MAX, PAGE_SIZE_MAX};
use super::runtime::Runtime;
use crate::shared::validation::{unique, ValidationErrors};

pub const TITLE_MAX_BYTES: usize = 500;
// First commercial film screening
pub const YEAR_MIN: i32 = 1888;
pub const GENRES_MAX: usize = 5;

/// Movie fields exactly as the client sent them.
#[derive(Debug, Clone, Default)]
pub struct MovieDraft {
    pub title: String,
    pub year: Option<i32>,
    pub runtime: Option<String>,
    pub genres: Vec<String>,
}

pub fn validate_title(errors: &mut ValidationErrors, title: &str) {
    if title.trim().is_empty() {
        errors.add("title", "TITLE_REQUIRED", "must be provided");
    } else if title.len() > TITLE_MAX_BYTES {
        errors.add(
            "title",
            "TITLE_TOO_LONG",
            format!("must not be more than {TITLE_MAX_BYTES} bytes long"),
        );
    }
}

pub fn validate_year(errors: &mut ValidationErrors, year: Option<i32>, current_year: i32) {
    match year {
        None => errors.add("year", "YEAR_REQUIRED", "must be provided"),
        Some(y) if y < YEAR_MIN => errors.add(
            "year",
            "YEAR_TOO_EARLY",
            format!("must be greater than or equal to {YEAR_MIN}"),
        ),
        Some(y) if y > current_year => {
            errors.add("year", "YEAR_IN_FUTURE", "must not be in the future")
        }
        Some(_) => {}
    }
}

pub fn parse_runtime(errors: &mut ValidationErrors, runtime: Option<&str>) -> Option<Runtime> {
    let Some(raw) = runtime else {
        errors.add("runtime", "INVALID_RUNTIME_FORMAT", "must be provided");
        return None;
    };

    match raw.parse::<Runtime>() {
        Ok(runtime) => Some(runtime),
        Err(_) => {
            errors.add(
                "runtime",
                "INVALID_RUNTIME_FORMAT",
                "must be a positive number of minutes in the form \"<n> mins\"",
            );
            None
        }
    }
}

pub fn validate_genres(errors: &mut ValidationErrors, genres: &[String]) {
    if genres.is_empty() {
        errors.add("genres", "GENRES_REQUIRED", "must contain at least 1 genre");
    } else if genres.iter().any(|g| g.trim().is_empty()) {
        errors.add("genres", "GENRE_EMPTY", "must not contain empty values");
    } else if genres.len() > GENRES_MAX {
        errors.add(
            "genres",
            "GENRES_TOO_MANY",
            format!("must not contain more than {GENRES_MAX} genres"),
        );
    } else if !unique(genres) {
        errors.add("genres", "GENRES_DUPLICATE", "must not contain duplicate values");
    }
}

/// Checks every field and returns either a storable movie or all failures at once.
///
/// `current_year` is passed in so the check does not depend on the clock.
pub fn validate_movie(draft: MovieDraft, current_year: i32) -> Result<NewMovie, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    validate_title(&mut errors, &draft.title);
    validate_year(&mut errors, draft.year, current_year);
    let runtime = parse_runtime(&mut errors, draft.runtime.as_deref());
    validate_genres(&mut errors, &draft.genres);

    match (runtime, draft.year, errors.is_empty()) {
        (Some(runtime), Some(year), true) => Ok(NewMovie {
            title: draft.title.trim().to_string(),
            year,
            runtime,
            genres: draft.genres,
        }),
        _ => Err(errors),
    }
}

/// Raw list parameters; `None` means "use the default".
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort: Option<String>,
}

pub fn validate_filters(params: &ListParams) -> Result<Filters, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut filters = Filters::default();

    if let Some(page) = params.page {
        match u32::try_from(page) {
            Ok(p) if (1..=PAGE_MAX).contains(&p) => filters.page = p,
            _ => errors.add(
                "page",
                "INVALID_PAGE",
                format!("must be between 1 and {PAGE_MAX}"),
            ),
        }
    }

    if let Some(page_size) = params.page_size {
        match u32::try_from(page_size) {
            Ok(s) if (1..=PAGE_SIZE_MAX).contains(&s) => filters.page_size = s,
            _ => errors.add(
                "page_size",
                "INVALID_PAGE_SIZE",
                format!("must be between 1 and {PAGE_SIZE_MAX}"),
            ),
        }
    }

    if let Some(sort) = params.sort.as_deref() {
        match SortField::parse(sort) {
            Some((field, descending)) => {
                filters.sort = field;
                filters.descending = descending;
            }
            None => errors.add("sort", "INVALID_SORT", "invalid sort value"),
        }
    }

    errors.into_result().map(|_| filters)
}
