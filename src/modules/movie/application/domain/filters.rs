use serde::Serialize;

pub const PAGE_MAX: u32 = 10_000_000;
pub const PAGE_SIZE_MAX: u32 = 100;
pub const PAGE_SIZE_DEFAULT: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    Title,
    Year,
    Runtime,
}

impl SortField {
    /// Parses `field` or `-field` from the sort safelist.
    pub fn parse(raw: &str) -> Option<(Self, bool)> {
        let (name, descending) = match raw.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (raw, false),
        };

        let field = match name {
            "id" => Self::Id,
            "title" => Self::Title,
            "year" => Self::Year,
            "runtime" => Self::Runtime,
            _ => return None,
        };
        Some((field, descending))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub page: u32,
    pub page_size: u32,
    pub sort: SortField,
    pub descending: bool,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE_DEFAULT,
            sort: SortField::Id,
            descending: false,
        }
    }
}

impl Filters {
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }
}

/// Pagination details for a list response. Empty when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct PageMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_records: Option<u64>,
}

impl PageMetadata {
    pub fn calculate(total_records: u64, page: u32, page_size: u32) -> Self {
        if total_records == 0 {
            return Self::default();
        }

        Self {
            current_page: Some(page),
            page_size: Some(page_size),
            first_page: Some(1),
            last_page: Some(total_records.div_ceil(u64::from(page_size))),
            total_records: Some(total_records),
        }
    }
}
