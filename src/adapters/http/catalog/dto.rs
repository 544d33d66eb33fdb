//! Query-string DTOs for catalog endpoints.

use serde::Deserialize;

use crate::domain::foundation::{PageRequest, ValidationError, DEFAULT_PAGE_SIZE};

/// `?page=&size=`; both optional.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PageParams {
    pub fn to_request(self) -> Result<PageRequest, ValidationError> {
        PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

/// `?q=&page=&size=` for title search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl SearchParams {
    pub fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            size: self.size,
        }
    }
}
