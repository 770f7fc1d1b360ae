//! Pagination query parsing helpers.

use salvo::{Request, prelude::StatusError};

use crate::extensions::*;

/// Page number used when the query omits `pageNumber`.
pub(crate) const DEFAULT_PAGE_NUMBER: usize = 1;

/// Page size used when the query omits `pageSize`.
pub(crate) const DEFAULT_PAGE_SIZE: usize = 3;

/// Parse the `pageNumber`/`pageSize` query parameters, applying defaults and
/// rejecting values below 1.
pub(crate) trait PaginationExt {
    fn page_number(&self) -> Result<usize, StatusError>;
    fn page_size(&self) -> Result<usize, StatusError>;
}

impl PaginationExt for Request {
    fn page_number(&self) -> Result<usize, StatusError> {
        parse_page_param(
            self.query::<String>("pageNumber"),
            "pageNumber",
            DEFAULT_PAGE_NUMBER,
        )
    }

    fn page_size(&self) -> Result<usize, StatusError> {
        parse_page_param(
            self.query::<String>("pageSize"),
            "pageSize",
            DEFAULT_PAGE_SIZE,
        )
    }
}

fn parse_page_param(
    value: Option<String>,
    name: &str,
    default: usize,
) -> Result<usize, StatusError> {
    let value = value
        .map(|value| value.parse::<usize>())
        .transpose()
        .or_400(&format!("could not parse \"{name}\" query parameter"))?
        .unwrap_or(default);

    if value < 1 {
        return Err(StatusError::bad_request()
            .brief(format!("\"{name}\" must be greater than or equal to 1")));
    }

    Ok(value)
}
