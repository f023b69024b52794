use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiCatalogDomainError {
    #[error("api id is invalid; use a positive integer")]
    InvalidApiId,

    #[error("api path is invalid; it must start with '/'")]
    InvalidApiPath,

    #[error("http method is invalid")]
    InvalidHttpMethod,

    #[error("api group is invalid")]
    InvalidApiGroup,

    #[error("pagination is invalid; page starts at 1 and page size is 1..500")]
    InvalidPagination,

    #[error("id list must not be empty")]
    InvalidIdList,

    #[error("invalid order column: {0}")]
    InvalidOrderColumn(String),

    #[error("an api with the same path and method already exists")]
    ApiAlreadyExists,

    #[error("api not found")]
    ApiNotFound,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
