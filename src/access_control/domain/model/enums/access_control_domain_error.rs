use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessControlDomainError {
    #[error("authority id is invalid; use a positive integer")]
    InvalidAuthorityId,

    #[error("policy path is invalid")]
    InvalidPolicyPath,

    #[error("policy method is invalid")]
    InvalidPolicyMethod,

    #[error("policy filter is invalid; field index and values must fit columns v0..v5")]
    InvalidPolicyFilter,

    #[error("policy rule belongs to another authority")]
    PolicySubjectMismatch,

    #[error("policy rules were rejected by the store; duplicated api rules")]
    PolicyInsertRejected,

    #[error("casbin enforcer is unavailable")]
    EnforcerUnavailable,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
