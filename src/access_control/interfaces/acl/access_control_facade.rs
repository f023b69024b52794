use async_trait::async_trait;

use crate::access_control::domain::model::enums::access_control_domain_error::AccessControlDomainError;

#[derive(Clone, Debug)]
pub struct ApiPolicyRenameRequest {
    pub old_path: String,
    pub new_path: String,
    pub old_method: String,
    pub new_method: String,
}

/// Entry point for other bounded contexts that need to keep policy rows in
/// line with their own records.
#[async_trait]
pub trait AccessControlFacade: Send + Sync {
    /// Removes every rule granting `method` on `path`. Returns whether any
    /// rule was removed.
    async fn clear_api_policies(
        &self,
        path: String,
        method: String,
    ) -> Result<bool, AccessControlDomainError>;

    async fn rename_api_policies(
        &self,
        request: ApiPolicyRenameRequest,
    ) -> Result<(), AccessControlDomainError>;
}
