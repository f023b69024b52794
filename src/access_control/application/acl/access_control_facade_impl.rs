use std::sync::Arc;

use async_trait::async_trait;

use crate::access_control::{
    domain::{
        model::{
            commands::{
                clear_policies_command::ClearPoliciesCommand,
                update_api_policies_command::UpdateApiPoliciesCommand,
            },
            enums::access_control_domain_error::AccessControlDomainError,
        },
        services::access_control_command_service::AccessControlCommandService,
    },
    interfaces::acl::access_control_facade::{AccessControlFacade, ApiPolicyRenameRequest},
};

/// Column holding the object (path) of a `p` rule; the action follows it.
const OBJECT_FIELD_INDEX: usize = 1;

pub struct AccessControlFacadeImpl {
    command_service: Arc<dyn AccessControlCommandService>,
}

impl AccessControlFacadeImpl {
    pub fn new(command_service: Arc<dyn AccessControlCommandService>) -> Self {
        Self { command_service }
    }
}

#[async_trait]
impl AccessControlFacade for AccessControlFacadeImpl {
    async fn clear_api_policies(
        &self,
        path: String,
        method: String,
    ) -> Result<bool, AccessControlDomainError> {
        let command = ClearPoliciesCommand::new(OBJECT_FIELD_INDEX, vec![path, method])?;
        self.command_service.handle_clear_policies(command).await
    }

    async fn rename_api_policies(
        &self,
        request: ApiPolicyRenameRequest,
    ) -> Result<(), AccessControlDomainError> {
        let command = UpdateApiPoliciesCommand::new(
            request.old_path,
            request.new_path,
            request.old_method,
            request.new_method,
        )?;
        self.command_service.handle_update_api_policies(command).await
    }
}
