//! Role catalog.

use crate::error::ApiResult;
use crate::model::{builtin_roles, Role};

use super::ApiClient;

impl ApiClient {
    /// Role catalog for the Job Persona step.
    ///
    /// `GET /roles` is short-circuited to the built-in catalog until the
    /// backend table is populated; the call keeps the service shape so the
    /// cutover is a body swap.
    pub async fn list_roles(&self) -> ApiResult<Vec<Role>> {
        Ok(builtin_roles())
    }
}
