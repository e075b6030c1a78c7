use aws_sdk_lambda::Client as LambdaClient;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::{FunctionCode, Runtime, State};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::errors::{LocalStackError, LocalStackResult};

/// How often and how long to poll for a newly created function to leave
/// the Pending state. LocalStack provisions function containers
/// asynchronously, so a create immediately followed by an invoke can race.
const ACTIVE_POLL_INTERVAL: Duration = Duration::from_millis(500);
const ACTIVE_POLL_ATTEMPTS: u32 = 40;

/// Function operations against the emulated Lambda endpoint.
#[derive(Debug, Clone)]
pub struct LambdaService {
    client: LambdaClient,
}

impl LambdaService {
    pub fn new(client: LambdaClient) -> Self {
        Self { client }
    }

    /// Access the underlying SDK client for operations not wrapped here.
    pub fn client(&self) -> &LambdaClient {
        &self.client
    }

    /// Register a function from a deployment package.
    ///
    /// `runtime` takes the AWS runtime identifier (e.g. `python3.11`);
    /// LocalStack accepts any syntactically valid `role_arn`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function already exists or the package is
    /// rejected.
    pub async fn create_function(
        &self,
        name: &str,
        handler: &str,
        runtime: &str,
        role_arn: &str,
        zip_bytes: Vec<u8>,
    ) -> LocalStackResult<()> {
        self.client
            .create_function()
            .function_name(name)
            .handler(handler)
            .runtime(Runtime::from(runtime))
            .role(role_arn)
            .code(FunctionCode::builder().zip_file(Blob::new(zip_bytes)).build())
            .send()
            .await?;
        info!("Created function {}", name);
        Ok(())
    }

    /// Invoke a function synchronously with a JSON payload and return the
    /// raw response payload bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the invoke call fails, or if the function ran
    /// but reported an execution error (the error payload is included in
    /// the message rather than silently returned as a success body).
    pub async fn invoke(
        &self,
        name: &str,
        payload: &serde_json::Value,
    ) -> LocalStackResult<Vec<u8>> {
        let body = serde_json::to_vec(payload)?;
        let response = self
            .client
            .invoke()
            .function_name(name)
            .payload(Blob::new(body))
            .send()
            .await?;

        if let Some(function_error) = response.function_error() {
            let detail = response
                .payload()
                .map(|blob| String::from_utf8_lossy(blob.as_ref()).into_owned())
                .unwrap_or_default();
            return Err(LocalStackError::Aws(format!(
                "Function {name} failed ({function_error}): {detail}"
            )));
        }

        let payload = response
            .payload()
            .map(|blob| blob.as_ref().to_vec())
            .unwrap_or_default();
        debug!("Invoked {} ({} response bytes)", name, payload.len());
        Ok(payload)
    }

    /// Grant an external principal permission to invoke a function.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement ID is already taken or the
    /// function does not exist.
    pub async fn add_invoke_permission(
        &self,
        name: &str,
        statement_id: &str,
        principal: &str,
    ) -> LocalStackResult<()> {
        self.client
            .add_permission()
            .function_name(name)
            .statement_id(statement_id)
            .action("lambda:InvokeFunction")
            .principal(principal)
            .send()
            .await?;
        info!("Granted invoke on {} to {}", name, principal);
        Ok(())
    }

    /// Block until a function reports the Active state.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be described or does not
    /// become Active within the polling window.
    pub async fn wait_until_active(&self, name: &str) -> LocalStackResult<()> {
        for _ in 0..ACTIVE_POLL_ATTEMPTS {
            let response = self.client.get_function().function_name(name).send().await?;
            let state = response.configuration().and_then(|c| c.state());
            match state {
                Some(State::Active) => return Ok(()),
                other => {
                    warn!("Function {} not active yet (state: {:?})", name, other);
                    tokio::time::sleep(ACTIVE_POLL_INTERVAL).await;
                }
            }
        }
        Err(LocalStackError::Aws(format!(
            "Function {name} did not become active within the polling window"
        )))
    }
}
