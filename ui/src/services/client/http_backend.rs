use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{error, info, instrument};

use super::backend::DonorBackend;
use super::errors::{ClientError, ClientResult};
use super::types::{BloodGroup, Donor, DonorDetails, DonorId, DonorStatus, RpcResult};

/// Header carrying the signed-in operator principal
pub const PRINCIPAL_HEADER: &str = "x-principal";

/// JSON-RPC client for the donor service.
///
/// Each call is `POST {base_url}/rpc/{method}` with the positional
/// arguments as a JSON array.
#[derive(Clone)]
pub struct HttpDonorBackend {
    pub(crate) http_client: Client,
    base_url: String,
    principal: String,
}

impl HttpDonorBackend {
    pub fn new(base_url: &str, principal: &str, user_agent: &str) -> ClientResult<Self> {
        let http_client = Client::builder()
            .user_agent(user_agent.to_string())
            .build()
            .map_err(|e| ClientError::Network {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            principal: principal.to_string(),
        })
    }

    pub fn method_url(&self, method: &str) -> String {
        format!("{}/rpc/{}", self.base_url, method)
    }

    async fn call<R: DeserializeOwned>(&self, method: &str, args: Value) -> ClientResult<R> {
        info!("Calling {}", method);

        let response = self
            .http_client
            .post(self.method_url(method))
            .header(PRINCIPAL_HEADER, &self.principal)
            .json(&args)
            .send()
            .await
            .map_err(|e| ClientError::Network {
                message: format!("{} request failed: {}", method, e),
            })?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            error!("{} refused for principal {}", method, self.principal);
            return Err(ClientError::Unauthenticated);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("{} failed with HTTP {}: {}", method, status, body);
            return Err(ClientError::Http {
                operation: method.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<R>()
            .await
            .map_err(|e| ClientError::Serialization {
                message: format!("Failed to decode {} response: {}", method, e),
            })
    }

    /// Calls a method whose reply is an `ok`/`error` variant
    async fn call_fallible<R: DeserializeOwned>(&self, method: &str, args: Value) -> ClientResult<R> {
        let reply: RpcResult<R> = self.call(method, args).await?;
        reply.into_result().map_err(|message| {
            error!("{} rejected by service: {}", method, message);
            ClientError::rejected(method, message)
        })
    }
}

fn encode<T: Serialize>(value: &T) -> ClientResult<Value> {
    serde_json::to_value(value).map_err(|e| ClientError::Serialization {
        message: e.to_string(),
    })
}

#[async_trait(?Send)]
impl DonorBackend for HttpDonorBackend {
    #[instrument(skip(self), err)]
    async fn add_donor(&self, details: &DonorDetails) -> ClientResult<DonorId> {
        let args = json!([
            details.name,
            encode(&details.blood_group)?,
            details.phone_number
        ]);
        self.call_fallible("addDonor", args).await
    }

    #[instrument(skip(self), err)]
    async fn edit_donor(&self, id: DonorId, details: &DonorDetails) -> ClientResult<()> {
        let args = json!([
            id,
            details.name,
            encode(&details.blood_group)?,
            details.phone_number
        ]);
        self.call_fallible("editDonor", args).await
    }

    #[instrument(skip(self), err)]
    async fn delete_donor(&self, id: DonorId) -> ClientResult<()> {
        self.call_fallible("deleteDonor", json!([id])).await
    }

    async fn get_all_donors(&self) -> ClientResult<Vec<Donor>> {
        self.call("getAllDonors", json!([])).await
    }

    async fn get_donor(&self, id: DonorId) -> ClientResult<Donor> {
        self.call_fallible("getDonor", json!([id])).await
    }

    async fn get_donors_by_blood_group(&self, blood_group: BloodGroup) -> ClientResult<Vec<Donor>> {
        self.call("getDonorsByBloodGroup", json!([encode(&blood_group)?]))
            .await
    }

    async fn get_all_appointed_donors(&self) -> ClientResult<Vec<Donor>> {
        self.call("getAllAppointedDonors", json!([])).await
    }

    async fn get_all_temp_rejected_donors(&self) -> ClientResult<Vec<Donor>> {
        self.call("getAllTempRejectedDonors", json!([])).await
    }

    async fn get_all_permanently_rejected_donors(&self) -> ClientResult<Vec<Donor>> {
        self.call("getAllPermanentlyRejectedDonors", json!([])).await
    }

    #[instrument(skip(self), err)]
    async fn update_donor_status(&self, id: DonorId, new_status: &DonorStatus) -> ClientResult<()> {
        self.call_fallible("updateDonorStatus", json!([id, encode(new_status)?]))
            .await
    }

    #[instrument(skip(self), err)]
    async fn mark_donor_as_donated(&self, id: DonorId) -> ClientResult<()> {
        self.call_fallible("markDonorAsDonated", json!([id])).await
    }

    #[instrument(skip(self), err)]
    async fn mark_donor_as_not_donated(&self, id: DonorId) -> ClientResult<()> {
        self.call_fallible("markDonorAsNotDonated", json!([id])).await
    }

    #[instrument(skip(self), err)]
    async fn record_call(&self, id: DonorId) -> ClientResult<()> {
        self.call_fallible("recordCall", json!([id])).await
    }
}
