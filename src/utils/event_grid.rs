use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::EventGridConfig;
use crate::errors::PublishError;
use crate::models::event::EmployeeEvent;

const SAS_KEY_HEADER: &str = "aeg-sas-key";

/// Topic that announces employee changes to other systems. Delivery is
/// best-effort: nothing ties a publish to the store write that preceded it.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(
        &self,
        subject: &str,
        event_type: &str,
        data_version: &str,
        payload: &str,
    ) -> Result<(), PublishError>;
}

pub struct EventGridPublisher {
    client: Client,
    endpoint: Url,
    access_key: String,
}

impl EventGridPublisher {
    pub fn new(config: &EventGridConfig) -> Result<Self, PublishError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            access_key: config.access_key.clone(),
        })
    }
}

#[async_trait]
impl EventPublisher for EventGridPublisher {
    async fn publish(
        &self,
        subject: &str,
        event_type: &str,
        data_version: &str,
        payload: &str,
    ) -> Result<(), PublishError> {
        let event = EmployeeEvent::new(subject, event_type, data_version, payload);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(SAS_KEY_HEADER, &self.access_key)
            .json(&[event])
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(PublishError::Rejected { status, body })
        }
    }
}
