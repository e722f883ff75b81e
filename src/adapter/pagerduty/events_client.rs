// adapter/pagerduty/events_client.rs

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, error};

use crate::domain::error::DispatchError;
use crate::domain::model::event::{EventRequest, EventResponse};
use crate::service::incident_dispatcher::EventTransport;

pub const PAGERDUTY_EVENTS_URL: &str = "https://events.pagerduty.com/v2/enqueue";

/// HTTP transport for the PagerDuty Events API v2.
///
/// One POST per event, JSON body, client default timeouts.
#[derive(Debug, Clone)]
pub struct PagerDutyEventsClient {
    client: Client,
    events_url: String,
}

impl PagerDutyEventsClient {
    pub fn new(events_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            events_url: events_url.into(),
        }
    }
}

#[async_trait]
impl EventTransport for PagerDutyEventsClient {
    async fn enqueue(&self, request: &EventRequest) -> Result<EventResponse, DispatchError> {
        debug!(url = %self.events_url, event = %request.redacted(), "POST enqueue");

        let resp = self
            .client
            .post(&self.events_url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await?;
            error!("PagerDuty API error status: {}, body: {}", status, body);
            return Err(DispatchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.json::<EventResponse>().await?)
    }
}
