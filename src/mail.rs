//! Outbound form relay client.
//!
//! Submissions are multipart POSTs carrying the configured access key plus
//! the message fields. The relay answers with JSON `{ success, message? }`.

use futures::future::BoxFuture;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::config::Config;
use crate::{flog_debug, flog_warn, Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Extra form fields sent verbatim after the required ones.
    pub extra: Vec<(String, String)>,
}

impl MailRequest {
    pub fn new(name: String, email: String, message: String) -> Self {
        Self {
            name,
            email,
            message,
            extra: Vec::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// The relay answered `success: false`, optionally with a reason.
    Rejected(Option<String>),
}

#[derive(Debug, Deserialize)]
struct RelayResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Decode a relay response body.
pub fn parse_response(body: &str) -> Result<Delivery> {
    let response: RelayResponse = serde_json::from_str(body)?;
    if response.success {
        Ok(Delivery::Sent)
    } else {
        Ok(Delivery::Rejected(
            response.message.filter(|m| !m.trim().is_empty()),
        ))
    }
}

/// User-facing classification of a finished submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailOutcome {
    Sent,
    Rejected(Option<String>),
    Unconfigured,
    Network(String),
}

impl MailOutcome {
    pub fn from_result(result: Result<Delivery>) -> Self {
        match result {
            Ok(Delivery::Sent) => MailOutcome::Sent,
            Ok(Delivery::Rejected(reason)) => MailOutcome::Rejected(reason),
            Err(Error::MissingAccessKey) => MailOutcome::Unconfigured,
            Err(e) => MailOutcome::Network(e.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MailOutcome::Sent)
    }

    /// Wording used by the homepage contact form.
    pub fn contact_notice(&self) -> String {
        match self {
            MailOutcome::Sent => "Thanks! Your message has been sent.".to_string(),
            MailOutcome::Rejected(Some(reason)) => reason.clone(),
            MailOutcome::Unconfigured => Error::MissingAccessKey.to_string(),
            MailOutcome::Rejected(None) => {
                "Something went wrong. Please try again later.".to_string()
            }
            MailOutcome::Network(_) => "Network error. Please try again.".to_string(),
        }
    }
}

/// Anything that can deliver a [`MailRequest`].
pub trait Mailer: Send + Sync {
    /// False when no credential is available; callers report this instead of
    /// submitting.
    fn is_configured(&self) -> bool;

    fn submit(&self, request: MailRequest) -> BoxFuture<'static, Result<Delivery>>;
}

#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    endpoint: String,
    access_key: Option<String>,
}

impl RelayClient {
    pub fn new(endpoint: impl Into<String>, access_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            access_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.effective_endpoint(),
            config.access_key().map(str::to_string),
        )
    }
}

impl Mailer for RelayClient {
    fn is_configured(&self) -> bool {
        self.access_key.is_some()
    }

    fn submit(&self, request: MailRequest) -> BoxFuture<'static, Result<Delivery>> {
        let http = self.http.clone();
        let endpoint = self.endpoint.clone();
        let access_key = self.access_key.clone();

        Box::pin(async move {
            let access_key = access_key.ok_or(Error::MissingAccessKey)?;
            flog_debug!(
                "RelayClient::submit endpoint={} from={} extra_fields={}",
                endpoint,
                request.email,
                request.extra.len()
            );

            let mut form = reqwest::multipart::Form::new()
                .text("access_key", access_key)
                .text("name", request.name)
                .text("email", request.email)
                .text("message", request.message);
            for (key, value) in request.extra {
                form = form.text(key, value);
            }

            let response = http
                .post(&endpoint)
                .header(ACCEPT, "application/json")
                .multipart(form)
                .send()
                .await?;
            let status = response.status();
            let body = response.text().await?;
            let delivery = parse_response(&body);
            if let Ok(Delivery::Rejected(reason)) = &delivery {
                flog_warn!("Relay rejected submission: status={} reason={:?}", status, reason);
            }
            delivery
        })
    }
}
