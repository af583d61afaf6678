use std::{fmt, sync::Arc, time::Duration};

use reqwest::Url;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::error::ClientError;
use crate::operation::Operation;
use crate::params::{ParamValue, RequestParams};
use crate::transport::{HttpTransport, Transport};

pub const API_ENDPOINT: &str = "http://www.ts10000.net/mobile";

/// Report interval, in minutes, sent with every new location-report window.
pub const LOCATION_REPORT_INTERVAL_MINUTES: i64 = 15;

/// Client for the TrustSec student phone API.
///
/// Each operation sends the stored credentials plus its own fields as query
/// parameters of a single GET and returns the decoded JSON body as-is.
/// Application-level failures reported inside the body are not inspected; see
/// [`crate::ResponseExt`] for opt-in interpretation.
#[derive(Clone)]
pub struct DeviceApiClient {
    credentials: Credentials,
    endpoint: String,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for DeviceApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceApiClient")
            .field("credentials", &self.credentials)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl DeviceApiClient {
    /// Build a client talking to [`API_ENDPOINT`] over a fresh [`HttpTransport`].
    pub fn new(login_name: impl AsRef<str>, password: impl AsRef<str>) -> Result<Self, ClientError> {
        let credentials = Credentials::new(login_name, password)?;
        Ok(Self::with_transport(
            credentials,
            Arc::new(HttpTransport::new()),
        ))
    }

    pub fn with_transport(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            credentials,
            endpoint: API_ENDPOINT.to_string(),
            transport,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let credentials = Credentials::new(&config.login_name, &config.password)?;
        let transport = match config.timeout_ms {
            Some(timeout_ms) => HttpTransport::with_timeout(Duration::from_millis(timeout_ms))?,
            None => HttpTransport::new(),
        };
        Self::with_transport(credentials, Arc::new(transport)).with_endpoint(&config.endpoint)
    }

    /// Point the client at a different API root, e.g. `http://host/mobile`.
    pub fn with_endpoint(mut self, endpoint: impl AsRef<str>) -> Result<Self, ClientError> {
        let endpoint = endpoint.as_ref().trim();
        let invalid = |reason: String| ClientError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason,
        };
        let url = Url::parse(endpoint).map_err(|error| invalid(error.to_string()))?;
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed".to_string()));
        }
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn params(&self) -> RequestParams {
        RequestParams::with_credentials(&self.credentials)
    }

    async fn dispatch(
        &self,
        operation: Operation,
        params: RequestParams,
    ) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.endpoint, operation.path());
        tracing::debug!(
            operation = operation.name(),
            path = operation.path(),
            params = ?params,
            "dispatching request"
        );

        let body = self
            .transport
            .get(&url, &params.to_query())
            .await
            .inspect_err(|error| {
                tracing::debug!(operation = operation.name(), %error, "transport failed");
            })?;
        tracing::trace!(operation = operation.name(), bytes = body.len(), "response received");

        let value: Value = serde_json::from_slice(&body).inspect_err(|error| {
            tracing::debug!(
                operation = operation.name(),
                %error,
                "response body is not valid JSON"
            );
        })?;
        Ok(value)
    }

    pub async fn list_devices(&self) -> Result<Value, ClientError> {
        self.dispatch(Operation::ListDevices, self.params()).await
    }

    /// Register a device by display name and SIM phone number.
    pub async fn add_device(
        &self,
        name: impl Into<ParamValue>,
        number: impl Into<ParamValue>,
    ) -> Result<Value, ClientError> {
        let params = self.params().with("name", name).with("number", number);
        self.dispatch(Operation::AddDevice, params).await
    }

    /// Realtime details for one device.
    pub async fn device_detail(&self, tid: impl Into<ParamValue>) -> Result<Value, ClientError> {
        let params = self.params().with("tid", tid);
        self.dispatch(Operation::DeviceDetail, params).await
    }

    pub async fn update_device(
        &self,
        tid: impl Into<ParamValue>,
        name: impl Into<ParamValue>,
    ) -> Result<Value, ClientError> {
        let params = self.params().with("tid", tid).with("name", name);
        self.dispatch(Operation::UpdateDevice, params).await
    }

    pub async fn list_class_time_windows(
        &self,
        tid: impl Into<ParamValue>,
    ) -> Result<Value, ClientError> {
        let params = self.params().with("tid", tid);
        self.dispatch(Operation::ListClassTimeWindows, params).await
    }

    /// Add a do-not-disturb window. `stime`/`etime` are `HH:MM`, `week` lists
    /// weekday digits (`123456` is Monday to Saturday). None of them are checked here.
    pub async fn add_class_time_window(
        &self,
        tid: impl Into<ParamValue>,
        stime: impl Into<ParamValue>,
        etime: impl Into<ParamValue>,
        week: impl Into<ParamValue>,
    ) -> Result<Value, ClientError> {
        let params = self
            .params()
            .with("tid", tid)
            .with("stime", stime)
            .with("etime", etime)
            .with("week", week);
        self.dispatch(Operation::AddClassTimeWindow, params).await
    }

    pub async fn delete_class_time_window(
        &self,
        tid: impl Into<ParamValue>,
        id: impl Into<ParamValue>,
    ) -> Result<Value, ClientError> {
        let params = self.params().with("tid", tid).with("id", id);
        self.dispatch(Operation::DeleteClassTimeWindow, params).await
    }

    pub async fn emergency_contacts(&self, tid: impl Into<ParamValue>) -> Result<Value, ClientError> {
        let params = self.params().with("tid", tid);
        self.dispatch(Operation::EmergencyContacts, params).await
    }

    /// Replace the family numbers and the SOS number of a device.
    ///
    /// `keynum` is sent comma separated; the service accepts at most four
    /// numbers but the count is left for it to enforce.
    pub async fn set_emergency_contacts<S: AsRef<str>>(
        &self,
        tid: impl Into<ParamValue>,
        keynum: &[S],
        keysos: impl Into<ParamValue>,
    ) -> Result<Value, ClientError> {
        let keynum = keynum
            .iter()
            .map(|number| number.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        let params = self
            .params()
            .with("tid", tid)
            .with("keynum", keynum)
            .with("keysos", keysos);
        self.dispatch(Operation::SetEmergencyContacts, params).await
    }

    pub async fn list_location_report_windows(
        &self,
        tid: impl Into<ParamValue>,
    ) -> Result<Value, ClientError> {
        let params = self.params().with("tid", tid);
        self.dispatch(Operation::ListLocationReportWindows, params)
            .await
    }

    /// Add a location-report window. The report interval is always
    /// [`LOCATION_REPORT_INTERVAL_MINUTES`].
    pub async fn add_location_report_window(
        &self,
        tid: impl Into<ParamValue>,
        stime: impl Into<ParamValue>,
        etime: impl Into<ParamValue>,
        week: impl Into<ParamValue>,
    ) -> Result<Value, ClientError> {
        let params = self
            .params()
            .with("tid", tid)
            .with("stime", stime)
            .with("etime", etime)
            .with("week", week)
            .with("itime", LOCATION_REPORT_INTERVAL_MINUTES);
        self.dispatch(Operation::AddLocationReportWindow, params)
            .await
    }

    pub async fn delete_location_report_window(
        &self,
        tid: impl Into<ParamValue>,
        id: impl Into<ParamValue>,
    ) -> Result<Value, ClientError> {
        let params = self.params().with("tid", tid).with("id", id);
        self.dispatch(Operation::DeleteLocationReportWindow, params)
            .await
    }

    pub async fn activate_device(&self, tid: impl Into<ParamValue>) -> Result<Value, ClientError> {
        let params = self.params().with("tid", tid);
        self.dispatch(Operation::ActivateDevice, params).await
    }
}
