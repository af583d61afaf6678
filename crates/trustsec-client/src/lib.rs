//! Client for the TrustSec student phone device management API.
//!
//! ```no_run
//! # async fn demo() -> Result<(), trustsec_client::ClientError> {
//! use trustsec_client::{DeviceApiClient, ResponseExt};
//!
//! let client = DeviceApiClient::new("school-admin", "secret")?;
//! let devices = client.list_devices().await?;
//! let detail = client.device_detail(1024).await?.ensure_status(1)?;
//! # let _ = (devices, detail);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod operation;
pub mod params;
pub mod response;
pub mod transport;

pub use client::{DeviceApiClient, API_ENDPOINT, LOCATION_REPORT_INTERVAL_MINUTES};
pub use config::ClientConfig;
pub use credentials::Credentials;
pub use error::{ClientError, CredentialField};
pub use operation::Operation;
pub use params::{ParamValue, RequestParams};
pub use response::ResponseExt;
pub use transport::{HttpTransport, Transport, TransportError};
