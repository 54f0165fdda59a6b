//! Device-level messages shared by the dish and the router.

use crate::types::dish::DishGetStatusResponse;
use crate::types::transceiver::TransceiverGetStatusResponse;
use crate::types::wifi::WifiGetStatusResponse;

/// Identity and firmware information of a device.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceInfo {
    /// Unique device identifier.
    #[prost(string, tag = "1")]
    pub id: String,
    /// Hardware revision (e.g. `rev4_prod1`).
    #[prost(string, tag = "2")]
    pub hardware_version: String,
    /// Running software version.
    #[prost(string, tag = "3")]
    pub software_version: String,
    /// ISO country code the device is provisioned for.
    #[prost(string, tag = "4")]
    pub country_code: String,
    /// Offset from UTC in seconds.
    #[prost(int32, tag = "5")]
    pub utc_offset_s: i32,
    #[prost(bool, tag = "6")]
    pub is_prod: bool,
    /// Number of boots since manufacture.
    #[prost(int32, tag = "7")]
    pub boot_count: i32,
    #[prost(uint32, tag = "8")]
    pub anti_rollback_version: u32,
    /// True for router-only installations.
    #[prost(bool, tag = "9")]
    pub is_wifi_only: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetDeviceInfoRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetDeviceInfoResponse {
    #[prost(message, optional, tag = "1")]
    pub device_info: Option<DeviceInfo>,
}

/// Status query. The response variant depends on which device answers.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetStatusRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RebootRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RebootResponse {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLogRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLogResponse {
    /// System log text.
    #[prost(string, tag = "1")]
    pub syslog: String,
    /// Log collected while the device was offline.
    #[prost(string, tag = "2")]
    pub offline_log: String,
}

/// Source used to resolve the device location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PositionSource {
    Auto = 0,
    Gnss = 1,
    Starlink = 2,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLocationRequest {
    #[prost(enumeration = "PositionSource", tag = "1")]
    pub source: i32,
}

/// Geodetic position.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LatLonAlt {
    #[prost(double, tag = "1")]
    pub lat: f64,
    #[prost(double, tag = "2")]
    pub lon: f64,
    /// Altitude in meters.
    #[prost(double, tag = "3")]
    pub alt: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLocationResponse {
    #[prost(message, optional, tag = "1")]
    pub lla: Option<LatLonAlt>,
    /// Horizontal accuracy in meters.
    #[prost(double, tag = "2")]
    pub sigma_m: f64,
    #[prost(enumeration = "PositionSource", tag = "3")]
    pub source: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SpeedTestRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SpeedTestResponse {
    #[prost(float, tag = "1")]
    pub download_mbps: f32,
    #[prost(float, tag = "2")]
    pub upload_mbps: f32,
    #[prost(float, tag = "3")]
    pub latency_ms: f32,
    /// Fraction of probe packets lost (0.0 - 1.0).
    #[prost(float, tag = "4")]
    pub packet_loss: f32,
}

/// Outcome of a single ping probe.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PingResult {
    /// Probed host.
    #[prost(string, tag = "1")]
    pub target: String,
    #[prost(bool, tag = "2")]
    pub dropped: bool,
    #[prost(float, tag = "3")]
    pub latency_ms: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPingRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPingResponse {
    #[prost(message, repeated, tag = "1")]
    pub results: Vec<PingResult>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PingHostRequest {
    /// Host name or IP address to ping.
    #[prost(string, tag = "1")]
    pub address: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PingHostResponse {
    #[prost(message, optional, tag = "1")]
    pub result: Option<PingResult>,
}

/// A network interface on the device.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NetworkInterface {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(bool, tag = "2")]
    pub up: bool,
    #[prost(string, tag = "3")]
    pub mac_address: String,
    #[prost(string, repeated, tag = "4")]
    pub ipv4_addresses: Vec<String>,
    #[prost(string, repeated, tag = "5")]
    pub ipv6_addresses: Vec<String>,
    #[prost(uint64, tag = "6")]
    pub rx_bytes: u64,
    #[prost(uint64, tag = "7")]
    pub tx_bytes: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetNetworkInterfacesRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetNetworkInterfacesResponse {
    #[prost(message, repeated, tag = "1")]
    pub network_interfaces: Vec<NetworkInterface>,
}

/// Diagnostics query. Dishes answer with a dish-specific report.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetDiagnosticsRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetDiagnosticsResponse {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub hardware_version: String,
    #[prost(string, tag = "3")]
    pub software_version: String,
    /// Names of currently active alerts.
    #[prost(string, repeated, tag = "4")]
    pub active_alerts: Vec<String>,
}

/// Status reported by whichever device answered a generic status query.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceStatus {
    Dish(DishGetStatusResponse),
    Wifi(WifiGetStatusResponse),
    Transceiver(TransceiverGetStatusResponse),
}

impl DeviceStatus {
    /// Returns the device info embedded in the status, if the variant has one.
    #[must_use]
    pub const fn device_info(&self) -> Option<&DeviceInfo> {
        match self {
            Self::Dish(status) => status.device_info.as_ref(),
            Self::Wifi(status) => status.device_info.as_ref(),
            Self::Transceiver(_) => None,
        }
    }
}
