//! Router (WiFi) management messages.

use crate::types::device::DeviceInfo;

/// A client associated with the router.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiClient {
    /// Host name advertised by the client.
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub mac_address: String,
    #[prost(string, tag = "3")]
    pub ip_address: String,
    /// Signal strength in dBm.
    #[prost(float, tag = "4")]
    pub signal_strength: f32,
    #[prost(float, tag = "5")]
    pub rx_rate_mbps: f32,
    #[prost(float, tag = "6")]
    pub tx_rate_mbps: f32,
    #[prost(uint32, tag = "7")]
    pub associated_time_s: u32,
    /// Name assigned by the user, if any.
    #[prost(string, tag = "8")]
    pub given_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiGetClientsRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiGetClientsResponse {
    #[prost(message, repeated, tag = "1")]
    pub clients: Vec<WifiClient>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum WifiSecurity {
    Unknown = 0,
    Open = 1,
    Wpa2 = 2,
    Wpa3 = 3,
    Wpa2Wpa3 = 4,
}

/// A broadcast network (SSID).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiNetwork {
    #[prost(string, tag = "1")]
    pub ssid: String,
    #[prost(enumeration = "WifiSecurity", tag = "2")]
    pub security: i32,
    #[prost(bool, tag = "3")]
    pub hidden: bool,
    #[prost(bool, tag = "4")]
    pub guest: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiConfig {
    #[prost(string, tag = "1")]
    pub country_code: String,
    #[prost(bool, tag = "2")]
    pub setup_complete: bool,
    /// Monotonic config revision.
    #[prost(uint64, tag = "3")]
    pub version: u64,
    #[prost(message, repeated, tag = "4")]
    pub networks: Vec<WifiNetwork>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiGetConfigRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiGetConfigResponse {
    #[prost(message, optional, tag = "1")]
    pub wifi_config: Option<WifiConfig>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiSetConfigRequest {
    #[prost(message, optional, tag = "1")]
    pub wifi_config: Option<WifiConfig>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiSetConfigResponse {
    #[prost(message, optional, tag = "1")]
    pub updated_wifi_config: Option<WifiConfig>,
}

/// First-time network setup.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiSetupRequest {
    #[prost(string, tag = "1")]
    pub network_name: String,
    #[prost(string, tag = "2")]
    pub password: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiSetupResponse {}

/// Router answer to a generic status query.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiGetStatusResponse {
    #[prost(message, optional, tag = "1")]
    pub device_info: Option<DeviceInfo>,
    #[prost(uint64, tag = "2")]
    pub uptime_s: u64,
    #[prost(string, tag = "3")]
    pub ipv4_wan_address: String,
    #[prost(string, repeated, tag = "4")]
    pub ipv6_wan_addresses: Vec<String>,
    #[prost(float, tag = "5")]
    pub ping_drop_rate: f32,
    #[prost(float, tag = "6")]
    pub ping_latency_ms: f32,
    #[prost(uint32, tag = "7")]
    pub client_count: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PingMetrics {
    #[prost(float, tag = "1")]
    pub latency_mean_ms: f32,
    #[prost(float, tag = "2")]
    pub latency_stddev_ms: f32,
    #[prost(float, tag = "3")]
    pub drop_rate: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiGetPingMetricsRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiGetPingMetricsResponse {
    /// Pings to internet targets.
    #[prost(message, optional, tag = "1")]
    pub internet: Option<PingMetrics>,
    /// Pings to the dish.
    #[prost(message, optional, tag = "2")]
    pub dish: Option<PingMetrics>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiGetClientHistoryRequest {
    #[prost(string, tag = "1")]
    pub mac_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClientHistorySample {
    #[prost(uint64, tag = "1")]
    pub timestamp_s: u64,
    #[prost(float, tag = "2")]
    pub signal_strength: f32,
    #[prost(float, tag = "3")]
    pub rx_rate_mbps: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiGetClientHistoryResponse {
    #[prost(message, repeated, tag = "1")]
    pub samples: Vec<ClientHistorySample>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiSetClientGivenNameRequest {
    #[prost(string, tag = "1")]
    pub mac_address: String,
    #[prost(string, tag = "2")]
    pub given_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiSetClientGivenNameResponse {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiSelfTestRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiRunSelfTestRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SelfTestCase {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(bool, tag = "2")]
    pub passed: bool,
    #[prost(string, tag = "3")]
    pub detail: String,
}

/// Router self test report.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiSelfTestResponse {
    #[prost(bool, tag = "1")]
    pub passed: bool,
    #[prost(message, repeated, tag = "2")]
    pub cases: Vec<SelfTestCase>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FirewallRule {
    #[prost(string, tag = "1")]
    pub name: String,
    /// `tcp`, `udp` or `any`.
    #[prost(string, tag = "2")]
    pub protocol: String,
    #[prost(uint32, tag = "3")]
    pub port_start: u32,
    #[prost(uint32, tag = "4")]
    pub port_end: u32,
    #[prost(bool, tag = "5")]
    pub allow: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiGetFirewallRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiGetFirewallResponse {
    #[prost(message, repeated, tag = "1")]
    pub rules: Vec<FirewallRule>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiGuestInfoRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WifiGuestInfoResponse {
    #[prost(bool, tag = "1")]
    pub enabled: bool,
    #[prost(string, tag = "2")]
    pub ssid: String,
    #[prost(message, repeated, tag = "3")]
    pub clients: Vec<WifiClient>,
}
