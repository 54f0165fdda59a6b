//! Operation payload types.
//!
//! This module contains the request and response messages carried inside
//! the envelope, grouped by capability:
//! - Device identity, status, logs and network tools
//! - Dish positioning, obstruction and configuration
//! - Router (WiFi) management
//! - RF transceiver diagnostics

pub mod device;
pub mod dish;
pub mod transceiver;
pub mod wifi;

pub use device::{
    DeviceInfo, DeviceStatus, GetDeviceInfoRequest, GetDeviceInfoResponse, GetDiagnosticsRequest,
    GetDiagnosticsResponse, GetLocationRequest, GetLocationResponse, GetLogRequest,
    GetLogResponse, GetNetworkInterfacesRequest, GetNetworkInterfacesResponse, GetPingRequest,
    GetPingResponse, GetStatusRequest, LatLonAlt, NetworkInterface, PingHostRequest,
    PingHostResponse, PingResult, PositionSource, RebootRequest, RebootResponse,
    SpeedTestRequest, SpeedTestResponse,
};
pub use dish::{
    DishActivateRssiScanRequest, DishActivateRssiScanResponse, DishAlerts,
    DishClearObstructionMapRequest, DishClearObstructionMapResponse, DishConfig,
    DishGetConfigRequest, DishGetConfigResponse, DishGetContextRequest, DishGetContextResponse,
    DishGetDiagnosticsResponse, DishGetEmcRequest, DishGetEmcResponse,
    DishGetObstructionMapRequest, DishGetObstructionMapResponse, DishGetRssiScanResultRequest,
    DishGetRssiScanResultResponse, DishGetStatusResponse, DishPowerSaveRequest,
    DishPowerSaveResponse, DishSetConfigRequest, DishSetConfigResponse, DishSetEmcRequest,
    DishSetEmcResponse, DishStowRequest, DishStowResponse, ObstructionStats, RssiScanSample,
    SnowMeltMode,
};
pub use transceiver::{
    ModulatorState, TransceiverGetStatusResponse, TransceiverGetTelemetryRequest,
    TransceiverGetTelemetryResponse, TransceiverIfLoopbackTestRequest,
    TransceiverIfLoopbackTestResponse,
};
pub use wifi::{
    ClientHistorySample, FirewallRule, PingMetrics, SelfTestCase, WifiClient, WifiConfig,
    WifiGetClientHistoryRequest, WifiGetClientHistoryResponse, WifiGetClientsRequest,
    WifiGetClientsResponse, WifiGetConfigRequest, WifiGetConfigResponse,
    WifiGetFirewallRequest, WifiGetFirewallResponse, WifiGetPingMetricsRequest,
    WifiGetPingMetricsResponse, WifiGetStatusResponse, WifiGuestInfoRequest,
    WifiGuestInfoResponse, WifiNetwork, WifiRunSelfTestRequest, WifiSecurity,
    WifiSelfTestRequest, WifiSelfTestResponse, WifiSetClientGivenNameRequest,
    WifiSetClientGivenNameResponse, WifiSetConfigRequest, WifiSetConfigResponse,
    WifiSetupRequest, WifiSetupResponse,
};
