//! Dish positioning, obstruction and configuration messages.

use crate::types::device::DeviceInfo;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishGetContextRequest {}

/// Where the dish is and which cell serves it.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishGetContextResponse {
    #[prost(message, optional, tag = "1")]
    pub device_info: Option<DeviceInfo>,
    #[prost(uint32, tag = "2")]
    pub cell_id: u32,
    #[prost(uint32, tag = "3")]
    pub pop_rack_id: u32,
    /// Fraction of the sky currently obstructed (0.0 - 1.0).
    #[prost(float, tag = "4")]
    pub obstruction_fraction: f32,
    #[prost(float, tag = "5")]
    pub seconds_to_slot_end: f32,
    #[prost(float, tag = "6")]
    pub boresight_azimuth_deg: f32,
    #[prost(float, tag = "7")]
    pub boresight_elevation_deg: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ObstructionStats {
    #[prost(bool, tag = "1")]
    pub currently_obstructed: bool,
    #[prost(float, tag = "2")]
    pub fraction_obstructed: f32,
    /// Seconds of data the statistics cover.
    #[prost(float, tag = "3")]
    pub valid_s: f32,
}

/// Active dish alerts.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishAlerts {
    #[prost(bool, tag = "1")]
    pub motors_stuck: bool,
    #[prost(bool, tag = "2")]
    pub thermal_throttle: bool,
    #[prost(bool, tag = "3")]
    pub thermal_shutdown: bool,
    #[prost(bool, tag = "4")]
    pub unexpected_location: bool,
    #[prost(bool, tag = "5")]
    pub slow_ethernet_speeds: bool,
    #[prost(bool, tag = "6")]
    pub roaming: bool,
}

/// Dish answer to a generic status query.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishGetStatusResponse {
    #[prost(message, optional, tag = "1")]
    pub device_info: Option<DeviceInfo>,
    /// Seconds since boot.
    #[prost(uint64, tag = "2")]
    pub uptime_s: u64,
    #[prost(float, tag = "3")]
    pub pop_ping_drop_rate: f32,
    #[prost(float, tag = "4")]
    pub pop_ping_latency_ms: f32,
    #[prost(float, tag = "5")]
    pub downlink_throughput_bps: f32,
    #[prost(float, tag = "6")]
    pub uplink_throughput_bps: f32,
    #[prost(float, tag = "7")]
    pub boresight_azimuth_deg: f32,
    #[prost(float, tag = "8")]
    pub boresight_elevation_deg: f32,
    #[prost(message, optional, tag = "9")]
    pub obstruction_stats: Option<ObstructionStats>,
    #[prost(message, optional, tag = "10")]
    pub alerts: Option<DishAlerts>,
    #[prost(bool, tag = "11")]
    pub is_snr_above_noise_floor: bool,
    #[prost(bool, tag = "12")]
    pub stow_requested: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishStowRequest {
    /// Unstow instead of stowing.
    #[prost(bool, tag = "1")]
    pub unstow: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishStowResponse {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishGetObstructionMapRequest {}

/// Row-major SNR grid of the sky as seen by the dish.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishGetObstructionMapResponse {
    #[prost(uint32, tag = "1")]
    pub num_rows: u32,
    #[prost(uint32, tag = "2")]
    pub num_cols: u32,
    /// One value per cell; negative means no data.
    #[prost(float, repeated, tag = "3")]
    pub snr: Vec<f32>,
    #[prost(float, tag = "4")]
    pub min_elevation_deg: f32,
    #[prost(float, tag = "5")]
    pub max_theta_deg: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishClearObstructionMapRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishClearObstructionMapResponse {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishGetEmcRequest {}

/// Electromagnetic compatibility test settings.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishGetEmcResponse {
    #[prost(double, tag = "1")]
    pub theta: f64,
    #[prost(double, tag = "2")]
    pub phi: f64,
    #[prost(uint32, tag = "3")]
    pub rx_chan: u32,
    #[prost(uint32, tag = "4")]
    pub tx_chan: u32,
    #[prost(uint32, tag = "5")]
    pub modulation: u32,
    #[prost(double, tag = "6")]
    pub desired_tilt_angle: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishSetEmcRequest {
    #[prost(double, tag = "1")]
    pub theta: f64,
    #[prost(double, tag = "2")]
    pub phi: f64,
    #[prost(uint32, tag = "3")]
    pub rx_chan: u32,
    #[prost(uint32, tag = "4")]
    pub tx_chan: u32,
    #[prost(uint32, tag = "5")]
    pub modulation: u32,
    #[prost(double, tag = "6")]
    pub desired_tilt_angle: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishSetEmcResponse {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SnowMeltMode {
    Auto = 0,
    AlwaysOn = 1,
    AlwaysOff = 2,
}

/// User-settable dish configuration.
///
/// The `apply_*` flags select which fields a set request changes.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishConfig {
    #[prost(enumeration = "SnowMeltMode", tag = "1")]
    pub snow_melt_mode: i32,
    #[prost(uint32, tag = "2")]
    pub power_save_start_minutes: u32,
    #[prost(uint32, tag = "3")]
    pub power_save_duration_minutes: u32,
    #[prost(bool, tag = "4")]
    pub power_save_mode: bool,
    #[prost(bool, tag = "1001")]
    pub apply_snow_melt_mode: bool,
    #[prost(bool, tag = "1002")]
    pub apply_power_save_start_minutes: bool,
    #[prost(bool, tag = "1003")]
    pub apply_power_save_duration_minutes: bool,
    #[prost(bool, tag = "1004")]
    pub apply_power_save_mode: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishGetConfigRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishGetConfigResponse {
    #[prost(message, optional, tag = "1")]
    pub dish_config: Option<DishConfig>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishSetConfigRequest {
    #[prost(message, optional, tag = "1")]
    pub dish_config: Option<DishConfig>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishSetConfigResponse {
    #[prost(message, optional, tag = "1")]
    pub updated_dish_config: Option<DishConfig>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishPowerSaveRequest {
    /// Minutes after midnight at which power save starts.
    #[prost(uint32, tag = "1")]
    pub power_save_start_minutes: u32,
    #[prost(uint32, tag = "2")]
    pub power_save_duration_minutes: u32,
    #[prost(bool, tag = "3")]
    pub enable_power_save: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishPowerSaveResponse {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishActivateRssiScanRequest {
    #[prost(uint32, tag = "1")]
    pub scan_duration_s: u32,
    /// Channels to scan; empty scans all.
    #[prost(uint32, repeated, tag = "2")]
    pub channels: Vec<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishActivateRssiScanResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RssiScanSample {
    #[prost(float, tag = "1")]
    pub frequency_mhz: f32,
    #[prost(float, tag = "2")]
    pub rssi_dbm: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishGetRssiScanResultRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishGetRssiScanResultResponse {
    #[prost(message, repeated, tag = "1")]
    pub samples: Vec<RssiScanSample>,
    #[prost(bool, tag = "2")]
    pub scan_complete: bool,
}

/// Dish answer to a generic diagnostics query.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DishGetDiagnosticsResponse {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub hardware_version: String,
    #[prost(string, tag = "3")]
    pub software_version: String,
    #[prost(int32, tag = "4")]
    pub utc_offset_s: i32,
    #[prost(bool, tag = "5")]
    pub hardware_self_test_passed: bool,
    #[prost(message, optional, tag = "6")]
    pub alerts: Option<DishAlerts>,
}
