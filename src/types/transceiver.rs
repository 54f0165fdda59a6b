//! RF transceiver diagnostics messages.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ModulatorState {
    Unknown = 0,
    Enabled = 1,
    Disabled = 2,
    Fault = 3,
}

/// Transceiver answer to a generic status query.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransceiverGetStatusResponse {
    #[prost(enumeration = "ModulatorState", tag = "1")]
    pub modulator_state: i32,
    #[prost(bool, tag = "2")]
    pub gps_valid: bool,
    /// Number of satellites in the GPS fix.
    #[prost(uint32, tag = "3")]
    pub gps_sats: u32,
    #[prost(uint32, tag = "4")]
    pub gps_week: u32,
    /// GPS time of week in seconds.
    #[prost(uint32, tag = "5")]
    pub gps_tow: u32,
    /// IMU temperature in degrees Celsius.
    #[prost(float, tag = "6")]
    pub imu_temp: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransceiverGetTelemetryRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransceiverGetTelemetryResponse {
    #[prost(float, tag = "1")]
    pub antenna_pitch: f32,
    #[prost(float, tag = "2")]
    pub antenna_roll: f32,
    #[prost(float, tag = "3")]
    pub antenna_rx_theta: f32,
    #[prost(float, tag = "4")]
    pub antenna_true_heading: f32,
    #[prost(uint32, tag = "5")]
    pub rx_channel: u32,
    #[prost(uint32, tag = "6")]
    pub current_cell_id: u32,
    #[prost(float, tag = "7")]
    pub seconds_until_slot_end: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransceiverIfLoopbackTestRequest {
    #[prost(bool, tag = "1")]
    pub enable_if_slice: bool,
}

/// Intermediate-frequency loopback test result.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransceiverIfLoopbackTestResponse {
    /// Bit error rate measured over the loop.
    #[prost(float, tag = "1")]
    pub ber_loopback_test: f32,
    #[prost(float, tag = "2")]
    pub rssi_loopback_test: f32,
    #[prost(bool, tag = "3")]
    pub pass_loopback_test: bool,
}
