//! Request/response envelopes.
//!
//! Every operation travels over the same RPC method wrapped in an envelope.
//! The envelope's payload is a closed oneof: exactly one operation message
//! is present, and the variant identifies the operation.

use bytes::Bytes;
use prost::Message;

use crate::error::Result;
use crate::types::{device, dish, transceiver, wifi};

/// Generates a fieldless tag enum mirroring a payload oneof, plus the
/// payload's `tag()` accessor.
macro_rules! payload_tags {
    (
        $(#[$meta:meta])*
        $name:ident for $payload:path {
            $($variant:ident => $wire:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)*
        }

        impl $name {
            /// Every tag, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Returns the device's name for this tag.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $payload {
            /// Returns the tag of the populated variant.
            #[must_use]
            pub const fn tag(&self) -> $name {
                match self {
                    $(Self::$variant(_) => $name::$variant,)*
                }
            }
        }
    };
}

/// Envelope sent to the device.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Request {
    /// Caller-assigned request id.
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(uint64, tag = "14")]
    pub epoch_id: u64,
    /// Routing hint, usually empty.
    #[prost(string, tag = "13")]
    pub target_id: String,
    #[prost(
        oneof = "request::Payload",
        tags = "1001, 1003, 1004, 1008, 1009, 1012, 1015, 1016, 1017, 6000, 2002, 2003, 2007, 2008, 2009, 2010, 2011, 2013, 2014, 2015, 2016, 3001, 3002, 3003, 3007, 3009, 3011, 3012, 3013, 3014, 3015, 3016, 4001, 4003"
    )]
    pub request: Option<request::Payload>,
}

/// Request payload variants.
pub mod request {
    use super::{device, dish, transceiver, wifi};

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Payload {
        #[prost(message, tag = "1001")]
        Reboot(device::RebootRequest),
        #[prost(message, tag = "1003")]
        SpeedTest(device::SpeedTestRequest),
        #[prost(message, tag = "1004")]
        GetStatus(device::GetStatusRequest),
        #[prost(message, tag = "1008")]
        GetDeviceInfo(device::GetDeviceInfoRequest),
        #[prost(message, tag = "1009")]
        GetPing(device::GetPingRequest),
        #[prost(message, tag = "1012")]
        GetLog(device::GetLogRequest),
        #[prost(message, tag = "1015")]
        GetNetworkInterfaces(device::GetNetworkInterfacesRequest),
        #[prost(message, tag = "1016")]
        PingHost(device::PingHostRequest),
        #[prost(message, tag = "1017")]
        GetLocation(device::GetLocationRequest),
        #[prost(message, tag = "6000")]
        GetDiagnostics(device::GetDiagnosticsRequest),
        #[prost(message, tag = "2002")]
        DishStow(dish::DishStowRequest),
        #[prost(message, tag = "2003")]
        DishGetContext(dish::DishGetContextRequest),
        #[prost(message, tag = "2007")]
        DishSetEmc(dish::DishSetEmcRequest),
        #[prost(message, tag = "2008")]
        DishGetObstructionMap(dish::DishGetObstructionMapRequest),
        #[prost(message, tag = "2009")]
        DishGetEmc(dish::DishGetEmcRequest),
        #[prost(message, tag = "2010")]
        DishSetConfig(dish::DishSetConfigRequest),
        #[prost(message, tag = "2011")]
        DishGetConfig(dish::DishGetConfigRequest),
        #[prost(message, tag = "2013")]
        DishPowerSave(dish::DishPowerSaveRequest),
        #[prost(message, tag = "2014")]
        DishClearObstructionMap(dish::DishClearObstructionMapRequest),
        #[prost(message, tag = "2015")]
        DishActivateRssiScan(dish::DishActivateRssiScanRequest),
        #[prost(message, tag = "2016")]
        DishGetRssiScanResult(dish::DishGetRssiScanResultRequest),
        #[prost(message, tag = "3001")]
        WifiSetConfig(wifi::WifiSetConfigRequest),
        #[prost(message, tag = "3002")]
        WifiGetClients(wifi::WifiGetClientsRequest),
        #[prost(message, tag = "3003")]
        WifiSetup(wifi::WifiSetupRequest),
        #[prost(message, tag = "3007")]
        WifiGetPingMetrics(wifi::WifiGetPingMetricsRequest),
        #[prost(message, tag = "3009")]
        WifiGetConfig(wifi::WifiGetConfigRequest),
        #[prost(message, tag = "3011")]
        WifiGetClientHistory(wifi::WifiGetClientHistoryRequest),
        #[prost(message, tag = "3012")]
        WifiSetClientGivenName(wifi::WifiSetClientGivenNameRequest),
        #[prost(message, tag = "3013")]
        WifiSelfTest(wifi::WifiSelfTestRequest),
        #[prost(message, tag = "3014")]
        WifiRunSelfTest(wifi::WifiRunSelfTestRequest),
        #[prost(message, tag = "3015")]
        WifiGetFirewall(wifi::WifiGetFirewallRequest),
        #[prost(message, tag = "3016")]
        WifiGuestInfo(wifi::WifiGuestInfoRequest),
        #[prost(message, tag = "4001")]
        TransceiverIfLoopbackTest(transceiver::TransceiverIfLoopbackTestRequest),
        #[prost(message, tag = "4003")]
        TransceiverGetTelemetry(transceiver::TransceiverGetTelemetryRequest),
    }
}

payload_tags! {
    /// Discriminator of a request payload.
    RequestTag for request::Payload {
        Reboot => "reboot",
        SpeedTest => "speedTest",
        GetStatus => "getStatus",
        GetDeviceInfo => "getDeviceInfo",
        GetPing => "getPing",
        GetLog => "getLog",
        GetNetworkInterfaces => "getNetworkInterfaces",
        PingHost => "pingHost",
        GetLocation => "getLocation",
        GetDiagnostics => "getDiagnostics",
        DishStow => "dishStow",
        DishGetContext => "dishGetContext",
        DishSetEmc => "dishSetEmc",
        DishGetObstructionMap => "dishGetObstructionMap",
        DishGetEmc => "dishGetEmc",
        DishSetConfig => "dishSetConfig",
        DishGetConfig => "dishGetConfig",
        DishPowerSave => "dishPowerSave",
        DishClearObstructionMap => "dishClearObstructionMap",
        DishActivateRssiScan => "dishActivateRssiScan",
        DishGetRssiScanResult => "dishGetRssiScanResult",
        WifiSetConfig => "wifiSetConfig",
        WifiGetClients => "wifiGetClients",
        WifiSetup => "wifiSetup",
        WifiGetPingMetrics => "wifiGetPingMetrics",
        WifiGetConfig => "wifiGetConfig",
        WifiGetClientHistory => "wifiGetClientHistory",
        WifiSetClientGivenName => "wifiSetClientGivenName",
        WifiSelfTest => "wifiSelfTest",
        WifiRunSelfTest => "wifiRunSelfTest",
        WifiGetFirewall => "wifiGetFirewall",
        WifiGuestInfo => "wifiGuestInfo",
        TransceiverIfLoopbackTest => "transceiverIfLoopbackTest",
        TransceiverGetTelemetry => "transceiverGetTelemetry",
    }
}

/// Device-side status attached to a response.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResponseStatus {
    /// Zero means success.
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub message: String,
}

/// Envelope received from the device.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Response {
    /// Request id echoed by the device, or zero.
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(message, optional, tag = "2")]
    pub status: Option<ResponseStatus>,
    #[prost(uint64, tag = "3")]
    pub api_version: u64,
    #[prost(
        oneof = "response::Payload",
        tags = "1001, 1003, 1004, 1005, 1009, 1011, 1012, 1017, 6000, 6001, 2002, 2003, 2004, 2007, 2008, 2009, 2010, 2011, 2013, 2014, 2015, 2016, 3001, 3002, 3003, 3004, 3007, 3009, 3011, 3012, 3013, 3014, 3015, 3016, 4001, 4003, 4004"
    )]
    pub response: Option<response::Payload>,
}

/// Response payload variants.
pub mod response {
    use super::{device, dish, transceiver, wifi};

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Payload {
        #[prost(message, tag = "1001")]
        Reboot(device::RebootResponse),
        #[prost(message, tag = "1003")]
        SpeedTest(device::SpeedTestResponse),
        #[prost(message, tag = "1004")]
        GetDeviceInfo(device::GetDeviceInfoResponse),
        #[prost(message, tag = "1005")]
        GetPing(device::GetPingResponse),
        #[prost(message, tag = "1009")]
        GetLog(device::GetLogResponse),
        #[prost(message, tag = "1011")]
        GetNetworkInterfaces(device::GetNetworkInterfacesResponse),
        #[prost(message, tag = "1012")]
        PingHost(device::PingHostResponse),
        #[prost(message, tag = "1017")]
        GetLocation(device::GetLocationResponse),
        #[prost(message, tag = "6000")]
        GetDiagnostics(device::GetDiagnosticsResponse),
        #[prost(message, tag = "6001")]
        DishGetDiagnostics(dish::DishGetDiagnosticsResponse),
        #[prost(message, tag = "2002")]
        DishStow(dish::DishStowResponse),
        #[prost(message, tag = "2003")]
        DishGetContext(dish::DishGetContextResponse),
        #[prost(message, tag = "2004")]
        DishGetStatus(dish::DishGetStatusResponse),
        #[prost(message, tag = "2007")]
        DishSetEmc(dish::DishSetEmcResponse),
        #[prost(message, tag = "2008")]
        DishGetObstructionMap(dish::DishGetObstructionMapResponse),
        #[prost(message, tag = "2009")]
        DishGetEmc(dish::DishGetEmcResponse),
        #[prost(message, tag = "2010")]
        DishSetConfig(dish::DishSetConfigResponse),
        #[prost(message, tag = "2011")]
        DishGetConfig(dish::DishGetConfigResponse),
        #[prost(message, tag = "2013")]
        DishPowerSave(dish::DishPowerSaveResponse),
        #[prost(message, tag = "2014")]
        DishClearObstructionMap(dish::DishClearObstructionMapResponse),
        #[prost(message, tag = "2015")]
        DishActivateRssiScan(dish::DishActivateRssiScanResponse),
        #[prost(message, tag = "2016")]
        DishGetRssiScanResult(dish::DishGetRssiScanResultResponse),
        #[prost(message, tag = "3001")]
        WifiSetConfig(wifi::WifiSetConfigResponse),
        #[prost(message, tag = "3002")]
        WifiGetClients(wifi::WifiGetClientsResponse),
        #[prost(message, tag = "3003")]
        WifiSetup(wifi::WifiSetupResponse),
        #[prost(message, tag = "3004")]
        WifiGetStatus(wifi::WifiGetStatusResponse),
        #[prost(message, tag = "3007")]
        WifiGetPingMetrics(wifi::WifiGetPingMetricsResponse),
        #[prost(message, tag = "3009")]
        WifiGetConfig(wifi::WifiGetConfigResponse),
        #[prost(message, tag = "3011")]
        WifiGetClientHistory(wifi::WifiGetClientHistoryResponse),
        #[prost(message, tag = "3012")]
        WifiSetClientGivenName(wifi::WifiSetClientGivenNameResponse),
        #[prost(message, tag = "3013")]
        WifiSelfTest(wifi::WifiSelfTestResponse),
        #[prost(message, tag = "3014")]
        WifiRunSelfTest(wifi::WifiSelfTestResponse),
        #[prost(message, tag = "3015")]
        WifiGetFirewall(wifi::WifiGetFirewallResponse),
        #[prost(message, tag = "3016")]
        WifiGuestInfo(wifi::WifiGuestInfoResponse),
        #[prost(message, tag = "4001")]
        TransceiverIfLoopbackTest(transceiver::TransceiverIfLoopbackTestResponse),
        #[prost(message, tag = "4003")]
        TransceiverGetStatus(transceiver::TransceiverGetStatusResponse),
        #[prost(message, tag = "4004")]
        TransceiverGetTelemetry(transceiver::TransceiverGetTelemetryResponse),
    }
}

payload_tags! {
    /// Discriminator of a response payload.
    ResponseTag for response::Payload {
        Reboot => "reboot",
        SpeedTest => "speedTest",
        GetDeviceInfo => "getDeviceInfo",
        GetPing => "getPing",
        GetLog => "getLog",
        GetNetworkInterfaces => "getNetworkInterfaces",
        PingHost => "pingHost",
        GetLocation => "getLocation",
        GetDiagnostics => "getDiagnostics",
        DishGetDiagnostics => "dishGetDiagnostics",
        DishStow => "dishStow",
        DishGetContext => "dishGetContext",
        DishGetStatus => "dishGetStatus",
        DishSetEmc => "dishSetEmc",
        DishGetObstructionMap => "dishGetObstructionMap",
        DishGetEmc => "dishGetEmc",
        DishSetConfig => "dishSetConfig",
        DishGetConfig => "dishGetConfig",
        DishPowerSave => "dishPowerSave",
        DishClearObstructionMap => "dishClearObstructionMap",
        DishActivateRssiScan => "dishActivateRssiScan",
        DishGetRssiScanResult => "dishGetRssiScanResult",
        WifiSetConfig => "wifiSetConfig",
        WifiGetClients => "wifiGetClients",
        WifiSetup => "wifiSetup",
        WifiGetStatus => "wifiGetStatus",
        WifiGetPingMetrics => "wifiGetPingMetrics",
        WifiGetConfig => "wifiGetConfig",
        WifiGetClientHistory => "wifiGetClientHistory",
        WifiSetClientGivenName => "wifiSetClientGivenName",
        WifiSelfTest => "wifiSelfTest",
        WifiRunSelfTest => "wifiRunSelfTest",
        WifiGetFirewall => "wifiGetFirewall",
        WifiGuestInfo => "wifiGuestInfo",
        TransceiverIfLoopbackTest => "transceiverIfLoopbackTest",
        TransceiverGetStatus => "transceiverGetStatus",
        TransceiverGetTelemetry => "transceiverGetTelemetry",
    }
}

impl Request {
    /// Creates an envelope carrying `payload`, with zero epoch and no target.
    #[must_use]
    pub fn new(id: u64, payload: request::Payload) -> Self {
        Self {
            id,
            epoch_id: 0,
            target_id: String::new(),
            request: Some(payload),
        }
    }

    /// Returns the tag of the carried payload.
    #[must_use]
    pub fn tag(&self) -> Option<RequestTag> {
        self.request.as_ref().map(request::Payload::tag)
    }

    /// Encodes the envelope.
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        Bytes::from(self.encode_to_vec())
    }

    /// Decodes an envelope.
    pub fn from_bytes(buf: Bytes) -> Result<Self> {
        Ok(Self::decode(buf)?)
    }
}

impl Response {
    /// Creates a successful envelope carrying `payload`.
    #[must_use]
    pub fn new(id: u64, payload: response::Payload) -> Self {
        Self {
            id,
            status: None,
            api_version: 0,
            response: Some(payload),
        }
    }

    /// Creates an envelope with a device error status and no payload.
    pub fn failed(id: u64, code: i32, message: impl Into<String>) -> Self {
        Self {
            id,
            status: Some(ResponseStatus {
                code,
                message: message.into(),
            }),
            api_version: 0,
            response: None,
        }
    }

    /// Returns the tag of the carried payload.
    #[must_use]
    pub fn tag(&self) -> Option<ResponseTag> {
        self.response.as_ref().map(response::Payload::tag)
    }

    /// Encodes the envelope.
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        Bytes::from(self.encode_to_vec())
    }

    /// Decodes an envelope.
    pub fn from_bytes(buf: Bytes) -> Result<Self> {
        Ok(Self::decode(buf)?)
    }
}
