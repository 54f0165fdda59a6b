//! Operation descriptors.
//!
//! Each device capability is described once by a zero-sized marker type
//! implementing [`Operation`]: which request variant carries its input,
//! which response variants are acceptable, and how to extract the output.
//! The dispatcher is generic over this trait, so adding an operation means
//! adding one row to the table below.

use std::fmt::Debug;

use crate::protocol::envelope::{RequestTag, ResponseTag, request, response};

/// Describes a single envelope operation.
pub trait Operation {
    /// Request message. Absent input is replaced by its default.
    type Input: Default + Debug + Send + 'static;
    /// Value returned to the caller.
    type Output;

    /// Label used in debug logs.
    const LABEL: &'static str;
    /// Request variant the input is wrapped in.
    const REQUEST_TAG: RequestTag;
    /// Accepted response variants. Empty means any payload is accepted.
    const EXPECTED: &'static [ResponseTag];

    /// Wraps the input in its request variant.
    fn wrap(input: Self::Input) -> request::Payload;

    /// Extracts the output, or returns the tag that was observed instead.
    ///
    /// # Errors
    ///
    /// Returns the actual tag (`None` for an empty payload) when the
    /// response is not one of [`Self::EXPECTED`].
    fn unwrap(payload: Option<response::Payload>) -> Result<Self::Output, Option<ResponseTag>>;
}

/// Returns the tag of an optional payload.
fn observed(payload: Option<&response::Payload>) -> Option<ResponseTag> {
    payload.map(response::Payload::tag)
}

macro_rules! operations {
    ($(
        $(#[$meta:meta])*
        $name:ident = $label:literal, $req:ident($input:ty) => $resp:ident($output:ty);
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl Operation for $name {
                type Input = $input;
                type Output = $output;

                const LABEL: &'static str = $label;
                const REQUEST_TAG: RequestTag = RequestTag::$req;
                const EXPECTED: &'static [ResponseTag] = &[ResponseTag::$resp];

                fn wrap(input: Self::Input) -> request::Payload {
                    request::Payload::$req(input)
                }

                fn unwrap(
                    payload: Option<response::Payload>,
                ) -> Result<Self::Output, Option<ResponseTag>> {
                    match payload {
                        Some(response::Payload::$resp(output)) => Ok(output),
                        other => Err(observed(other.as_ref())),
                    }
                }
            }
        )*
    };
}

/// Marker types, one per operation.
pub mod ops {
    use super::{Operation, RequestTag, ResponseTag, observed, request, response};
    use crate::types::device::{
        DeviceStatus, GetDeviceInfoRequest, GetDeviceInfoResponse, GetDiagnosticsRequest,
        GetDiagnosticsResponse, GetLocationRequest, GetLocationResponse, GetLogRequest,
        GetLogResponse, GetNetworkInterfacesRequest, GetNetworkInterfacesResponse,
        GetPingRequest, GetPingResponse, GetStatusRequest, PingHostRequest, PingHostResponse,
        RebootRequest, RebootResponse, SpeedTestRequest, SpeedTestResponse,
    };
    use crate::types::dish::{
        DishActivateRssiScanRequest, DishActivateRssiScanResponse,
        DishClearObstructionMapRequest, DishClearObstructionMapResponse, DishGetConfigRequest,
        DishGetConfigResponse, DishGetContextRequest, DishGetContextResponse,
        DishGetDiagnosticsResponse, DishGetEmcRequest, DishGetEmcResponse,
        DishGetObstructionMapRequest, DishGetObstructionMapResponse,
        DishGetRssiScanResultRequest, DishGetRssiScanResultResponse, DishGetStatusResponse,
        DishPowerSaveRequest, DishSetConfigRequest, DishSetConfigResponse, DishSetEmcRequest,
        DishSetEmcResponse, DishStowRequest, DishStowResponse,
    };
    use crate::types::transceiver::{
        TransceiverGetStatusResponse, TransceiverGetTelemetryRequest,
        TransceiverGetTelemetryResponse, TransceiverIfLoopbackTestRequest,
        TransceiverIfLoopbackTestResponse,
    };
    use crate::types::wifi::{
        WifiGetClientHistoryRequest, WifiGetClientHistoryResponse, WifiGetClientsRequest,
        WifiGetClientsResponse, WifiGetConfigRequest, WifiGetConfigResponse,
        WifiGetFirewallRequest, WifiGetFirewallResponse, WifiGetPingMetricsRequest,
        WifiGetPingMetricsResponse, WifiGetStatusResponse, WifiGuestInfoRequest,
        WifiGuestInfoResponse, WifiRunSelfTestRequest, WifiSelfTestRequest,
        WifiSelfTestResponse, WifiSetClientGivenNameRequest, WifiSetClientGivenNameResponse,
        WifiSetConfigRequest, WifiSetConfigResponse, WifiSetupRequest, WifiSetupResponse,
    };

    operations! {
        // Device
        GetDeviceInfo = "device.get_info",
            GetDeviceInfo(GetDeviceInfoRequest) => GetDeviceInfo(GetDeviceInfoResponse);
        Reboot = "device.reboot",
            Reboot(RebootRequest) => Reboot(RebootResponse);
        GetLog = "device.get_logs",
            GetLog(GetLogRequest) => GetLog(GetLogResponse);
        GetLocation = "device.get_location",
            GetLocation(GetLocationRequest) => GetLocation(GetLocationResponse);
        SpeedTest = "device.speed_test",
            SpeedTest(SpeedTestRequest) => SpeedTest(SpeedTestResponse);
        GetPing = "device.get_ping",
            GetPing(GetPingRequest) => GetPing(GetPingResponse);
        PingHost = "device.ping_host",
            PingHost(PingHostRequest) => PingHost(PingHostResponse);
        GetNetworkInterfaces = "device.get_network_interfaces",
            GetNetworkInterfaces(GetNetworkInterfacesRequest)
                => GetNetworkInterfaces(GetNetworkInterfacesResponse);
        GetDiagnostics = "device.get_diagnostics",
            GetDiagnostics(GetDiagnosticsRequest) => GetDiagnostics(GetDiagnosticsResponse);

        // Dish
        DishGetContext = "dish.get_context",
            DishGetContext(DishGetContextRequest) => DishGetContext(DishGetContextResponse);
        /// Generic status query answered by a dish.
        DishGetStatus = "dish.get_status",
            GetStatus(GetStatusRequest) => DishGetStatus(DishGetStatusResponse);
        DishStow = "dish.stow",
            DishStow(DishStowRequest) => DishStow(DishStowResponse);
        DishGetObstructionMap = "dish.get_obstruction_map",
            DishGetObstructionMap(DishGetObstructionMapRequest)
                => DishGetObstructionMap(DishGetObstructionMapResponse);
        DishClearObstructionMap = "dish.clear_obstruction_map",
            DishClearObstructionMap(DishClearObstructionMapRequest)
                => DishClearObstructionMap(DishClearObstructionMapResponse);
        DishGetEmc = "dish.get_emc",
            DishGetEmc(DishGetEmcRequest) => DishGetEmc(DishGetEmcResponse);
        DishSetEmc = "dish.set_emc",
            DishSetEmc(DishSetEmcRequest) => DishSetEmc(DishSetEmcResponse);
        DishGetConfig = "dish.get_config",
            DishGetConfig(DishGetConfigRequest) => DishGetConfig(DishGetConfigResponse);
        DishSetConfig = "dish.set_config",
            DishSetConfig(DishSetConfigRequest) => DishSetConfig(DishSetConfigResponse);
        DishActivateRssiScan = "dish.activate_rssi_scan",
            DishActivateRssiScan(DishActivateRssiScanRequest)
                => DishActivateRssiScan(DishActivateRssiScanResponse);
        DishGetRssiScanResult = "dish.get_rssi_scan_result",
            DishGetRssiScanResult(DishGetRssiScanResultRequest)
                => DishGetRssiScanResult(DishGetRssiScanResultResponse);
        /// Generic diagnostics query answered by a dish.
        DishGetDiagnostics = "dish.get_diagnostics",
            GetDiagnostics(GetDiagnosticsRequest) => DishGetDiagnostics(DishGetDiagnosticsResponse);

        // WiFi
        WifiGetClients = "wifi.get_clients",
            WifiGetClients(WifiGetClientsRequest) => WifiGetClients(WifiGetClientsResponse);
        WifiGetConfig = "wifi.get_config",
            WifiGetConfig(WifiGetConfigRequest) => WifiGetConfig(WifiGetConfigResponse);
        WifiSetConfig = "wifi.set_config",
            WifiSetConfig(WifiSetConfigRequest) => WifiSetConfig(WifiSetConfigResponse);
        WifiSetup = "wifi.setup",
            WifiSetup(WifiSetupRequest) => WifiSetup(WifiSetupResponse);
        /// Generic status query answered by a router.
        WifiGetStatus = "wifi.get_status",
            GetStatus(GetStatusRequest) => WifiGetStatus(WifiGetStatusResponse);
        WifiGetPingMetrics = "wifi.get_ping_metrics",
            WifiGetPingMetrics(WifiGetPingMetricsRequest)
                => WifiGetPingMetrics(WifiGetPingMetricsResponse);
        WifiGetClientHistory = "wifi.get_client_history",
            WifiGetClientHistory(WifiGetClientHistoryRequest)
                => WifiGetClientHistory(WifiGetClientHistoryResponse);
        WifiSetClientGivenName = "wifi.set_client_given_name",
            WifiSetClientGivenName(WifiSetClientGivenNameRequest)
                => WifiSetClientGivenName(WifiSetClientGivenNameResponse);
        /// Last stored self test report.
        WifiGetDiagnostics = "wifi.get_diagnostics",
            WifiSelfTest(WifiSelfTestRequest) => WifiSelfTest(WifiSelfTestResponse);
        WifiRunSelfTest = "wifi.run_self_test",
            WifiRunSelfTest(WifiRunSelfTestRequest) => WifiRunSelfTest(WifiSelfTestResponse);
        WifiGetFirewall = "wifi.get_firewall",
            WifiGetFirewall(WifiGetFirewallRequest) => WifiGetFirewall(WifiGetFirewallResponse);
        WifiGuestInfo = "wifi.get_guest_info",
            WifiGuestInfo(WifiGuestInfoRequest) => WifiGuestInfo(WifiGuestInfoResponse);

        // Transceiver
        /// Generic status query answered by a transceiver.
        TransceiverGetStatus = "transceiver.get_status",
            GetStatus(GetStatusRequest) => TransceiverGetStatus(TransceiverGetStatusResponse);
        TransceiverGetTelemetry = "transceiver.get_telemetry",
            TransceiverGetTelemetry(TransceiverGetTelemetryRequest)
                => TransceiverGetTelemetry(TransceiverGetTelemetryResponse);
        TransceiverIfLoopbackTest = "transceiver.if_loopback_test",
            TransceiverIfLoopbackTest(TransceiverIfLoopbackTestRequest)
                => TransceiverIfLoopbackTest(TransceiverIfLoopbackTestResponse);
    }

    /// Generic status query answered by whichever device is on the line.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct GetStatus;

    impl Operation for GetStatus {
        type Input = GetStatusRequest;
        type Output = DeviceStatus;

        const LABEL: &'static str = "device.get_status";
        const REQUEST_TAG: RequestTag = RequestTag::GetStatus;
        const EXPECTED: &'static [ResponseTag] = &[
            ResponseTag::DishGetStatus,
            ResponseTag::WifiGetStatus,
            ResponseTag::TransceiverGetStatus,
        ];

        fn wrap(input: Self::Input) -> request::Payload {
            request::Payload::GetStatus(input)
        }

        fn unwrap(payload: Option<response::Payload>) -> Result<Self::Output, Option<ResponseTag>> {
            match payload {
                Some(response::Payload::DishGetStatus(status)) => Ok(DeviceStatus::Dish(status)),
                Some(response::Payload::WifiGetStatus(status)) => Ok(DeviceStatus::Wifi(status)),
                Some(response::Payload::TransceiverGetStatus(status)) => {
                    Ok(DeviceStatus::Transceiver(status))
                }
                other => Err(observed(other.as_ref())),
            }
        }
    }

    /// Power save schedule. The device's reply carries nothing of interest.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct DishPowerSave;

    impl Operation for DishPowerSave {
        type Input = DishPowerSaveRequest;
        type Output = ();

        const LABEL: &'static str = "dish.set_power_save";
        const REQUEST_TAG: RequestTag = RequestTag::DishPowerSave;
        const EXPECTED: &'static [ResponseTag] = &[];

        fn wrap(input: Self::Input) -> request::Payload {
            request::Payload::DishPowerSave(input)
        }

        fn unwrap(
            _payload: Option<response::Payload>,
        ) -> Result<Self::Output, Option<ResponseTag>> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ops::*;
    use super::*;
    use crate::types::{
        DeviceStatus, DishGetStatusResponse, DishPowerSaveResponse, GetDeviceInfoResponse,
        TransceiverGetStatusResponse, WifiGetStatusResponse, WifiSelfTestResponse,
    };

    fn wraps_into_own_tag<Op: Operation>() {
        let payload = Op::wrap(Op::Input::default());
        assert_eq!(payload.tag(), Op::REQUEST_TAG, "{}", Op::LABEL);
    }

    #[test]
    fn test_every_operation_wraps_into_its_request_tag() {
        wraps_into_own_tag::<GetDeviceInfo>();
        wraps_into_own_tag::<GetStatus>();
        wraps_into_own_tag::<Reboot>();
        wraps_into_own_tag::<GetLog>();
        wraps_into_own_tag::<GetLocation>();
        wraps_into_own_tag::<SpeedTest>();
        wraps_into_own_tag::<GetPing>();
        wraps_into_own_tag::<PingHost>();
        wraps_into_own_tag::<GetNetworkInterfaces>();
        wraps_into_own_tag::<GetDiagnostics>();
        wraps_into_own_tag::<DishGetContext>();
        wraps_into_own_tag::<DishGetStatus>();
        wraps_into_own_tag::<DishStow>();
        wraps_into_own_tag::<DishGetObstructionMap>();
        wraps_into_own_tag::<DishClearObstructionMap>();
        wraps_into_own_tag::<DishGetEmc>();
        wraps_into_own_tag::<DishSetEmc>();
        wraps_into_own_tag::<DishGetConfig>();
        wraps_into_own_tag::<DishSetConfig>();
        wraps_into_own_tag::<DishPowerSave>();
        wraps_into_own_tag::<DishActivateRssiScan>();
        wraps_into_own_tag::<DishGetRssiScanResult>();
        wraps_into_own_tag::<DishGetDiagnostics>();
        wraps_into_own_tag::<WifiGetClients>();
        wraps_into_own_tag::<WifiGetConfig>();
        wraps_into_own_tag::<WifiSetConfig>();
        wraps_into_own_tag::<WifiSetup>();
        wraps_into_own_tag::<WifiGetStatus>();
        wraps_into_own_tag::<WifiGetPingMetrics>();
        wraps_into_own_tag::<WifiGetClientHistory>();
        wraps_into_own_tag::<WifiSetClientGivenName>();
        wraps_into_own_tag::<WifiGetDiagnostics>();
        wraps_into_own_tag::<WifiRunSelfTest>();
        wraps_into_own_tag::<WifiGetFirewall>();
        wraps_into_own_tag::<WifiGuestInfo>();
        wraps_into_own_tag::<TransceiverGetStatus>();
        wraps_into_own_tag::<TransceiverGetTelemetry>();
        wraps_into_own_tag::<TransceiverIfLoopbackTest>();
    }

    #[test]
    fn test_status_query_shares_request_tag() {
        assert_eq!(DishGetStatus::REQUEST_TAG, RequestTag::GetStatus);
        assert_eq!(WifiGetStatus::REQUEST_TAG, RequestTag::GetStatus);
        assert_eq!(TransceiverGetStatus::REQUEST_TAG, RequestTag::GetStatus);
        assert_eq!(DishGetStatus::EXPECTED, &[ResponseTag::DishGetStatus]);
        assert_eq!(WifiGetStatus::EXPECTED, &[ResponseTag::WifiGetStatus]);
    }

    #[test]
    fn test_unwrap_expected_payload() {
        let info = GetDeviceInfoResponse::default();
        let output =
            GetDeviceInfo::unwrap(Some(response::Payload::GetDeviceInfo(info.clone()))).unwrap();
        assert_eq!(output, info);
    }

    #[test]
    fn test_unwrap_reports_observed_tag() {
        let wrong = response::Payload::WifiGetStatus(WifiGetStatusResponse::default());
        assert_eq!(
            DishGetStatus::unwrap(Some(wrong)).unwrap_err(),
            Some(ResponseTag::WifiGetStatus)
        );
        assert_eq!(GetDeviceInfo::unwrap(None).unwrap_err(), None);
    }

    #[test]
    fn test_self_test_variants_are_distinct() {
        let stored = response::Payload::WifiSelfTest(WifiSelfTestResponse::default());
        assert!(WifiGetDiagnostics::unwrap(Some(stored.clone())).is_ok());
        assert_eq!(
            WifiRunSelfTest::unwrap(Some(stored)).unwrap_err(),
            Some(ResponseTag::WifiSelfTest)
        );
    }

    #[test]
    fn test_device_status_accepts_each_device_kind() {
        let dish = GetStatus::unwrap(Some(response::Payload::DishGetStatus(
            DishGetStatusResponse::default(),
        )))
        .unwrap();
        assert!(matches!(dish, DeviceStatus::Dish(_)));

        let wifi = GetStatus::unwrap(Some(response::Payload::WifiGetStatus(
            WifiGetStatusResponse::default(),
        )))
        .unwrap();
        assert!(matches!(wifi, DeviceStatus::Wifi(_)));

        let transceiver = GetStatus::unwrap(Some(response::Payload::TransceiverGetStatus(
            TransceiverGetStatusResponse::default(),
        )))
        .unwrap();
        assert!(matches!(transceiver, DeviceStatus::Transceiver(_)));

        let other = GetStatus::unwrap(Some(response::Payload::GetDeviceInfo(
            GetDeviceInfoResponse::default(),
        )));
        assert_eq!(other.unwrap_err(), Some(ResponseTag::GetDeviceInfo));
    }

    #[test]
    fn test_void_operation_accepts_anything() {
        assert!(DishPowerSave::EXPECTED.is_empty());
        assert!(DishPowerSave::unwrap(None).is_ok());
        assert!(
            DishPowerSave::unwrap(Some(response::Payload::DishPowerSave(
                DishPowerSaveResponse::default()
            )))
            .is_ok()
        );
        assert!(
            DishPowerSave::unwrap(Some(response::Payload::WifiGetStatus(
                WifiGetStatusResponse::default()
            )))
            .is_ok()
        );
    }
}
