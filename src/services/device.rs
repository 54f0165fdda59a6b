//! Operations common to every device.

use std::sync::Arc;

use crate::dispatch::Dispatcher;
use crate::protocol::ops;
use crate::transport::Transport;
use crate::types::{
    DeviceStatus, GetDeviceInfoResponse, GetDiagnosticsResponse, GetLocationRequest,
    GetLocationResponse, GetLogResponse, GetNetworkInterfacesResponse, GetPingResponse,
    PingHostRequest, PingHostResponse, RebootResponse, SpeedTestResponse,
};

/// Identity, status, logs and network tools.
pub struct DeviceService<T: Transport> {
    dispatcher: Arc<Dispatcher<T>>,
}

impl<T: Transport> DeviceService<T> {
    #[must_use]
    pub const fn new(dispatcher: Arc<Dispatcher<T>>) -> Self {
        Self { dispatcher }
    }

    service_methods! {
        /// Returns hardware and software identity.
        fn get_info() -> GetDeviceInfoResponse => ops::GetDeviceInfo;

        /// Returns the status of whichever device answers.
        ///
        /// A dish, a router and a transceiver each answer with their own
        /// status message.
        fn get_status() -> DeviceStatus => ops::GetStatus;

        /// Reboots the device.
        fn reboot() -> RebootResponse => ops::Reboot;

        fn get_logs() -> GetLogResponse => ops::GetLog;

        /// Returns the device's position from the requested source.
        fn get_location(request: GetLocationRequest) -> GetLocationResponse => ops::GetLocation;

        /// Runs a speed test. This takes several seconds on the device.
        fn speed_test() -> SpeedTestResponse => ops::SpeedTest;

        fn get_ping() -> GetPingResponse => ops::GetPing;

        /// Pings `request.address` from the device.
        fn ping_host(request: PingHostRequest) -> PingHostResponse => ops::PingHost;

        fn get_network_interfaces() -> GetNetworkInterfacesResponse => ops::GetNetworkInterfaces;

        fn get_diagnostics() -> GetDiagnosticsResponse => ops::GetDiagnostics;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{RequestTag, response};
    use crate::services::test_dispatcher;
    use crate::types::{
        DeviceInfo, DishGetStatusResponse, LatLonAlt, NetworkInterface, PingResult, PositionSource,
        TransceiverGetStatusResponse, TransceiverGetTelemetryResponse, WifiGetStatusResponse,
    };

    fn decoy() -> response::Payload {
        response::Payload::TransceiverGetTelemetry(TransceiverGetTelemetryResponse::default())
    }

    #[tokio::test]
    async fn test_device_operations() {
        let (transport, dispatcher) = test_dispatcher();
        let device = DeviceService::new(dispatcher);

        assert_operation!(
            transport,
            device.get_info(),
            GetDeviceInfo => GetDeviceInfo(GetDeviceInfoResponse {
                device_info: Some(DeviceInfo {
                    id: "ut01000000-00000000-00abcdef".into(),
                    hardware_version: "rev3_proto2".into(),
                    software_version: "2024.05.0.mr12345".into(),
                    ..DeviceInfo::default()
                }),
            }),
            decoy: decoy()
        );
        assert_operation!(
            transport,
            device.reboot(),
            Reboot => Reboot(RebootResponse {}),
            decoy: decoy()
        );
        assert_operation!(
            transport,
            device.get_logs(),
            GetLog => GetLog(GetLogResponse {
                syslog: "boot ok".into(),
                offline_log: String::new(),
            }),
            decoy: decoy()
        );
        assert_operation!(
            transport,
            device.get_location(GetLocationRequest {
                source: PositionSource::Gnss as i32,
            }),
            GetLocation => GetLocation(GetLocationResponse {
                lla: Some(LatLonAlt {
                    lat: 47.6,
                    lon: -122.3,
                    alt: 56.0,
                }),
                sigma_m: 3.5,
                source: PositionSource::Gnss as i32,
            }),
            decoy: decoy()
        );
        assert_operation!(
            transport,
            device.speed_test(),
            SpeedTest => SpeedTest(SpeedTestResponse {
                download_mbps: 180.0,
                upload_mbps: 20.0,
                latency_ms: 32.0,
                packet_loss: 0.0,
            }),
            decoy: decoy()
        );
        assert_operation!(
            transport,
            device.get_ping(),
            GetPing => GetPing(GetPingResponse {
                results: vec![PingResult {
                    target: "8.8.8.8".into(),
                    dropped: false,
                    latency_ms: 28.0,
                }],
            }),
            decoy: decoy()
        );
        assert_operation!(
            transport,
            device.ping_host(PingHostRequest {
                address: "1.1.1.1".into(),
            }),
            PingHost => PingHost(PingHostResponse::default()),
            decoy: decoy()
        );
        assert_operation!(
            transport,
            device.get_network_interfaces(),
            GetNetworkInterfaces => GetNetworkInterfaces(GetNetworkInterfacesResponse {
                network_interfaces: vec![NetworkInterface::default()],
            }),
            decoy: decoy()
        );
        assert_operation!(
            transport,
            device.get_diagnostics(),
            GetDiagnostics => GetDiagnostics(GetDiagnosticsResponse {
                id: "ut01000000".into(),
                active_alerts: vec!["thermal_throttle".into()],
                ..GetDiagnosticsResponse::default()
            }),
            decoy: decoy()
        );
    }

    #[tokio::test]
    async fn test_get_status_accepts_any_device() {
        let (transport, dispatcher) = test_dispatcher();
        let device = DeviceService::new(dispatcher);

        transport
            .set_reply(response::Payload::DishGetStatus(DishGetStatusResponse {
                uptime_s: 3600,
                ..DishGetStatusResponse::default()
            }))
            .await;
        let status = device.get_status().await.unwrap();
        assert!(matches!(status, DeviceStatus::Dish(ref s) if s.uptime_s == 3600));

        transport
            .set_reply(response::Payload::WifiGetStatus(WifiGetStatusResponse::default()))
            .await;
        assert!(matches!(
            device.get_status().await.unwrap(),
            DeviceStatus::Wifi(_)
        ));

        transport
            .set_reply(response::Payload::TransceiverGetStatus(
                TransceiverGetStatusResponse::default(),
            ))
            .await;
        assert!(matches!(
            device.get_status().await.unwrap(),
            DeviceStatus::Transceiver(_)
        ));

        transport.set_reply(decoy()).await;
        assert!(device.get_status().await.unwrap_err().is_protocol_mismatch());

        let tags: Vec<_> = transport
            .requests()
            .await
            .iter()
            .map(crate::protocol::Request::tag)
            .collect();
        assert_eq!(tags, vec![Some(RequestTag::GetStatus); 4]);
    }
}
