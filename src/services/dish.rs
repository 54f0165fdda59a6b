//! Dish operations.

use std::sync::Arc;

use crate::dispatch::Dispatcher;
use crate::protocol::ops;
use crate::transport::Transport;
use crate::types::{
    DishActivateRssiScanRequest, DishActivateRssiScanResponse, DishClearObstructionMapResponse,
    DishGetConfigResponse, DishGetContextResponse, DishGetDiagnosticsResponse, DishGetEmcResponse,
    DishGetObstructionMapResponse, DishGetRssiScanResultResponse, DishGetStatusResponse,
    DishPowerSaveRequest, DishSetConfigRequest, DishSetConfigResponse, DishSetEmcRequest,
    DishSetEmcResponse, DishStowRequest, DishStowResponse,
};

/// Positioning, obstruction and configuration of the dish.
pub struct DishService<T: Transport> {
    dispatcher: Arc<Dispatcher<T>>,
}

impl<T: Transport> DishService<T> {
    #[must_use]
    pub const fn new(dispatcher: Arc<Dispatcher<T>>) -> Self {
        Self { dispatcher }
    }

    service_methods! {
        /// Returns the serving cell and current sky view.
        fn get_context() -> DishGetContextResponse => ops::DishGetContext;

        /// Returns the dish status.
        ///
        /// Fails with a protocol mismatch if the device on the line is not a
        /// dish.
        fn get_status() -> DishGetStatusResponse => ops::DishGetStatus;

        /// Stows the dish, or unstows it when `request.unstow` is set.
        fn stow(request: DishStowRequest) -> DishStowResponse => ops::DishStow;

        fn get_obstruction_map() -> DishGetObstructionMapResponse => ops::DishGetObstructionMap;

        /// Discards the accumulated obstruction map.
        fn clear_obstruction_map() -> DishClearObstructionMapResponse
            => ops::DishClearObstructionMap;

        fn get_emc() -> DishGetEmcResponse => ops::DishGetEmc;

        fn set_emc(request: DishSetEmcRequest) -> DishSetEmcResponse => ops::DishSetEmc;

        fn get_config() -> DishGetConfigResponse => ops::DishGetConfig;

        /// Applies the fields of `request.dish_config` whose `apply_*` flag is set.
        fn set_config(request: DishSetConfigRequest) -> DishSetConfigResponse => ops::DishSetConfig;

        /// Sets the power save schedule. Whatever the device replies is ignored.
        fn set_power_save(request: DishPowerSaveRequest) -> () => ops::DishPowerSave;

        /// Starts an RSSI scan. Poll [`get_rssi_scan_result`](Self::get_rssi_scan_result)
        /// for the samples.
        fn activate_rssi_scan(request: DishActivateRssiScanRequest)
            -> DishActivateRssiScanResponse => ops::DishActivateRssiScan;

        fn get_rssi_scan_result() -> DishGetRssiScanResultResponse => ops::DishGetRssiScanResult;

        fn get_diagnostics() -> DishGetDiagnosticsResponse => ops::DishGetDiagnostics;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{RequestTag, response};
    use crate::services::test_dispatcher;
    use crate::types::{
        DishAlerts, DishConfig, ObstructionStats, RssiScanSample, SnowMeltMode,
        TransceiverGetTelemetryResponse, WifiGetStatusResponse,
    };

    fn decoy() -> response::Payload {
        response::Payload::TransceiverGetTelemetry(TransceiverGetTelemetryResponse::default())
    }

    #[tokio::test]
    async fn test_dish_operations() {
        let (transport, dispatcher) = test_dispatcher();
        let dish = DishService::new(dispatcher);

        assert_operation!(
            transport,
            dish.get_context(),
            DishGetContext => DishGetContext(DishGetContextResponse {
                cell_id: 4411,
                pop_rack_id: 2,
                obstruction_fraction: 0.02,
                ..DishGetContextResponse::default()
            }),
            decoy: decoy()
        );
        assert_operation!(
            transport,
            dish.get_status(),
            GetStatus => DishGetStatus(DishGetStatusResponse {
                uptime_s: 86_400,
                pop_ping_latency_ms: 31.5,
                obstruction_stats: Some(ObstructionStats {
                    currently_obstructed: false,
                    fraction_obstructed: 0.01,
                    valid_s: 3600.0,
                }),
                alerts: Some(DishAlerts::default()),
                ..DishGetStatusResponse::default()
            }),
            decoy: decoy()
        );
        assert_operation!(
            transport,
            dish.stow(DishStowRequest { unstow: false }),
            DishStow => DishStow(DishStowResponse {}),
            decoy: decoy()
        );
        assert_operation!(
            transport,
            dish.get_obstruction_map(),
            DishGetObstructionMap => DishGetObstructionMap(DishGetObstructionMapResponse {
                num_rows: 2,
                num_cols: 2,
                snr: vec![1.0, -1.0, 0.5, 1.0],
                ..DishGetObstructionMapResponse::default()
            }),
            decoy: decoy()
        );
        assert_operation!(
            transport,
            dish.clear_obstruction_map(),
            DishClearObstructionMap => DishClearObstructionMap(DishClearObstructionMapResponse {}),
            decoy: decoy()
        );
        assert_operation!(
            transport,
            dish.get_emc(),
            DishGetEmc => DishGetEmc(DishGetEmcResponse {
                theta: 12.5,
                rx_chan: 3,
                ..DishGetEmcResponse::default()
            }),
            decoy: decoy()
        );
        assert_operation!(
            transport,
            dish.set_emc(DishSetEmcRequest {
                theta: 12.5,
                ..DishSetEmcRequest::default()
            }),
            DishSetEmc => DishSetEmc(DishSetEmcResponse {}),
            decoy: decoy()
        );

        let config = DishConfig {
            snow_melt_mode: SnowMeltMode::AlwaysOn as i32,
            apply_snow_melt_mode: true,
            ..DishConfig::default()
        };
        assert_operation!(
            transport,
            dish.get_config(),
            DishGetConfig => DishGetConfig(DishGetConfigResponse {
                dish_config: Some(config.clone()),
            }),
            decoy: decoy()
        );
        assert_operation!(
            transport,
            dish.set_config(DishSetConfigRequest {
                dish_config: Some(config.clone()),
            }),
            DishSetConfig => DishSetConfig(DishSetConfigResponse {
                updated_dish_config: Some(config.clone()),
            }),
            decoy: decoy()
        );
        assert_operation!(
            transport,
            dish.activate_rssi_scan(DishActivateRssiScanRequest {
                scan_duration_s: 30,
                channels: vec![1, 2, 3],
            }),
            DishActivateRssiScan => DishActivateRssiScan(DishActivateRssiScanResponse {
                success: true,
            }),
            decoy: decoy()
        );
        assert_operation!(
            transport,
            dish.get_rssi_scan_result(),
            DishGetRssiScanResult => DishGetRssiScanResult(DishGetRssiScanResultResponse {
                samples: vec![RssiScanSample {
                    frequency_mhz: 10_950.0,
                    rssi_dbm: -71.0,
                }],
                scan_complete: true,
            }),
            decoy: decoy()
        );
        assert_operation!(
            transport,
            dish.get_diagnostics(),
            GetDiagnostics => DishGetDiagnostics(DishGetDiagnosticsResponse {
                id: "ut01000000".into(),
                hardware_self_test_passed: true,
                ..DishGetDiagnosticsResponse::default()
            }),
            decoy: decoy()
        );
    }

    #[tokio::test]
    async fn test_set_power_save_sends_request() {
        let (transport, dispatcher) = test_dispatcher();
        let dish = DishService::new(dispatcher);

        // Any reply is accepted, including one meant for another operation.
        transport
            .set_reply(response::Payload::WifiGetStatus(WifiGetStatusResponse::default()))
            .await;
        dish.set_power_save(DishPowerSaveRequest {
            power_save_start_minutes: 60,
            power_save_duration_minutes: 240,
            enable_power_save: true,
        })
        .await
        .unwrap();

        let requests = transport.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].tag(), Some(RequestTag::DishPowerSave));
    }

    #[tokio::test]
    async fn test_get_status_from_router_is_mismatch() {
        let (transport, dispatcher) = test_dispatcher();
        let dish = DishService::new(dispatcher);

        transport
            .set_reply(response::Payload::WifiGetStatus(WifiGetStatusResponse::default()))
            .await;
        let err = dish.get_status().await.unwrap_err();
        assert!(err.is_protocol_mismatch());
        assert!(err.message().contains("wifiGetStatus"));
        assert!(err.message().contains("dishGetStatus"));
    }
}
