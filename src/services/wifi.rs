//! Router (WiFi) operations.

use std::sync::Arc;

use crate::dispatch::Dispatcher;
use crate::protocol::ops;
use crate::transport::Transport;
use crate::types::{
    WifiGetClientHistoryRequest, WifiGetClientHistoryResponse, WifiGetClientsResponse,
    WifiGetConfigResponse, WifiGetFirewallResponse, WifiGetPingMetricsResponse,
    WifiGetStatusResponse, WifiGuestInfoResponse, WifiSelfTestResponse,
    WifiSetClientGivenNameRequest, WifiSetClientGivenNameResponse, WifiSetConfigRequest,
    WifiSetConfigResponse, WifiSetupRequest, WifiSetupResponse,
};

/// Router management.
pub struct WifiService<T: Transport> {
    dispatcher: Arc<Dispatcher<T>>,
}

impl<T: Transport> WifiService<T> {
    #[must_use]
    pub const fn new(dispatcher: Arc<Dispatcher<T>>) -> Self {
        Self { dispatcher }
    }

    service_methods! {
        /// Lists associated clients.
        fn get_clients() -> WifiGetClientsResponse => ops::WifiGetClients;

        fn get_config() -> WifiGetConfigResponse => ops::WifiGetConfig;

        fn set_config(request: WifiSetConfigRequest) -> WifiSetConfigResponse => ops::WifiSetConfig;

        /// Performs first-time setup of the primary network.
        fn setup(request: WifiSetupRequest) -> WifiSetupResponse => ops::WifiSetup;

        /// Returns the router status.
        ///
        /// Fails with a protocol mismatch if the device on the line is not a
        /// router.
        fn get_status() -> WifiGetStatusResponse => ops::WifiGetStatus;

        fn get_ping_metrics() -> WifiGetPingMetricsResponse => ops::WifiGetPingMetrics;

        fn get_client_history(request: WifiGetClientHistoryRequest)
            -> WifiGetClientHistoryResponse => ops::WifiGetClientHistory;

        fn set_client_given_name(request: WifiSetClientGivenNameRequest)
            -> WifiSetClientGivenNameResponse => ops::WifiSetClientGivenName;

        /// Returns the last self test report without running a new one.
        fn get_diagnostics() -> WifiSelfTestResponse => ops::WifiGetDiagnostics;

        /// Runs the self test and returns its report.
        fn run_self_test() -> WifiSelfTestResponse => ops::WifiRunSelfTest;

        fn get_firewall() -> WifiGetFirewallResponse => ops::WifiGetFirewall;

        fn get_guest_info() -> WifiGuestInfoResponse => ops::WifiGuestInfo;
    }
}
