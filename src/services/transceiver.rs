//! RF transceiver operations.

use std::sync::Arc;

use crate::dispatch::Dispatcher;
use crate::protocol::ops;
use crate::transport::Transport;
use crate::types::{
    TransceiverGetStatusResponse, TransceiverGetTelemetryResponse,
    TransceiverIfLoopbackTestRequest, TransceiverIfLoopbackTestResponse,
};

/// RF transceiver diagnostics.
pub struct TransceiverService<T: Transport> {
    dispatcher: Arc<Dispatcher<T>>,
}

impl<T: Transport> TransceiverService<T> {
    #[must_use]
    pub const fn new(dispatcher: Arc<Dispatcher<T>>) -> Self {
        Self { dispatcher }
    }

    service_methods! {
        fn get_status() -> TransceiverGetStatusResponse => ops::TransceiverGetStatus;

        fn get_telemetry() -> TransceiverGetTelemetryResponse => ops::TransceiverGetTelemetry;

        /// Runs the intermediate-frequency loopback test.
        fn if_loopback_test(request: TransceiverIfLoopbackTestRequest)
            -> TransceiverIfLoopbackTestResponse => ops::TransceiverIfLoopbackTest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::response;
    use crate::services::test_dispatcher;
    use crate::types::{DishStowResponse, ModulatorState};

    fn decoy() -> response::Payload {
        response::Payload::DishStow(DishStowResponse {})
    }

    #[tokio::test]
    async fn test_transceiver_operations() {
        let (transport, dispatcher) = test_dispatcher();
        let transceiver = TransceiverService::new(dispatcher);

        assert_operation!(
            transport,
            transceiver.get_status(),
            GetStatus => TransceiverGetStatus(TransceiverGetStatusResponse {
                modulator_state: ModulatorState::Enabled as i32,
                gps_valid: true,
                gps_sats: 11,
                ..TransceiverGetStatusResponse::default()
            }),
            decoy: decoy()
        );
        assert_operation!(
            transport,
            transceiver.get_telemetry(),
            TransceiverGetTelemetry => TransceiverGetTelemetry(TransceiverGetTelemetryResponse {
                antenna_pitch: 12.0,
                rx_channel: 4,
                ..TransceiverGetTelemetryResponse::default()
            }),
            decoy: decoy()
        );
        assert_operation!(
            transport,
            transceiver.if_loopback_test(TransceiverIfLoopbackTestRequest {
                enable_if_slice: true,
            }),
            TransceiverIfLoopbackTest => TransceiverIfLoopbackTest(
                TransceiverIfLoopbackTestResponse {
                    ber_loopback_test: 0.0001,
                    rssi_loopback_test: -40.0,
                    pass_loopback_test: true,
                }
            ),
            decoy: decoy()
        );
    }
}
