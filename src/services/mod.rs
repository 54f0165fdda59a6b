//! Capability services.
//!
//! Each service groups the operations of one device capability. Methods are
//! declared as rows binding a name and signature to an operation marker;
//! all of them go through the shared [`Dispatcher`](crate::dispatch::Dispatcher).

/// Declares service methods that forward to the dispatcher.
///
/// Methods without an argument send the request's default value.
macro_rules! service_methods {
    ($(
        $(#[$meta:meta])*
        fn $name:ident($($arg:ident: $input:ty)?) -> $output:ty => $op:path;
    )*) => {
        $(
            $(#[$meta])*
            pub async fn $name(&self $(, $arg: $input)?) -> crate::error::Result<$output> {
                self.dispatcher
                    .call::<$op>(service_methods!(@input $($arg)?))
                    .await
            }
        )*
    };
    (@input) => {
        None
    };
    (@input $arg:ident) => {
        Some($arg)
    };
}

/// Checks that a service call sends one envelope with the given request tag,
/// returns the reply unwrapped, and rejects an unrelated reply.
#[cfg(test)]
macro_rules! assert_operation {
    (
        $transport:expr,
        $call:expr,
        $request:ident => $response:ident($value:expr),
        decoy: $decoy:expr
    ) => {{
        let value = $value;
        let before = $transport.requests().await.len();

        $transport
            .set_reply(crate::protocol::response::Payload::$response(value.clone()))
            .await;
        assert_eq!($call.await.unwrap(), value);

        let requests = $transport.requests().await;
        assert_eq!(requests.len(), before + 1);
        assert_eq!(
            requests[before].tag(),
            Some(crate::protocol::RequestTag::$request)
        );

        $transport.set_reply($decoy).await;
        let err = $call.await.unwrap_err();
        assert!(err.is_protocol_mismatch(), "{err}");
    }};
}

pub mod device;
pub mod dish;
pub mod transceiver;
pub mod wifi;

pub use device::DeviceService;
pub use dish::DishService;
pub use transceiver::TransceiverService;
pub use wifi::WifiService;

#[cfg(test)]
pub(crate) fn test_dispatcher() -> (
    crate::transport::MemoryTransport,
    std::sync::Arc<crate::dispatch::Dispatcher<crate::transport::MemoryTransport>>,
) {
    let transport = crate::transport::MemoryTransport::new(|_| {
        Err(crate::error::Error::not_supported("no reply configured"))
    });
    let dispatcher = crate::dispatch::Dispatcher::new(
        std::sync::Arc::new(crate::config::ClientConfig::default()),
        transport.clone(),
    );
    (transport, std::sync::Arc::new(dispatcher))
}
