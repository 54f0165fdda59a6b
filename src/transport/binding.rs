//! Connection lifecycle over a [`Transport`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::RwLock;

use crate::error::{Error, Result};
use crate::protocol::{Request, Response};
use crate::transport::Transport;

/// Connection state of a binding.
#[derive(Debug)]
enum ConnectionState<C> {
    Uninitialized,
    /// `generation` tells channels opened by different connects apart.
    Connected { channel: C, generation: u64 },
    Closed,
}

/// Owns at most one channel and opens it on first use.
pub struct Binding<T: Transport> {
    transport: T,
    state: RwLock<ConnectionState<T::Channel>>,
    generations: AtomicU64,
    auto_reconnect: bool,
}

impl<T: Transport> Binding<T> {
    /// Creates an uninitialized binding.
    ///
    /// With `auto_reconnect` unset, a closed binding stays closed.
    #[must_use]
    pub fn new(transport: T, auto_reconnect: bool) -> Self {
        Self {
            transport,
            state: RwLock::new(ConnectionState::Uninitialized),
            generations: AtomicU64::new(0),
            auto_reconnect,
        }
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the open channel, opening it if needed.
    ///
    /// Concurrent first callers race on the write lock; only the winner
    /// opens a channel.
    ///
    /// # Errors
    ///
    /// Returns a connection error if the binding is closed and may not
    /// reconnect, or whatever the transport reports when opening.
    pub async fn ensure_connected(&self) -> Result<T::Channel> {
        self.connect().await.map(|(channel, _)| channel)
    }

    async fn connect(&self) -> Result<(T::Channel, u64)> {
        if let ConnectionState::Connected { channel, generation } = &*self.state.read().await {
            return Ok((channel.clone(), *generation));
        }

        let mut state = self.state.write().await;
        match &*state {
            ConnectionState::Connected { channel, generation } => {
                return Ok((channel.clone(), *generation));
            }
            ConnectionState::Closed if !self.auto_reconnect => {
                return Err(Error::connection("client is closed"));
            }
            ConnectionState::Closed => tracing::debug!("reopening closed channel"),
            ConnectionState::Uninitialized => {}
        }

        let channel = self.transport.open()?;
        let generation = self.generations.fetch_add(1, Ordering::Relaxed);
        *state = ConnectionState::Connected {
            channel: channel.clone(),
            generation,
        };
        Ok((channel, generation))
    }

    /// Sends one envelope over the (lazily opened) channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel cannot be opened or the call fails.
    pub async fn call(&self, request: Request) -> Result<Response> {
        let channel = self.ensure_connected().await?;
        self.transport.handle(channel, request).await
    }

    /// Returns true if a channel is open.
    pub async fn is_ready(&self) -> bool {
        matches!(&*self.state.read().await, ConnectionState::Connected { .. })
    }

    /// Opens the channel if needed and waits until it can carry requests.
    ///
    /// On failure the channel is released, so [`is_ready`](Self::is_ready)
    /// turns false and the next call opens a fresh one.
    ///
    /// # Errors
    ///
    /// Returns a timeout error if `timeout` elapses first, or the
    /// transport's error if the device cannot be reached.
    pub async fn wait_for_ready(&self, timeout: Option<Duration>) -> Result<()> {
        let (channel, generation) = self.connect().await?;
        let ready = self.transport.ready(channel);

        let result = match timeout {
            Some(limit) => tokio::time::timeout(limit, ready).await.unwrap_or_else(|_| {
                Err(Error::timeout(format!(
                    "device not ready after {}ms",
                    limit.as_millis()
                )))
            }),
            None => ready.await,
        };

        if let Err(error) = &result {
            tracing::debug!("device not ready: {}", error);
            self.release(generation).await;
        }
        result
    }

    /// Drops the channel of the given generation if it is still current.
    async fn release(&self, generation: u64) {
        let mut state = self.state.write().await;
        let current = matches!(
            &*state,
            ConnectionState::Connected { generation: g, .. } if *g == generation
        );
        if !current {
            return;
        }

        let previous = std::mem::replace(&mut *state, ConnectionState::Uninitialized);
        drop(state);
        if let ConnectionState::Connected { channel, .. } = previous {
            self.transport.shutdown(channel);
        }
    }

    /// Closes the channel. Calling this more than once is harmless.
    pub async fn close(&self) {
        let previous = {
            let mut state = self.state.write().await;
            std::mem::replace(&mut *state, ConnectionState::Closed)
        };

        if let ConnectionState::Connected { channel, .. } = previous {
            self.transport.shutdown(channel);
        }
    }
}
