use crate::{clients::Client, core::Config};

use super::driver::Driver;

/// Builder for constructing a [`Driver`] with a non-default [`Config`].
pub struct DriverBuilder {
    cfg: Config,
    clients: Vec<Box<dyn Client>>,
}

impl DriverBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            clients: Vec::new(),
        }
    }

    /// Sets the clients, in delivery order.
    ///
    /// Replaces any clients set earlier.
    pub fn with_clients(mut self, clients: Vec<Box<dyn Client>>) -> Self {
        self.clients = clients;
        self
    }

    /// Appends one client after those already set.
    pub fn with_client(mut self, client: impl Client + 'static) -> Self {
        self.clients.push(Box::new(client));
        self
    }

    /// Builds the driver. The client list is fixed from here on.
    pub fn build(self) -> Driver {
        Driver::new_internal(self.cfg, self.clients)
    }
}
