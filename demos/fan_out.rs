//! # Example: fan_out
//!
//! Registers a few clients with a [`Driver`] and emits both event kinds.
//!
//! Shows how to:
//! - Implement the [`Client`] trait with an exhaustive `match`.
//! - Mix custom, closure and built-in ([`LogWriter`]) clients.
//! - Forward events to async clients through a [`ClientSet`] and drain it on exit.
//! - Switch the failure policy with [`Config`].
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example fan_out
//! ```

use std::rc::Rc;
use std::sync::Arc;

use pyo3_question::{
    AsyncClient, Client, ClientError, ClientFn, ClientSet, Config, Driver, Event, EventA, EventB,
    LogWriter,
};
use tracing_subscriber::{fmt, EnvFilter};

/// Mirrors the Python sample client.
struct MyClient;

impl Client for MyClient {
    fn handle_event(&mut self, event: &Event) -> Result<(), ClientError> {
        match event {
            Event::EventA(EventA { field_a1, field_a2 }) => {
                println!("got A(a1={field_a1}, a2={field_a2})")
            }
            Event::EventB(EventB { field_b1, field_b2 }) => {
                println!("got B(b1={field_b1}, b2={field_b2})")
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "my-client"
    }
}

/// Async client running on its own worker.
struct Slow;

#[async_trait::async_trait]
impl AsyncClient for Slow {
    async fn handle_event(&self, event: &Event) -> Result<(), ClientError> {
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        println!("[slow] {:?}", event.kind());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "slow"
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // The set stays ours; the driver only gets a forwarding handle.
    let set = Rc::new(ClientSet::new(vec![Arc::new(Slow) as Arc<dyn AsyncClient>]));
    let forward = Rc::clone(&set);

    let mut driver = Driver::new(vec![
        Box::new(MyClient),
        Box::new(LogWriter::new()),
        ClientFn::boxed("forward", move |ev: &Event| {
            forward.emit(ev);
            Ok(())
        }),
    ]);
    driver.emit_event_a(100, false)?;
    driver.emit_event_b(3.4, 20)?;
    drop(driver);

    // Failures: keep going and report all of them.
    let mut lenient = Driver::builder(Config::continue_on_error())
        .with_clients(vec![
            Box::new(MyClient),
            ClientFn::boxed("picky", |ev: &Event| match ev {
                Event::EventB(EventB { field_b2, .. }) if *field_b2 < 0 => {
                    Err(ClientError::failed("negative field_b2"))
                }
                _ => Ok(()),
            }),
            Box::new(LogWriter::new()),
        ])
        .build();

    if let Err(err) = lenient.emit_event_b(1.0, -5) {
        println!("dispatch error [{}]: {err}", err.as_label());
    }

    // Drain the queued client before exiting.
    if let Ok(set) = Rc::try_unwrap(set) {
        set.shutdown().await;
    }
    Ok(())
}
