//! # Python binding (`pyo3_question` module).
//!
//! Exposes the driver to Python:
//!
//! ```text
//! from pyo3_question import Client, Driver, EventA, EventB
//!
//! class MyClient(Client):
//!     def handle_event(self, event):
//!         match event:
//!             case EventA(a1, a2): ...
//!             case EventB(field_b1=b1, field_b2=b2): ...
//!
//! driver = Driver([MyClient()])
//! driver.emit_event_a(100, False)
//! driver.emit_event_b(3.4, 20)
//! ```
//!
//! Python clients are wrapped in [`PythonClient`], which implements [`Client`]
//! by converting each [`Event`] into an `EventA`/`EventB` object and calling
//! the subclass' `handle_event`. An exception raised there stops the fan-out
//! and is re-raised unchanged from `emit_event_*`. With `continue_on_error=True`
//! a `RuntimeError` summarizes all failures and chains the first client
//! exception as its `__cause__`.

use pyo3::exceptions::{PyNotImplementedError, PyRuntimeError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyTuple};

use crate::{
    clients::Client,
    core::{Config, Driver, FailurePolicy},
    error::{ClientError, ClientFailure, DispatchError},
    events::{Event, EventA, EventB},
};

/// Read-only Python view of [`EventA`].
#[pyclass(name = "EventA", module = "pyo3_question", frozen, eq)]
#[derive(Clone, Copy, PartialEq)]
pub struct PyEventA {
    #[pyo3(get)]
    field_a1: i64,
    #[pyo3(get)]
    field_a2: bool,
}

#[pymethods]
impl PyEventA {
    #[new]
    fn new(field_a1: i64, field_a2: bool) -> Self {
        Self { field_a1, field_a2 }
    }

    #[classattr]
    fn __match_args__() -> (&'static str, &'static str) {
        ("field_a1", "field_a2")
    }

    fn __repr__(&self) -> String {
        let a2 = if self.field_a2 { "True" } else { "False" };
        format!("EventA(field_a1={}, field_a2={a2})", self.field_a1)
    }
}

/// Read-only Python view of [`EventB`].
#[pyclass(name = "EventB", module = "pyo3_question", frozen, eq)]
#[derive(Clone, Copy, PartialEq)]
pub struct PyEventB {
    #[pyo3(get)]
    field_b1: f64,
    #[pyo3(get)]
    field_b2: i32,
}

#[pymethods]
impl PyEventB {
    #[new]
    fn new(field_b1: f64, field_b2: i32) -> Self {
        Self { field_b1, field_b2 }
    }

    #[classattr]
    fn __match_args__() -> (&'static str, &'static str) {
        ("field_b1", "field_b2")
    }

    fn __repr__(&self) -> String {
        format!("EventB(field_b1={:?}, field_b2={})", self.field_b1, self.field_b2)
    }
}

fn event_to_py<'py>(py: Python<'py>, event: &Event) -> PyResult<Bound<'py, PyAny>> {
    Ok(match *event {
        Event::EventA(EventA { field_a1, field_a2 }) => {
            Bound::new(py, PyEventA { field_a1, field_a2 })?.into_any()
        }
        Event::EventB(EventB { field_b1, field_b2 }) => {
            Bound::new(py, PyEventB { field_b1, field_b2 })?.into_any()
        }
    })
}

/// Base class for Python clients; subclasses override `handle_event`.
#[pyclass(name = "Client", module = "pyo3_question", subclass)]
pub struct PyClient {}

#[pymethods]
impl PyClient {
    // Accepts and ignores arguments so subclasses can define their own `__init__`.
    #[new]
    #[pyo3(signature = (*_args, **_kwargs))]
    fn new(_args: &Bound<'_, PyTuple>, _kwargs: Option<&Bound<'_, PyDict>>) -> Self {
        Self {}
    }

    fn handle_event(&self, _event: &Bound<'_, PyAny>) -> PyResult<()> {
        Err(PyNotImplementedError::new_err(
            "Client subclasses must override handle_event(self, event)",
        ))
    }
}

/// Adapter that lets a Python `Client` instance sit in a [`Driver`].
pub struct PythonClient {
    obj: Py<PyClient>,
    name: String,
}

impl PythonClient {
    fn new(obj: &Bound<'_, PyClient>) -> Self {
        let name = obj
            .get_type()
            .qualname()
            .map(|n| n.to_string())
            .unwrap_or_else(|_| "Client".to_owned());
        Self {
            obj: obj.clone().unbind(),
            name,
        }
    }
}

impl Client for PythonClient {
    fn handle_event(&mut self, event: &Event) -> Result<(), ClientError> {
        Python::with_gil(|py| {
            let ev = event_to_py(py, event)?;
            self.obj.bind(py).call_method1("handle_event", (ev,))?;
            Ok(())
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn dispatch_error_to_py(py: Python<'_>, err: DispatchError) -> PyErr {
    let message = err.to_string();
    let failures = match err {
        DispatchError::Aborted {
            failure:
                ClientFailure {
                    source: ClientError::Python(exc),
                    ..
                },
            ..
        } => return exc,
        DispatchError::Aborted { failure, .. } => vec![failure],
        DispatchError::Partial { failures, .. } => failures,
    };

    // First Python exception becomes `__cause__`.
    let cause = failures.into_iter().find_map(|f| match f.source {
        ClientError::Python(exc) => Some(exc),
        _ => None,
    });
    let summary = PyRuntimeError::new_err(message);
    summary.set_cause(py, cause);
    summary
}

/// Python `Driver`. Not thread-safe: bound to the thread that created it.
#[pyclass(name = "Driver", module = "pyo3_question", unsendable)]
pub struct PyDriver {
    inner: Driver,
}

#[pymethods]
impl PyDriver {
    #[new]
    #[pyo3(signature = (clients, continue_on_error = false))]
    fn new(clients: Vec<Bound<'_, PyClient>>, continue_on_error: bool) -> Self {
        let failure = if continue_on_error {
            FailurePolicy::Continue
        } else {
            FailurePolicy::FailFast
        };
        let clients = clients
            .iter()
            .map(|c| Box::new(PythonClient::new(c)) as Box<dyn Client>)
            .collect();
        Self {
            inner: Driver::builder(Config { failure })
                .with_clients(clients)
                .build(),
        }
    }

    fn emit_event_a(&mut self, py: Python<'_>, field_a1: i64, field_a2: bool) -> PyResult<()> {
        self.inner
            .emit_event_a(field_a1, field_a2)
            .map_err(|err| dispatch_error_to_py(py, err))
    }

    fn emit_event_b(&mut self, py: Python<'_>, field_b1: f64, field_b2: i32) -> PyResult<()> {
        self.inner
            .emit_event_b(field_b1, field_b2)
            .map_err(|err| dispatch_error_to_py(py, err))
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }
}

#[pymodule]
fn pyo3_question(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyClient>()?;
    m.add_class::<PyDriver>()?;
    m.add_class::<PyEventA>()?;
    m.add_class::<PyEventB>()?;
    Ok(())
}
