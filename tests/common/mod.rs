#![allow(dead_code)]

use std::cell::{Cell as StdCell, RefCell};

use coolprop_eng::{Error, PropertyEngine, Result};

/// One recorded engine invocation, in the SI units the engine saw.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub output: String,
    pub names: Vec<String>,
    pub values: Vec<f64>,
    /// `Some` for `PropsSI`, `None` for `HAPropsSI`.
    pub fluid: Option<String>,
}

/// Property engine double: returns a fixed outcome and records calls.
pub struct MockEngine {
    outcome: std::result::Result<f64, String>,
    diagnostic: String,
    calls: RefCell<Vec<Call>>,
    diagnostic_reads: StdCell<usize>,
}

impl MockEngine {
    pub fn returning(value: f64) -> Self {
        Self {
            outcome: Ok(value),
            diagnostic: String::new(),
            calls: RefCell::new(Vec::new()),
            diagnostic_reads: StdCell::new(0),
        }
    }

    pub fn raising(message: &str) -> Self {
        Self { outcome: Err(message.to_string()), ..Self::returning(0.0) }
    }

    pub fn with_diagnostic(mut self, text: &str) -> Self {
        self.diagnostic = text.to_string();
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn only_call(&self) -> Call {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one engine call, got {calls:?}");
        calls[0].clone()
    }

    pub fn diagnostic_reads(&self) -> usize {
        self.diagnostic_reads.get()
    }

    fn respond(&self, call: Call) -> Result<f64> {
        self.calls.borrow_mut().push(call);
        self.outcome
            .clone()
            .map_err(|message| Error::Engine { message })
    }
}

impl PropertyEngine for MockEngine {
    fn props_si(
        &self,
        output: &str,
        name1: &str, value1: f64,
        name2: &str, value2: f64,
        fluid: &str,
    ) -> Result<f64> {
        self.respond(Call {
            output: output.into(),
            names: vec![name1.into(), name2.into()],
            values: vec![value1, value2],
            fluid: Some(fluid.into()),
        })
    }

    fn ha_props_si(
        &self,
        output: &str,
        name1: &str, value1: f64,
        name2: &str, value2: f64,
        name3: &str, value3: f64,
    ) -> Result<f64> {
        self.respond(Call {
            output: output.into(),
            names: vec![name1.into(), name2.into(), name3.into()],
            values: vec![value1, value2, value3],
            fluid: None,
        })
    }

    fn last_error(&self) -> String {
        self.diagnostic_reads.set(self.diagnostic_reads.get() + 1);
        self.diagnostic.clone()
    }
}
