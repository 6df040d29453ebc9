use std::path::Path;

use tracing::warn;

use crate::backend::PropertyEngine;
use crate::backend::coolprop::CoolProp;
use crate::converter::{from_si, to_si};
use crate::domain::Domain;
use crate::error::*;
use crate::names::normalize;
use crate::request::{FluidRequest, HumidAirRequest};

/// Magnitude from which an engine result is a failure sentinel.
pub const SENTINEL_MAGNITUDE: f64 = 1.0e308;

/// `true` if `value` is the engine's "could not compute" signal rather
/// than a physical quantity.
pub fn is_sentinel(value: f64) -> bool {
    value.is_nan() || value.abs() >= SENTINEL_MAGNITUDE
}

/// **Engineering-unit front end** to a property engine.
///
/// Inputs and outputs are in °C, bar, kJ/kg, kJ/(kg·K); names are
/// case-insensitive aliases.  Failures come back as [`Error`], never as
/// NaN or 1e308.
///
/// ```no_run
/// use coolprop_eng::Calculator;
///
/// let calc = Calculator::new()?;
/// let t_sat = calc.evaluate("temperature", "P", 1.01325, "Q", 0.0, "Water")?;
/// println!("Tsat(1 atm) = {t_sat:.2} °C");
///
/// let rh = calc.evaluate_ha("RH", "Tdb", 25.0, "P", 1.01325, "W", 0.01)?;
/// println!("RH = {rh:.3}");
/// # Ok::<(), coolprop_eng::Error>(())
/// ```
pub struct Calculator<E = CoolProp> {
    engine: E,
}

impl Calculator<CoolProp> {
    /// Discover and load the CoolProp shared library.
    pub fn new() -> Result<Self> {
        Ok(Self::with_engine(CoolProp::discover()?))
    }

    /// Load CoolProp from a library file or its directory.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_engine(CoolProp::from_path(path)?))
    }
}

impl<E: PropertyEngine> Calculator<E> {
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    // ── Public API ───────────────────────────────────────────────────

    /// Pure-fluid property in engineering units.
    ///
    /// Validation errors are returned before the engine is touched.
    pub fn evaluate(
        &self,
        output: &str,
        name1: &str, value1: f64,
        name2: &str, value2: f64,
        fluid: &str,
    ) -> Result<f64> {
        let req = FluidRequest::new(output, name1, value1, name2, value2, fluid)?;
        self.fluid(&req)
    }

    /// Humid-air property in engineering units.
    #[allow(clippy::too_many_arguments)]
    pub fn evaluate_ha(
        &self,
        output: &str,
        name1: &str, value1: f64,
        name2: &str, value2: f64,
        name3: &str, value3: f64,
    ) -> Result<f64> {
        let req = HumidAirRequest::new(output, name1, value1, name2, value2, name3, value3)?;
        self.humid_air(&req)
    }

    /// Run an already validated pure-fluid request.
    pub fn fluid(&self, req: &FluidRequest) -> Result<f64> {
        const D: Domain = Domain::PureFluid;

        let output = normalize(D, &req.output);
        let [in1, in2] = &req.inputs;
        let name1 = normalize(D, &in1.name);
        let name2 = normalize(D, &in2.name);
        let v1 = to_si(D, name1, in1.value);
        let v2 = to_si(D, name2, in2.value);

        let raw = self.engine.props_si(output, name1, v1, name2, v2, &req.fluid);
        let si = self.classify(raw)?;
        Ok(from_si(D, output, si))
    }

    /// Run an already validated humid-air request.
    pub fn humid_air(&self, req: &HumidAirRequest) -> Result<f64> {
        const D: Domain = Domain::HumidAir;

        let output = normalize(D, &req.output);
        let [in1, in2, in3] = &req.inputs;
        let name1 = normalize(D, &in1.name);
        let name2 = normalize(D, &in2.name);
        let name3 = normalize(D, &in3.name);
        let v1 = to_si(D, name1, in1.value);
        let v2 = to_si(D, name2, in2.value);
        let v3 = to_si(D, name3, in3.value);

        let raw = self.engine.ha_props_si(output, name1, v1, name2, v2, name3, v3);
        let si = self.classify(raw)?;
        Ok(from_si(D, output, si))
    }

    // ── Result classification ────────────────────────────────────────

    /// Split a raw engine outcome into success, sentinel failure and
    /// raised failure.  The diagnostic is read only here, right after
    /// the failing call.
    fn classify(&self, raw: Result<f64>) -> Result<f64> {
        match raw {
            Ok(v) if is_sentinel(v) => {
                let message = self.engine.last_error();
                warn!(value = v, %message, "engine returned failure sentinel");
                Err(Error::Computation { message })
            }
            Ok(v) => Ok(v),
            Err(e) => {
                let raised = match e {
                    Error::Engine { message } => message,
                    other => other.to_string(),
                };
                let diagnostic = self.engine.last_error();
                warn!(%raised, %diagnostic, "engine call raised");
                let message = if diagnostic.is_empty() || raised.contains(&diagnostic) {
                    raised
                } else {
                    format!("{raised} ({diagnostic})")
                };
                Err(Error::Engine { message })
            }
        }
    }
}
