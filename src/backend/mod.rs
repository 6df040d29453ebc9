pub mod coolprop;

use crate::error::Result;

/// The external property engine, in strict SI units.
///
/// `Ok` carries whatever double the engine returned, *including* its
/// failure sentinels (NaN, ±1e308 and beyond); classifying those is the
/// caller's job.  `Err` means the call itself raised.
///
/// # Diagnostics
///
/// [`last_error`](Self::last_error) reads engine-global state.  It is
/// only meaningful when called right after a failing call on the same
/// thread, and only reliable while calls are serialized: two threads
/// failing at once may each read the other's message.
pub trait PropertyEngine {
    /// `PropsSI(output, name1, value1, name2, value2, fluid)`
    fn props_si(
        &self,
        output: &str,
        name1: &str, value1: f64,
        name2: &str, value2: f64,
        fluid: &str,
    ) -> Result<f64>;

    /// `HAPropsSI(output, name1, value1, name2, value2, name3, value3)`
    #[allow(clippy::too_many_arguments)]
    fn ha_props_si(
        &self,
        output: &str,
        name1: &str, value1: f64,
        name2: &str, value2: f64,
        name3: &str, value3: f64,
    ) -> Result<f64>;

    /// The engine's last diagnostic message (`"errstring"`), empty if
    /// none is available.
    fn last_error(&self) -> String;
}

impl<E: PropertyEngine + ?Sized> PropertyEngine for &E {
    fn props_si(
        &self,
        output: &str,
        name1: &str, value1: f64,
        name2: &str, value2: f64,
        fluid: &str,
    ) -> Result<f64> {
        (**self).props_si(output, name1, value1, name2, value2, fluid)
    }

    fn ha_props_si(
        &self,
        output: &str,
        name1: &str, value1: f64,
        name2: &str, value2: f64,
        name3: &str, value3: f64,
    ) -> Result<f64> {
        (**self).ha_props_si(output, name1, value1, name2, value2, name3, value3)
    }

    fn last_error(&self) -> String {
        (**self).last_error()
    }
}
