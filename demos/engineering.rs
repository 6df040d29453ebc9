use coolprop_eng::{Calculator, Cell};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // COOLPROP_PATH is read from the .env file automatically.
    // You can also set it as an environment variable:
    //   export COOLPROP_PATH=/usr/local/lib/libCoolProp.so
    let calc = Calculator::new()?;

    // ── Pure fluid, engineering units ───────────────────────────────
    let t_sat = calc.evaluate("T", "P", 1.01325, "Q", 0.0, "Water")?;
    println!("Water Tsat(1 atm)      = {t_sat:.2} °C");

    let p_sat = calc.evaluate("pressure", "temp", 0.0, "quality", 0.0, "R134a")?;
    println!("R134a Psat(0 °C)       = {p_sat:.3} bar");

    let cp = calc.evaluate("cp", "T", 25.0, "P", 1.0, "Water")?;
    println!("Water cp(25 °C, 1 bar) = {cp:.3} kJ/(kg·K)");

    // ── Humid air ───────────────────────────────────────────────────
    let tdp = calc.evaluate_ha("DewPoint", "Tdb", 25.0, "P", 1.01325, "RH", 0.5)?;
    println!("Dew point (25 °C, 50 %) = {tdp:.2} °C");

    let w = calc.evaluate_ha("W", "T", 25.0, "P", 1.01325, "R", 0.5)?;
    println!("Humidity ratio          = {w:.5} kg/kg");

    // ── Spreadsheet surface ─────────────────────────────────────────
    let cells: [Cell; 6] = [
        "D".into(), "T".into(), Cell::Number(20.0), "P".into(), Cell::Number(1.0), "Watr".into(),
    ];
    println!("TMPr(D, T=20, P=1, Watr) = {:?}", calc.tmpr(&cells));

    Ok(())
}
