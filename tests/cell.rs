mod common;

use approx::assert_relative_eq;
use coolprop_eng::{Calculator, Cell};

use common::MockEngine;

fn water_cells(fluid: Cell) -> [Cell; 6] {
    ["T".into(), "P".into(), Cell::Number(1.0), "Q".into(), Cell::Number(0.5), fluid]
}

// ═══════════════════════════════════════════════════════════════════
//  TMPr
// ═══════════════════════════════════════════════════════════════════

#[test]
fn tmpr_returns_a_number() {
    let engine = MockEngine::returning(373.15);
    let calc = Calculator::with_engine(&engine);

    match calc.tmpr(&water_cells("Water".into())) {
        Cell::Number(t) => assert_relative_eq!(t, 100.0, epsilon = 1e-9),
        other => panic!("expected a number, got {other:?}"),
    }
}

#[test]
fn tmpr_blank_fluid_is_an_error_string() {
    let engine = MockEngine::returning(373.15);
    let calc = Calculator::with_engine(&engine);

    let out = calc.tmpr(&water_cells(Cell::Empty));
    assert_eq!(out, Cell::Text("Error: Missing parameter: fluid".into()));
    assert!(out.is_error());
    assert!(engine.calls().is_empty());
}

#[test]
fn tmpr_text_value_is_non_numeric() {
    let engine = MockEngine::returning(373.15);
    let calc = Calculator::with_engine(&engine);

    let cells: [Cell; 6] = ["T".into(), "P".into(), "one".into(), "Q".into(), Cell::Number(0.5), "Water".into()];
    assert_eq!(calc.tmpr(&cells), Cell::Text("Error: Non-numeric input for value1".into()));
}

#[test]
fn tmpr_sentinel_becomes_coolprop_message() {
    let engine = MockEngine::returning(f64::NAN).with_diagnostic("Unknown fluid: Watr");
    let calc = Calculator::with_engine(&engine);

    let out = calc.tmpr(&water_cells("Watr".into()));
    assert_eq!(out, Cell::Text("Error: CoolProp failed. Unknown fluid: Watr".into()));
}

#[test]
fn tmpr_raised_call_becomes_error_text() {
    let engine = MockEngine::raising("boom");
    let calc = Calculator::with_engine(&engine);

    assert_eq!(calc.tmpr(&water_cells("Water".into())), Cell::Text("Error: boom".into()));
}

// ═══════════════════════════════════════════════════════════════════
//  TMPa
// ═══════════════════════════════════════════════════════════════════

#[test]
fn tmpa_returns_a_number() {
    let engine = MockEngine::returning(0.5);
    let calc = Calculator::with_engine(&engine);

    let cells: [Cell; 7] = [
        "RH".into(),
        "Tdb".into(), Cell::Number(25.0),
        "P".into(), Cell::Number(1.01325),
        "W".into(), Cell::Number(0.01),
    ];
    assert_eq!(calc.tmpa(&cells), Cell::Number(0.5));
    assert_eq!(engine.only_call().names, ["T", "P", "W"]);
}

#[test]
fn tmpa_missing_third_name() {
    let engine = MockEngine::returning(0.5);
    let calc = Calculator::with_engine(&engine);

    let cells: [Cell; 7] = [
        "R".into(),
        "T".into(), Cell::Number(25.0),
        "P".into(), Cell::Number(1.0),
        Cell::Empty, Cell::Number(0.01),
    ];
    assert_eq!(calc.tmpa(&cells), Cell::Text("Error: Missing parameter: name3".into()));
}

// ═══════════════════════════════════════════════════════════════════
//  Host marshaling
// ═══════════════════════════════════════════════════════════════════

#[test]
fn cells_round_trip_through_json() {
    let cells: Vec<Cell> =
        serde_json::from_str(r#"["T", "P", 1.0, "Q", 0.5, null]"#).unwrap();
    assert_eq!(
        cells,
        vec![
            Cell::from("T"),
            Cell::from("P"),
            Cell::Number(1.0),
            Cell::from("Q"),
            Cell::Number(0.5),
            Cell::Empty,
        ]
    );
    assert_eq!(serde_json::to_string(&Cell::Number(100.0)).unwrap(), "100.0");
    assert_eq!(serde_json::to_string(&Cell::Empty).unwrap(), "null");
}

#[test]
fn optional_values_map_to_empty_cells() {
    assert_eq!(Cell::from(None::<f64>), Cell::Empty);
    assert_eq!(Cell::from(Some("Water")), Cell::Text("Water".into()));
    assert_eq!(Cell::Text("   ".into()).as_text(), None);
}
