use approx::assert_relative_eq;
use coolprop_eng::converter::{UnitRule, rule, rules};
use coolprop_eng::{Domain, from_si, to_si};
use proptest::prelude::*;

// ═══════════════════════════════════════════════════════════════════
//  Known values
// ═══════════════════════════════════════════════════════════════════

#[test]
fn water_triple_point_and_boiling_point() {
    assert_relative_eq!(to_si(Domain::PureFluid, "T", 25.0), 298.15, epsilon = 1e-12);
    assert_relative_eq!(from_si(Domain::PureFluid, "T", 298.15), 25.0, epsilon = 1e-12);
    assert_relative_eq!(from_si(Domain::PureFluid, "T", 273.16), 0.01, epsilon = 1e-12);
    assert_relative_eq!(from_si(Domain::HumidAir, "Twb", 273.15), 0.0);
}

#[test]
fn atmospheric_pressure() {
    assert_relative_eq!(to_si(Domain::PureFluid, "P", 1.01325), 101_325.0, epsilon = 1e-9);
    assert_relative_eq!(from_si(Domain::HumidAir, "P", 101_325.0), 1.01325, epsilon = 1e-12);
}

#[test]
fn specific_energies() {
    assert_eq!(to_si(Domain::PureFluid, "H", 2675.0), 2_675_000.0);
    assert_eq!(from_si(Domain::PureFluid, "S", 7_354.0), 7.354);
    assert_eq!(from_si(Domain::PureFluid, "Cvmass", 1_000.0), 1.0);
    assert_eq!(to_si(Domain::HumidAir, "Cda", 1.006), 1006.0);
    assert_eq!(to_si(Domain::HumidAir, "Sha", 0.1), 100.0);
}

// ═══════════════════════════════════════════════════════════════════
//  Pinned table decisions
// ═══════════════════════════════════════════════════════════════════

#[test]
fn pure_fluid_table() {
    let expected = [
        ("T", UnitRule::Offset(273.15)),
        ("P", UnitRule::Scale(1e5)),
        ("H", UnitRule::Scale(1000.0)),
        ("U", UnitRule::Scale(1000.0)),
        ("S", UnitRule::Scale(1000.0)),
        ("Cvmass", UnitRule::Scale(1000.0)),
        ("Cpmass", UnitRule::Scale(1000.0)),
        ("Cp", UnitRule::Scale(1000.0)),
    ];
    assert_eq!(rules(Domain::PureFluid).collect::<Vec<_>>(), expected);

    for identity in ["D", "Dmolar", "Q", "MU", "K", "Cpmolar", "Umolar", "Smolar", "Tcrit", "Pcrit", "Prandtl", "Z"] {
        assert_eq!(rule(Domain::PureFluid, identity), None, "{identity}");
    }
}

#[test]
fn humid_air_table() {
    for t in ["T", "Twb", "Tdp"] {
        assert_eq!(rule(Domain::HumidAir, t), Some(UnitRule::Offset(273.15)), "{t}");
    }
    for p in ["P", "P_w"] {
        assert_eq!(rule(Domain::HumidAir, p), Some(UnitRule::Scale(1e5)), "{p}");
    }
    for e in ["Cda", "Cha", "Hda", "Hha", "Sda", "Sha"] {
        assert_eq!(rule(Domain::HumidAir, e), Some(UnitRule::Scale(1000.0)), "{e}");
    }
    // Viscosity stays in Pa·s, like every other identity token.
    for identity in ["W", "R", "Psi_w", "Dda", "Dha", "Vda", "Vha", "Z", "K", "MU"] {
        assert_eq!(rule(Domain::HumidAir, identity), None, "{identity}");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Laws
// ═══════════════════════════════════════════════════════════════════

fn any_domain() -> impl Strategy<Value = Domain> {
    prop_oneof![Just(Domain::PureFluid), Just(Domain::HumidAir)]
}

proptest! {
    #[test]
    fn round_trip_restores_the_value(domain in any_domain(), v in -1.0e6f64..1.0e6) {
        for (token, _) in rules(domain) {
            let back = from_si(domain, token, to_si(domain, token, v));
            prop_assert!(
                (back - v).abs() <= 1e-9 * v.abs().max(1.0),
                "{domain} {token}: {v} -> {back}"
            );
        }
    }

    #[test]
    fn tokens_without_rule_are_identity(
        domain in any_domain(),
        token in "[A-Za-z_]{1,12}",
        v in proptest::num::f64::NORMAL,
    ) {
        prop_assume!(rule(domain, &token).is_none());
        prop_assert_eq!(to_si(domain, &token, v), v);
        prop_assert_eq!(from_si(domain, &token, v), v);
    }
}
