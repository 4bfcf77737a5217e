//! Worked scenarios and reference-data loading, end to end through the
//! public API.

use std::io::Write;

use shield_core::calculations::{compare_materials, COMPARISON_ENERGIES_KEV};
use shield_core::units::SQUARE_METER_CM2;
use shield_core::{
    assess_shield, dose_rate, evaluate, interpolate, load_reference_data, mass_and_cost,
    required_thickness, sample_curve, CoefficientTable, Quantity, ReferenceData, SafetyLevel,
    ShieldSpec,
};

#[test]
fn test_scenario_interpolation_midpoint() {
    let table = CoefficientTable::from_pairs(&[(100.0, 1.8), (500.0, 0.18)]).unwrap();
    let mu = interpolate(&table, 300.0).unwrap();
    assert!((mu - 0.99).abs() < 1e-9);
}

#[test]
fn test_scenario_transmitted_intensity() {
    let result = evaluate(0.18, 2.0, 100.0).unwrap();
    assert!((result.final_intensity - 69.77).abs() < 0.01);
}

#[test]
fn test_scenario_hvl_tvl() {
    let result = evaluate(0.18, 0.0, 1.0).unwrap();
    assert_eq!(result.half_value_layer_cm.format(2), "3.85");
    assert_eq!(result.tenth_value_layer_cm.format(2), "12.79");
}

#[test]
fn test_scenario_required_thickness() {
    let x = required_thickness(1.8, 99.0).unwrap();
    assert_eq!(x.format(2), "2.56");
}

#[test]
fn test_scenario_dose() {
    let dose = dose_rate(1000.0, 100.0, 0.01, 1.0).unwrap();
    assert!((dose.unshielded - 0.1).abs() < 1e-12);
    assert!((dose.shielded - 0.001).abs() < 1e-12);
}

#[test]
fn test_hvl_infinite_for_transparent_material() {
    let result = evaluate(0.0, 5.0, 100.0).unwrap();
    assert_eq!(result.half_value_layer_cm, Quantity::Infinite);
    assert_eq!(result.half_value_layer_cm.to_string(), "∞");
}

#[test]
fn test_builtin_lead_curve() {
    let data = ReferenceData::builtin().unwrap();
    let lead = data.material("lead").unwrap();
    let mu = lead.attenuation_at(500.0).unwrap();

    let points: Vec<_> = sample_curve(mu, 100.0, 3.0, 50).unwrap().collect();
    assert_eq!(points.len(), 51);
    assert_eq!(points.last().unwrap().thickness_cm, 3.0);
}

#[test]
fn test_mass_unit_convention() {
    // 1 cm of lead over 1 m² weighs 113.4 kg, not 113 400
    let slab = mass_and_cost(1.0, SQUARE_METER_CM2, 11.34, 2.5).unwrap();
    assert!((slab.mass_kg - 113.4).abs() < 1e-9);
}

#[test]
fn test_builtin_comparison_grid() {
    let data = ReferenceData::builtin().unwrap();
    let keys: Vec<String> = data.materials().map(|m| m.key.clone()).collect();
    let table = compare_materials(data, &keys, 2.0, &COMPARISON_ENERGIES_KEV).unwrap();
    assert_eq!(table.rows.len(), COMPARISON_ENERGIES_KEV.len());
    for row in &table.rows {
        assert_eq!(row.points.len(), keys.len());
        for point in &row.points {
            assert!(point.transmission_pct > 0.0 && point.transmission_pct <= 100.0);
        }
    }
}

#[test]
fn test_assessment_json_output() {
    let data = ReferenceData::builtin().unwrap();
    let spec = ShieldSpec::new("cs137", "concrete", 100.0);
    let report = assess_shield(data, &spec).unwrap();
    assert_eq!(report.safety, SafetyLevel::Excellent);

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"safety\":\"excellent\""));
}

#[test]
fn test_load_toml_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[materials.borated_poly]
name = "Borated Polyethylene"
density = 1.04
unit_cost = 6.0
coefficients = {{ "100" = 0.17, "1000" = 0.07 }}

[sources.am241]
name = "Am-241 (γ)"
energy_kev = 59.5
intensity = 500.0
"#
    )
    .unwrap();

    let data = load_reference_data(file.path()).unwrap();
    let poly = data.material("borated_poly").unwrap();
    assert_eq!(poly.key, "borated_poly");
    assert_eq!(poly.attenuation_at(50.0).unwrap(), 0.17);
    assert_eq!(data.source("am241").unwrap().energy_kev, 59.5);
}

#[test]
fn test_load_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{
  "materials": {{
    "glass": {{
      "name": "Lead Glass",
      "density": 4.8,
      "coefficients": {{ "100": 0.9, "500": 0.11 }}
    }}
  }},
  "sources": {{}}
}}"#
    )
    .unwrap();

    let data = load_reference_data(file.path()).unwrap();
    assert_eq!(data.material_count(), 1);
    assert_eq!(data.material("glass").unwrap().unit_cost, None);
}

#[test]
fn test_load_invalid_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[sources.bad]
name = "Bad"
energy_kev = -10.0
intensity = 1.0
"#
    )
    .unwrap();

    let err = load_reference_data(file.path()).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
    assert!(err.to_string().contains("sources.bad.energy_kev"));
}

#[test]
fn test_concurrent_readers() {
    let data = ReferenceData::builtin().unwrap();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let spec = ShieldSpec::new("co60", "steel", 1.0 + i as f64);
                assess_shield(data, &spec).unwrap().reduction_pct
            })
        })
        .collect();
    let reductions: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for pair in reductions.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}
