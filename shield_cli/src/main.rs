//! # Attenuate CLI Application
//!
//! Terminal front-end for shield_core: attenuation through a slab, required
//! thickness, full shield assessment and material comparison. Results print
//! as a short report, or as JSON with `--json`.
//!
//! Logs go to stderr (`RUST_LOG`, `-v`, `--quiet`); stdout carries results only.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use shield_core::calculations::{
    assess_shield, compare_materials, evaluate, required_thickness, sample_curve,
    AttenuationResult, CurvePoint, ShieldSpec, COMPARISON_ENERGIES_KEV,
};
use shield_core::{load_reference_data, ReferenceData, ShieldError, ShieldResult};

#[derive(Parser, Debug)]
#[command(name = "shield", version, about = "X-ray / gamma-ray attenuation and shield sizing")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Reference data file (TOML, or JSON with a .json extension)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List shielding materials
    Materials,
    /// List radiation sources
    Sources,
    /// Beer-Lambert attenuation through a slab
    Attenuate(AttenuateArgs),
    /// Thickness needed for a target reduction
    Thickness(ThicknessArgs),
    /// Assess a complete shield design
    Shield(ShieldArgs),
    /// Compare materials across the standard energy grid
    Compare(CompareArgs),
}

#[derive(Args, Debug)]
struct AttenuateArgs {
    /// Material key
    #[arg(long, default_value = "lead")]
    material: String,
    /// Photon energy (keV)
    #[arg(long, default_value_t = 500.0)]
    energy: f64,
    /// Slab thickness (cm)
    #[arg(long, default_value_t = 1.0)]
    thickness: f64,
    /// Incident intensity
    #[arg(long, default_value_t = 100.0)]
    intensity: f64,
    /// Number of curve intervals to print (0 = no curve)
    #[arg(long, default_value_t = 0)]
    points: usize,
}

#[derive(Args, Debug)]
struct ThicknessArgs {
    /// Material key
    #[arg(long, default_value = "lead")]
    material: String,
    /// Photon energy (keV)
    #[arg(long, default_value_t = 500.0)]
    energy: f64,
    /// Target reduction (percent)
    #[arg(long, default_value_t = 99.0)]
    reduction: f64,
}

#[derive(Args, Debug)]
struct ShieldArgs {
    /// Source key
    #[arg(long, default_value = "diagnostic_xray")]
    source: String,
    /// Material key
    #[arg(long, default_value = "lead")]
    material: String,
    /// Slab thickness (cm)
    #[arg(long, default_value_t = 2.0)]
    thickness: f64,
    /// Source-to-point distance (cm)
    #[arg(long, default_value_t = 100.0)]
    distance: f64,
    /// Occupancy factor (0-1)
    #[arg(long, default_value_t = 1.0)]
    occupancy: f64,
    /// Target reduction (percent)
    #[arg(long, default_value_t = 99.0)]
    target: f64,
    /// Shield face area (cm²)
    #[arg(long, default_value_t = shield_core::units::SQUARE_METER_CM2)]
    area: f64,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Comma-separated material keys
    #[arg(long, value_delimiter = ',', default_value = "lead,aluminum")]
    materials: Vec<String>,
    /// Slab thickness (cm)
    #[arg(long, default_value_t = 2.0)]
    thickness: f64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if cli.json {
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> ShieldResult<()> {
    let owned;
    let data: &ReferenceData = match &cli.data {
        Some(path) => {
            owned = load_reference_data(path)?;
            &owned
        }
        None => ReferenceData::builtin()?,
    };

    match &cli.command {
        Commands::Materials => list_materials(data, cli.json),
        Commands::Sources => list_sources(data, cli.json),
        Commands::Attenuate(args) => attenuate(data, args, cli.json),
        Commands::Thickness(args) => thickness(data, args, cli.json),
        Commands::Shield(args) => shield(data, args, cli.json),
        Commands::Compare(args) => compare(data, args, cli.json),
    }
}

fn print_json<T: Serialize>(value: &T) -> ShieldResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ShieldError::serialization(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn banner(title: &str) {
    println!("═══════════════════════════════════════");
    println!("  {}", title);
    println!("═══════════════════════════════════════");
}

fn list_materials(data: &ReferenceData, json: bool) -> ShieldResult<()> {
    if json {
        return print_json(&data.materials().collect::<Vec<_>>());
    }
    for mat in data.materials() {
        let cost = mat
            .unit_cost
            .map(|c| format!("${:.2}/kg", c))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "{:<12} {:<22} ρ = {:>6.2} g/cm³  {:>10}  {} samples",
            mat.key,
            mat.name,
            mat.density_g_cm3,
            cost,
            mat.coefficients.len()
        );
    }
    Ok(())
}

fn list_sources(data: &ReferenceData, json: bool) -> ShieldResult<()> {
    if json {
        return print_json(&data.sources().collect::<Vec<_>>());
    }
    for src in data.sources() {
        println!(
            "{:<16} {:<18} {:>7.1} keV  {:>8.0} units",
            src.key, src.name, src.energy_kev, src.intensity
        );
    }
    Ok(())
}

fn attenuate(data: &ReferenceData, args: &AttenuateArgs, json: bool) -> ShieldResult<()> {
    let material = data.material(&args.material)?;
    let mu = material.attenuation_at(args.energy)?;
    let result = evaluate(mu, args.thickness, args.intensity)?;
    let curve: Vec<_> = if args.points > 0 {
        sample_curve(mu, args.intensity, args.thickness * 3.0, args.points)?.collect()
    } else {
        Vec::new()
    };

    if json {
        #[derive(Serialize)]
        struct Output<'a> {
            material: &'a str,
            energy_kev: f64,
            result: &'a AttenuationResult,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            curve: Vec<CurvePoint>,
        }
        return print_json(&Output {
            material: &material.key,
            energy_kev: args.energy,
            result: &result,
            curve,
        });
    }

    banner("BEER-LAMBERT ATTENUATION");
    println!();
    println!("Material:  {}", material);
    println!("Energy:    {:.0} keV", args.energy);
    println!("Thickness: {:.2} cm", args.thickness);
    println!();
    println!("  μ     = {:.4} cm⁻¹", result.mu_per_cm);
    println!("  I     = {:.3} (I₀ = {:.1})", result.final_intensity, result.initial_intensity);
    println!("  I/I₀  = {:.4e}", result.transmission_fraction);
    println!("  HVL   = {} cm", result.half_value_layer_cm.format(3));
    println!("  TVL   = {} cm", result.tenth_value_layer_cm.format(3));
    println!("  MFP   = {} cm", result.mean_free_path_cm.format(3));
    if result.degenerate {
        println!("  (I₀ = 0: transmission reported as 0)");
    }

    if !curve.is_empty() {
        println!();
        println!("  x (cm)     I          %");
        for p in &curve {
            println!("  {:>7.3}  {:>9.3}  {:>6.2}", p.thickness_cm, p.intensity, p.percentage);
        }
    }
    Ok(())
}

fn thickness(data: &ReferenceData, args: &ThicknessArgs, json: bool) -> ShieldResult<()> {
    let material = data.material(&args.material)?;
    let mu = material.attenuation_at(args.energy)?;
    let required = required_thickness(mu, args.reduction)?;

    if json {
        return print_json(&serde_json::json!({
            "material": material.key,
            "energy_kev": args.energy,
            "mu_per_cm": mu,
            "target_reduction_pct": args.reduction,
            "required_thickness_cm": required,
        }));
    }

    println!(
        "{} at {:.0} keV (μ = {:.4} cm⁻¹): {:.2}% reduction needs {} cm",
        material.name,
        args.energy,
        mu,
        args.reduction,
        required.format(3)
    );
    Ok(())
}

fn shield(data: &ReferenceData, args: &ShieldArgs, json: bool) -> ShieldResult<()> {
    let spec = ShieldSpec::new(args.source.as_str(), args.material.as_str(), args.thickness)
        .with_distance(args.distance)
        .with_occupancy(args.occupancy)
        .with_target_reduction(args.target)
        .with_area(args.area);
    let report = assess_shield(data, &spec)?;

    if json {
        return print_json(&report);
    }

    let source = data.source(&report.source)?;
    let material = data.material(&report.material)?;

    banner("SHIELD ASSESSMENT");
    println!();
    println!("Source:    {}", source);
    println!("Shield:    {:.2} cm {}", spec.thickness_cm, material.name);
    println!("Distance:  {:.0} cm (T = {:.2})", spec.distance_cm, spec.occupancy_factor);
    println!();
    println!("Performance:");
    println!("  μ          = {:.4} cm⁻¹", report.attenuation.mu_per_cm);
    println!("  Transmission {:.2e}", report.attenuation.transmission_fraction);
    println!("  Reduction    {:.2}%", report.reduction_pct);
    println!();
    println!("Dose rate:");
    println!("  Unshielded: {:.3} units", report.dose.unshielded);
    println!("  Shielded:   {:.5} units", report.dose.shielded);
    println!();
    println!("Slab ({:.0} cm²):", spec.area_cm2);
    println!("  Mass: {:.1} kg", report.mass_kg);
    match report.cost {
        Some(cost) => println!("  Cost: ${:.2}", cost),
        None => println!("  Cost: n/a"),
    }
    println!();
    if report.meets_target() {
        println!(
            "Target {:.2}% met (needs {} cm).",
            spec.target_reduction_pct,
            report.required_thickness_cm.format(2)
        );
    } else {
        println!(
            "Target {:.2}% needs {} cm; add {} cm.",
            spec.target_reduction_pct,
            report.required_thickness_cm.format(2),
            report.additional_thickness_cm.format(2)
        );
    }
    println!();
    banner(&format!("RATING: {}", report.safety));
    Ok(())
}

fn compare(data: &ReferenceData, args: &CompareArgs, json: bool) -> ShieldResult<()> {
    let table = compare_materials(data, &args.materials, args.thickness, &COMPARISON_ENERGIES_KEV)?;

    if json {
        return print_json(&table);
    }

    println!("Transmission (%) through {:.2} cm", table.thickness_cm);
    print!("{:>8}", "keV");
    for key in &args.materials {
        print!("  {:>10}", key);
    }
    println!();
    for row in &table.rows {
        print!("{:>8.0}", row.energy_kev);
        for p in &row.points {
            print!("  {:>10.3}", p.transmission_pct);
        }
        println!();
    }

    println!();
    println!("Half-value layer (cm)");
    for row in &table.rows {
        print!("{:>8.0}", row.energy_kev);
        for p in &row.points {
            print!("  {:>10}", p.half_value_layer_cm.format(3));
        }
        println!();
    }
    Ok(())
}
