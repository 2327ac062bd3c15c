//! # Lateral CLI Application
//!
//! Terminal front end for active earth-pressure calculations.
//!
//! Usage:
//!   lateral_cli                          Interactive prompts for one wall
//!   lateral_cli --input <file.json>      Run a calculation item from JSON
//!   lateral_cli --settings <file.json>   Override calculation defaults
//!   lateral_cli --equations              Print the equations reference
//!
//! Set `RUST_LOG=debug` to trace each calculation step on stderr.

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use lateral_core::calculations::retaining_wall::{calculate, RetainingWallInput, RetainingWallResult};
use lateral_core::equations::generate_equations_markdown;
use lateral_core::{CalcError, CalcResult, CalcSettings, CalculationItem, CalculationOutput};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
}

struct Args {
    input: Option<String>,
    settings: Option<String>,
    equations: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = env::args().collect();
    let mut parsed = Args {
        input: None,
        settings: None,
        equations: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                if i + 1 < args.len() {
                    parsed.input = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--settings" => {
                if i + 1 < args.len() {
                    parsed.settings = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--equations" => parsed.equations = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
            }
        }
        i += 1;
    }
    parsed
}

fn print_usage() {
    println!("Lateral CLI - Coulomb Earth-Pressure Calculator");
    println!();
    println!("Usage: lateral_cli [--input <file.json>] [--settings <file.json>] [--equations]");
}

fn main() {
    init_logging();
    let args = parse_args();

    if args.equations {
        println!("{}", generate_equations_markdown());
        return;
    }

    let settings = match &args.settings {
        Some(path) => match CalcSettings::load(path) {
            Ok(s) => s,
            Err(e) => exit_with_error(&e),
        },
        None => CalcSettings::default(),
    };

    let outcome = match &args.input {
        Some(path) => run_input_file(path, &settings),
        None => run_interactive(&settings),
    };

    if let Err(e) = outcome {
        exit_with_error(&e);
    }
}

fn run_input_file(path: &str, settings: &CalcSettings) -> CalcResult<()> {
    let json = fs::read_to_string(path).map_err(|e| CalcError::file_error("read", path, e.to_string()))?;
    let item: CalculationItem = serde_json::from_str(&json)?;
    tracing::info!(label = item.label(), calc_type = item.calc_type(), "loaded calculation");

    let output = item.run(settings)?;
    if let CalculationOutput::RetainingWall(result) = &output {
        print_wall_report(item.label(), result);
    }

    println!();
    println!("JSON Output (for API use):");
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_interactive(settings: &CalcSettings) -> CalcResult<()> {
    println!("Lateral CLI - Coulomb Earth-Pressure Calculator");
    println!("===============================================");
    println!();

    let phi_k = prompt_f64("Friction angle φ (°) [35.0]: ", 35.0);
    let alpha = prompt_f64("Wall inclination α (°) [10.0]: ", 10.0);
    let beta = prompt_f64("Backfill slope β (°) [20.0]: ", 20.0);
    let default_delta = settings.wall_friction_ratio * phi_k;
    let delta_a = prompt_f64(&format!("Wall friction δ (°) [{:.2}]: ", default_delta), default_delta);
    let gamma_k = prompt_f64("Unit weight γ (kN/m³) [20.0]: ", 20.0);
    let height_m = prompt_f64("Wall height h (m) [5.0]: ", 5.0);
    let surcharge_kn_m2 = prompt_f64("Surcharge p (kN/m²) [0.0]: ", 0.0);

    let input = RetainingWallInput {
        label: "CLI-Wall".to_string(),
        phi_k,
        alpha,
        beta,
        delta_a: Some(delta_a),
        gamma_k,
        height_m,
        surcharge_kn_m2,
        samples: None,
    };

    let result = calculate(&input, settings)?;
    println!();
    print_wall_report(&input.label, &result);

    println!();
    println!("JSON Output (for API use):");
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn print_wall_report(label: &str, result: &RetainingWallResult) {
    let a = &result.angles;
    let t = &result.coulomb_terms;

    println!("═══════════════════════════════════════");
    println!("  ACTIVE EARTH PRESSURE - {}", label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Angles:");
    println!("  φ = {:.2}°  α = {:.2}°  β = {:.2}°  δ = {:.2}°", a.phi_k, a.alpha, a.beta, a.delta_a);
    println!();
    println!("Coulomb terms:");
    println!("  cos²(φ−α) = {:.4}   cos²(α)  = {:.4}", t.cos2_phi_minus_alpha, t.cos2_alpha);
    println!("  cos(α+δ)  = {:.4}   cos(α−β) = {:.4}", t.cos_alpha_plus_delta, t.cos_alpha_minus_beta);
    println!("  sin(φ+δ)  = {:.4}   sin(φ−β) = {:.4}", t.sin_phi_plus_delta, t.sin_phi_minus_beta);
    println!("  R         = {:.4}", t.ratio);
    println!();
    println!("  K_a = {:.4}", result.k_a);
    match result.slip_angle_deg {
        Some(theta) => println!("  ϑ_a = {:.2}°", theta),
        None => println!("  ϑ_a = undefined for these angles"),
    }
    println!();
    println!("Pressure ordinates:");
    println!("  e(h)  = {:.2} kN/m²", result.base_ordinate_kn_m2);
    println!("  e_p   = {:.2} kN/m²", result.surcharge_ordinate_kn_m2);
    println!();
    println!("Resultants (per metre of wall):");
    for (name, force) in [
        ("Soil", &result.soil_force),
        ("Surcharge", &result.surcharge_force),
        ("Total", &result.total_force),
    ] {
        let depth = force
            .depth_of_action_m
            .map_or_else(|| "-".to_string(), |z| format!("{:.2} m", z));
        println!(
            "  {:<10} E = {:>8.2}  E_h = {:>8.2}  E_v = {:>8.2} kN/m  at z = {}",
            name, force.magnitude_kn_m, force.components.horizontal_kn_m, force.components.vertical_kn_m, depth
        );
    }
    println!();
    println!("Equations applied:");
    for (category, equations) in result.equations.by_category() {
        println!("  {}", category.display_name());
        for eq in equations {
            println!("    - {}", eq.metadata().name);
        }
    }
    println!("═══════════════════════════════════════");
}

fn exit_with_error(e: &CalcError) -> ! {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
    std::process::exit(1);
}
