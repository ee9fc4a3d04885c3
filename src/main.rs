use folio::{EXPORT_FAILURE_NOTICE, PortfolioApp, PortfolioError, Section};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Profile bundled with the binary, used when no profile path is given.
const DEFAULT_PROFILE_JSON: &str = include_str!("../assets/profile.json");

/// A simple CLI that renders the portfolio's resume view and exports it as
/// a paginated PDF.
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        eprintln!("Renders a portfolio profile and exports the resume as a PDF.");
        eprintln!();
        eprintln!("Usage: {} [path/to/profile.json] [output-dir]", args[0]);
        std::process::exit(1);
    }

    let profile_json = match args.get(1) {
        Some(path) => match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Failed to read profile from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => DEFAULT_PROFILE_JSON.to_string(),
    };
    let output_dir = PathBuf::from(args.get(2).map(String::as_str).unwrap_or("."));

    match run(&profile_json, &output_dir) {
        Ok(path) => println!("Successfully generated {}", path.display()),
        Err(PortfolioError::Export(e)) => {
            log::error!("resume export failed: {e}");
            eprintln!("{EXPORT_FAILURE_NOTICE}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(profile_json: &str, output_dir: &Path) -> Result<PathBuf, PortfolioError> {
    let app = PortfolioApp::builder()
        .with_profile_json(profile_json)?
        .build()?;

    println!("Loaded profile for {}", app.profile().name);

    // The resume view must be the live section before export.
    app.select(Section::Resume)?;
    let document = app.download_resume()?;

    let output_path = output_dir.join(&document.file_name);
    fs::write(&output_path, &document.bytes)?;

    println!(
        "Exported {} pages ({} bytes, {})",
        document.page_count,
        document.bytes.len(),
        document.mime_type()
    );
    Ok(output_path)
}
