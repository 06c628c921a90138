use clap::Parser;
use pensum::{
    analysis::{analyze_source, AnalysisReport},
    config::{AnalysisConfig, OutputFormat},
    PensumError,
};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format: json, summary or tokens
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Pensum source file
    file: PathBuf,
}

fn load_config(cli: &Cli) -> Result<AnalysisConfig, PensumError> {
    match &cli.config {
        Some(path) if path.exists() => AnalysisConfig::from_file(path),
        Some(path) => {
            debug!("config file {:?} not found, using defaults", path);
            Ok(AnalysisConfig::default())
        }
        None => Ok(AnalysisConfig::default()),
    }
}

fn render(
    report: &AnalysisReport,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, PensumError> {
    let rendered = match format {
        OutputFormat::Json => {
            let envelope = report.to_envelope();
            if pretty {
                serde_json::to_string_pretty(&envelope)
            } else {
                serde_json::to_string(&envelope)
            }
            .map_err(|e| PensumError::internal(format!("Failed to render JSON: {}", e)))?
        }
        OutputFormat::Summary => summary(report),
        OutputFormat::Tokens => match report {
            AnalysisReport::LexicalErrors { .. } => summary(report),
            _ => report
                .tokens()
                .unwrap_or_default()
                .iter()
                .map(|token| {
                    format!(
                        "{}:{}\t{}\t{}",
                        token.line, token.column, token.kind, token.text
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
        },
    };
    Ok(rendered)
}

fn summary(report: &AnalysisReport) -> String {
    let mut lines = Vec::new();
    match report {
        AnalysisReport::LexicalErrors { errors } => {
            lines.push(format!("{} lexical error(s):", errors.len()));
            lines.extend(errors.iter().map(|e| format!("  {}", e)));
        }
        AnalysisReport::SyntaxError { message, .. } => {
            lines.push(format!("Syntax error: {}", message));
        }
        AnalysisReport::Parsed { pensum, .. } => {
            lines.push(format!("Carrera: {}", pensum.carrera()));
            lines.push(format!(
                "{} semester(s), {} course(s)",
                pensum.semester_count(),
                pensum.course_count()
            ));
            for (numero, cursos) in pensum.semestres() {
                let creditos: u32 = cursos.iter().map(|c| c.creditos).sum();
                lines.push(format!("Semestre {} ({} creditos)", numero, creditos));
                for curso in cursos {
                    lines.push(format!("  {} {}", curso.codigo, curso.nombre));
                }
            }
        }
    }
    lines.join("\n")
}

fn run(cli: &Cli) -> Result<bool, PensumError> {
    let config = load_config(cli)?;
    info!("config loaded.");
    debug!("config: {:?}", config);

    let source = std::fs::read_to_string(&cli.file)?;
    debug!("Analyzing pensum file: {:?}", cli.file);

    let report = match analyze_source(&source, &config) {
        Ok(report) => report,
        Err(error) => {
            if cli.format == OutputFormat::Json {
                println!("{}", error.to_envelope());
            }
            return Err(error.into());
        }
    };

    println!("{}", render(&report, cli.format, config.pretty)?);
    Ok(report.is_success())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
