//! # pvlog Generator
//!
//! Reads a TOML build description and produces the IOC boot artifacts
//! for PV-logging configuration: the generated blacklist file, the
//! access-security policy (bundled default or an explicit site file),
//! and a startup-script fragment with the install directives.
//!
//! # Usage
//!
//! ```bash
//! # Generate from pvlog.toml into the directory it names
//! pvlog_gen --config pvlog.toml
//!
//! # Override the output directory, verbose logging
//! pvlog_gen --config pvlog.toml --out-dir /tmp/iocBoot -v
//! ```

use clap::Parser;
use pvlog_builder::{
    BLACKLIST_MARKER, BlacklistPv, BlacklistPvs, BuildContext, PvLogging, RecordDecl,
};
use std::path::PathBuf;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

mod config;

use config::BuildConfig;

/// pvlog Generator - IOC PV-logging boot artifacts from a build description
#[derive(Parser, Debug)]
#[command(name = "pvlog_gen")]
#[command(version)]
#[command(about = "Generates IOC PV-logging boot artifacts from a TOML build description")]
struct Args {
    /// Path to the build description (TOML)
    #[arg(short, long, default_value = "pvlog.toml")]
    config: PathBuf,

    /// Override the output directory from the build description
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    setup_tracing(&args);

    if let Err(e) = run(&args) {
        error!("generation failed: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    info!("pvlog generator v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = BuildConfig::load(&args.config)?;
    config.validate()?;

    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| config.output.dir.clone());
    std::fs::create_dir_all(&out_dir)?;

    let blacklist_path = out_dir.join(format!("{}.blacklist", config.ioc_name));

    let mut ctx = BuildContext::new();
    PvLogging::install(&mut ctx, config.access_file.clone(), &out_dir)?;
    BlacklistPvs::install(&mut ctx, &blacklist_path)?;

    for record in &config.records {
        let mut decl = RecordDecl::new(&record.rtype, &record.name)?;
        if record.blacklist {
            decl = decl.with_marker(BLACKLIST_MARKER);
        }
        ctx.declare_record(decl)?;
    }
    for name in &config.blacklist {
        BlacklistPv::declare(&mut ctx, name)?;
    }

    let declared = ctx.records().len();
    let boot = ctx.finalize()?;
    let st_cmd = out_dir.join("st.cmd.pvlog");
    boot.write_to(&st_cmd)?;

    info!(
        records = declared,
        explicit = config.blacklist.len(),
        "wrote {} and {}",
        blacklist_path.display(),
        st_cmd.display()
    );
    Ok(())
}

fn setup_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
