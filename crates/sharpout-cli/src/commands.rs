//! CLI command implementations
//!
//! - `print` renders trees to stdout, to `.cs` files, or checks existing files
//! - `map` emits the node-to-text map of one tree
//! - `config` manages configuration files

use rayon::prelude::*;
use sharpout_core::config::json_schema;
use sharpout_core::{
    ConfigLoader, FormatterConfiguration, FormattingPolicy, IndentStyle, NewLine, Preset, Result,
    SharpoutConfig, SharpoutError, SyntaxTree, print, print_with_map,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info};
use walkdir::WalkDir;

use crate::ConfigFormat;
use crate::output::{PrintSummary, utils};

/// Suffix of tree files picked up when walking a directory
const TREE_SUFFIX: &str = ".ast.json";

/// What `print` does with rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    Stdout,
    Write,
    Check,
}

/// Print command implementation
pub fn print_command(
    inputs: Vec<PathBuf>,
    mode: PrintMode,
    config_path: Option<PathBuf>,
    preset: Option<Preset>,
) -> Result<()> {
    debug!("Running print command on inputs: {:?}", inputs);
    let start_time = Instant::now();

    let files = discover_trees(&inputs)?;
    if files.is_empty() {
        println!("No syntax tree files found in specified paths.");
        return Ok(());
    }

    let policy = resolve_policy(config_path.as_deref(), preset, search_start(&inputs))?;
    debug!("Rendering {} tree(s) with {:?}", files.len(), mode);

    // One shared policy, one independent print session per file
    let rendered: Vec<(PathBuf, Result<String>)> = files
        .par_iter()
        .map(|path| (path.clone(), render_file(path, &policy)))
        .collect();

    let mut summary = PrintSummary::new(files.len());
    let many = files.len() > 1;
    for (path, result) in rendered {
        let text = match result {
            Ok(text) => text,
            Err(e) => {
                error!("{}: {}", path.display(), e);
                summary.failed += 1;
                continue;
            }
        };

        match mode {
            PrintMode::Stdout => {
                if many {
                    println!("// {}", path.display());
                }
                print!("{text}");
            }
            PrintMode::Write => {
                let target = output_path(&path);
                fs::write(&target, &text).map_err(|e| SharpoutError::io_error(&target, e))?;
                info!("Wrote {}", target.display());
                summary.written += 1;
            }
            PrintMode::Check => {
                let target = output_path(&path);
                let existing = fs::read_to_string(&target).ok();
                if existing.as_deref() == Some(text.as_str()) {
                    summary.unchanged += 1;
                } else {
                    println!("Would reformat: {}", target.display());
                    summary.mismatched += 1;
                }
            }
        }
    }

    if mode != PrintMode::Stdout {
        summary.print(mode == PrintMode::Check);
        println!(
            "Completed in {}",
            utils::format_duration(start_time.elapsed())
        );
    }

    if summary.failed > 0 || (mode == PrintMode::Check && summary.mismatched > 0) {
        std::process::exit(1);
    }

    Ok(())
}

/// Map command implementation
pub fn map_command(
    input: PathBuf,
    with_text: bool,
    config_path: Option<PathBuf>,
    preset: Option<Preset>,
) -> Result<()> {
    debug!("Mapping nodes of {}", input.display());

    let start = input.parent().filter(|p| !p.as_os_str().is_empty());
    let policy = resolve_policy(
        config_path.as_deref(),
        preset,
        start.unwrap_or_else(|| Path::new(".")),
    )?;

    let tree = read_tree(&input)?;
    let (text, spans) = print_with_map(&tree, &policy)?;

    let value = if with_text {
        serde_json::json!({ "text": text, "nodes": spans })
    } else {
        serde_json::to_value(&spans)?
    };
    println!("{}", serde_json::to_string_pretty(&value)?);

    Ok(())
}

/// Config init command implementation
pub fn config_init_command(
    format: ConfigFormat,
    force: bool,
    preset: Option<Preset>,
) -> Result<()> {
    debug!("Initializing configuration file with format: {:?}", format);

    let filename = match format {
        ConfigFormat::Json => ".sharpoutrc.json",
        ConfigFormat::Toml => ".sharpoutrc.toml",
        ConfigFormat::Yaml => "sharpout.yaml",
    };
    let config_path = PathBuf::from(filename);

    if config_path.exists() && !force {
        error!(
            "Configuration file '{}' already exists. Use --force to overwrite.",
            filename
        );
        return Err(SharpoutError::config_error(format!(
            "Configuration file '{filename}' already exists"
        )));
    }

    let config = create_default_config(preset.unwrap_or_default());
    let content = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(&config).map_err(|e| {
            SharpoutError::config_error(format!("Failed to serialize JSON: {e}"))
        })?,
        ConfigFormat::Toml => toml::to_string_pretty(&config).map_err(|e| {
            SharpoutError::config_error(format!("Failed to serialize TOML: {e}"))
        })?,
        ConfigFormat::Yaml => serde_yaml::to_string(&config).map_err(|e| {
            SharpoutError::config_error(format!("Failed to serialize YAML: {e}"))
        })?,
    };

    fs::write(&config_path, content).map_err(|e| SharpoutError::io_error(&config_path, e))?;

    println!("✅ Created configuration file: {filename}");
    println!("   Edit the file to customize the formatting policy.");

    Ok(())
}

/// Config validate command implementation
pub fn config_validate_command(path: Option<PathBuf>) -> Result<()> {
    debug!("Validating configuration file: {:?}", path);

    let checked = ConfigLoader::load(path.as_deref(), None)
        .and_then(|config| config.policy().map(|_| config));
    match checked {
        Ok(config) => {
            let formatter = config.formatter.unwrap_or_default();
            println!("✅ Configuration is valid");
            println!(
                "   Preset: {}",
                preset_name(formatter.preset.unwrap_or_default())
            );
            println!(
                "   Formatter enabled: {}",
                formatter.enabled.unwrap_or(true)
            );
            Ok(())
        }
        Err(e) => {
            error!("❌ Configuration validation failed: {}", e);
            Err(e)
        }
    }
}

/// Config show command implementation
pub fn config_show_command(
    resolved: bool,
    config_path: Option<PathBuf>,
    preset: Option<Preset>,
) -> Result<()> {
    debug!("Showing configuration (resolved: {})", resolved);

    let mut config = ConfigLoader::load(config_path.as_deref(), None)?;
    override_preset(&mut config, preset);

    let json = if resolved {
        println!("Resolved Policy:");
        println!("================");
        serde_json::to_string_pretty(&config.policy()?)
    } else {
        println!("Configuration:");
        println!("==============");
        serde_json::to_string_pretty(&config)
    };
    let json = json
        .map_err(|e| SharpoutError::config_error(format!("Failed to serialize config: {e}")))?;
    println!("{json}");

    Ok(())
}

/// Config schema command implementation
pub fn config_schema_command(output: Option<PathBuf>) -> Result<()> {
    let schema = serde_json::to_string_pretty(&json_schema())?;
    match output {
        Some(path) => {
            fs::write(&path, format!("{schema}\n"))
                .map_err(|e| SharpoutError::io_error(&path, e))?;
            println!("✅ Wrote schema to {}", path.display());
        }
        None => println!("{schema}"),
    }
    Ok(())
}

/// Files named on the command line, plus every `*.ast.json` below named
/// directories, in a stable order
fn discover_trees(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_file() {
            files.push(input.clone());
        } else if input.is_dir() {
            let found = WalkDir::new(input)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .filter(|entry| entry.file_name().to_string_lossy().ends_with(TREE_SUFFIX))
                .map(|entry| entry.into_path());
            files.extend(found);
        } else {
            return Err(SharpoutError::io_error(
                input,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
            ));
        }
    }
    Ok(files)
}

/// Directory where configuration discovery begins
fn search_start(inputs: &[PathBuf]) -> &Path {
    match inputs.first() {
        Some(first) if first.is_file() => match first.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        },
        Some(first) => first.as_path(),
        None => Path::new("."),
    }
}

fn resolve_policy(
    config_path: Option<&Path>,
    preset: Option<Preset>,
    start: &Path,
) -> Result<FormattingPolicy> {
    let mut config = ConfigLoader::load(config_path, Some(start))?;
    override_preset(&mut config, preset);
    config.policy()
}

fn override_preset(config: &mut SharpoutConfig, preset: Option<Preset>) {
    if let Some(preset) = preset {
        config.formatter.get_or_insert_with(Default::default).preset = Some(preset);
    }
}

fn read_tree(path: &Path) -> Result<SyntaxTree> {
    let json = fs::read_to_string(path).map_err(|e| SharpoutError::io_error(path, e))?;
    SyntaxTree::from_json(&json)
}

fn render_file(path: &Path, policy: &FormattingPolicy) -> Result<String> {
    let tree = read_tree(path)?;
    print(&tree, policy)
}

/// `Program.ast.json` becomes `Program.cs`; any other name swaps its extension
fn output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.strip_suffix(TREE_SUFFIX) {
        Some(stem) => input.with_file_name(format!("{stem}.cs")),
        None => input.with_extension("cs"),
    }
}

fn preset_name(preset: Preset) -> &'static str {
    match preset {
        Preset::Allman => "allman",
        Preset::Kr => "kr",
        Preset::Mono => "mono",
    }
}

fn create_default_config(preset: Preset) -> SharpoutConfig {
    SharpoutConfig {
        formatter: Some(FormatterConfiguration {
            enabled: Some(true),
            preset: Some(preset),
            indent_style: Some(IndentStyle::Tabs),
            indent_size: Some(4),
            new_line: Some(NewLine::Lf),
            ..Default::default()
        }),
        ..Default::default()
    }
}
