//! CLI command implementations.

use crate::config::{Config, CONFIG_DIR, CONFIG_FILE};
use arcviz_graph::{process, ArchGraph, RenderRequest, View};
use arcviz_model::{Architecture, Perspective};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Initialize Arcviz in a directory.
pub fn init(path: &Path) -> Result<()> {
    let config_dir = path.join(CONFIG_DIR);

    if config_dir.exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    fs::create_dir_all(&config_dir)?;
    let config_path = config_dir.join(CONFIG_FILE);
    fs::write(&config_path, serde_json::to_string_pretty(&Config::default())?)?;

    println!("{} Initialized Arcviz in {}", "✓".green(), path.display());
    println!("  Run {} to inspect your architecture", "arcviz inspect".cyan());

    Ok(())
}

fn description_path(file: Option<&Path>, config: &Config) -> PathBuf {
    file.map(Path::to_path_buf).unwrap_or_else(|| config.file.clone())
}

/// Builds the graph for a perspective the same way a render request does.
fn build(
    arch: &Architecture,
    perspective: &str,
    targets: Vec<String>,
    format: &str,
) -> Result<ArchGraph> {
    let request = RenderRequest::new(perspective, arch.encode()?)
        .with_targets(targets)
        .with_visual_format(format);
    Ok(process(&request)?)
}

/// Show the elements and relations a diagram would contain.
pub fn inspect(
    perspective: Option<&str>,
    targets: Vec<String>,
    file: Option<&Path>,
    format: Option<&str>,
    json: bool,
) -> Result<()> {
    let config = Config::current()?;
    let perspective = perspective.unwrap_or(Perspective::Landscape.as_str());
    if perspective.parse::<Perspective>()? == Perspective::Code {
        return Err("the code perspective is not supported yet".into());
    }

    let path = description_path(file, &config);
    let arch = Architecture::load(&path)?;
    let graph = build(&arch, perspective, targets, format.unwrap_or(config.format.as_str()))?;
    let view = graph.view()?;

    if json {
        let output = serde_json::json!({
            "perspective": graph.perspective(),
            "format": graph.format(),
            "targets": graph.targets(),
            "view": view,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_view(&graph, &view);
    Ok(())
}

fn print_view(graph: &ArchGraph, view: &View) {
    let scope = if graph.targets().is_empty() {
        "everything".to_string()
    } else {
        graph.targets().join(", ")
    };
    println!(
        "{} view of {} ({})\n",
        graph.perspective().to_string().cyan().bold(),
        scope.cyan(),
        graph.format().to_string().dimmed()
    );

    println!("{}", "Users".yellow());
    for user in &view.users {
        println!("  {} {}", user.name.cyan(), user.role.dimmed());
    }

    println!("{}", "Internal systems".yellow());
    for system in &view.internal_systems {
        println!("  {} {}", system.name.cyan(), system.desc.dimmed());
        if graph.perspective() == Perspective::Container {
            for container in &system.containers {
                println!(
                    "    {} {}",
                    container.name,
                    format!("[{}]", container.technology).dimmed()
                );
            }
        }
    }

    println!("{}", "External systems".yellow());
    for system in &view.external_systems {
        println!("  {} {}", system.name.cyan(), system.desc.dimmed());
    }

    println!("{}", "Relations".yellow());
    for relation in &view.relations {
        println!(
            "  {} {} {}  {}",
            relation.subject,
            "→".dimmed(),
            relation.object,
            relation.pointer.dimmed()
        );
    }
}

/// Build the graph and report its size.
pub fn check(file: Option<&Path>) -> Result<()> {
    let config = Config::current()?;
    let path = description_path(file, &config);
    let arch = Architecture::load(&path)?;

    let graph = build(&arch, Perspective::Landscape.as_str(), Vec::new(), &config.format)?;
    let stats = graph.stats();

    println!(
        "{} {} is valid: {} elements, {} edges ({} derived)",
        "✓".green(),
        path.display(),
        stats.vertex_count.to_string().cyan(),
        stats.edge_count.to_string().cyan(),
        stats.derived_edges
    );

    Ok(())
}

/// Write the binary request payload for a description.
pub fn encode(file: Option<&Path>, output: &Path) -> Result<()> {
    let config = Config::current()?;
    let path = description_path(file, &config);
    let arch = Architecture::load(&path)?;

    let payload = arch.encode()?;
    fs::write(output, &payload)?;

    println!(
        "{} Encoded {} ({} bytes) to {}",
        "✓".green(),
        path.display(),
        payload.len(),
        output.display()
    );
    Ok(())
}
