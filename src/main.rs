use anyhow::Result;
use clap::Parser;
use class_locator::classpath::ClasspathLoader;
use class_locator::cli::{Cli, Commands, OutputFormat};
use class_locator::config::build_classpath;
use class_locator::locator::{ClassMatch, find_first_class, get_source, get_sources};
use serde::Serialize;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let loader = build_classpath(&cli)?;
    let output = run(&cli.command, &loader);
    println!("{}", render(&output, cli.format)?);
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Output {
    Source {
        resource: String,
        source: Option<PathBuf>,
    },
    Sources {
        resource: String,
        sources: Vec<PathBuf>,
    },
    Find {
        candidates: Vec<String>,
        #[serde(rename = "match")]
        found: Option<ClassMatch>,
    },
}

fn run(command: &Commands, loader: &ClasspathLoader) -> Output {
    match command {
        Commands::Source { resource } => Output::Source {
            resource: resource.clone(),
            source: get_source(loader, resource),
        },
        Commands::Sources { resource } => Output::Sources {
            resource: resource.clone(),
            sources: get_sources(loader, resource),
        },
        Commands::Find { class_names } => Output::Find {
            candidates: class_names.clone(),
            found: find_first_class(loader, class_names.as_slice()),
        },
    }
}

fn render(output: &Output, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(output)?,
        OutputFormat::Text => match output {
            Output::Source { resource, source } => match source {
                Some(path) => format!("{resource}: {}", path.display()),
                None => format!("{resource}: not found"),
            },
            Output::Sources { resource, sources } => {
                let mut out = format!("{resource}: {} source(s)", sources.len());
                for path in sources {
                    out.push_str(&format!("\n- {}", path.display()));
                }
                out
            }
            Output::Find { found, .. } => match found {
                Some(m) => format!("{}: {}", m.class_name, m.source_path.display()),
                None => "no candidate class found".to_string(),
            },
        },
    };
    Ok(text)
}
