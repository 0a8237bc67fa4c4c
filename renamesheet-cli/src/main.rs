use anyhow::{Context, Result};
use clap::Parser;
use renamesheet_core::{
    Category, Config, MappingError, OutputFormat as CoreOutputFormat, OutputFormatter, RunError,
    VersionResult,
};
use std::io::{self, IsTerminal};
use std::process;

mod categories;
mod cli;
mod copy;
mod rename;
mod template;

use cli::{CategoryArg, Cli, Commands, OutputFormat};

fn main() {
    init_logging();

    let cli = Cli::parse();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
            .unwrap_or_else(|e| {
                eprintln!("Error: {e:#}");
                process::exit(2);
            });
    }

    // Load config to get defaults
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable config: {e:#}");
        Config::default()
    });

    let use_color = !cli.no_color
        && config
            .defaults
            .use_color
            .unwrap_or_else(|| io::stdout().is_terminal());

    let category = |arg: Option<CategoryArg>| -> Category {
        arg.map_or_else(|| config.default_category(), Into::into)
    };
    let output_format = |arg: Option<OutputFormat>| -> CoreOutputFormat {
        arg.map_or_else(|| config.output_format(), Into::into)
    };

    let result = match cli.command {
        Commands::Template {
            category: category_arg,
            out_dir,
            format,
            output,
        } => {
            let out_dir = out_dir.unwrap_or_else(|| config.defaults.template_dir.clone());
            template::handle_template(
                category(category_arg),
                format.into(),
                &out_dir,
                output_format(output),
                use_color,
            )
        },

        Commands::Rename {
            category: category_arg,
            folder,
            mapping,
            output,
            quiet,
        } => rename::handle_rename(
            folder,
            mapping,
            category(category_arg),
            output_format(output),
            quiet,
            use_color,
        ),

        Commands::Copy {
            files,
            category: category_arg,
            mapping,
            out_dir,
            output,
            quiet,
        } => copy::handle_copy(
            &files,
            mapping,
            category(category_arg),
            &out_dir,
            output_format(output),
            quiet,
            use_color,
        ),

        Commands::Categories { output } => {
            categories::handle_categories(output_format(output), use_color)
        },

        Commands::Version { output } => handle_version(output),
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

/// Logging goes to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

/// 2 for problems with the user's input, 3 for anything else.
fn exit_code(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<RunError>().is_some() || error.downcast_ref::<MappingError>().is_some()
    {
        2
    } else {
        3
    }
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "renamesheet".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into(), false));
    Ok(())
}
