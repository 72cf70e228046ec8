use crate::conf::{ConfigError, load_config};
use owo_colors::OwoColorize;
use std::path::Path;

pub fn check(path: Option<&Path>, plain: bool) -> anyhow::Result<()> {
    match load_config(path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ max_http_body_size    = {}", cfg.max_http_body_size);
            println!("✔ max_variable_size     = {}", cfg.max_variable_size);
            println!("✔ max_dictionary_items  = {}", cfg.max_dictionary_items);
            println!("✔ max_query_string_size = {}", cfg.max_query_string_size);
            println!("✔ max_fragment_size     = {}", cfg.max_fragment_size);
            println!("✔ max_trim_depth        = {}", cfg.max_trim_depth);
            Ok(())
        }
        Err(err) => {
            if plain {
                render_plain(&err);
            } else {
                render_pretty(&err);
            }
            std::process::exit(1);
        }
    }
}

fn render_plain(err: &ConfigError) {
    match err {
        ConfigError::Validation { errors } => {
            for message in errors {
                eprintln!("error: {message}");
            }
        }
        other => eprintln!("error: {other}"),
    }
}

fn render_pretty(err: &ConfigError) {
    match err {
        ConfigError::Validation { errors } => {
            eprintln!("configuration validation failed ({} errors)\n", errors.len());
            for message in errors {
                eprintln!("  {}: {}", "error".red().bold(), message);
            }
        }
        other => eprintln!("{}: {}", "error".red().bold(), other),
    }

    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::Load { .. } => Some(
            "The config file must be TOML with only the known limit keys.\n\
             \n\
             Example:\n\
             \n\
             max_http_body_size = 131072\n\
             max_variable_size  = 512",
        ),

        ConfigError::Validation { .. } => Some(
            "Every limit has an allowed range.\n\
             \n\
             Adjust the values listed above, or remove them to use the defaults.",
        ),

        //---------------------------------------------------------------------
        // Everything else: no hint
        //---------------------------------------------------------------------
        ConfigError::Defaults { .. } => None,
    }
}
