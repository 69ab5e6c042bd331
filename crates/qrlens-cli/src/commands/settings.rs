//! Settings CLI commands
//!
//! Handles: qrlens settings show/toggle/set

use clap::{ArgAction, Subcommand};

use qrlens_core::{ScanLibrary, SettingKey};

use crate::context;

/// Settings commands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show all settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Flip a setting (vibrate, beep, auto-open-url, ai-analysis)
    Toggle {
        /// Setting name
        key: SettingKey,
    },
    /// Set a setting explicitly
    Set {
        /// Setting name
        key: SettingKey,
        /// on/off, true/false, yes/no
        #[arg(value_parser = parse_switch, action = ArgAction::Set)]
        value: bool,
    },
}

fn parse_switch(s: &str) -> Result<bool, String> {
    match s.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(format!("expected on/off, got {s:?}")),
    }
}

/// Execute settings command
pub fn execute(cmd: SettingsCommands) -> Result<(), Box<dyn std::error::Error>> {
    let db = context::open_database()?;
    let library = ScanLibrary::new(db.connection());
    let mut settings = library.settings()?;

    match cmd {
        SettingsCommands::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            } else {
                println!("Settings:");
                for key in SettingKey::ALL {
                    let state = if settings.get(key) { "on" } else { "off" };
                    println!("  {:<14} {state:<4} {}", key.as_str(), key.label());
                }
            }
        }
        SettingsCommands::Toggle { key } => {
            let value = settings.toggle(key);
            library.save_settings(&settings)?;
            println!("{key} is now {}", if value { "on" } else { "off" });
        }
        SettingsCommands::Set { key, value } => {
            settings.set(key, value);
            library.save_settings(&settings)?;
            println!("{key} is now {}", if value { "on" } else { "off" });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_switch() {
        assert_eq!(parse_switch("ON"), Ok(true));
        assert_eq!(parse_switch("no"), Ok(false));
        assert!(parse_switch("maybe").is_err());
    }
}
