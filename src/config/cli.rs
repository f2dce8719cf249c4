use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "expense-tracker")]
#[command(about = "Track shared expenses between two people")]
pub struct CliConfig {
    /// Backend base URL; `/items` is appended
    #[arg(long, global = true, env = "EXPENSE_TRACKER_BASE_URL")]
    pub base_url: Option<String>,

    /// Optional TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show all expenses with totals and who owes whom
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Save a new expense dated today
    Add {
        /// Who paid?
        #[arg(long)]
        payee: String,

        /// For what?
        #[arg(long, default_value = "")]
        product: String,

        /// How much?
        #[arg(long, allow_hyphen_values = true)]
        price: String,
    },
}

impl CliConfig {
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::List { json: false })
    }

    pub fn json_output(&self) -> bool {
        matches!(self.command(), Command::List { json: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_is_the_default_command() {
        let cli = CliConfig::try_parse_from(["expense-tracker", "--base-url", "http://x"]).unwrap();
        assert!(matches!(cli.command(), Command::List { json: false }));
        assert_eq!(cli.base_url.as_deref(), Some("http://x"));
    }

    #[test]
    fn test_parse_add_command() {
        let cli = CliConfig::try_parse_from([
            "expense-tracker",
            "add",
            "--payee",
            "Rahul",
            "--product",
            "Dinner",
            "--price",
            "42.5",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command() {
            Command::Add {
                payee,
                product,
                price,
            } => {
                assert_eq!(payee, "Rahul");
                assert_eq!(product, "Dinner");
                assert_eq!(price, "42.5");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_list_json_flag() {
        let cli = CliConfig::try_parse_from(["expense-tracker", "list", "--json"]).unwrap();
        assert!(cli.json_output());
    }
}
