//! Command-line arguments.

use checkout_core::Role;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "checkout", version, about = "Price a cart and print the receipt")]
pub struct Cli {
    /// Customer role: standard, veteran or employee
    /// [default: CHECKOUT_DEFAULT_ROLE, else standard; veteran for the demo cart]
    #[arg(short, long)]
    pub role: Option<Role>,

    /// Output format [default: CHECKOUT_OUTPUT, else text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print the catalog and exit
    #[arg(short, long)]
    pub list: bool,

    /// Product names. Repeat a name to buy more than one.
    /// With no items, prices the demo cart (3 x Apple, 1 x Laptop) as veteran.
    pub items: Vec<String>,
}

/// How the receipt is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable receipt lines
    #[default]
    Text,
    /// Pretty-printed JSON, amounts in cents
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items_and_role() {
        let cli = Cli::try_parse_from(["checkout", "--role", "veteran", "Apple", "Apple"]).unwrap();
        assert_eq!(cli.role, Some(Role::Veteran));
        assert_eq!(cli.items, vec!["Apple", "Apple"]);
        assert_eq!(cli.format, None);
        assert!(!cli.list);
    }

    #[test]
    fn test_role_is_case_insensitive() {
        let cli = Cli::try_parse_from(["checkout", "-r", "EMPLOYEE"]).unwrap();
        assert_eq!(cli.role, Some(Role::Employee));
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(Cli::try_parse_from(["checkout", "--role", "manager"]).is_err());
    }

    #[test]
    fn test_multi_word_item_names() {
        let cli = Cli::try_parse_from(["checkout", "-f", "json", "Diamond Ring"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.items, vec!["Diamond Ring"]);
    }

    #[test]
    fn test_verify_command() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
