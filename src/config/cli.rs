use crate::adapters::export::OutputFormat;
use crate::app::contact::ContactAction;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "course-quote")]
#[command(about = "Course fee quotes and enrollment requests")]
pub struct CliConfig {
    /// Path to a TOML file overriding provider details
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the course catalog grouped by duration
    Catalog {
        /// Include purpose and syllabus topics
        #[arg(long)]
        details: bool,
    },

    /// Show the fee quote for a set of courses
    Quote {
        /// Course id to select; repeat or comma-separate. Repeating an id toggles it off.
        #[arg(long = "course", value_delimiter = ',', required = true)]
        courses: Vec<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Build the enrollment email and hand it to the mail client
    Enroll {
        #[arg(long = "course", value_delimiter = ',')]
        courses: Vec<String>,

        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        /// Open the system mail client instead of printing the mailto link
        #[arg(long)]
        open: bool,
    },

    /// Show contact details, optionally calling, emailing or locating the provider
    Contact {
        #[arg(value_enum)]
        action: Option<ContactAction>,

        #[arg(long)]
        open: bool,
    },
}
