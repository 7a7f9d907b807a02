use clap::Parser;
use course_quote::adapters::dispatch::{PrintDispatcher, SystemLinkDispatcher};
use course_quote::adapters::export::render_quote;
use course_quote::app::contact::{contact_card, perform_contact_action};
use course_quote::config::Command;
use course_quote::core::pricing::summarize;
use course_quote::domain::model::CourseTier;
use course_quote::domain::ports::LinkDispatcher;
use course_quote::utils::error::ErrorSeverity;
use course_quote::utils::{logger, validation::Validate};
use course_quote::{AppConfig, Catalog, CliConfig, EnrollmentFlow, QuoteEngine, QuoteError, Selection};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match AppConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            }
        }
        None => AppConfig::default(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let engine = QuoteEngine::from_provider(Arc::new(Catalog::standard()), &config);

    if let Err(e) = run(cli.command, engine).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}: {}", e.title(), e.user_friendly_message());
        if !matches!(e, QuoteError::LinkDispatchFailure { .. }) {
            eprintln!("💡 {}", e.recovery_suggestion());
        }

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(command: Command, engine: QuoteEngine) -> course_quote::Result<()> {
    match command {
        Command::Catalog { details } => {
            print_catalog(&engine, details);
            Ok(())
        }
        Command::Quote { courses, format } => {
            let selection = select(&engine, &courses);
            if selection.is_empty() {
                return Err(QuoteError::EmptySelection);
            }
            let quote = engine.compute_quote(&selection);
            println!(
                "{}",
                render_quote(&quote, format, &engine.profile().currency_symbol)?
            );
            Ok(())
        }
        Command::Enroll {
            courses,
            name,
            email,
            open,
        } => {
            let selection = select(&engine, &courses);
            let summary = summarize(engine.catalog(), &selection);
            tracing::info!("{}", summary.headline());

            let enrollment = if open {
                EnrollmentFlow::new(engine, SystemLinkDispatcher)
                    .confirm(&selection, &name, &email)
                    .await?
            } else {
                EnrollmentFlow::new(engine, PrintDispatcher)
                    .confirm(&selection, &name, &email)
                    .await?
            };
            if open {
                println!("✅ Mail composer opened for {}", enrollment.recipient);
            }
            Ok(())
        }
        Command::Contact { action, open } => {
            println!("{}", contact_card(engine.profile()));
            let Some(action) = action else {
                return Ok(());
            };
            if open {
                contact(&engine, &SystemLinkDispatcher, action).await
            } else {
                contact(&engine, &PrintDispatcher, action).await
            }
        }
    }
}

async fn contact<D: LinkDispatcher>(
    engine: &QuoteEngine,
    dispatcher: &D,
    action: course_quote::app::contact::ContactAction,
) -> course_quote::Result<()> {
    println!();
    perform_contact_action(engine, dispatcher, action).await?;
    Ok(())
}

fn select(engine: &QuoteEngine, courses: &[String]) -> Selection {
    courses
        .iter()
        .fold(Selection::new(), |selection, id| engine.toggle_selection(&selection, id))
}

fn print_catalog(engine: &QuoteEngine, details: bool) {
    let symbol = &engine.profile().currency_symbol;
    for tier in [CourseTier::Short, CourseTier::Long] {
        println!("{} - {}", tier.heading(), tier.tagline());
        for course in engine.catalog().by_tier(tier) {
            println!(
                "  [{}] {} ({}): {}{}",
                course.id,
                course.name,
                course.duration,
                symbol,
                course.fee()
            );
            if details {
                println!("      Purpose: {}", course.purpose);
                for topic in course.topics {
                    println!("      - {}", topic);
                }
            }
        }
        println!();
    }
    println!("Special Discounts Available!");
    println!(
        "  • {}% discount when enrolling in 2 courses",
        engine.discount_rate(2).percent()
    );
    println!(
        "  • {}% discount when enrolling in 3+ courses",
        engine.discount_rate(3).percent()
    );
}
