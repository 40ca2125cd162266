use anyhow::Result;
use clap::Parser;
use log::debug;

use member_reorder::cli::Cli;
use member_reorder::member::processor::{CONSTRUCTOR_NOT_FOUND_MESSAGE, DRY_RUN_MESSAGE, SUCCESS_MESSAGE};
use member_reorder::{MemberReorderer, ReorderOutcome};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let options = cli.resolve_options()?;
    debug!("Resolved options: {:?}", options);

    let reorderer = MemberReorderer::new(options);
    let file = match reorderer.load_and_reorder()? {
        ReorderOutcome::ConstructorNotFound { .. } => {
            println!("{}", CONSTRUCTOR_NOT_FOUND_MESSAGE);
            return Ok(());
        }
        ReorderOutcome::Reordered(file) => file,
    };

    // The count line comes before the write so it survives a failed write
    println!("{}", file.stats.summary_line());
    if file.stats.has_warnings() {
        eprintln!(
            "{} methods written; some body content was dropped (see warnings above)",
            file.stats.written_methods()
        );
    }

    if reorderer.options().dry_run {
        print!("{}", file.content());
        println!("{}", DRY_RUN_MESSAGE);
    } else {
        reorderer.write(&file)?;
        println!("{}", SUCCESS_MESSAGE);
    }

    Ok(())
}
