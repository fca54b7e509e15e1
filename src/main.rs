use clap::Parser;
use metahead::application::{init, RenderOptions, RenderTagsService, ShowConfigService};
use metahead::cli::{format_snapshot, Cli, Commands};
use metahead::error::MetaheadError;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MetaheadError> {
    match cli.command {
        Some(Commands::Init { path, force }) => {
            let created = init::init(&path, force)?;
            println!("Initialized meta config at {}", created.display());
            Ok(())
        }
        Some(Commands::Render {
            config,
            tag,
            append,
            keyword,
            robots,
            output,
        }) => {
            let destination = output.clone();
            let options = RenderOptions {
                config,
                tags: tag,
                appends: append,
                keywords: keyword,
                robots,
                output,
            };

            let markup = RenderTagsService::execute(options)?;

            match destination {
                Some(path) => println!("Wrote meta tags to: {}", path.display()),
                None => print!("{}", markup),
            }
            Ok(())
        }
        Some(Commands::Show { config }) => {
            let snapshot = ShowConfigService::execute(config)?;
            let formatted = format_snapshot(&snapshot);
            if formatted.ends_with('\n') {
                print!("{}", formatted);
            } else {
                println!("{}", formatted);
            }
            Ok(())
        }
        None => {
            println!("metahead - HTML meta tag generator");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
