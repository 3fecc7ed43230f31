use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use log::LevelFilter;

use autoload_cache_generator::cli::{Cli, Commands, GenerateArgs, ResolveArgs};
use autoload_cache_generator::config::{Config, ConfigLoader, FileConfigLoader, GenerateOptions};
use autoload_cache_generator::filesystem::{FileSystem, RealFileSystem};
use autoload_cache_generator::generator::CacheGenerator;
use autoload_cache_generator::output::{ErrorOutput, format_summary};
use autoload_cache_generator::resolver::{ResolvePolicy, TypeResolver};
use autoload_cache_generator::scanner::DirectoryScanner;
use autoload_cache_generator::source::FsSourceProvider;
use autoload_cache_generator::store::{CacheStore, FileCacheStore, MemoryCacheStore, to_json};
use autoload_cache_generator::{
    AutoloadError, EXIT_CONFIG_ERROR, EXIT_FAILURE, EXIT_SUCCESS, exit_code_for,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let output = ErrorOutput::new(cli.color.into());

    let exit_code = match &cli.command {
        Commands::Generate(args) => run_generate(args, &cli, &output),
        Commands::Resolve(args) => run_resolve(args, &output),
    };

    std::process::exit(exit_code);
}

/// Explicit level from `-q`/`-v`; `None` leaves `RUST_LOG` (or `warn`) in charge.
const fn log_level(verbose: u8, quiet: bool) -> Option<LevelFilter> {
    if quiet {
        return Some(LevelFilter::Error);
    }
    match verbose {
        0 => None,
        1 => Some(LevelFilter::Info),
        _ => Some(LevelFilter::Debug),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = log_level(verbose, quiet) {
        builder.filter_level(level);
    }
    builder
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

fn run_generate(args: &GenerateArgs, cli: &Cli, output: &ErrorOutput) -> i32 {
    let (options, errors) = prepare_options(args, &FileConfigLoader::new(), &RealFileSystem);
    if !errors.is_empty() {
        output.print_validation_errors(&errors);
        print_generate_help();
        return EXIT_CONFIG_ERROR;
    }

    match generate(&options, args.dry_run, cli.quiet) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            output.print_error(&e);
            exit_code_for(&e)
        }
    }
}

/// Layer defaults, the config file and CLI flags, then validate.
///
/// A config file that fails to load is reported first and replaced by the
/// defaults, so the remaining options are still checked in the same pass.
fn prepare_options<L: ConfigLoader, F: FileSystem>(
    args: &GenerateArgs,
    loader: &L,
    fs: &F,
) -> (GenerateOptions, Vec<AutoloadError>) {
    let mut errors = Vec::new();
    let config = load_config(args, loader).unwrap_or_else(|e| {
        errors.push(e);
        Config::default()
    });

    let options = GenerateOptions::new(args.directory.clone(), config)
        .with_filename(args.filename.clone())
        .with_regex_filter(args.regex_filter.clone());
    errors.extend(options.validate(fs));
    (options, errors)
}

fn load_config<L: ConfigLoader>(
    args: &GenerateArgs,
    loader: &L,
) -> autoload_cache_generator::Result<Config> {
    if args.no_config {
        Ok(Config::default())
    } else if let Some(path) = &args.config {
        loader.load_from_path(path)
    } else if let Some(directory) = &args.directory {
        loader.load(directory)
    } else {
        Ok(Config::default())
    }
}

fn generate(
    options: &GenerateOptions,
    dry_run: bool,
    quiet: bool,
) -> autoload_cache_generator::Result<()> {
    let directory = options
        .directory
        .as_deref()
        .ok_or(AutoloadError::MissingDirectory)?;
    let scanner = DirectoryScanner::new(options.filter()?);
    let source = FsSourceProvider::new(directory, scanner, RealFileSystem);
    let file_store = FileCacheStore::new(options.cache_path(), RealFileSystem);

    if dry_run {
        let store = MemoryCacheStore::with_mapping(file_store.load()?);
        let mut generator = CacheGenerator::new(source, store);
        generator.run()?;
        print!("{}", to_json(generator.mapping())?);
        return Ok(());
    }

    let mut generator = CacheGenerator::new(source, file_store);
    let report = generator.run()?;
    if !quiet {
        println!(
            "{}",
            format_summary(&report, generator.mapping().len(), options.cache_path())
        );
    }
    Ok(())
}

fn print_generate_help() {
    let mut command = Cli::command();
    command.build();
    if let Some(generate) = command.find_subcommand_mut("generate") {
        eprintln!("{}", generate.render_help());
    }
}

fn run_resolve(args: &ResolveArgs, output: &ErrorOutput) -> i32 {
    match resolve(args) {
        Ok(Some(path)) => {
            println!("{}", path.display());
            EXIT_SUCCESS
        }
        Ok(None) => {
            log::info!("\"{}\" could not be resolved", args.name);
            EXIT_FAILURE
        }
        Err(e) => {
            output.print_error(&e);
            exit_code_for(&e)
        }
    }
}

fn resolve(args: &ResolveArgs) -> autoload_cache_generator::Result<Option<PathBuf>> {
    let mapping = FileCacheStore::new(&args.filename, RealFileSystem).load()?;
    let policy = if args.strict {
        ResolvePolicy::strict()
    } else {
        ResolvePolicy::lenient()
    };
    TypeResolver::new(mapping, policy, RealFileSystem).resolve(&args.name)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
