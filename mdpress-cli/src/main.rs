// Command-line interface for mdpress
//
// This binary converts markdown articles to HTML and publishes them to a
// WordPress site over its REST API.
//
// The core capabilities live in library crates: mdpress-convert does the
// markdown to HTML conversion, mdpress-wp talks to the site (posts, media,
// taxonomy terms). This crate is the shell around them: argument parsing,
// configuration loading and exit codes.
//
// Converting:
//
//  mdpress convert <input> [-o <file>]   - Convert to HTML (stdout by default)
//
// An input file with a JSON metadata header converts its body; a plain
// markdown file converts as a whole.
//
// Publishing:
//
//  mdpress publish <input> [--status <status>]
//
// Publishing needs site credentials, which come from mdpress.toml or from
// MDPRESS_SITE__* environment variables. After a first publish the assigned
// post id is recorded back into the article's metadata header so later runs
// update the same post.

use clap::{Arg, Command, ValueHint};
use mdpress_config::{Loader, MdpressConfig};
use mdpress_convert::ConvertOptions;
use mdpress_wp::{publish, read_article, update_metadata, PublishSpec, WpClient};
use std::fs;
use std::path::Path;
use std::process;

fn build_cli() -> Command {
    Command::new("mdpress")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert markdown articles and publish them to a WordPress site")
        .long_about(
            "mdpress is a command-line tool for publishing locally authored\n\
            markdown articles to a WordPress site.\n\n\
            Commands:\n  \
            - convert: Convert an article to HTML locally\n  \
            - publish: Convert and publish an article to the configured site\n\n\
            Configuration is read from mdpress.toml in the working directory\n\
            (or the file given with --config), with MDPRESS_* environment\n\
            variables layered on top. Credentials belong in the environment:\n  \
            MDPRESS_SITE__BASE_URL, MDPRESS_SITE__USERNAME, MDPRESS_SITE__PASSWORD\n\n\
            Examples:\n  \
            mdpress convert article.md              # HTML to stdout\n  \
            mdpress convert article.md -o out.html  # HTML to a file\n  \
            mdpress publish article.md              # Publish with configured status\n  \
            mdpress publish article.md --status draft",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an mdpress.toml configuration file")
                .global(true)
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert an article or markdown file to HTML")
                .long_about(
                    "Convert a markdown file to an HTML fragment.\n\n\
                    If the input starts with a JSON metadata header separated by a\n\
                    '---' line, only the body below the header is converted.\n\n\
                    Output goes to stdout by default, or use -o to write a file.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("publish")
                .about("Publish an article to the configured site")
                .long_about(
                    "Convert an article and publish it to the configured site.\n\n\
                    Category and tag names from the metadata header are resolved to\n\
                    IDs, creating missing terms on the site. A featured image and\n\
                    local image references are uploaded before the post is written.\n\n\
                    The first publish records the assigned post id in the article's\n\
                    metadata header; subsequent publishes update that post.",
                )
                .arg(
                    Arg::new("input")
                        .help("Article file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("status")
                        .long("status")
                        .value_name("STATUS")
                        .help("Post status to request, overriding configuration (publish, draft)"),
                ),
        )
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();
    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, output, &config);
        }
        Some(("publish", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let status = sub_matches.get_one::<String>("status").map(|s| s.as_str());
            handle_publish_command(input, status, &config).await;
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            process::exit(1);
        }
    }
}

fn load_cli_config(path: Option<&str>) -> MdpressConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("mdpress.toml"),
    };
    loader.build().unwrap_or_else(|error| {
        eprintln!("Error loading configuration: {error}");
        process::exit(1);
    })
}

fn handle_convert_command(input: &str, output: Option<&str>, config: &MdpressConfig) {
    let source = fs::read_to_string(input).unwrap_or_else(|error| {
        eprintln!("Error reading file '{input}': {error}");
        process::exit(1);
    });

    let options: ConvertOptions = (&config.convert).into();
    let html = match mdpress_wp::parse_article(&source) {
        Ok(article) => mdpress_convert::convert_with_options(&article.body, &options),
        Err(_) => mdpress_convert::convert_with_options(&source, &options),
    };

    match output {
        Some(path) => {
            fs::write(path, html).unwrap_or_else(|error| {
                eprintln!("Error writing file '{path}': {error}");
                process::exit(1);
            });
        }
        None => println!("{html}"),
    }
}

async fn handle_publish_command(input: &str, status: Option<&str>, config: &MdpressConfig) {
    if !config.site.is_complete() {
        eprintln!("Error: site.base_url, site.username and site.password must be configured");
        eprintln!(
            "Set them in mdpress.toml or via MDPRESS_SITE__BASE_URL, \
             MDPRESS_SITE__USERNAME and MDPRESS_SITE__PASSWORD"
        );
        process::exit(1);
    }

    let article = read_article(input).unwrap_or_else(|error| {
        eprintln!("Error reading article '{input}': {error}");
        process::exit(1);
    });

    let client = WpClient::new(
        &config.site.base_url,
        &config.site.username,
        &config.site.password,
    )
    .unwrap_or_else(|error| {
        eprintln!("Error: {error}");
        process::exit(1);
    });

    let images_dir = Path::new(input)
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(&config.publish.images_dir);

    let spec = PublishSpec::new(&article)
        .with_status(status.unwrap_or(&config.publish.status))
        .with_images_dir(&images_dir)
        .with_convert_options((&config.convert).into());

    match publish(&client, spec).await {
        Ok(outcome) => {
            if outcome.created {
                let mut metadata = article.metadata.clone();
                metadata.post_id = Some(outcome.id);
                if let Err(error) = update_metadata(input, &metadata) {
                    eprintln!("Warning: could not record post id in '{input}': {error}");
                }
            }
            println!("Published post {} at {}", outcome.id, outcome.link);
        }
        Err(error) => {
            eprintln!("Error publishing '{input}': {error}");
            process::exit(1);
        }
    }
}
