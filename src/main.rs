//! Promptsmith CLI
//!
//! Usage:
//!   promptsmith list
//!   promptsmith info <ID>
//!   promptsmith render <ID> -f key=value [-f key=value ...] [--copy]
//!   promptsmith lint
//!   promptsmith docs <new|list|show|delete|search|export|import|clear>
//!   promptsmith config <show|theme>
//!
//! A custom catalog file can replace the builtin snippet set with
//! `--catalog <FILE>` (TOML format).

use std::collections::HashMap;
use std::fs;
use std::io::{self, Read as _, Write as _};
use std::path::PathBuf;
use std::process::{ExitCode, Stdio};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use promptsmith::catalog::lint;
use promptsmith::{
    Catalog, DocCategory, DocumentStore, FieldKind, FormSession, Settings, Snippet, Theme,
};

#[derive(Parser)]
#[command(name = "promptsmith")]
#[command(about = "Snippet-driven prompt builder with a local document vault")]
struct Cli {
    /// Catalog file to use instead of the builtin snippet set (TOML format)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available snippets
    List,

    /// Show a snippet's documentation and field guide
    Info {
        /// Snippet id (see `list`)
        id: String,
    },

    /// Render a snippet with the given field values
    Render {
        /// Snippet id (see `list`)
        id: String,

        /// Field value as key=value; repeat the same key to add list lines
        #[arg(short = 'f', long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,

        /// Also copy the rendered prompt to the system clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Check the catalog for authoring mistakes
    Lint,

    /// Manage stored documents
    #[command(subcommand)]
    Docs(DocsCommand),

    /// Show or change persisted settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum DocsCommand {
    /// Create a document (content from --file, or stdin)
    New {
        title: String,
        /// guidelines, templates, standards, or other
        #[arg(short = 'C', long, default_value = "other")]
        category: DocCategory,
        /// Read content from this file instead of stdin
        #[arg(short = 'F', long)]
        file: Option<PathBuf>,
    },
    /// List all documents, newest first
    List,
    /// Print one document
    Show { id: String },
    /// Delete one document
    Delete { id: String },
    /// Search documents by title and content
    Search { query: String },
    /// Export all documents as JSON
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import documents from a JSON export
    Import {
        file: PathBuf,
        /// Append to the existing collection instead of replacing it
        #[arg(long)]
        merge: bool,
    },
    /// Delete every document
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the current settings
    Show,
    /// Set the display theme (light or dark) and persist it
    Theme { value: Theme },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => match Catalog::from_file(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Error loading catalog '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Catalog::builtin(),
    };

    match cli.command {
        Command::List => {
            for snippet in catalog.iter() {
                println!(
                    "{}  {:<18} {:<20} [{}]  {}",
                    snippet.icon, snippet.id, snippet.name, snippet.category, snippet.description
                );
            }
            ExitCode::SUCCESS
        }
        Command::Info { id } => match catalog.get(&id) {
            Some(snippet) => {
                print_info(snippet);
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("Unknown snippet id '{}'. Run `promptsmith list`.", id);
                ExitCode::FAILURE
            }
        },
        Command::Render { id, fields, copy } => run_render(&catalog, &id, &fields, copy),
        Command::Lint => run_lint(&catalog),
        Command::Docs(command) => run_docs(command),
        Command::Config(command) => run_config(command),
    }
}

// ── render ────────────────────────────────────────────────────────

fn run_render(catalog: &Catalog, id: &str, fields: &[String], copy: bool) -> ExitCode {
    let mut session = FormSession::new();
    if !session.select(catalog, id) {
        eprintln!("Unknown snippet id '{}'. Run `promptsmith list`.", id);
        return ExitCode::FAILURE;
    }

    // Field kinds drive how repeated -f flags are applied
    let kinds: HashMap<String, FieldKind> = session
        .snippet()
        .map(|snippet| {
            snippet
                .fields
                .iter()
                .map(|field| (field.id.clone(), field.kind))
                .collect()
        })
        .unwrap_or_default();

    let mut list_lines: HashMap<String, usize> = HashMap::new();
    for pair in fields {
        let Some((key, value)) = pair.split_once('=') else {
            eprintln!("Invalid field '{}': expected KEY=VALUE", pair);
            return ExitCode::FAILURE;
        };

        match kinds.get(key) {
            Some(FieldKind::List) => {
                // The first value fills the initial empty line
                let line = list_lines.entry(key.to_string()).or_insert(0);
                if *line > 0 {
                    session.push_list_item(key);
                }
                session.set_list_item(key, *line, value);
                *line += 1;
            }
            Some(_) => session.set_scalar(key, value),
            None => {
                eprintln!("Warning: snippet '{}' has no field '{}', ignored", id, key);
            }
        }
    }

    let rendered = session.render().unwrap_or_default();
    println!("{}", rendered);

    if copy {
        // Clipboard failure never affects the rendered output above
        if let Err(e) = copy_to_clipboard(&rendered) {
            eprintln!("Warning: could not copy to clipboard: {}", e);
        }
    }

    ExitCode::SUCCESS
}

/// Pipe text into the first clipboard tool that works.
fn copy_to_clipboard(text: &str) -> Result<(), String> {
    const TOOLS: &[(&str, &[&str])] = &[
        ("pbcopy", &[]),
        ("wl-copy", &[]),
        ("xclip", &["-selection", "clipboard"]),
    ];

    for (tool, args) in TOOLS {
        let spawned = std::process::Command::new(tool)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let Ok(mut child) = spawned else { continue };
        let Some(mut stdin) = child.stdin.take() else {
            continue;
        };
        if stdin.write_all(text.as_bytes()).is_err() {
            continue;
        }
        drop(stdin);

        match child.wait() {
            Ok(status) if status.success() => return Ok(()),
            _ => continue,
        }
    }

    Err("no clipboard tool available (tried pbcopy, wl-copy, xclip)".to_string())
}

// ── info ──────────────────────────────────────────────────────────

fn print_info(snippet: &Snippet) {
    println!("{}  {} ({})", snippet.icon, snippet.name, snippet.id);
    println!("Category: {}", snippet.category);
    println!("\n{}", snippet.description);

    if !snippet.long_description.is_empty() {
        println!("\n{}", snippet.long_description);
    }
    if !snippet.when_to_use.is_empty() {
        println!("\nWhen to use: {}", snippet.when_to_use);
    }
    if !snippet.use_case.is_empty() {
        println!("\nExample use case: {}", snippet.use_case);
    }

    if snippet.fields.is_empty() {
        println!("\nThis snippet needs no input.");
        return;
    }

    println!("\nFields:");
    for field in &snippet.fields {
        let required = if field.required { " *" } else { "" };
        print!("  {:<16} {:?}{}", field.id, field.kind, required);
        if !field.options.is_empty() {
            print!("  [{}]", field.options.join(", "));
        }
        if let Some(default) = &field.default {
            print!("  (default: {})", default);
        }
        println!();

        if let Some(guide) = snippet.guide_for(&field.id) {
            println!("    {}", guide.explanation);
            println!("    e.g. {}", guide.example);
            if let Some(tips) = &guide.tips {
                println!("    tip: {}", tips);
            }
        }
    }
}

// ── lint ──────────────────────────────────────────────────────────

fn run_lint(catalog: &Catalog) -> ExitCode {
    let findings = lint::check(catalog);
    if findings.is_empty() {
        println!("Catalog is clean: {} snippets, no findings.", catalog.len());
        return ExitCode::SUCCESS;
    }

    let mut errors = 0;
    for finding in &findings {
        let template = catalog
            .get(&finding.snippet)
            .map(|snippet| snippet.template.as_str())
            .unwrap_or("");
        eprintln!("{}", finding.format(template));
        if finding.category.is_error() {
            errors += 1;
        }
    }

    eprintln!("{} finding(s), {} error(s).", findings.len(), errors);
    if errors > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

// ── docs ──────────────────────────────────────────────────────────

fn run_docs(command: DocsCommand) -> ExitCode {
    let store = DocumentStore::new(DocumentStore::default_path());

    let result = match command {
        DocsCommand::New {
            title,
            category,
            file,
        } => docs_new(&store, title, category, file),
        DocsCommand::List => store.list().map(|documents| {
            for doc in documents {
                println!(
                    "{}  [{}] {}  ({})",
                    doc.id,
                    doc.category,
                    doc.title,
                    doc.updated_at.format("%Y-%m-%d %H:%M")
                );
            }
        }),
        DocsCommand::Show { id } => match store.get(&id) {
            Ok(Some(doc)) => {
                println!("# {} [{}]\n", doc.title, doc.category);
                println!("{}", doc.content);
                Ok(())
            }
            Ok(None) => {
                eprintln!("No document with id '{}'.", id);
                return ExitCode::FAILURE;
            }
            Err(e) => Err(e),
        },
        DocsCommand::Delete { id } => match store.delete(&id) {
            Ok(true) => Ok(()),
            Ok(false) => {
                eprintln!("No document with id '{}'.", id);
                return ExitCode::FAILURE;
            }
            Err(e) => Err(e),
        },
        DocsCommand::Search { query } => store.search(&query).map(|documents| {
            for doc in documents {
                println!("{}  [{}] {}", doc.id, doc.category, doc.title);
            }
        }),
        DocsCommand::Export { output } => store.export().and_then(|json| match output {
            Some(path) => fs::write(path, json).map_err(Into::into),
            None => {
                println!("{}", json);
                Ok(())
            }
        }),
        DocsCommand::Import { file, merge } => fs::read_to_string(&file)
            .map_err(Into::into)
            .and_then(|json| store.import(&json, merge))
            .map(|count| println!("Imported {} document(s).", count)),
        DocsCommand::Clear { force } => {
            if !force {
                eprintln!("Refusing to delete all documents without --force.");
                return ExitCode::FAILURE;
            }
            store.delete_all()
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn docs_new(
    store: &DocumentStore,
    title: String,
    category: DocCategory,
    file: Option<PathBuf>,
) -> Result<(), promptsmith::StoreError> {
    let content = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let document = store.create(title, content, category)?;
    println!("Created document {}.", document.id);
    Ok(())
}

// ── config ────────────────────────────────────────────────────────

fn run_config(command: ConfigCommand) -> ExitCode {
    let path = Settings::default_path();
    let settings = match Settings::load(&path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error loading settings '{}': {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    match command {
        ConfigCommand::Show => {
            println!("theme = {}", settings.theme);
            ExitCode::SUCCESS
        }
        ConfigCommand::Theme { value } => {
            let updated = Settings { theme: value };
            if let Err(e) = updated.save(&path) {
                eprintln!("Error saving settings '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
            println!("theme = {}", value);
            ExitCode::SUCCESS
        }
    }
}
