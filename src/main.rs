use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use sourceshare::codec;
use sourceshare::config::{Args, Command, Config};
use sourceshare::document::{Language, DEFAULT_FILENAME};
use sourceshare::ports::{DirectoryDownloader, LogNotifier, WriterClipboard};
use sourceshare::session::{EditorSession, LinkLoad};

/// `share --json` output
#[derive(Debug, Serialize)]
struct ShareOutput<'a> {
    url: &'a str,
    filename: &'a str,
    language: Language,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_args(&args)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    if let Some(path) = &config.project_config {
        log::debug!("Using project config {:?}", path);
    }

    match args.command {
        Command::Share {
            file,
            language,
            json,
        } => share(&config, &file, language.as_deref(), json),
        Command::Open { url, download } => open(&config, &url, download),
        Command::Encode => {
            let content = read_stdin()?;
            println!("{}", codec::encode_token(&content));
            Ok(())
        }
        Command::Decode => {
            let token = read_stdin()?;
            let content =
                codec::decode_token(token.trim()).context("Failed to decode token from stdin")?;
            io::stdout().write_all(content.as_bytes())?;
            Ok(())
        }
        Command::Languages => {
            for lang in Language::ALL {
                println!("{:<12}{:<12}{}", lang.id(), lang.name(), lang.extension());
            }
            Ok(())
        }
    }
}

fn share(config: &Config, file: &Path, language: Option<&str>, json: bool) -> Result<()> {
    let content =
        fs::read_to_string(file).with_context(|| format!("Failed to read {:?}", file))?;

    let language = match language {
        Some(id) => Language::from_id_or_default(id),
        None => file
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Language::from_extension)
            .unwrap_or_default(),
    };
    let filename = file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(DEFAULT_FILENAME);

    let out: Box<dyn Write> = if json {
        Box::new(io::sink())
    } else {
        Box::new(io::stdout())
    };
    // A fresh editor page; the configured URL may carry a stale link
    let mut page_url = config.base_url.clone();
    page_url.set_query(None);
    page_url.set_fragment(None);

    let mut session = EditorSession::open(
        page_url,
        WriterClipboard::new(out),
        DirectoryDownloader::new(&config.download_dir),
        LogNotifier,
    );
    session.set_content(content);
    session.set_language(language);
    session.set_filename(filename);

    let url = session.share()?;
    if json {
        let download_name = session.document().download_name();
        let output = ShareOutput {
            url: url.as_str(),
            filename: &download_name,
            language,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!();
    }
    Ok(())
}

fn open(config: &Config, url: &str, download: bool) -> Result<()> {
    let page_url = codec::parse_url(url).context("Failed to parse share link")?;
    let mut session = EditorSession::open(
        page_url,
        WriterClipboard::stdout(),
        DirectoryDownloader::new(&config.download_dir),
        LogNotifier,
    );

    if let LinkLoad::Missing = session.load() {
        log::warn!("No '{}' parameter in link, showing default code", codec::CODE_PARAM);
    }

    if download {
        session.download()?;
    } else {
        session.copy()?;
    }
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    Ok(input)
}
