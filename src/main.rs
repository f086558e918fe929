use std::env;
use std::io::{self, BufWriter, Write};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wordstats::{
    AppState, DEFAULT_TOP_N, PREVIEW_LEN, WordMap, WordStats, reconstruct, report, router,
    top_frequent, try_top_frequent,
};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_DICTIONARY: &str = "dictionary.txt";
const DEFAULT_TESTDATA: &str = "testdata.txt";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = load_config();
    info!("using dictionary at {}", config.dictionary_path.display());
    info!("using text at {}", config.text_path.display());

    let stats = WordStats::load(&config.dictionary_path, &config.text_path)?;

    if config.serve {
        return serve(&config, stats).await;
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    print_report(&mut out, &config, &stats)?;
    out.flush()?;
    Ok(())
}

async fn serve(config: &Config, stats: WordStats) -> anyhow::Result<()> {
    let state = AppState {
        stats: Arc::new(stats),
    };
    let app = router(state).layer(TraceLayer::new_for_http());
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", config.host, config.port))?;
    info!("binding to {}", addr);
    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;
    Ok(())
}

fn print_report<W: Write>(out: &mut W, config: &Config, stats: &WordStats) -> anyhow::Result<()> {
    let dictionary = stats.dictionary();
    let maps = stats.maps();

    if config.only.is_none() {
        report::write_load_summary(out, dictionary, maps)?;
    }
    if config.shows(Section::Dictionary) {
        let words = if config.strict {
            dictionary.try_preview(PREVIEW_LEN)?
        } else {
            let words = dictionary.preview(PREVIEW_LEN);
            if words.len() < PREVIEW_LEN {
                warn!(
                    "dictionary has only {} words, showing all of them",
                    words.len()
                );
            }
            words
        };
        report::write_dictionary_preview(out, &words)?;
    }
    if config.shows(Section::Known) {
        report::write_word_map(out, maps.known())?;
    }
    if config.shows(Section::Unknown) {
        report::write_word_map(out, maps.unknown())?;
    }
    if config.shows(Section::TopKnown) {
        write_ranking(out, config, maps.known(), "known")?;
    }
    if config.shows(Section::TopUnknown) {
        write_ranking(out, config, maps.unknown(), "unknown")?;
    }
    if config.shows(Section::Text) {
        report::write_text(out, &reconstruct(maps.known(), maps.unknown()))?;
    }
    Ok(())
}

fn write_ranking<W: Write>(
    out: &mut W,
    config: &Config,
    map: &WordMap,
    label: &str,
) -> anyhow::Result<()> {
    let ranked = if config.strict {
        try_top_frequent(map, config.top_n)
            .with_context(|| format!("ranking {label} words"))?
    } else {
        let ranked = top_frequent(map, config.top_n);
        if ranked.len() < config.top_n {
            warn!(
                "only {} distinct {label} words, fewer than the requested {}",
                ranked.len(),
                config.top_n
            );
        }
        ranked
    };
    report::write_top_frequent(out, &ranked)?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Dictionary,
    Known,
    Unknown,
    TopKnown,
    TopUnknown,
    Text,
}

#[derive(Debug, Clone)]
struct Config {
    host: String,
    port: u16,
    dictionary_path: PathBuf,
    text_path: PathBuf,
    top_n: usize,
    strict: bool,
    serve: bool,
    only: Option<Section>,
}

impl Config {
    fn shows(&self, section: Section) -> bool {
        self.only.is_none_or(|only| only == section)
    }
}

fn load_config() -> Config {
    let mut strict = false;
    let mut serve = false;
    let mut only = None;
    let mut cli_dictionary: Option<PathBuf> = None;
    let mut cli_text: Option<PathBuf> = None;
    let mut cli_top_n: Option<usize> = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--strict" => strict = true,
            "--serve" => serve = true,
            "--dictionary" => {
                if let Some(path) = args.next() {
                    cli_dictionary = Some(PathBuf::from(path));
                }
            }
            "--text" => {
                if let Some(path) = args.next() {
                    cli_text = Some(PathBuf::from(path));
                }
            }
            _ => {
                if let Some(path) = arg.strip_prefix("--dictionary=") {
                    cli_dictionary = Some(PathBuf::from(path));
                } else if let Some(path) = arg.strip_prefix("--text=") {
                    cli_text = Some(PathBuf::from(path));
                } else if let Some(n) = arg.strip_prefix("--top=") {
                    cli_top_n = parse_top_n(n);
                } else if let Some(section) = arg.strip_prefix("--only=") {
                    only = parse_section(section);
                    if only.is_none() {
                        warn!("ignoring unknown section {section}");
                    }
                } else {
                    warn!("ignoring unrecognized argument {arg}");
                }
            }
        }
    }

    let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let dictionary_path = cli_dictionary
        .or_else(|| env::var("DICTIONARY_PATH").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DICTIONARY));
    let text_path = cli_text
        .or_else(|| env::var("TESTDATA_PATH").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TESTDATA));
    let top_n = cli_top_n
        .or_else(|| env::var("TOP_N").ok().as_deref().and_then(parse_top_n))
        .unwrap_or(DEFAULT_TOP_N);

    Config {
        host,
        port,
        dictionary_path,
        text_path,
        top_n,
        strict,
        serve,
        only,
    }
}

fn parse_top_n(raw: &str) -> Option<usize> {
    raw.parse::<usize>().ok().filter(|n| *n > 0)
}

fn parse_section(raw: &str) -> Option<Section> {
    match raw.to_ascii_lowercase().as_str() {
        "dictionary" => Some(Section::Dictionary),
        "known" => Some(Section::Known),
        "unknown" => Some(Section::Unknown),
        "top-known" => Some(Section::TopKnown),
        "top-unknown" => Some(Section::TopUnknown),
        "text" => Some(Section::Text),
        _ => None,
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordstats::{Dictionary, StatsError, split_tokens};

    const WORDS: &str = "a and april bright brown cat clocks cold day dog fox hat in it \
                         jumps lazy mat on over quick sat the thirteen was were";

    fn config(strict: bool, only: Option<Section>) -> Config {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY),
            text_path: PathBuf::from(DEFAULT_TESTDATA),
            top_n: DEFAULT_TOP_N,
            strict,
            serve: false,
            only,
        }
    }

    fn stats(dictionary: &str, text: &str) -> WordStats {
        let dictionary = Dictionary::from_tokens(&split_tokens(dictionary));
        WordStats::from_parts(dictionary, &split_tokens(text))
    }

    fn render(config: &Config, stats: &WordStats) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        print_report(&mut buf, config, stats)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn full_report_contains_every_section() {
        let stats = stats(WORDS, "The cat sat on the mat zebra");
        let out = render(&config(false, None), &stats).unwrap();
        assert!(out.starts_with("25 words read from dictionary.\n"));
        assert!(out.contains("Displaying the first twenty words in the Dictionary"));
        assert!(out.contains("Position(s)"));
        assert!(out.contains("    Frequency\tWord"));
        assert!(out.ends_with("the cat sat on the mat zebra\n"));
    }

    #[test]
    fn only_flag_selects_one_section() {
        let stats = stats(WORDS, "The cat sat on the mat");
        let out = render(&config(false, Some(Section::Text)), &stats).unwrap();
        assert_eq!(out, "the cat sat on the mat\n");

        let out = render(&config(false, Some(Section::TopKnown)), &stats).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "    Frequency\tWord");
        assert_eq!(lines[1], "            2\tthe");
    }

    #[test]
    fn lenient_mode_tolerates_short_inputs() {
        let stats = stats("the cat", "the cat sat");
        let out = render(&config(false, None), &stats).unwrap();
        let preview = "Displaying the first twenty words in the Dictionary ... \ncat\nthe\n";
        assert!(out.contains(preview));
        assert!(out.ends_with("the cat sat\n"));
    }

    #[test]
    fn strict_mode_rejects_short_dictionary() {
        let stats = stats("the cat", "the cat sat");
        let err = render(&config(true, None), &stats).unwrap_err();
        match err.root_cause().downcast_ref::<StatsError>() {
            Some(StatsError::InsufficientDictionary {
                required,
                available,
            }) => {
                assert_eq!(*required, PREVIEW_LEN);
                assert_eq!(*available, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn strict_mode_rejects_short_ranking() {
        let stats = stats(WORDS, "The cat sat on the mat zebra");
        let err = render(&config(true, Some(Section::TopUnknown)), &stats).unwrap_err();
        match err.root_cause().downcast_ref::<StatsError>() {
            Some(StatsError::InsufficientData {
                requested,
                available,
            }) => {
                assert_eq!(*requested, DEFAULT_TOP_N);
                assert_eq!(*available, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
