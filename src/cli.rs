// src/cli.rs
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::AppOptions,
    core::HttpFetcher,
    file, render, schedule,
    progress::Progress,
    schedule::{ListingKind, Source},
    scrape::{self, BuildOptions},
};

/// Scrape the venue's film and event listings into two HTML tables:
/// the full schedule and today's showings.
#[derive(Parser, Debug)]
#[command(name = "showtimes", version, about)]
pub struct Args {
    /// TOML file with sources/output/net settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory for showtimes.html and showtimes_today.html
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Listing source as KIND=URL (kind: film|event). Repeatable; replaces the defaults
    #[arg(short, long = "source", value_name = "KIND=URL", value_parser = parse_source)]
    pub sources: Vec<Source>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Detail pages fetched in parallel per listing (1 = sequential)
    #[arg(short = 'j', long)]
    pub workers: Option<usize>,

    /// Abort on the first failed page instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Date used for the today table (default: local date)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(short, long, action = ArgAction::Count, conflicts_with = "verbose")]
    pub quiet: u8,
}

fn parse_source(s: &str) -> std::result::Result<Source, String> {
    let (kind, url) = s.split_once('=').ok_or_else(|| format!("expected KIND=URL, got {s:?}"))?;
    let kind: ListingKind = kind.parse()?;
    let url = url.trim();
    if url.is_empty() {
        return Err(s!("empty URL"));
    }
    Ok(Source::new(url, kind))
}

impl Args {
    pub fn verbosity(&self) -> i8 {
        self.verbose.min(3) as i8 - self.quiet.min(3) as i8
    }

    /// File (or defaults) first, then flags on top.
    pub fn options(&self) -> Result<AppOptions> {
        let mut opts = match &self.config {
            Some(path) => AppOptions::load(path)?,
            None => AppOptions::default(),
        };
        if !self.sources.is_empty() {
            opts.sources = self.sources.clone();
        }
        if let Some(dir) = &self.out_dir {
            opts.output.dir = dir.clone();
        }
        if let Some(secs) = self.timeout {
            opts.net.timeout_secs = secs;
        }
        if let Some(n) = self.workers {
            opts.net.workers = n;
        }
        opts.strict |= self.strict;
        Ok(opts)
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbosity());

    let opts = args.options()?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let fetcher = HttpFetcher::new(opts.net.timeout(), &opts.net.user_agent)?;
    let mut bar = BarProgress::new(!args.no_progress && args.quiet == 0);
    let progress: &mut dyn Progress = &mut bar;

    let (collected, _) = scrape::build(&opts.sources, &fetcher, &BuildOptions::from(&opts), Some(progress))
        .wrap_err("scrape failed; no files written")?;

    let ordered = schedule::sort(collected);
    let full = render::render(&ordered);
    let todays = render::render_today(&ordered, today);

    let written = file::write_outputs(&opts.output, &full, &todays)
        .wrap_err_with(|| format!("writing output to {}", opts.output.dir.display()))?;
    for path in written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Terminal progress: one bar per listing source.
struct BarProgress {
    enabled: bool,
    bar: Option<ProgressBar>,
    failed: usize,
}

impl BarProgress {
    fn new(enabled: bool) -> Self {
        Self { enabled, bar: None, failed: 0 }
    }
}

impl Progress for BarProgress {
    fn begin(&mut self, source: &str, total: usize) {
        self.failed = 0;
        if !self.enabled {
            return;
        }
        let style = ProgressStyle::with_template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        let bar = ProgressBar::new(total as u64).with_style(style);
        bar.set_message(s!(source));
        self.bar = Some(bar);
    }

    fn log(&mut self, msg: &str) {
        logd!("{msg}");
    }

    fn item_done(&mut self, title: &str, _occurrences: usize) {
        if let Some(bar) = &self.bar {
            bar.set_message(s!(title));
            bar.inc(1);
        }
    }

    fn item_failed(&mut self, title: &str) {
        self.failed += 1;
        if let Some(bar) = &self.bar {
            bar.println(format!("  failed: {title}"));
            bar.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
        if self.failed > 0 {
            logw!("{} detail pages failed", self.failed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_flag_parses_kind_and_url() {
        assert_eq!(
            parse_source("event=https://v.org/events").unwrap(),
            Source::new("https://v.org/events", ListingKind::Event)
        );
        assert!(parse_source("https://v.org").is_err());
        assert!(parse_source("opera=https://v.org").is_err());
        assert!(parse_source("film=").is_err());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "showtimes", "-s", "film=http://a", "-s", "event=http://b", "-o", "public", "-j", "4",
            "--strict", "--today", "2021-03-12", "-vv",
        ]);
        let opts = args.options().unwrap();
        assert_eq!(opts.sources.len(), 2);
        assert_eq!(opts.sources[1].kind, ListingKind::Event);
        assert_eq!(opts.output.dir, PathBuf::from("public"));
        assert_eq!(opts.net.workers(), 4);
        assert!(opts.strict);
        assert_eq!(args.today, NaiveDate::from_ymd_opt(2021, 3, 12));
        assert_eq!(args.verbosity(), 2);
    }

    #[test]
    fn no_flags_means_reference_defaults() {
        let args = Args::parse_from(["showtimes"]);
        assert_eq!(args.options().unwrap(), AppOptions::default());
    }
}
