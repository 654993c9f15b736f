// src/scrape/scrape.rs
use std::{
    sync::{Arc, mpsc, atomic::{AtomicUsize, Ordering}},
    thread,
    time::Duration,
};

use crate::{
    config::AppOptions,
    core::{Document, Fetch},
    error::{Error, Result},
    progress::{NullProgress, Progress},
    schedule::{EntityRef, Occurrence, Schedule, Source},
    specs::{self, CardPolicy, Layout},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    /// Detail pages fetched at once per listing; 1 is strictly sequential.
    pub workers: usize,
    /// Pause after each detail fetch.
    pub pause: Duration,
    /// Stop at the first failure instead of skipping the item.
    pub strict: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { workers: 1, pause: Duration::ZERO, strict: false }
    }
}

impl From<&AppOptions> for BuildOptions {
    fn from(opts: &AppOptions) -> Self {
        Self {
            workers: opts.net.workers(),
            pause: Duration::from_millis(opts.net.pause_ms),
            strict: opts.strict,
        }
    }
}

/// Counters for the end-of-run log line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub sources_ok: usize,
    pub sources_failed: usize,
    pub entities: usize,
    pub entities_failed: usize,
    pub occurrences: usize,
}

type DetailResult = Result<Vec<Occurrence>>;

/// Walk every source in order and collect occurrences in discovery order
/// (source, then card, then showing on the page). Nothing is sorted here.
pub fn build(
    sources: &[Source],
    fetcher: &dyn Fetch,
    opts: &BuildOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<(Schedule, BuildSummary)> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    let mut schedule = Schedule::new();
    let mut summary = BuildSummary::default();

    for source in sources {
        progress.log(&format!("Reading {} listing {}", source.kind, source.url));

        let entities = match read_listing(source, fetcher) {
            Ok(v) => v,
            Err(e) if opts.strict => return Err(e),
            Err(e) => {
                loge!("Listing skipped: {e}");
                summary.sources_failed += 1;
                continue;
            }
        };
        summary.sources_ok += 1;
        summary.entities += entities.len();

        progress.begin(&source.url, entities.len());

        let layout = Layout::for_kind(source.kind);
        let results = if opts.workers <= 1 || entities.len() <= 1 {
            collect_sequential(&entities, layout, fetcher, opts, &mut *progress)
        } else {
            collect_pooled(&entities, layout, fetcher, opts, &mut *progress)
        };

        for result in results {
            match result {
                Ok(mut found) => {
                    summary.occurrences += found.len();
                    schedule.append(&mut found);
                }
                Err(e) if opts.strict => {
                    progress.finish();
                    return Err(e);
                }
                Err(e) => {
                    loge!("Detail page skipped: {e}");
                    summary.entities_failed += 1;
                }
            }
        }

        progress.finish();
        logf!("{} {}: {} listings", source.kind, source.url, entities.len());
    }

    if summary.sources_ok == 0 {
        return Err(Error::NoSources);
    }

    logf!(
        "Collected {} showings from {} listings ({} sources ok, {} failed, {} pages skipped)",
        summary.occurrences,
        summary.entities,
        summary.sources_ok,
        summary.sources_failed,
        summary.entities_failed,
    );
    Ok((schedule, summary))
}

fn read_listing(source: &Source, fetcher: &dyn Fetch) -> Result<Vec<Arc<EntityRef>>> {
    let text = fetcher.fetch(&source.url)?;
    let doc = Document::parse(&text);
    let policy = CardPolicy::for_kind(source.kind);
    Ok(specs::extract_listings(&doc, policy, &source.url)
        .into_iter()
        .map(Arc::new)
        .collect())
}

fn fetch_detail(fetcher: &dyn Fetch, entity: &Arc<EntityRef>, layout: Layout) -> DetailResult {
    let text = fetcher.fetch(&entity.detail_url)?;
    let doc = Document::parse(&text);
    specs::extract_occurrences(&doc, entity, layout)
}

fn report(progress: &mut dyn Progress, entity: &EntityRef, result: &DetailResult) {
    match result {
        Ok(found) => progress.item_done(&entity.title, found.len()),
        Err(_) => progress.item_failed(&entity.title),
    }
}

fn collect_sequential(
    entities: &[Arc<EntityRef>],
    layout: Layout,
    fetcher: &dyn Fetch,
    opts: &BuildOptions,
    progress: &mut dyn Progress,
) -> Vec<DetailResult> {
    let mut out = Vec::with_capacity(entities.len());
    for entity in entities {
        let result = fetch_detail(fetcher, entity, layout);
        report(&mut *progress, entity, &result);
        let failed = result.is_err();
        out.push(result);
        if failed && opts.strict {
            break;
        }
        if !opts.pause.is_zero() {
            thread::sleep(opts.pause);
        }
    }
    out
}

/// Worker pool over one listing. Results come back in completion order and
/// are put back into listing order before returning; a failed page never
/// stops its siblings.
fn collect_pooled(
    entities: &[Arc<EntityRef>],
    layout: Layout,
    fetcher: &dyn Fetch,
    opts: &BuildOptions,
    progress: &mut dyn Progress,
) -> Vec<DetailResult> {
    let counter = AtomicUsize::new(0);
    let (res_tx, res_rx) = mpsc::channel::<(usize, DetailResult)>();
    let workers = opts.workers.min(entities.len()).max(1);
    let pause = opts.pause;

    let mut indexed: Vec<(usize, DetailResult)> = Vec::with_capacity(entities.len());

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = res_tx.clone();
            let counter = &counter;
            scope.spawn(move || {
                loop {
                    let i = counter.fetch_add(1, Ordering::Relaxed);
                    if i >= entities.len() {
                        break;
                    }
                    let result = fetch_detail(fetcher, &entities[i], layout);
                    if tx.send((i, result)).is_err() {
                        break;
                    }
                    if !pause.is_zero() {
                        thread::sleep(pause);
                    }
                }
            });
        }
        drop(res_tx); // main thread is sole receiver now

        for (i, result) in res_rx {
            report(&mut *progress, &entities[i], &result);
            indexed.push((i, result));
        }
    });

    indexed.sort_by_key(|(i, _)| *i);
    indexed.into_iter().map(|(_, r)| r).collect()
}
