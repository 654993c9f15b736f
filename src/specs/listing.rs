// src/specs/listing.rs
//! Listing pages: a grid of cards, one per film or event.
//!
//! ```html
//! <div class="card eventCard film">
//!   <a href="https://venue.org/films/alpha/">…</a>
//!   <p class="card__title">Alpha</p>
//! </div>
//! ```
//!
//! Which cards count is decided by the caller through a [`CardPolicy`]; this
//! module only applies it. A card missing its title or link is logged and
//! skipped, the rest of the page still counts.

use url::Url;

use crate::core::html::{Document, Match, Node};
use crate::error::{Error, Result};
use crate::schedule::{EntityRef, ListingKind};

/// Where a card, its title and its outbound link live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardPolicy {
    pub card: Match,
    pub title: Match,
    pub link: Match,
    pub link_attr: &'static str,
}

pub const FILM_CARDS: CardPolicy = CardPolicy {
    card: Match::all_of("div", &["card", "eventCard", "film"]),
    title: Match::class("p", "card__title"),
    link: Match::tag("a"),
    link_attr: "href",
};

pub const EVENT_CARDS: CardPolicy = CardPolicy {
    card: Match::all_of("div", &["card", "eventCard", "event"]),
    title: Match::class("p", "card__title"),
    link: Match::tag("a"),
    link_attr: "href",
};

impl CardPolicy {
    pub fn for_kind(kind: ListingKind) -> &'static CardPolicy {
        match kind {
            ListingKind::Film => &FILM_CARDS,
            ListingKind::Event => &EVENT_CARDS,
        }
    }
}

/// Every well-formed card on the page, in page order.
pub fn extract_listings(doc: &Document, policy: &CardPolicy, page_url: &str) -> Vec<EntityRef> {
    let cards = doc.find_all(&policy.card);
    let mut out = Vec::with_capacity(cards.len());

    for (i, card) in cards.iter().enumerate() {
        match extract_card(card, policy, page_url) {
            Ok(entity) => out.push(entity),
            Err(e) => logw!("Card {} skipped: {e}", i + 1),
        }
    }
    logd!("{page_url}: {} of {} cards usable", out.len(), cards.len());
    out
}

fn extract_card(card: &Node<'_>, policy: &CardPolicy, page_url: &str) -> Result<EntityRef> {
    let title = card
        .find_first(&policy.title)
        .map(|n| n.text())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::extraction("card title", page_url))?;

    let href = card
        .find_first(&policy.link)
        .and_then(|n| n.attr(policy.link_attr))
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .ok_or_else(|| Error::extraction("card link", page_url))?;

    Ok(EntityRef::new(title, resolve(page_url, href)))
}

/// Resolve `href` against the listing URL. Falls back to the raw href when the
/// page URL itself isn't absolute.
pub fn resolve(page_url: &str, href: &str) -> String {
    match Url::parse(page_url).and_then(|base| base.join(href)) {
        Ok(u) => u.to_string(),
        Err(_) => s!(href),
    }
}
