// src/core/html.rs
//! Small query surface over a parsed page.
//!
//! The site appends variant suffixes to class names, so matching is done with
//! plain value comparisons on class tokens (exact, prefix, all-of) instead of
//! CSS selector strings.

use scraper::{ElementRef, Html};

/// How an element's class tokens must look.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassRule {
    Any,
    /// Some token equals the value.
    Exact(&'static str),
    /// Some token starts with the value.
    Prefix(&'static str),
    /// Every listed token is present (order and extras don't matter).
    AllOf(&'static [&'static str]),
}

impl ClassRule {
    pub fn accepts<'a>(&self, mut classes: impl Iterator<Item = &'a str>) -> bool {
        match self {
            ClassRule::Any => true,
            ClassRule::Exact(want) => classes.any(|c| c == *want),
            ClassRule::Prefix(prefix) => classes.any(|c| c.starts_with(prefix)),
            ClassRule::AllOf(wanted) => {
                let have: Vec<&str> = classes.collect();
                wanted.iter().all(|w| have.contains(w))
            }
        }
    }
}

/// Element predicate: tag name (case-insensitive) plus a class rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    pub tag: &'static str,
    pub class: ClassRule,
}

impl Match {
    pub const fn tag(tag: &'static str) -> Self {
        Self { tag, class: ClassRule::Any }
    }
    pub const fn class(tag: &'static str, class: &'static str) -> Self {
        Self { tag, class: ClassRule::Exact(class) }
    }
    pub const fn prefix(tag: &'static str, prefix: &'static str) -> Self {
        Self { tag, class: ClassRule::Prefix(prefix) }
    }
    pub const fn all_of(tag: &'static str, classes: &'static [&'static str]) -> Self {
        Self { tag, class: ClassRule::AllOf(classes) }
    }

    pub fn matches(&self, el: &ElementRef<'_>) -> bool {
        let v = el.value();
        v.name().eq_ignore_ascii_case(self.tag) && self.class.accepts(v.classes())
    }
}

/// An owned, parsed page.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        Self { html: Html::parse_document(text) }
    }

    pub fn root(&self) -> Node<'_> {
        Node { el: self.html.root_element() }
    }

    pub fn find_all(&self, m: &Match) -> Vec<Node<'_>> {
        let root = self.root();
        let mut out = Vec::new();
        if m.matches(&root.el) {
            out.push(root);
        }
        out.extend(root.find_all(m));
        out
    }

    pub fn find_first(&self, m: &Match) -> Option<Node<'_>> {
        let root = self.root();
        if m.matches(&root.el) {
            return Some(root);
        }
        root.find_first(m)
    }
}

/// Borrowed element handle.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    el: ElementRef<'a>,
}

impl<'a> Node<'a> {
    fn descendants(self) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        // `descendants()` starts with the node itself
        self.el.descendants().skip(1).filter_map(ElementRef::wrap)
    }

    /// Matching descendants in document order.
    pub fn find_all(&self, m: &Match) -> Vec<Node<'a>> {
        self.descendants()
            .filter(|el| m.matches(el))
            .map(|el| Node { el })
            .collect()
    }

    pub fn find_first(&self, m: &Match) -> Option<Node<'a>> {
        self.descendants().find(|el| m.matches(el)).map(|el| Node { el })
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.el.value().attr(name)
    }

    /// Concatenated text content, surrounding whitespace trimmed.
    pub fn text(&self) -> String {
        let raw: String = self.el.text().collect();
        s!(raw.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div class="card eventCard film"><p class="card__title"> Alpha </p></div>
          <div class="eventCard card"><p class="card__title">Beta</p></div>
          <ul>
            <li class="showInfo__date--weekday">one</li>
            <li class="x showInfo__date">two</li>
            <li class="showInfo">three</li>
          </ul>
        </body></html>
    "#;

    #[test]
    fn prefix_rule_accepts_suffixed_classes() {
        let doc = Document::parse(PAGE);
        let hits = doc.find_all(&Match::prefix("li", "showInfo__date"));
        let texts: Vec<_> = hits.iter().map(|n| n.text()).collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test]
    fn exact_rule_rejects_suffixed_classes() {
        let doc = Document::parse(PAGE);
        let hits = doc.find_all(&Match::class("li", "showInfo__date"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text(), "two");
    }

    #[test]
    fn all_of_requires_every_token() {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.find_all(&Match::all_of("div", &["card", "eventCard", "film"])).len(), 1);
        assert_eq!(doc.find_all(&Match::all_of("div", &["card", "eventCard"])).len(), 2);
    }

    #[test]
    fn text_is_trimmed_and_first_is_scoped() {
        let doc = Document::parse(PAGE);
        let card = doc.find_first(&Match::tag("div")).unwrap();
        let title = card.find_first(&Match::class("p", "card__title")).unwrap();
        assert_eq!(title.text(), "Alpha");
        assert!(card.find_first(&Match::tag("li")).is_none());
    }

    #[test]
    fn attr_lookup() {
        let doc = Document::parse(r#"<div><a href="/films/x">X</a><a>no href</a></div>"#);
        let links = doc.find_all(&Match::tag("a"));
        assert_eq!(links[0].attr("href"), Some("/films/x"));
        assert_eq!(links[1].attr("href"), None);
    }
}
