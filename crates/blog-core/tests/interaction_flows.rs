//! End-to-end interaction tests for blog-core
//!
//! Search, pagination and announcements driven together over a fixed corpus.

use std::rc::Rc;

use blog_a11y::{Announcer, AnnouncerConfig, ManualClock, Politeness, RecordingSink};
use blog_core::*;
use chrono::NaiveDate;

fn post(id: &str, title: &str, content: &str, category: &str) -> Post {
    Post {
        id: PostId::new(id),
        title: title.into(),
        content: content.into(),
        category: category.into(),
        publish_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        image: None,
        image_alt: String::new(),
        excerpt: make_excerpt(content, 150),
    }
}

/// Seven posts, three in "Dev", two mentioning "access"
fn corpus() -> Vec<Post> {
    vec![
        post("7", "Accessible forms", "Labels and hints for every input.", "Dev"),
        post("6", "Colour palettes", "Picking contrast that works in print.", "Design"),
        post("5", "Release notes", "Keyboard ACCESS keys now documented.", "News"),
        post("4", "Rust lifetimes", "Borrowing rules in practice.", "Dev"),
        post("3", "Grid layouts", "Two-dimensional layout with CSS grid.", "Design"),
        post("2", "Team update", "We moved offices.", "News"),
        post("1", "Error handling", "Results, options and the question mark.", "Dev"),
    ]
}

fn announcer() -> Announcer {
    Announcer::default()
}

// ============================================================================
// SEARCH PIPELINE
// ============================================================================

#[test]
fn test_term_search_end_to_end() {
    let announcer = announcer();
    let pipeline = SearchFilterPipeline::new(announcer.clone());

    let result = pipeline.filter(&corpus(), "access", "all");

    assert_eq!(result.count, 2);
    assert_eq!(result.announcement, "Search updated. 2 posts found for \"access\".");
    assert_eq!(announcer.text(Politeness::Polite), result.announcement);
    let ids: Vec<&str> = result.items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["7", "5"]);
}

#[test]
fn test_category_only_end_to_end() {
    let pipeline = SearchFilterPipeline::new(announcer());
    let result = pipeline.filter(&corpus(), "", "Dev");
    assert_eq!(result.count, 3);
    assert_eq!(result.announcement, "Search updated. 3 posts found in Dev.");
}

#[test]
fn test_clear_after_query() {
    let announcer = announcer();
    let pipeline = SearchFilterPipeline::new(announcer.clone());
    pipeline.filter(&corpus(), "grid", "Design");

    let result = pipeline.clear(&corpus());

    assert_eq!(result.items, corpus());
    assert_eq!(announcer.text(Politeness::Polite), "Search cleared. Showing all posts.");
}

#[test]
fn test_identity_filter_preserves_order() {
    let pipeline = SearchFilterPipeline::new(announcer());
    let result = pipeline.filter(&corpus(), "", "all");
    assert_eq!(result.items, corpus());
    assert_eq!(result.announcement, "Search updated. 7 posts found.");
}

#[test]
fn test_empty_corpus_still_announces() {
    let announcer = announcer();
    let pipeline = SearchFilterPipeline::new(announcer.clone());
    let result = pipeline.filter(&[], "", "all");
    assert_eq!(result.count, 0);
    assert_eq!(announcer.text(Politeness::Polite), "Search updated. 0 posts found.");
}

#[test]
fn test_unknown_category_is_empty_not_error() {
    let pipeline = SearchFilterPipeline::new(announcer());
    let result = pipeline.filter(&corpus(), "", "Gardening");
    assert!(result.items.is_empty());
    assert_eq!(result.announcement, "Search updated. 0 posts found in Gardening.");
}

#[test]
fn test_every_item_matches_and_count_agrees() {
    let queries = [("access", "all"), ("in", "Dev"), ("", "News"), ("LAYOUT", "Design"), ("zzz", "all")];
    for (term, category) in queries {
        let query = Query::new(term, category);
        let items = filter_posts(&corpus(), &query);
        let result = SearchFilterPipeline::new(announcer()).filter(&corpus(), term, category);
        assert_eq!(result.count, result.items.len());
        assert_eq!(result.items, items);

        let needle = term.trim().to_lowercase();
        for post in &items {
            let text = format!("{} {}", post.title, post.content).to_lowercase();
            assert!(text.contains(&needle), "{} does not contain {needle}", post.title);
            assert!(query.category.matches(&post.category));
        }
    }
}

#[test]
fn test_filter_is_idempotent() {
    for (term, category) in [("access", "all"), ("", "Dev"), ("e", "Design")] {
        let query = Query::new(term, category);
        let once = filter_posts(&corpus(), &query);
        let twice = filter_posts(&once, &query);
        assert_eq!(once, twice);
    }
}

// ============================================================================
// PAGINATION
// ============================================================================

#[test]
fn test_paginate_seven_by_three() {
    let window = paginate(7, 3, 1);
    assert_eq!(window.visible_range, 0..3);
    assert_eq!(window.total_pages, 3);
    assert_eq!(window.page_numbers, vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]);
    assert!(window.has_next);
    assert!(!window.has_prev);
}

#[test]
fn test_window_bounds_hold_everywhere() {
    for total_items in 0..60 {
        for page_size in 1..8 {
            let pages = total_pages(total_items, page_size);
            for current in 1..=pages.max(1) {
                let window = paginate(total_items, page_size, current);
                let numeric = window.numeric_pages();
                let ellipses = window.page_numbers.len() - numeric.len();

                // Five window buttons plus at most page 1 and the last page
                assert!(numeric.len() <= 7, "{total_items}/{page_size}@{current}: {numeric:?}");
                assert!(ellipses <= 2);
                assert!(numeric.windows(2).all(|w| w[0] < w[1]));
                if pages > 0 {
                    assert!(numeric.contains(&current));
                    assert_eq!(numeric.first(), Some(&1));
                    assert_eq!(numeric.last(), Some(&pages));
                }
                assert!(window.visible_range.end <= total_items);
                assert!(window.visible_range.len() <= page_size);
            }
        }
    }
}

#[test]
fn test_change_page_always_in_range() {
    let mut paginator = Paginator::new(announcer(), 3, DEFAULT_WINDOW);
    for total in [0usize, 1, 7, 30] {
        paginator.reset(total);
        let last = total_pages(total, 3).max(1);
        for requested in [i64::MIN, -4, 0, 1, 2, 5, 11, i64::MAX] {
            let change = paginator.change_page(requested);
            assert!((1..=last).contains(&change.page), "{requested} -> {}", change.page);
            assert_eq!(change.announcement, format!("Moved to page {}", change.page));
        }
    }
}

// ============================================================================
// SESSION
// ============================================================================

fn session(page_size: usize) -> (BlogSession, RecordingSink) {
    let config = BlogConfig { posts_per_page: page_size, ..Default::default() };
    let announcer = Announcer::new(config.announcer_config());
    let sink = RecordingSink::new();
    announcer.subscribe(sink.clone());
    let store = PostStore::from_posts(corpus(), config.excerpt_len);
    (BlogSession::new(config, announcer, store).unwrap(), sink)
}

#[test]
fn test_search_then_page_announcement_sequence() {
    let (mut session, sink) = session(3);

    session.set_category("Dev");
    session.change_page(2);
    session.set_term("rules");

    assert_eq!(
        sink.lane(Politeness::Polite),
        vec![
            "Search updated. 3 posts found in Dev.".to_string(),
            "Moved to page 1".to_string(),
            "Search updated. 1 post found for \"rules\" in Dev.".to_string(),
        ]
    );
    assert_eq!(session.current_page(), 1);
}

#[test]
fn test_session_pages_through_results() {
    let (mut session, _) = session(3);
    let window = session.page_window();
    assert_eq!(window.status_text(7), "Page 1 of 3 (7 total posts)");

    session.change_page(3);
    let ids: Vec<&str> = session.visible_posts().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1"]);
    assert!(session.next_page().is_none());
    assert_eq!(session.prev_page().unwrap().page, 2);
}

#[test]
fn test_load_through_mock_source() {
    let config = BlogConfig { load_delay_ms: 0, ..Default::default() };
    let mut store = PostStore::new(config.excerpt_len);
    assert_eq!(store.state(), LoadState::Loading);

    let source = MockPostSource::new(config.load_delay()).with_posts(corpus());
    let loaded = smol::block_on(store.load(&source)).unwrap();
    assert_eq!(loaded, 7);

    let session = BlogSession::new(config, announcer(), store).unwrap();
    assert_eq!(session.categories(), vec!["all", "Dev", "Design", "News"]);
}

#[test]
fn test_repeated_search_is_reannounced_after_clear() {
    let clock = Rc::new(ManualClock::new());
    let announcer = Announcer::with_clock(AnnouncerConfig::default(), clock.clone());
    let sink = RecordingSink::new();
    announcer.subscribe(sink.clone());
    let pipeline = SearchFilterPipeline::new(announcer.clone());

    pipeline.filter(&corpus(), "", "Dev");
    clock.advance_ms(1000);
    announcer.fire_due();
    pipeline.filter(&corpus(), "", "Dev");

    assert_eq!(
        sink.lane(Politeness::Polite),
        vec![
            "Search updated. 3 posts found in Dev.".to_string(),
            String::new(),
            "Search updated. 3 posts found in Dev.".to_string(),
        ]
    );
}
