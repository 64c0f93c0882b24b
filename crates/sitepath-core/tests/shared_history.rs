//! Integration test: several bindings sharing one in-memory history.
//!
//! Each binding only rewrites its own key, so writes are last-write-wins per
//! key and additive across keys, both in sequence and across threads.

use std::sync::Arc;
use std::thread;

use sitepath_core::url_model::get_query_param;
use sitepath_core::url_sync::{array_serializer, codec_fn, Location, MemoryHistory, UrlSync};

#[test]
fn bindings_on_distinct_keys_are_additive() {
    let history = Arc::new(MemoryHistory::new("/es/projects#list"));
    let mut page = UrlSync::new(Arc::clone(&history), "page", 1u32);
    let mut tags = UrlSync::with_codec(Arc::clone(&history), "tags", Vec::new(), array_serializer());

    page.set(2);
    tags.set(vec!["rust".to_string(), "cli".to_string()]);
    page.update(|p| p + 1);

    let href = history.href();
    assert_eq!(href, "/es/projects?page=3&tags=rust%2Ccli#list");
    assert_eq!(get_query_param(&href, "tags").as_deref(), Some("rust,cli"));
    assert_eq!(history.entry_count(), 1, "bindings never push entries");
    assert_eq!(history.replace_count(), 3);
}

#[test]
fn same_key_is_last_write_wins() {
    let history = Arc::new(MemoryHistory::new("/blog"));
    let mut a = UrlSync::new(Arc::clone(&history), "sort", "date".to_string());
    let mut b = UrlSync::new(Arc::clone(&history), "sort", "date".to_string());

    a.set("title".to_string());
    b.set("views".to_string());
    assert_eq!(history.href(), "/blog?sort=views");

    // `a` does not observe `b` until it re-reads the location.
    assert_eq!(a.get(), "title");
    a.reload();
    assert_eq!(a.get(), "views");
}

#[test]
fn reload_rederives_state_from_url_only() {
    let history = Arc::new(MemoryHistory::new("/"));
    {
        let mut dark = UrlSync::with_codec(
            Arc::clone(&history),
            "dark",
            false,
            codec_fn(
                |v: &bool| if *v { "1".to_string() } else { "0".to_string() },
                |raw: &str| Some(raw == "1"),
            ),
        );
        dark.set(true);
    }
    assert_eq!(history.href(), "/?dark=1");

    history.push("/about?dark=1");
    let dark = UrlSync::with_codec(
        Arc::clone(&history),
        "dark",
        false,
        codec_fn(|v: &bool| v.to_string(), |raw: &str| Some(raw == "1")),
    );
    assert!(*dark.get());
}

#[test]
fn concurrent_writers_on_distinct_keys_lose_nothing() {
    let history = Arc::new(MemoryHistory::new("/search"));
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let history = Arc::clone(&history);
            thread::spawn(move || {
                let mut binding = UrlSync::new(history, format!("k{i}"), 0u32);
                for n in 1..=50 {
                    binding.set(n);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let href = history.href();
    for i in 0..8 {
        assert_eq!(get_query_param(&href, &format!("k{i}")).as_deref(), Some("50"), "href {href}");
    }
    assert_eq!(history.replace_count(), 8 * 50);
}
