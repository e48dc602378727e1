use product_watch::{
    MemorySink, PageNode, PageSnapshot, Reporter, ReporterConfig, Signal,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

fn card(name: &str, price: &str, top: f64) -> PageNode {
    PageNode::new("article")
        .with_attribute("class", "product-card")
        .with_bounding_box(0.0, top, 300.0, 200.0)
        .with_children(vec![
            PageNode::new("h2").with_text(name),
            PageNode::new("span")
                .with_attribute("class", "price")
                .with_text(price),
        ])
}

fn page_of(cards: Vec<PageNode>) -> PageSnapshot {
    PageSnapshot::new(PageNode::new("body").with_children(cards), 800.0)
}

fn reporter_with_sink() -> (Reporter, Rc<RefCell<MemorySink>>) {
    let sink = Rc::new(RefCell::new(MemorySink::new()));
    let config = ReporterConfig {
        check_delay: Duration::ZERO,
        ..ReporterConfig::default()
    };
    (Reporter::with_sink(config, Box::new(sink.clone())), sink)
}

fn run_pass(reporter: &mut Reporter, page: &mut PageSnapshot) {
    assert!(reporter.handle(Signal::Scroll), "reporter was not idle");
    reporter
        .poll(page, Instant::now())
        .expect("pass failed")
        .expect("pass was not due");
}

#[test]
fn test_two_visible_cards_report_in_document_order() {
    // A and C are at least half visible, B is fully below the fold. Exactly
    // two lines come out, in document order, and B produces none.
    let (mut reporter, sink) = reporter_with_sink();
    let mut page = page_of(vec![
        card("Alpha Sneaker", "$60", 50.0),
        card("Hidden Boot", "$80", 2000.0),
        card("Canvas Slip-on", "$35", 500.0),
    ]);

    run_pass(&mut reporter, &mut page);

    let sink = sink.borrow();
    assert_eq!(
        sink.products,
        vec![
            ("Alpha Sneaker".to_string(), "$60".to_string()),
            ("Canvas Slip-on".to_string(), "$35".to_string()),
        ]
    );
    assert!(sink.diagnostics.is_empty());
}

#[test]
fn test_repeat_pass_over_unchanged_page_reports_nothing() {
    let (mut reporter, sink) = reporter_with_sink();
    let mut page = page_of(vec![
        card("Alpha Sneaker", "$60", 50.0),
        card("Canvas Slip-on", "$35", 400.0),
    ]);

    run_pass(&mut reporter, &mut page);
    assert_eq!(sink.borrow().products.len(), 2);

    run_pass(&mut reporter, &mut page);
    assert_eq!(sink.borrow().products.len(), 2, "second pass re-reported");
    assert_eq!(reporter.seen_count(), 2);
}

#[test]
fn test_scrolling_reveals_new_cards_without_re_reporting_old_ones() {
    let (mut reporter, sink) = reporter_with_sink();

    // Before scrolling: first card on screen, second below the fold
    let mut page = page_of(vec![
        card("Alpha Sneaker", "$60", 100.0),
        card("Canvas Slip-on", "$35", 900.0),
    ]);
    run_pass(&mut reporter, &mut page);
    assert_eq!(sink.borrow().products.len(), 1);

    // After scrolling 800px: same document order, shifted boxes
    let mut page = page_of(vec![
        card("Alpha Sneaker", "$60", -700.0),
        card("Canvas Slip-on", "$35", 100.0),
    ]);
    run_pass(&mut reporter, &mut page);

    let sink = sink.borrow();
    assert_eq!(
        sink.products,
        vec![
            ("Alpha Sneaker".to_string(), "$60".to_string()),
            ("Canvas Slip-on".to_string(), "$35".to_string()),
        ]
    );
}

#[test]
fn test_reordered_cards_are_reported_again() {
    // Known limitation: identity includes the document-order position, so
    // reordering the cards between passes makes them look new. This test
    // pins the behavior rather than endorsing it.
    let (mut reporter, sink) = reporter_with_sink();

    let mut page = page_of(vec![
        card("Alpha Sneaker", "$60", 50.0),
        card("Canvas Slip-on", "$35", 400.0),
    ]);
    run_pass(&mut reporter, &mut page);
    assert_eq!(sink.borrow().products.len(), 2);

    let mut page = page_of(vec![
        card("Canvas Slip-on", "$35", 50.0),
        card("Alpha Sneaker", "$60", 400.0),
    ]);
    run_pass(&mut reporter, &mut page);

    assert_eq!(sink.borrow().products.len(), 4);
    assert_eq!(reporter.seen_count(), 4);
}

#[test]
fn test_case_variant_of_seen_card_is_not_re_reported() {
    let (mut reporter, sink) = reporter_with_sink();

    let mut page = page_of(vec![card("Alpha Sneaker", "$60", 50.0)]);
    run_pass(&mut reporter, &mut page);

    let mut page = page_of(vec![card("ALPHA SNEAKER", "$60", 50.0)]);
    run_pass(&mut reporter, &mut page);

    assert_eq!(sink.borrow().products.len(), 1);
}

#[test]
fn test_empty_page_emits_one_diagnostic_per_pass() {
    let (mut reporter, sink) = reporter_with_sink();
    let mut page = page_of(vec![]);

    run_pass(&mut reporter, &mut page);
    run_pass(&mut reporter, &mut page);

    let sink = sink.borrow();
    assert!(sink.products.is_empty());
    assert_eq!(sink.diagnostics.len(), 2);
}

#[test]
fn test_card_with_name_but_no_price_is_excluded() {
    let nameless_price = PageNode::new("article")
        .with_attribute("class", "product-card")
        .with_bounding_box(0.0, 100.0, 300.0, 200.0)
        .with_children(vec![PageNode::new("h2").with_text("Display Only")]);

    let (mut reporter, sink) = reporter_with_sink();
    let mut page = page_of(vec![nameless_price, card("Alpha Sneaker", "$60", 400.0)]);

    run_pass(&mut reporter, &mut page);

    assert_eq!(
        sink.borrow().products,
        vec![("Alpha Sneaker".to_string(), "$60".to_string())]
    );
}

// Live-browser coverage below; requires Chrome to be installed.
// Run with: cargo test -- --ignored

#[test]
#[ignore]
fn test_live_page_snapshot_and_report() {
    use product_watch::{LaunchOptions, PageSession, SnapshotSource};

    let _ = env_logger::builder().is_test(true).try_init();

    let html = concat!(
        "<html><body style=\"margin:0\">",
        "<article class=\"product-card\" style=\"height:300px\">",
        "<h2>Alpha Sneaker</h2><span class=\"price\">$60</span>",
        "</article>",
        "<article class=\"product-card\" style=\"height:300px\">",
        "<h2>Canvas Slip-on</h2><span class=\"price\">$35</span>",
        "</article>",
        "<div style=\"height:3000px\"></div>",
        "</body></html>"
    );

    let mut session = PageSession::launch(LaunchOptions::new().headless(true))
        .expect("Failed to launch browser");
    session
        .navigate(&format!("data:text/html,{}", urlencoding::encode(html)))
        .expect("Failed to navigate");
    session.wait_for_navigation().expect("Navigation timeout");
    std::thread::sleep(Duration::from_millis(500));

    let snapshot = session.snapshot().expect("Failed to capture snapshot");
    assert_eq!(snapshot.root.tag_name, "body");
    assert!(snapshot.viewport_height > 0.0);

    let sink = Rc::new(RefCell::new(MemorySink::new()));
    let config = ReporterConfig {
        check_delay: Duration::ZERO,
        ..ReporterConfig::default()
    };
    let mut reporter = Reporter::with_sink(config, Box::new(sink.clone()));

    assert!(reporter.handle(Signal::PageReady));
    let outcome = reporter
        .poll(&mut session, Instant::now())
        .expect("pass failed")
        .expect("pass was not due");

    println!("candidates: {}, reported: {}", outcome.candidates, outcome.reported);
    assert_eq!(outcome.candidates, 2);
    assert_eq!(outcome.reported, 2);

    let names: Vec<String> = sink.borrow().products.iter().map(|(n, _)| n.clone()).collect();
    assert_eq!(names, vec!["Alpha Sneaker", "Canvas Slip-on"]);
}

#[test]
#[ignore]
fn test_live_scroll_does_not_re_report() {
    use product_watch::{LaunchOptions, PageSession};

    let _ = env_logger::builder().is_test(true).try_init();

    let html = concat!(
        "<html><body style=\"margin:0\">",
        "<article class=\"product-card\" style=\"height:400px\">",
        "<h2>Alpha Sneaker</h2><span class=\"price\">$60</span>",
        "</article>",
        "<div style=\"height:2000px\"></div>",
        "</body></html>"
    );

    let mut session = PageSession::launch(LaunchOptions::new().headless(true))
        .expect("Failed to launch browser");
    session
        .navigate(&format!("data:text/html,{}", urlencoding::encode(html)))
        .expect("Failed to navigate");
    session.wait_for_navigation().expect("Navigation timeout");
    std::thread::sleep(Duration::from_millis(500));

    let sink = Rc::new(RefCell::new(MemorySink::new()));
    let config = ReporterConfig {
        check_delay: Duration::ZERO,
        ..ReporterConfig::default()
    };
    let mut reporter = Reporter::with_sink(config, Box::new(sink.clone()));

    reporter.handle(Signal::PageReady);
    reporter
        .poll(&mut session, Instant::now())
        .expect("pass failed");

    session.scroll_to(100.0).expect("Failed to scroll");
    std::thread::sleep(Duration::from_millis(200));

    reporter.handle(Signal::Scroll);
    reporter
        .poll(&mut session, Instant::now())
        .expect("pass failed");

    // Same card, same document position: one report across both passes
    assert_eq!(sink.borrow().products.len(), 1);
}
