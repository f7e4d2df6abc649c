//! Integration tests for active-section tracking.

use waypost::content::extract_headings;
use waypost::nav::{REFERENCE_OFFSET, Section, SectionTracker, active_section};

fn landing_sections() -> Vec<Section> {
    vec![
        Section::new("hero", 0.0, 900.0),
        Section::new("technology", 900.0, 1800.0),
        Section::new("plans", 1800.0, 2700.0),
        Section::new("faq", 2700.0, 3600.0),
    ]
}

#[test]
fn same_offset_always_yields_the_same_section() {
    let tracker = SectionTracker::new(landing_sections());
    for offset in [0.0, 450.0, 1234.5, 2600.0, 9999.0] {
        assert_eq!(
            tracker.active(offset),
            tracker.active(offset),
            "tracking must be a pure function of the offset"
        );
    }
}

#[test]
fn walking_down_the_page_visits_sections_in_order() {
    let tracker = SectionTracker::new(landing_sections());
    let mut seen = Vec::new();
    let mut offset = 0.0;
    while offset <= 3500.0 {
        if let Some(id) = tracker.active(offset)
            && seen.last().map(String::as_str) != Some(id)
        {
            seen.push(id.to_string());
        }
        offset += 50.0;
    }
    assert_eq!(seen, vec!["hero", "technology", "plans", "faq"]);
}

#[test]
fn no_section_contains_the_reference_line() {
    let sections = vec![Section::new("hero", 0.0, 400.0)];
    // Line at 200 + 1000 is past the only section.
    assert_eq!(active_section(1000.0, &sections, REFERENCE_OFFSET), None);
    assert_eq!(active_section(0.0, &[], REFERENCE_OFFSET), None);
}

#[test]
fn overlap_tie_break_prefers_the_greater_top() {
    let sections = vec![
        Section::new("wrapper", 0.0, 3000.0),
        Section::new("nested", 1000.0, 1500.0),
    ];
    // Both contain the line at 1200; "nested" has the greater top.
    assert_eq!(active_section(1000.0, &sections, REFERENCE_OFFSET), Some("nested"));
    // Only "wrapper" contains the line at 2200.
    assert_eq!(active_section(2000.0, &sections, REFERENCE_OFFSET), Some("wrapper"));
}

#[test]
fn custom_reference_offset_shifts_the_line() {
    let sections = landing_sections();
    let tracker = SectionTracker::new(sections).reference_offset(0.0);
    assert_eq!(tracker.active(899.0), Some("hero"));
    assert_eq!(tracker.active(900.0), Some("technology"));
}

#[test]
fn article_headings_feed_section_tracking() {
    // Headings extracted from post HTML become the tracked sections, the
    // way a table of contents highlights the current heading.
    let html = "<h2>Why It Matters</h2><p>...</p><h2>Daily Routine</h2><p>...</p>";
    let headings = extract_headings(html);
    let sections: Vec<Section> = headings
        .iter()
        .enumerate()
        .map(|(i, h)| Section::new(h.id.clone(), i as f64 * 600.0, (i as f64 + 1.0) * 600.0))
        .collect();

    let tracker = SectionTracker::new(sections);
    assert_eq!(tracker.active(0.0), Some("why-it-matters"));
    assert_eq!(tracker.active(700.0), Some("daily-routine"));
}
