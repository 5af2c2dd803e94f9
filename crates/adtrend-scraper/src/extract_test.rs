use super::*;

fn page(container_class: &str, cards: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>Ad Library</title></head><body>
<div id="header" class="x9f619">Ad Library</div>
<div class="{container_class}">{}</div>
</body></html>"#,
        cards.concat()
    )
}

fn full_card(brand: &str, text: &str, href: &str) -> String {
    format!(
        r#"<div class="xh8yej3">
  <span class="x8t9es0 dgpf1xc5 x1fvot60">{brand}</span>
  <div class="x6ikm8r lrazzd5p">{text}</div>
  <img class="x1ll5gia" src="https://scontent.example/{brand}.jpg">
  <a class="x1i10hfl" href="{href}"><div><span>See ad details</span></div></a>
</div>"#
    )
}

fn empty_card() -> String {
    r#"<div class="xh8yej3"><div class="x1n2onr6"><img src="https://scontent.example/blank.jpg"></div></div>"#
        .to_string()
}

#[test]
fn three_cards_with_one_empty_yields_two_records_in_order() {
    let html = page(
        "x1t2pt76 x1dr75xp",
        &[
            full_card("Acme Apparel", "Autumn jackets", "/ads/library/?id=1"),
            empty_card(),
            full_card("Bolt Denim", "Raw selvedge", "/ads/library/?id=2"),
        ],
    );

    let records = extract_ads(&html, Category::Men);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].brand, "Acme Apparel");
    assert_eq!(records[1].brand, "Bolt Denim");
}

#[test]
fn full_card_populates_every_field() {
    let html = page(
        "_9cb_",
        &[full_card("Acme", "Fresh fits", "/ads/library/?id=42")],
    );

    let records = extract_ads(&html, Category::Women);
    let record = &records[0];

    assert_eq!(record.brand, "Acme");
    assert_eq!(record.category, Category::Women);
    assert_eq!(record.summary, "Fresh fits...");
    assert_eq!(record.image_url, "https://scontent.example/Acme.jpg");
    assert_eq!(record.detail_url, "https://www.facebook.com/ads/library/?id=42");
    assert_eq!(record.price, SENTINEL);
}

#[test]
fn no_record_is_ever_fully_empty() {
    let html = page(
        "x1t2pt76",
        &[
            empty_card(),
            empty_card(),
            full_card("A", "B", "/x"),
            empty_card(),
        ],
    );

    let records = extract_ads(&html, Category::Men);

    assert_eq!(records.len(), 1);
    assert!(records.iter().all(AdRecord::has_content));
}

#[test]
fn missing_container_yields_empty_without_error() {
    let html = page("x9f619 unrelated", &[full_card("A", "B", "/x")]);
    assert!(extract_ads(&html, Category::Men).is_empty());
}

#[test]
fn container_must_be_a_div() {
    let html = format!(
        r#"<html><body><section class="x1t2pt76">{}</section></body></html>"#,
        full_card("A", "B", "/x")
    );
    assert!(extract_ads(&html, Category::Men).is_empty());
}

#[test]
fn empty_and_garbage_markup_yield_empty() {
    assert!(extract_ads("", Category::Men).is_empty());
    assert!(extract_ads("   \n", Category::Men).is_empty());
    assert!(extract_ads("<<<div class=>>>not html at all", Category::Men).is_empty());
}

#[test]
fn first_matching_container_wins() {
    let html = format!(
        r#"<html><body><div class="x1t2pt76">{}</div><div class="_9cb_">{}</div></body></html>"#,
        full_card("First", "one", "/1"),
        full_card("Second", "two", "/2"),
    );
    let records = extract_ads(&html, Category::Men);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].brand, "First");
}

#[test]
fn only_direct_div_children_are_cards() {
    let nested = r#"<div class="xh8yej3">
  <span class="dgpf1xc5">Outer</span>
  <div class="inner"><span class="dgpf1xc5">Nested</span></div>
</div>"#;
    let html = page(
        "x1t2pt76",
        &[
            nested.to_string(),
            r#"<span class="dgpf1xc5">Loose span</span>"#.to_string(),
        ],
    );

    let records = extract_ads(&html, Category::Men);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].brand, "Outer");
}

#[test]
fn secondary_brand_locator_is_used_when_primary_missing() {
    let card = r#"<div><div class="x1heor9g x1qlqyl8">Fallback Brand</div></div>"#;
    let html = page("x1t2pt76", &[card.to_string()]);

    let records = extract_ads(&html, Category::Men);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].brand, "Fallback Brand");
    assert_eq!(records[0].summary, SUMMARY_PLACEHOLDER);
}

#[test]
fn secondary_summary_locator_is_used_when_primary_missing() {
    let card = r#"<div><span class="x193iq5w">Secondary text</span></div>"#;
    let html = page("x1t2pt76", &[card.to_string()]);

    let records = extract_ads(&html, Category::Women);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].brand, SENTINEL);
    assert_eq!(records[0].summary, "Secondary text...");
}

#[test]
fn long_summary_is_truncated_to_fifty_characters() {
    let text = "abcdefghij".repeat(8);
    let html = page("x1t2pt76", &[full_card("A", &text, "/x")]);

    let records = extract_ads(&html, Category::Men);

    assert_eq!(records[0].summary, format!("{}...", &text[..50]));
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let text = "é".repeat(60);
    let html = page("x1t2pt76", &[full_card("A", &text, "/x")]);

    let records = extract_ads(&html, Category::Men);

    assert_eq!(records[0].summary, format!("{}...", "é".repeat(50)));
}

#[test]
fn detail_link_falls_back_to_class_token_anchor() {
    let card = r#"<div>
  <span class="dgpf1xc5">Acme</span>
  <a class="x1i10hfl xjbqb8w" href="https://example.com/x">Shop now</a>
</div>"#;
    let html = page("x1t2pt76", &[card.to_string()]);

    let records = extract_ads(&html, Category::Men);

    assert_eq!(records[0].detail_url, "https://example.com/x");
}

#[test]
fn detail_text_anchor_without_href_falls_through() {
    let card = r#"<div>
  <span class="dgpf1xc5">Acme</span>
  <a>See ad details</a>
  <a class="x1i10hfl" href="/ads/library/?id=7">Open</a>
</div>"#;
    let html = page("x1t2pt76", &[card.to_string()]);

    let records = extract_ads(&html, Category::Men);

    assert_eq!(
        records[0].detail_url,
        "https://www.facebook.com/ads/library/?id=7"
    );
}

#[test]
fn missing_link_and_image_use_sentinels() {
    let card = r#"<div><span class="dgpf1xc5">Acme</span></div>"#;
    let html = page("x1t2pt76", &[card.to_string()]);

    let records = extract_ads(&html, Category::Men);

    assert_eq!(records[0].detail_url, SENTINEL);
    assert_eq!(records[0].image_url, "");
}

#[test]
fn results_are_capped() {
    let cards: Vec<String> = (0..25)
        .map(|i| full_card(&format!("Brand{i}"), "text", &format!("/ads/{i}")))
        .collect();
    let html = page("x1t2pt76", &cards);

    let records = extract_ads(&html, Category::Men);

    assert_eq!(records.len(), MAX_RESULTS_PER_CATEGORY);
    assert_eq!(records[0].brand, "Brand0");
    assert_eq!(records[14].brand, "Brand14");
}

#[test]
fn extraction_is_deterministic() {
    let html = page(
        "x1t2pt76",
        &[
            full_card("A", "one", "/1"),
            empty_card(),
            full_card("B", "two", "https://example.com/2"),
        ],
    );

    let first = extract_ads(&html, Category::Women);
    let second = extract_ads(&html, Category::Women);

    assert_eq!(first, second);
}

#[test]
fn failed_document_yields_empty() {
    assert!(extract_document(&RenderedDocument::failed(), Category::Men).is_empty());
}

#[test]
fn successful_document_is_extracted() {
    let html = page("x1t2pt76", &[full_card("A", "one", "/1")]);
    let records = extract_document(&RenderedDocument::succeeded(html), Category::Men);
    assert_eq!(records.len(), 1);
}

#[test]
fn relative_detail_url_is_resolved_against_origin() {
    assert_eq!(
        resolve_detail_url("/ads/library/?id=42"),
        "https://www.facebook.com/ads/library/?id=42"
    );
}

#[test]
fn absolute_detail_url_is_kept_verbatim() {
    assert_eq!(resolve_detail_url("https://example.com/x"), "https://example.com/x");
    assert_eq!(
        resolve_detail_url("http://l.facebook.com/l.php?u=a%20b"),
        "http://l.facebook.com/l.php?u=a%20b"
    );
}

#[test]
fn relative_detail_url_is_prefixed_without_normalisation() {
    assert_eq!(resolve_detail_url("?id=42"), "https://www.facebook.com?id=42");
    assert_eq!(
        resolve_detail_url("//cdn.example/x.jpg"),
        "https://www.facebook.com//cdn.example/x.jpg"
    );
    assert_eq!(resolve_detail_url("/a/../b"), "https://www.facebook.com/a/../b");
    assert_eq!(
        resolve_detail_url("/ads/library/?q=a b"),
        "https://www.facebook.com/ads/library/?q=a b"
    );
}

#[test]
fn card_with_only_an_image_and_link_is_discarded() {
    let card = r#"<div><img src="https://scontent.example/x.jpg"><a class="x1i10hfl" href="/ads/library/?id=7">See ad details</a></div>"#;
    let html = page("x1t2pt76", &[card.to_string(), full_card("Kept", "copy", "/k")]);

    let records = extract_ads(&html, Category::Women);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].brand, "Kept");
}
