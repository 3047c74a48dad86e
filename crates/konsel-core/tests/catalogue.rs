use konsel_core::models::content::{self, ALL, ARTICLES, TRACKS};
use konsel_core::models::package::{self, PACKAGES};

#[test]
fn package_prices_are_grouped_by_thousands() {
    let labels: Vec<String> = PACKAGES.iter().map(|p| p.price_label()).collect();
    assert_eq!(labels, vec!["Rp 150.000", "Rp 350.000", "Rp 650.000"]);
}

#[test]
fn exactly_one_package_is_popular() {
    assert_eq!(PACKAGES.iter().filter(|p| p.popular).count(), 1);
    assert!(package::find("premium").unwrap().popular);
}

#[test]
fn find_package_by_id() {
    let basic = package::find("basic").unwrap();
    assert_eq!(basic.sessions, 3);
    assert_eq!(basic.duration_days, 7);
    assert!(package::find("gold").is_none());
}

#[test]
fn all_category_returns_every_article() {
    assert_eq!(content::articles_in(ALL).len(), ARTICLES.len());
}

#[test]
fn article_filter_is_exact() {
    let titles: Vec<u32> = content::articles_in("Motivasi").iter().map(|a| a.id).collect();
    assert_eq!(titles, vec![4, 6]);
    assert!(content::articles_in("motivasi").is_empty());
}

#[test]
fn track_lookup_and_duration_label() {
    assert_eq!(content::tracks_in("Alam").len(), 3);
    assert_eq!(content::tracks_in(ALL).len(), TRACKS.len());

    let rain = content::track(1).unwrap();
    assert_eq!(rain.duration_label(), "10:00");
    assert_eq!(content::track(5).unwrap().duration_label(), "20:00");
    assert!(content::track(99).is_none());
}
