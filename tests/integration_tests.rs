//! End-to-end tests over the fixture documents: loading, scoring,
//! validation and page rendering through the public API.

use czy_polska_firma::render::{
    PLACEHOLDER, render_category_page, render_company_page, render_home_page,
};
use czy_polska_firma::site::{Route, render_route, respond_to};
use czy_polska_firma::{
    CompanyRepository, Criterion, SiteContext, StaticRepository, effective_breakdown,
    rank_alternatives, validate_repository,
};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture_repo() -> StaticRepository {
    StaticRepository::load(
        Some(&fixture("categories.json")),
        Some(&fixture("companies.json")),
    )
    .expect("fixtures should load")
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_fixture_repository_shape() {
    let repo = fixture_repo();

    let slugs: Vec<&str> = repo.categories().into_iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, ["budowlane", "sklepy-spozywcze"]);
    assert_eq!(repo.companies().len(), 5);
    assert!(repo.duplicate_ids().is_empty());
}

#[test]
fn test_listing_only_company_gets_profile() {
    let repo = fixture_repo();
    let tynkbud = repo.get_company("tynkbud").expect("synthesized profile");

    assert_eq!(tynkbud.score(), 58);
    assert_eq!(tynkbud.summary.category_slug, "budowlane");
    assert!(tynkbud.headquarters.is_none());
    assert!(tynkbud.breakdown.is_none());
}

#[test]
fn test_profile_without_slug_is_linked_to_listing() {
    let repo = fixture_repo();
    let megamart = repo.get_company("megamart").expect("megamart");
    assert_eq!(megamart.summary.category_slug, "sklepy-spozywcze");
    assert_eq!(repo.category_name("sklepy-spozywcze"), "Sklepy spożywcze");
}

#[test]
fn test_fixture_data_is_clean() {
    assert!(validate_repository(&fixture_repo()).is_empty());
}

#[test]
fn test_bundled_data_is_clean() {
    let repo = StaticRepository::bundled().expect("bundled data");
    let issues = validate_repository(&repo);
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
}

// ============================================================================
// Scoring
// ============================================================================

#[test]
fn test_explicit_breakdown_wins() {
    let repo = fixture_repo();
    let murator = repo.get_company("murator").expect("murator");
    let breakdown = effective_breakdown(murator);

    assert_eq!(breakdown.get(Criterion::Taxes), 14);
    assert_eq!(breakdown.get(Criterion::BrandOrigin), 2);
    assert_eq!(breakdown.total(), 91);
}

#[test]
fn test_derived_breakdown_matches_score() {
    let repo = fixture_repo();
    for company in repo.companies() {
        if company.breakdown.is_none() {
            assert_eq!(effective_breakdown(company).total(), company.score());
        }
    }
}

#[test]
fn test_alternatives_in_category() {
    let repo = fixture_repo();

    let ids: Vec<&str> = rank_alternatives(&repo, "budowlane", "murator")
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids, ["cegielnia"]);

    let ids: Vec<&str> = rank_alternatives(&repo, "budowlane", "tynkbud")
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids, ["murator", "cegielnia"]);

    assert!(rank_alternatives(&repo, "sklepy-spozywcze", "sadownik").is_empty());
    assert!(rank_alternatives(&repo, "moda", "murator").is_empty());
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_full_profile_page() {
    let repo = fixture_repo();
    let html = render_company_page(&repo, &SiteContext::default(), "murator")
        .unwrap()
        .expect("murator page");

    assert!(html.contains("Murator"));
    assert!(html.contains("91/100"));
    assert!(html.contains("Kielce"));
    assert!(html.contains("/firma/cegielnia"));
    assert!(html.contains("/kategoria/budowlane"));
}

#[test]
fn test_synthesized_profile_page_uses_placeholders() {
    let repo = fixture_repo();
    let html = render_company_page(&repo, &SiteContext::default(), "tynkbud")
        .unwrap()
        .expect("tynkbud page");

    assert!(html.contains("58/100"));
    assert!(html.contains(PLACEHOLDER));
}

#[test]
fn test_known_category_missing_from_data() {
    let repo = fixture_repo();
    let ctx = SiteContext::default();

    let html = render_category_page(&repo, &ctx, "banki-i-finanse")
        .unwrap()
        .expect("known page renders");
    assert!(html.contains("Kategoria nie została znaleziona"));
    assert!(!html.contains("<ul class=\"company-list\">"));
    assert!(!html.contains("/firma/"));

    let page = render_route(&repo, &ctx, &Route::Category("banki-i-finanse".into())).unwrap();
    assert_eq!(page.status, 200);
}

#[test]
fn test_empty_catalog_renders_known_pages() {
    let repo = StaticRepository::from_json_str("{}", "[]").expect("empty catalog loads");
    let ctx = SiteContext::default();

    let home = render_home_page(&repo, &ctx).unwrap();
    assert!(home.contains("Brak kategorii."));

    let html = render_category_page(&repo, &ctx, "budowlane")
        .unwrap()
        .expect("known page renders");
    assert!(html.contains("Kategoria nie została znaleziona"));
    assert!(render_category_page(&repo, &ctx, "rtv-agd").unwrap().is_none());
}

#[test]
fn test_category_listing_order_follows_data() {
    let repo = fixture_repo();
    let html = render_category_page(&repo, &SiteContext::default(), "budowlane")
        .unwrap()
        .expect("budowlane page");

    let murator = html.find("/firma/murator").expect("murator listed");
    let tynkbud = html.find("/firma/tynkbud").expect("tynkbud listed");
    let cegielnia = html.find("/firma/cegielnia").expect("cegielnia listed");
    assert!(murator < tynkbud && tynkbud < cegielnia);
}

#[test]
fn test_home_page_links_every_category() {
    let repo = fixture_repo();
    let html = render_home_page(&repo, &SiteContext::default()).unwrap();

    assert!(html.contains("/kategoria/budowlane"));
    assert!(html.contains("/kategoria/sklepy-spozywcze"));
    assert!(html.contains("id=\"metodologia\""));
}

#[test]
fn test_preview_responses() {
    let repo = fixture_repo();
    let ctx = SiteContext::default();

    let home = respond_to(&repo, &ctx, "GET", "/", None).unwrap();
    assert_eq!(home.status, 200);

    let company = respond_to(&repo, &ctx, "HEAD", "/firma/sadownik/", None).unwrap();
    assert_eq!(company.status, 200);
    assert!(company.body.contains("Sadownik"));

    let unknown = respond_to(&repo, &ctx, "GET", "/firma/nieznana", None).unwrap();
    assert_eq!(unknown.status, 404);
    assert!(unknown.body.contains("Nie znaleziono firmy"));
}
