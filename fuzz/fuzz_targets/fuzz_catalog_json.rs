#![no_main]
use czy_polska_firma::{CompanyRepository, SiteContext, StaticRepository, validate_repository};
use czy_polska_firma::render::{render_category_page, render_company_page};
use libfuzzer_sys::fuzz_target;

/// Fuzz loading of the categories document.
///
/// Anything that loads must also validate and render without panicking,
/// including profiles synthesized from listings with odd scores.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(repo) = StaticRepository::from_json_str(s, "[]") else {
        return;
    };
    let _ = validate_repository(&repo);
    let ctx = SiteContext::default();
    for category in repo.categories() {
        let _ = render_category_page(&repo, &ctx, &category.slug);
    }
    for company in repo.companies() {
        let _ = render_company_page(&repo, &ctx, company.id());
    }
});
