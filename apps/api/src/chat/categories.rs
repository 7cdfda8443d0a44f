//! Resume categories and system prompt resolution.
//!
//! Each category selects the interview script the assistant follows. An
//! unknown or absent category must resolve to the generic fallback prompt —
//! prompt resolution never fails a request.

use crate::chat::prompts;

/// The resume category chosen by the user before the interview starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    ProductMnc,
    ServiceIt,
    Startup,
    OverseasAts,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::ProductMnc,
        Category::ServiceIt,
        Category::Startup,
        Category::OverseasAts,
    ];

    /// Parses the wire tag. Comparison is case-sensitive: anything that is
    /// not an exact match resolves to `None` and falls back downstream.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "product_mnc" => Some(Category::ProductMnc),
            "service_it" => Some(Category::ServiceIt),
            "startup" => Some(Category::Startup),
            "overseas_ats" => Some(Category::OverseasAts),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ProductMnc => "product_mnc",
            Category::ServiceIt => "service_it",
            Category::Startup => "startup",
            Category::OverseasAts => "overseas_ats",
        }
    }

    fn script(&self) -> &'static str {
        match self {
            Category::ProductMnc => prompts::PRODUCT_MNC_SCRIPT,
            Category::ServiceIt => prompts::SERVICE_IT_SCRIPT,
            Category::Startup => prompts::STARTUP_SCRIPT,
            Category::OverseasAts => prompts::OVERSEAS_ATS_SCRIPT,
        }
    }
}

/// Resolves the full system prompt for a request. Pure function of the
/// category tag; computed fresh per request.
pub fn resolve_prompt(category: Option<&str>) -> String {
    match category.and_then(Category::parse) {
        Some(category) => format!(
            "{}\n\n{}\n\n{}",
            category.script(),
            prompts::BASE_RULES,
            prompts::OPENING_INSTRUCTION
        ),
        None => format!(
            "{}\n\n{}\n\n{}",
            prompts::FALLBACK_SCRIPT,
            prompts::BASE_RULES,
            prompts::FALLBACK_OPENING
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_resolves_to_its_own_script() {
        for category in Category::ALL {
            let prompt = resolve_prompt(Some(category.as_str()));
            assert!(!prompt.is_empty());
            assert!(prompt.contains("IMPORTANT BEHAVIOR RULES"));
        }

        let product = resolve_prompt(Some("product_mnc"));
        assert!(product.contains("PRODUCT-BASED MNC"));
        let service = resolve_prompt(Some("service_it"));
        assert!(service.contains("SERVICE-BASED IT"));
        let startup = resolve_prompt(Some("startup"));
        assert!(startup.contains("STARTUP / GROWTH-STAGE"));
        let overseas = resolve_prompt(Some("overseas_ats"));
        assert!(overseas.contains("OVERSEAS / ATS-HEAVY"));
    }

    #[test]
    fn no_two_categories_share_prompt_text() {
        let prompts: Vec<String> = Category::ALL
            .iter()
            .map(|c| resolve_prompt(Some(c.as_str())))
            .collect();
        for (i, a) in prompts.iter().enumerate() {
            for b in prompts.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_or_missing_category_falls_back() {
        let fallback = resolve_prompt(None);
        assert!(fallback.contains("What is your full name and email address?"));

        assert_eq!(resolve_prompt(Some("gaming")), fallback);
        assert_eq!(resolve_prompt(Some("")), fallback);
    }

    #[test]
    fn category_match_is_case_sensitive() {
        assert_eq!(Category::parse("PRODUCT_MNC"), None);
        assert_eq!(Category::parse("Startup"), None);
        assert_eq!(resolve_prompt(Some("PRODUCT_MNC")), resolve_prompt(None));
    }

    #[test]
    fn category_prompts_open_the_interview() {
        let prompt = resolve_prompt(Some("startup"));
        assert!(prompt.contains("Start the conversation by asking your FIRST question"));
    }
}
