use crate::config::AffiliateConfig;

/// Builds marketplace search links carrying the affiliate tracking tag.
#[derive(Clone)]
pub struct AffiliateLinkBuilder {
    config: AffiliateConfig,
}

impl AffiliateLinkBuilder {
    pub fn new(config: AffiliateConfig) -> Self {
        Self { config }
    }

    /// Marketplace search URL for one product name.
    pub fn search_url(&self, product_name: &str) -> String {
        format!(
            "{}/s?k={}&tag={}",
            self.config.marketplace_base_url.trim_end_matches('/'),
            urlencoding::encode(product_name),
            self.config.tag
        )
    }

    /// Trailer block: separator plus one link per candidate. The first
    /// candidate carries the "Best Pick" badge (positional, index 0).
    /// Returns None when there is nothing to link.
    pub fn build_trailer(&self, product_names: &[String]) -> Option<String> {
        if product_names.is_empty() {
            return None;
        }

        let mut trailer = String::from("\n\n---\n");
        for (index, name) in product_names.iter().enumerate() {
            let url = self.search_url(name);
            if index == 0 {
                trailer.push_str(&format!(
                    "- 🏆 **Best Pick**: [Check latest price for {}]({})\n",
                    name, url
                ));
            } else {
                trailer.push_str(&format!("- [Check latest price for {}]({})\n", name, url));
            }
        }

        Some(trailer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link_builder() -> AffiliateLinkBuilder {
        AffiliateLinkBuilder::new(AffiliateConfig {
            marketplace_base_url: "https://www.amazon.in".to_string(),
            tag: "advisor-21".to_string(),
        })
    }

    #[test]
    fn test_search_url_encodes_name_and_carries_tag() {
        let url = link_builder().search_url("Pixel 6");
        assert_eq!(url, "https://www.amazon.in/s?k=Pixel%206&tag=advisor-21");
    }

    #[test]
    fn test_trailing_slash_in_base_url_is_handled() {
        let builder = AffiliateLinkBuilder::new(AffiliateConfig {
            marketplace_base_url: "https://www.amazon.in/".to_string(),
            tag: "advisor-21".to_string(),
        });
        assert!(builder.search_url("Pixel 6").starts_with("https://www.amazon.in/s?k="));
    }

    #[test]
    fn test_trailer_badges_only_first_candidate() {
        let names = vec!["Galaxy S21".to_string(), "Pixel 6".to_string()];
        let trailer = link_builder().build_trailer(&names).unwrap();

        let lines: Vec<&str> = trailer.lines().filter(|l| l.contains("Check latest price")).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Best Pick"));
        assert!(lines[0].contains("Galaxy S21"));
        assert!(!lines[1].contains("Best Pick"));
        assert!(lines[1].contains("Pixel 6"));
    }

    #[test]
    fn test_trailer_starts_with_separator() {
        let names = vec!["Galaxy S21".to_string()];
        let trailer = link_builder().build_trailer(&names).unwrap();
        assert!(trailer.starts_with("\n\n---\n"));
    }

    #[test]
    fn test_empty_candidates_omit_trailer() {
        assert!(link_builder().build_trailer(&[]).is_none());
    }
}
