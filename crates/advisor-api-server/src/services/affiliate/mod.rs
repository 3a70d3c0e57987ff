//! Reply post-processing module
//!
//! Extracts product names from free-text assistant replies and appends a
//! trailer block of affiliate marketplace links. Extraction is a small
//! ordered set of pattern matchers tried in priority order; the upstream
//! prompt format can change without touching the link building.

mod extractor;
mod links;

pub use extractor::{ExtractorChain, HeadingExtractor, NumberedListExtractor, ProductExtractor};
pub use links::AffiliateLinkBuilder;

/// Appends affiliate purchase links for product names mentioned in a reply.
pub struct ReplyPostProcessor {
    chain: ExtractorChain,
    links: AffiliateLinkBuilder,
}

impl ReplyPostProcessor {
    pub fn new(chain: ExtractorChain, links: AffiliateLinkBuilder) -> Self {
        Self { chain, links }
    }

    /// Default extractor priority: numbered-list entries first, heading
    /// lines as fallback.
    pub fn with_default_extractors(links: AffiliateLinkBuilder) -> Self {
        Self::new(ExtractorChain::default_chain(), links)
    }

    /// Returns the reply with the affiliate trailer appended. When no
    /// product name is extracted the reply is returned unchanged.
    pub fn process(&self, reply: &str) -> String {
        let names = self.chain.extract(reply);
        match self.links.build_trailer(&names) {
            Some(trailer) => format!("{}{}", reply, trailer),
            None => reply.to_string(),
        }
    }
}
