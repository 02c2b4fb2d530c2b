//! Document `<head>`: title, description, favicons, web font and the analytics
//! snippet. Every element gets a fixed id so installing twice adds nothing.

use log::{debug, info};
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::config;

pub const TITLE: &str = "SearchLynk Digital - SEO & Web Design for European Businesses";
pub const DESCRIPTION: &str = "Fast SEO-friendly websites, technical optimization, and GA4 analytics for small European businesses. Founded by Dirushan, a Software Engineering graduate.";

/// Queue stub the collector drains once its script has loaded.
const ANALYTICS_QUEUE_STUB: &str =
    "window.va = window.va || function () { (window.vaq = window.vaq || []).push(arguments); };";

/// Cinzel for the brand mark and section headings; body copy keeps the system stack.
const BRAND_FONT_RULES: &str =
    ".nav-logo, .footer-brand h3, .landing-page h2 { font-family: \"Cinzel\", Georgia, serif; }";

#[derive(Clone, Debug, PartialEq)]
pub struct HeadTag {
    pub id: &'static str,
    pub element: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub text: Option<&'static str>,
}

impl HeadTag {
    fn new(id: &'static str, element: &'static str) -> Self {
        Self {
            id,
            element,
            attributes: Vec::new(),
            text: None,
        }
    }

    fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    fn text(mut self, text: &'static str) -> Self {
        self.text = Some(text);
        self
    }

    #[cfg(test)]
    fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

pub fn head_tags() -> Vec<HeadTag> {
    vec![
        HeadTag::new("meta-description", "meta")
            .attr("name", "description")
            .attr("content", DESCRIPTION),
        HeadTag::new("icon-light", "link")
            .attr("rel", "icon")
            .attr("href", "/icon-light-32x32.png")
            .attr("media", "(prefers-color-scheme: light)"),
        HeadTag::new("icon-dark", "link")
            .attr("rel", "icon")
            .attr("href", "/icon-dark-32x32.png")
            .attr("media", "(prefers-color-scheme: dark)"),
        HeadTag::new("icon-svg", "link")
            .attr("rel", "icon")
            .attr("href", "/icon.svg")
            .attr("type", "image/svg+xml"),
        HeadTag::new("apple-touch-icon", "link")
            .attr("rel", "apple-touch-icon")
            .attr("href", "/apple-icon.png"),
        HeadTag::new("font-cinzel", "link")
            .attr("rel", "stylesheet")
            .attr("href", config::FONT_STYLESHEET_URL),
        HeadTag::new("font-cinzel-rules", "style").text(BRAND_FONT_RULES),
        HeadTag::new("analytics-queue", "script").text(ANALYTICS_QUEUE_STUB),
        HeadTag::new("analytics", "script")
            .attr("src", config::analytics_script_url())
            .attr("defer", ""),
    ]
}

/// Sets the title and appends whatever head tags are not present yet.
pub fn install(document: &Document) -> Result<(), JsValue> {
    document.set_title(TITLE);
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;

    let mut added = 0;
    for tag in head_tags() {
        if document.get_element_by_id(tag.id).is_some() {
            debug!("Head tag '{}' already present", tag.id);
            continue;
        }
        let element = document.create_element(tag.element)?;
        element.set_id(tag.id);
        for (name, value) in &tag.attributes {
            element.set_attribute(name, value)?;
        }
        if let Some(text) = tag.text {
            element.set_text_content(Some(text));
        }
        head.append_child(&element)?;
        added += 1;
    }

    info!("Page shell installed ({} head tags added)", added);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tag_ids_are_unique() {
        let tags = head_tags();
        let ids: HashSet<&str> = tags.iter().map(|tag| tag.id).collect();
        assert_eq!(ids.len(), tags.len());
    }

    #[test]
    fn favicons_follow_color_scheme() {
        let tags = head_tags();
        let media: Vec<(&str, &str)> = tags
            .iter()
            .filter_map(|tag| Some((tag.get("href")?, tag.get("media")?)))
            .collect();
        assert_eq!(
            media,
            [
                ("/icon-light-32x32.png", "(prefers-color-scheme: light)"),
                ("/icon-dark-32x32.png", "(prefers-color-scheme: dark)"),
            ]
        );

        let svg = tags.iter().find(|tag| tag.id == "icon-svg").unwrap();
        assert_eq!(svg.get("type"), Some("image/svg+xml"));
        let apple = tags.iter().find(|tag| tag.id == "apple-touch-icon").unwrap();
        assert_eq!(apple.get("href"), Some("/apple-icon.png"));
    }

    #[test]
    fn one_font_and_one_analytics_script() {
        let tags = head_tags();
        let stylesheets = tags
            .iter()
            .filter(|tag| tag.get("rel") == Some("stylesheet"))
            .count();
        let scripts_with_src: Vec<&HeadTag> =
            tags.iter().filter(|tag| tag.get("src").is_some()).collect();

        assert_eq!(stylesheets, 1);
        assert_eq!(scripts_with_src.len(), 1);
        assert_eq!(
            scripts_with_src[0].get("src"),
            Some(config::analytics_script_url())
        );
        assert_eq!(scripts_with_src[0].get("defer"), Some(""));
    }

    #[test]
    fn loaded_font_is_applied_to_brand_and_headings() {
        let tags = head_tags();
        let rules = tags
            .iter()
            .find(|tag| tag.element == "style")
            .and_then(|tag| tag.text)
            .unwrap();

        assert!(config::FONT_STYLESHEET_URL.contains(config::BRAND_FONT_FAMILY));
        assert!(rules.contains(&format!("font-family: \"{}\"", config::BRAND_FONT_FAMILY)));
        for selector in [".nav-logo", ".footer-brand h3", ".landing-page h2"] {
            assert!(rules.contains(selector), "{selector} keeps the body font");
        }
    }

    #[test]
    fn description_is_in_meta_tag() {
        let tags = head_tags();
        let meta = tags.iter().find(|tag| tag.element == "meta").unwrap();
        assert_eq!(meta.get("name"), Some("description"));
        assert_eq!(meta.get("content"), Some(DESCRIPTION));
    }
}
