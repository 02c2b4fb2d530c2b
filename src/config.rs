use log::Level;

/// Scroll offset (px) past which the navigation bar turns opaque.
pub const SCROLLED_THRESHOLD_PX: f64 = 10.0;

/// A section is revealed once its top edge is above this share of the viewport height.
pub const REVEAL_VIEWPORT_RATIO: f64 = 0.75;

/// Nav bar height plus a little slack, used to decide which section is "current".
pub const ACTIVE_SECTION_OFFSET_PX: f64 = 80.0;

pub const BRAND: &str = "SearchLynk";
pub const COMPANY_NAME: &str = "SearchLynk Digital";
pub const LOCATION: &str = "Colombo, Sri Lanka";

macro_rules! phone_e164 {
    () => {
        "+94766324336"
    };
}

pub const PHONE_DISPLAY: &str = "076 632 4336";
pub const PHONE_E164: &str = phone_e164!();
pub const TEL_URI: &str = concat!("tel:", phone_e164!());

pub fn whatsapp_url() -> String {
    format!("https://wa.me/{}", PHONE_E164.trim_start_matches('+'))
}

/// Display face for the brand mark and section headings.
pub const BRAND_FONT_FAMILY: &str = "Cinzel";

pub const FONT_STYLESHEET_URL: &str =
    "https://fonts.googleapis.com/css2?family=Cinzel:wght@400;700&display=swap";

#[cfg(debug_assertions)]
pub fn analytics_script_url() -> &'static str {
    "https://va.vercel-scripts.com/v1/script.debug.js"  // Collector prints events instead of sending them
}

#[cfg(not(debug_assertions))]
pub fn analytics_script_url() -> &'static str {
    "/_vercel/insights/script.js"
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_links_share_one_number() {
        assert_eq!(TEL_URI, "tel:+94766324336");
        assert_eq!(TEL_URI.trim_start_matches("tel:"), PHONE_E164);
        assert_eq!(whatsapp_url(), "https://wa.me/94766324336");
    }

    #[test]
    fn display_number_is_the_local_form_of_the_dial_number() {
        let local_digits: String = PHONE_DISPLAY.chars().filter(|c| c.is_ascii_digit()).collect();
        assert_eq!(format!("+94{}", &local_digits[1..]), PHONE_E164);
    }

    #[test]
    fn font_stylesheet_serves_the_brand_font() {
        assert!(FONT_STYLESHEET_URL.contains(&format!("family={}:", BRAND_FONT_FAMILY)));
    }
}
