use log::Level;

/// Scroll offset (in CSS pixels) past which the nav bar switches to its compact look.
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// How long the mobile menu stays mounted while its collapse animation plays.
pub const MENU_COLLAPSE_MS: u32 = 300;

const IMAGE_HOST: &str = "https://images.unsplash.com";
const IMAGE_QUERY: &str = "auto=format&fit=crop&q=80";

pub fn image_url(photo_id: &str) -> String {
    format!("{}/{}?{}", IMAGE_HOST, photo_id, IMAGE_QUERY)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_points_at_cropped_photo() {
        assert_eq!(
            image_url("photo-1560750588-73207b1ef5b8"),
            "https://images.unsplash.com/photo-1560750588-73207b1ef5b8?auto=format&fit=crop&q=80"
        );
    }
}
